//! Writing tree contents to a file or console.
//!
//! These are read-only consumers of the tree's iteration order: an
//! in-order listing (sorted by the concatenated full name), a pre-order
//! listing, and an ASCII structure diagram. Each record prints as its
//! four fields separated by single spaces.
//!
//! # Examples
//!
//! ```rust
//! use phonedex::report::write_in_order;
//! use phonedex::{BalancedTree, Contact};
//!
//! let mut tree = BalancedTree::new();
//! tree.insert(Contact::new("JOHN", "SMITH", "555-1234", "BOSTON"));
//! tree.insert(Contact::new("ALICE", "JONES", "555-5678", "DENVER"));
//!
//! let mut out = Vec::new();
//! write_in_order(&tree, &mut out).unwrap();
//! let listing = String::from_utf8(out).unwrap();
//! assert!(listing.starts_with("ALICE JONES 555-5678 DENVER\n"));
//! ```

use std::io::{self, Write};

use crate::store::BalancedTree;

/// Writes one record per line in concatenated-key order.
///
/// # Errors
///
/// Propagates any error from the writer.
pub fn write_in_order<W: Write>(tree: &BalancedTree, writer: &mut W) -> io::Result<()> {
    for contact in tree.iter() {
        writeln!(writer, "{contact}")?;
    }
    Ok(())
}

/// Writes one record per line in pre-order (each node before its
/// subtrees).
///
/// # Errors
///
/// Propagates any error from the writer.
pub fn write_pre_order<W: Write>(tree: &BalancedTree, writer: &mut W) -> io::Result<()> {
    for contact in tree.iter_pre_order() {
        writeln!(writer, "{contact}")?;
    }
    Ok(())
}

/// Writes an ASCII diagram of the tree structure (see
/// [`BalancedTree::render`]).
///
/// # Errors
///
/// Propagates any error from the writer.
pub fn write_diagram<W: Write>(tree: &BalancedTree, writer: &mut W) -> io::Result<()> {
    tree.render(writer)
}

// =============================================================================
// Tests
// =============================================================================
