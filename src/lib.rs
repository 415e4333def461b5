//! # phonedex
//!
//! A keyed contact store offered in two interchangeable backends: a
//! height-balanced binary search tree (AVL) and an open-addressing hash
//! table with quadratic probing and incremental growth.
//!
//! ## Overview
//!
//! Both backends store the same record type — a [`Contact`] keyed by a
//! two-part name — and support insert, exact and prefix lookup, and
//! delete:
//!
//! - **[`BalancedTree`]**: node-linked binary search tree maintaining the
//!   AVL height-balance invariant via rotations on insert and delete.
//!   Ordered iteration, O(log N) operations.
//! - **[`ProbingHashTable`]**: prime-sized slot array with quadratic
//!   probing, tombstone deletion, and automatic rehash-on-threshold.
//!   Amortized O(1) operations.
//!
//! Neither backend depends on the other; the [`ContactStore`] trait is the
//! seam that lets callers swap one for the other.
//!
//! ## Example
//!
//! ```rust
//! use phonedex::prelude::*;
//!
//! let mut tree = BalancedTree::new();
//! assert!(tree.insert(Contact::new("JOHN", "SMITH", "555-1234", "BOSTON")));
//! assert!(tree.insert(Contact::new("ALICE", "JONES", "555-5678", "DENVER")));
//!
//! // Duplicate keys are rejected, not merged.
//! assert!(!tree.insert(Contact::new("JOHN", "SMITH", "555-0000", "AUSTIN")));
//!
//! let found = tree.find("JOHN", "SMITH").unwrap();
//! assert_eq!(found.city(), "BOSTON");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize support for [`Contact`] and both
//!   stores (stores round-trip as a sequence of records).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use phonedex::prelude::*;
/// ```
pub mod prelude {
    pub use crate::contact::Contact;
    pub use crate::error::{LoadError, StoreError};
    pub use crate::store::{BalancedTree, ContactStore, ProbingHashTable};
}

pub mod contact;
pub mod error;
pub mod loader;
pub mod report;
pub mod store;

pub use contact::Contact;
pub use error::{LoadError, StoreError};
pub use store::{BalancedTree, ContactStore, ProbingHashTable};
