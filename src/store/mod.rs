//! Keyed store backends.
//!
//! Two independent implementations of the same contact-keyed contract:
//!
//! - [`BalancedTree`]: AVL-balanced binary search tree ordered by the
//!   concatenated full name. O(log N) operations, ordered iteration,
//!   first-name prefix search.
//! - [`ProbingHashTable`]: open-addressing hash table with quadratic
//!   probing, tombstone deletion, and automatic prime-sized growth.
//!   Amortized O(1) operations.
//!
//! Neither backend depends on the other. The [`ContactStore`] trait is the
//! interchangeability seam: code written against it (for example
//! [`loader::load_into`](crate::loader::load_into)) works with either.
//!
//! Both backends are single-threaded and single-owner; callers needing
//! concurrent access must serialize externally.

use crate::contact::Contact;

mod balanced_tree;
mod prime;
mod probing_hash_table;

pub use balanced_tree::BalancedTree;
pub use balanced_tree::BalancedTreeIntoIterator;
pub use balanced_tree::BalancedTreeIterator;
pub use probing_hash_table::ProbingHashTable;

// =============================================================================
// ContactStore Trait
// =============================================================================

/// The contract shared by both store backends.
///
/// Inserting a duplicate key is rejected, not merged or overwritten;
/// removing or finding an absent key is a no-op signaled by the return
/// value. No method panics on an empty store.
///
/// # Examples
///
/// ```rust
/// use phonedex::prelude::*;
///
/// fn populate<S: ContactStore>(store: &mut S) {
///     store.insert(Contact::new("JOHN", "SMITH", "555-1234", "BOSTON"));
///     store.insert(Contact::new("ALICE", "JONES", "555-5678", "DENVER"));
/// }
///
/// let mut tree = BalancedTree::new();
/// let mut table = ProbingHashTable::new();
/// populate(&mut tree);
/// populate(&mut table);
/// assert_eq!(tree.len(), table.len());
/// ```
pub trait ContactStore {
    /// Inserts a record. Returns `true` if the key was absent and the
    /// record was added; `false` if the key already exists (no mutation).
    fn insert(&mut self, contact: Contact) -> bool;

    /// Removes the record with exactly the key `(first, last)`.
    /// Returns `true` if it was found and removed.
    fn remove(&mut self, first: &str, last: &str) -> bool;

    /// Looks up the record with exactly the key `(first, last)`.
    fn find(&self, first: &str, last: &str) -> Option<&Contact>;

    /// Number of records currently stored.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
