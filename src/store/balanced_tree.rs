//! AVL-balanced binary search tree keyed by full name.
//!
//! This module provides [`BalancedTree`], an ordered contact store that
//! maintains the AVL height-balance invariant via rotations on insert and
//! delete.
//!
//! # Overview
//!
//! Records are ordered by the concatenation `first_name + last_name`,
//! compared byte-wise (see [`full_name_cmp`](crate::contact::full_name_cmp)).
//! Every node caches its height (−1 for an absent subtree, 0 for a leaf),
//! so balance checks and the public height accessors are O(1).
//!
//! - O(log N) insert, remove, find
//! - O(log N) min/max
//! - O(N) in-order/pre-order traversal and first-name prefix search
//! - O(1) len, `is_empty`, height accessors
//!
//! # Invariants
//!
//! After every insert or remove completes, for every node:
//!
//! 1. `height == max(height(left), height(right)) + 1`
//! 2. `|height(left) − height(right)| ≤ 1`
//!
//! Violations are corrected immediately via single or double rotations
//! before the mutating call returns.
//!
//! # Examples
//!
//! ```rust
//! use phonedex::{BalancedTree, Contact};
//!
//! let mut tree = BalancedTree::new();
//! tree.insert(Contact::new("JOHN", "SMITH", "555-1234", "BOSTON"));
//! tree.insert(Contact::new("ALICE", "JONES", "555-5678", "DENVER"));
//!
//! // In-order iteration yields concatenated-key order.
//! let names: Vec<&str> = tree.iter().map(|c| c.first_name()).collect();
//! assert_eq!(names, vec!["ALICE", "JOHN"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::iter::FromIterator;

use crate::contact::Contact;
use crate::error::StoreError;
use crate::store::ContactStore;

// =============================================================================
// Node Definition
// =============================================================================

/// An exclusively-owned subtree.
type Link = Option<Box<Node>>;

/// Internal node structure. Owns its record and both subtrees outright.
struct Node {
    contact: Contact,
    height: i32,
    left: Link,
    right: Link,
}

impl Node {
    /// Creates a leaf node (height 0).
    const fn leaf(contact: Contact) -> Self {
        Self {
            contact,
            height: 0,
            left: None,
            right: None,
        }
    }

    /// Recomputes this node's cached height from its direct children.
    fn update_height(&mut self) {
        self.height = height_of(&self.left).max(height_of(&self.right)) + 1;
    }

    /// Balance factor: left height minus right height.
    fn balance(&self) -> i32 {
        height_of(&self.left) - height_of(&self.right)
    }
}

/// Cached height of a subtree, −1 when absent.
fn height_of(link: &Link) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

/// Balance factor of a subtree, 0 when absent.
fn balance_of(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.balance())
}

// =============================================================================
// BalancedTree Definition
// =============================================================================

/// An AVL-balanced binary search tree of [`Contact`] records.
///
/// Keys are `(first_name, last_name)` pairs; the tree order is the
/// byte-wise comparison of the concatenated full name. Duplicate keys are
/// rejected on insert.
///
/// # Time Complexity
///
/// | Operation              | Complexity |
/// |------------------------|------------|
/// | `insert`               | O(log N)   |
/// | `remove`               | O(log N)   |
/// | `find`                 | O(log N)   |
/// | `find_by_first_name`   | O(N)       |
/// | `min`/`max`            | O(log N)   |
/// | `height` accessors     | O(1)       |
/// | `len`/`is_empty`       | O(1)       |
///
/// # Examples
///
/// ```rust
/// use phonedex::{BalancedTree, Contact};
///
/// let mut tree = BalancedTree::new();
/// assert!(tree.insert(Contact::new("JOHN", "SMITH", "555-1234", "BOSTON")));
/// assert!(!tree.insert(Contact::new("JOHN", "SMITH", "555-0000", "AUSTIN")));
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Default)]
pub struct BalancedTree {
    root: Link,
    length: usize,
}

impl BalancedTree {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use phonedex::BalancedTree;
    ///
    /// let tree = BalancedTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of records in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no records.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Removes every record from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.length = 0;
    }

    /// Inserts a record.
    ///
    /// Returns `true` if the key was absent and the record was added;
    /// `false` if the key already exists, in which case the tree is left
    /// untouched.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use phonedex::{BalancedTree, Contact};
    ///
    /// let mut tree = BalancedTree::new();
    /// assert!(tree.insert(Contact::new("BOB", "SMITH", "555-9999", "BOSTON")));
    /// assert!(!tree.insert(Contact::new("BOB", "SMITH", "555-1111", "DALLAS")));
    /// ```
    pub fn insert(&mut self, contact: Contact) -> bool {
        // The key is needed again for the rotation-direction test after the
        // record has moved into the subtree.
        let new_first = contact.first_name().to_owned();
        let new_last = contact.last_name().to_owned();
        let (new_root, inserted) =
            Self::insert_into(self.root.take(), contact, &new_first, &new_last);
        self.root = Some(new_root);
        if inserted {
            self.length += 1;
        }
        inserted
    }

    /// Recursive helper for insert.
    /// Returns `(new_subtree, was_added)`.
    fn insert_into(
        node: Link,
        contact: Contact,
        new_first: &str,
        new_last: &str,
    ) -> (Box<Node>, bool) {
        let Some(mut node) = node else {
            return (Box::new(Node::leaf(contact)), true);
        };

        // Exact key match short-circuits as a duplicate before any ordering
        // comparison: two distinct keys may share an ordering key.
        if node.contact.has_name(new_first, new_last) {
            return (node, false);
        }

        let inserted;
        if node.contact.order_cmp_name(new_first, new_last) == Ordering::Less {
            let (new_right, was_added) =
                Self::insert_into(node.right.take(), contact, new_first, new_last);
            node.right = Some(new_right);
            inserted = was_added;

            if height_of(&node.right) - height_of(&node.left) == 2 {
                let grew_outside = node.right.as_ref().is_some_and(|right| {
                    right.contact.order_cmp_name(new_first, new_last) == Ordering::Less
                });
                node = if grew_outside {
                    // Right-right: single left rotation.
                    Self::rotate_with_right_child(node)
                } else {
                    // Right-left: double rotation.
                    Self::double_with_right_child(node)
                };
            }
        } else {
            let (new_left, was_added) =
                Self::insert_into(node.left.take(), contact, new_first, new_last);
            node.left = Some(new_left);
            inserted = was_added;

            if height_of(&node.left) - height_of(&node.right) == 2 {
                let grew_inside = node.left.as_ref().is_some_and(|left| {
                    left.contact.order_cmp_name(new_first, new_last) == Ordering::Less
                });
                node = if grew_inside {
                    // Left-right: double rotation.
                    Self::double_with_left_child(node)
                } else {
                    // Left-left: single right rotation.
                    Self::rotate_with_left_child(node)
                };
            }
        }

        node.update_height();
        (node, inserted)
    }

    /// Removes the record with exactly the key `(first, last)`.
    ///
    /// Returns `true` if it was found and removed. A two-child node is
    /// never deleted directly: its record is replaced by the in-order
    /// successor, which is then removed from the right subtree.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use phonedex::{BalancedTree, Contact};
    ///
    /// let mut tree = BalancedTree::new();
    /// tree.insert(Contact::new("ALICE", "JONES", "555-5678", "DENVER"));
    /// assert!(tree.remove("ALICE", "JONES"));
    /// assert!(!tree.remove("ALICE", "JONES"));
    /// ```
    pub fn remove(&mut self, first: &str, last: &str) -> bool {
        let (new_root, removed) = Self::remove_from(self.root.take(), first, last);
        self.root = new_root;
        if removed {
            self.length -= 1;
        }
        removed
    }

    /// Recursive helper for remove.
    /// Returns `(new_subtree, was_removed)`.
    fn remove_from(node: Link, first: &str, last: &str) -> (Link, bool) {
        let Some(mut node) = node else {
            return (None, false);
        };

        let removed;
        if node.contact.order_cmp_name(first, last) == Ordering::Less {
            let (new_right, was_removed) = Self::remove_from(node.right.take(), first, last);
            node.right = new_right;
            removed = was_removed;
        } else if node.contact.has_name(first, last) {
            removed = true;
            match (node.left.take(), node.right.take()) {
                (Some(left), Some(right)) => {
                    // Copy-and-recurse: adopt the in-order successor's
                    // record, then remove that key from the right subtree.
                    let successor = Self::min_node(&right).clone();
                    let (new_right, _) = Self::remove_from(
                        Some(right),
                        successor.first_name(),
                        successor.last_name(),
                    );
                    node.contact = successor;
                    node.left = Some(left);
                    node.right = new_right;
                }
                (only_child, None) | (None, only_child) => {
                    // Splice out the node; the surviving child (if any) was
                    // already balanced.
                    return (only_child.map(Self::rebalance_after_remove), true);
                }
            }
        } else {
            let (new_left, was_removed) = Self::remove_from(node.left.take(), first, last);
            node.left = new_left;
            removed = was_removed;
        }

        (Some(Self::rebalance_after_remove(node)), removed)
    }

    /// Recomputes the height of `node` and applies the four-case rotation
    /// rebalancing (left-left, left-right, right-right, right-left)
    /// determined by the balance factors of the node and its heavier child.
    fn rebalance_after_remove(mut node: Box<Node>) -> Box<Node> {
        node.update_height();
        let balance = node.balance();
        if balance > 1 {
            if balance_of(&node.left) >= 0 {
                node = Self::rotate_with_left_child(node);
            } else {
                node = Self::double_with_left_child(node);
            }
        } else if balance < -1 {
            if balance_of(&node.right) <= 0 {
                node = Self::rotate_with_right_child(node);
            } else {
                node = Self::double_with_right_child(node);
            }
        }
        node
    }

    /// Looks up the record with exactly the key `(first, last)`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use phonedex::{BalancedTree, Contact};
    ///
    /// let mut tree = BalancedTree::new();
    /// tree.insert(Contact::new("JOHN", "SMITH", "555-1234", "BOSTON"));
    /// assert!(tree.find("JOHN", "SMITH").is_some());
    /// assert!(tree.find("JANE", "SMITH").is_none());
    /// ```
    #[must_use]
    pub fn find(&self, first: &str, last: &str) -> Option<&Contact> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if node.contact.has_name(first, last) {
                return Some(&node.contact);
            }
            current = if node.contact.order_cmp_name(first, last) == Ordering::Less {
                node.right.as_deref()
            } else {
                node.left.as_deref()
            };
        }
        None
    }

    /// Collects every record whose first name starts with `prefix`, in the
    /// tree's in-order (concatenated-key) sequence.
    ///
    /// This is a full-tree scan, not a pruned search: prefix matches are
    /// not contiguous under the concatenated-key ordering.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use phonedex::{BalancedTree, Contact};
    ///
    /// let mut tree = BalancedTree::new();
    /// tree.insert(Contact::new("JOHN", "SMITH", "555-1234", "BOSTON"));
    /// tree.insert(Contact::new("JOHNNY", "DOE", "555-0000", "AUSTIN"));
    /// tree.insert(Contact::new("ALICE", "JONES", "555-5678", "DENVER"));
    ///
    /// let matches = tree.find_by_first_name("JOHN");
    /// assert_eq!(matches.len(), 2);
    /// ```
    #[must_use]
    pub fn find_by_first_name(&self, prefix: &str) -> Vec<&Contact> {
        let mut matches = Vec::new();
        Self::collect_prefix_matches(self.root.as_deref(), prefix, &mut matches);
        matches
    }

    /// In-order walk collecting first-name prefix matches.
    fn collect_prefix_matches<'tree>(
        node: Option<&'tree Node>,
        prefix: &str,
        matches: &mut Vec<&'tree Contact>,
    ) {
        if let Some(node) = node {
            Self::collect_prefix_matches(node.left.as_deref(), prefix, matches);
            if node.contact.first_name().starts_with(prefix) {
                matches.push(&node.contact);
            }
            Self::collect_prefix_matches(node.right.as_deref(), prefix, matches);
        }
    }

    /// Returns the record with the smallest ordering key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use phonedex::BalancedTree;
    ///
    /// let tree = BalancedTree::new();
    /// assert!(tree.min().is_none());
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&Contact> {
        self.root.as_deref().map(|root| Self::min_node(root))
    }

    /// Returns the record with the largest ordering key.
    #[must_use]
    pub fn max(&self) -> Option<&Contact> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some(&current.contact)
    }

    /// Leftmost record of a non-empty subtree.
    fn min_node(node: &Node) -> &Contact {
        let mut current = node;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        &current.contact
    }

    /// Height of the whole tree: −1 when empty, 0 for a single record.
    ///
    /// # Complexity
    ///
    /// O(1), from the root's cached height.
    #[must_use]
    pub fn height(&self) -> i32 {
        height_of(&self.root)
    }

    /// Height of the root's left subtree.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyStructure`] if the tree is empty: there
    /// is no root whose subtree could be measured.
    pub fn height_left_subtree(&self) -> Result<i32, StoreError> {
        self.root
            .as_ref()
            .map(|root| height_of(&root.left))
            .ok_or(StoreError::EmptyStructure)
    }

    /// Height of the root's right subtree.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyStructure`] if the tree is empty.
    pub fn height_right_subtree(&self) -> Result<i32, StoreError> {
        self.root
            .as_ref()
            .map(|root| height_of(&root.right))
            .ok_or(StoreError::EmptyStructure)
    }

    /// Audits the whole tree: recomputes every height from scratch and
    /// checks the AVL invariant at every node.
    ///
    /// Intended for diagnostics and tests; O(N).
    #[must_use]
    pub fn is_height_balanced(&self) -> bool {
        Self::audit_subtree(self.root.as_deref()).is_some()
    }

    /// Returns the recomputed height of the subtree, or `None` if any node
    /// below violates the balance invariant or carries a stale cached
    /// height.
    fn audit_subtree(node: Option<&Node>) -> Option<i32> {
        let Some(node) = node else {
            return Some(-1);
        };
        let left_height = Self::audit_subtree(node.left.as_deref())?;
        let right_height = Self::audit_subtree(node.right.as_deref())?;
        let height = left_height.max(right_height) + 1;
        if (left_height - right_height).abs() <= 1 && node.height == height {
            Some(height)
        } else {
            None
        }
    }

    /// Returns an iterator over records in concatenated-key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use phonedex::{BalancedTree, Contact};
    ///
    /// let mut tree = BalancedTree::new();
    /// tree.insert(Contact::new("JOHN", "SMITH", "555-1234", "BOSTON"));
    /// tree.insert(Contact::new("ALICE", "JONES", "555-5678", "DENVER"));
    ///
    /// let first_names: Vec<&str> = tree.iter().map(|c| c.first_name()).collect();
    /// assert_eq!(first_names, vec!["ALICE", "JOHN"]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> BalancedTreeIterator<'_> {
        let mut entries = Vec::with_capacity(self.length);
        Self::collect_in_order(self.root.as_deref(), &mut entries);
        BalancedTreeIterator {
            entries,
            current_index: 0,
        }
    }

    /// Returns an iterator over records in pre-order (node before its
    /// subtrees).
    #[must_use]
    pub fn iter_pre_order(&self) -> BalancedTreeIterator<'_> {
        let mut entries = Vec::with_capacity(self.length);
        Self::collect_pre_order(self.root.as_deref(), &mut entries);
        BalancedTreeIterator {
            entries,
            current_index: 0,
        }
    }

    /// Collects all records in sorted order (in-order traversal).
    fn collect_in_order<'tree>(node: Option<&'tree Node>, entries: &mut Vec<&'tree Contact>) {
        if let Some(node) = node {
            Self::collect_in_order(node.left.as_deref(), entries);
            entries.push(&node.contact);
            Self::collect_in_order(node.right.as_deref(), entries);
        }
    }

    /// Collects all records in pre-order.
    fn collect_pre_order<'tree>(node: Option<&'tree Node>, entries: &mut Vec<&'tree Contact>) {
        if let Some(node) = node {
            entries.push(&node.contact);
            Self::collect_pre_order(node.left.as_deref(), entries);
            Self::collect_pre_order(node.right.as_deref(), entries);
        }
    }

    /// Writes an ASCII diagram of the tree structure.
    ///
    /// Each node is printed as `first last` behind a `|--` branch marker
    /// (`|__` for the last child at its level), with indentation
    /// accumulating down the tree.
    ///
    /// # Errors
    ///
    /// Propagates any error from the writer.
    pub fn render<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        Self::render_node(self.root.as_deref(), writer, "", false)
    }

    /// Recursive helper for render.
    fn render_node<W: io::Write>(
        node: Option<&Node>,
        writer: &mut W,
        indent: &str,
        last: bool,
    ) -> io::Result<()> {
        let Some(node) = node else {
            return Ok(());
        };
        let child_indent = if last {
            writeln!(
                writer,
                "{indent}|__{} {}",
                node.contact.first_name(),
                node.contact.last_name()
            )?;
            format!("{indent}   ")
        } else {
            writeln!(
                writer,
                "{indent}|--{} {}",
                node.contact.first_name(),
                node.contact.last_name()
            )?;
            format!("{indent}|  ")
        };
        Self::render_node(
            node.left.as_deref(),
            writer,
            &child_indent,
            node.right.is_none(),
        )?;
        Self::render_node(node.right.as_deref(), writer, &child_indent, true)
    }

    // =========================================================================
    // Rotation Primitives
    // =========================================================================

    /// Single right rotation: promotes the left child. O(1); updates the
    /// cached heights of the two nodes involved.
    fn rotate_with_left_child(mut node: Box<Node>) -> Box<Node> {
        match node.left.take() {
            None => node,
            Some(mut left) => {
                node.left = left.right.take();
                node.update_height();
                left.right = Some(node);
                left.update_height();
                left
            }
        }
    }

    /// Single left rotation: promotes the right child.
    fn rotate_with_right_child(mut node: Box<Node>) -> Box<Node> {
        match node.right.take() {
            None => node,
            Some(mut right) => {
                node.right = right.left.take();
                node.update_height();
                right.left = Some(node);
                right.update_height();
                right
            }
        }
    }

    /// Double rotation for the left-right case: rotate the left child
    /// left, then this node right.
    fn double_with_left_child(mut node: Box<Node>) -> Box<Node> {
        if let Some(left) = node.left.take() {
            node.left = Some(Self::rotate_with_right_child(left));
        }
        Self::rotate_with_left_child(node)
    }

    /// Double rotation for the right-left case: rotate the right child
    /// right, then this node left.
    fn double_with_right_child(mut node: Box<Node>) -> Box<Node> {
        if let Some(right) = node.right.take() {
            node.right = Some(Self::rotate_with_left_child(right));
        }
        Self::rotate_with_right_child(node)
    }

    /// Moves every record out of a subtree in order.
    fn drain_in_order(node: Link, out: &mut Vec<Contact>) {
        if let Some(node) = node {
            let node = *node;
            Self::drain_in_order(node.left, out);
            out.push(node.contact);
            Self::drain_in_order(node.right, out);
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl ContactStore for BalancedTree {
    fn insert(&mut self, contact: Contact) -> bool {
        Self::insert(self, contact)
    }

    fn remove(&mut self, first: &str, last: &str) -> bool {
        Self::remove(self, first, last)
    }

    fn find(&self, first: &str, last: &str) -> Option<&Contact> {
        Self::find(self, first, last)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl fmt::Debug for BalancedTree {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for BalancedTree {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl Eq for BalancedTree {}

impl FromIterator<Contact> for BalancedTree {
    fn from_iter<I: IntoIterator<Item = Contact>>(contacts: I) -> Self {
        let mut tree = Self::new();
        tree.extend(contacts);
        tree
    }
}

impl Extend<Contact> for BalancedTree {
    fn extend<I: IntoIterator<Item = Contact>>(&mut self, contacts: I) {
        for contact in contacts {
            self.insert(contact);
        }
    }
}

/// Borrowed iterator over tree records.
pub struct BalancedTreeIterator<'tree> {
    entries: Vec<&'tree Contact>,
    current_index: usize,
}

impl<'tree> Iterator for BalancedTreeIterator<'tree> {
    type Item = &'tree Contact;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.current_index).copied()?;
        self.current_index += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len() - self.current_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BalancedTreeIterator<'_> {}

impl<'tree> IntoIterator for &'tree BalancedTree {
    type Item = &'tree Contact;
    type IntoIter = BalancedTreeIterator<'tree>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over tree records in concatenated-key order.
pub struct BalancedTreeIntoIterator {
    entries: std::vec::IntoIter<Contact>,
}

impl Iterator for BalancedTreeIntoIterator {
    type Item = Contact;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for BalancedTreeIntoIterator {}

impl IntoIterator for BalancedTree {
    type Item = Contact;
    type IntoIter = BalancedTreeIntoIterator;

    fn into_iter(self) -> Self::IntoIter {
        let mut entries = Vec::with_capacity(self.length);
        BalancedTree::drain_in_order(self.root, &mut entries);
        BalancedTreeIntoIterator {
            entries: entries.into_iter(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BalancedTree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BalancedTree {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let contacts = Vec::<Contact>::deserialize(deserializer)?;
        Ok(contacts.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn contact(first: &str, last: &str) -> Contact {
        Contact::new(first, last, "555-0000", "NOWHERE")
    }

    #[rstest]
    fn test_rotation_heights_after_ascending_inserts() {
        // Ascending inserts force repeated single left rotations.
        let mut tree = BalancedTree::new();
        for last in ["AA", "BB", "CC", "DD", "EE", "FF", "GG"] {
            assert!(tree.insert(contact("X", last)));
        }
        assert_eq!(tree.len(), 7);
        // Seven records in a perfectly balanced AVL tree has height 2.
        assert_eq!(tree.height(), 2);
        assert!(tree.is_height_balanced());
    }

    #[rstest]
    fn test_double_rotation_zigzag_inserts() {
        // B, F, D is a right-left zigzag at the root.
        let mut tree = BalancedTree::new();
        tree.insert(contact("B", ""));
        tree.insert(contact("F", ""));
        tree.insert(contact("D", ""));
        assert_eq!(tree.height(), 1);
        assert!(tree.is_height_balanced());
        let order: Vec<&str> = tree.iter().map(|c| c.first_name()).collect();
        assert_eq!(order, vec!["B", "D", "F"]);
    }

    #[rstest]
    fn test_height_accessors_on_empty_tree() {
        let tree = BalancedTree::new();
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.height_left_subtree(), Err(StoreError::EmptyStructure));
        assert_eq!(tree.height_right_subtree(), Err(StoreError::EmptyStructure));
    }

    #[rstest]
    fn test_shared_ordering_key_keeps_distinct_keys() {
        // ("AB", "C") and ("A", "BC") share the ordering key "ABC" but are
        // different keys; both must be stored and individually findable.
        let mut tree = BalancedTree::new();
        assert!(tree.insert(contact("AB", "C")));
        assert!(tree.insert(contact("A", "BC")));
        assert_eq!(tree.len(), 2);
        assert!(tree.find("AB", "C").is_some());
        assert!(tree.find("A", "BC").is_some());
        assert!(tree.remove("AB", "C"));
        assert!(tree.find("A", "BC").is_some());
        assert_eq!(tree.len(), 1);
    }

    #[rstest]
    fn test_render_produces_branch_markers() {
        let mut tree = BalancedTree::new();
        tree.insert(contact("B", "B"));
        tree.insert(contact("A", "A"));
        tree.insert(contact("C", "C"));
        let mut out = Vec::new();
        tree.render(&mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("|--B B"));
        assert!(rendered.contains("|__C C"));
        assert_eq!(rendered.lines().count(), 3);
    }
}
