//! Open-addressing hash table with quadratic probing.
//!
//! This module provides [`ProbingHashTable`], a contact store backed by a
//! prime-sized slot array with quadratic probing, tombstone deletion, and
//! automatic rehash-on-threshold.
//!
//! # Overview
//!
//! - Amortized O(1) insert, remove, find
//! - O(N) stop-the-world rehash when the load factor reaches the
//!   configured threshold
//! - O(1) `len`, `capacity`, `load_factor`
//!
//! The per-name hash is a multiplicative/XOR mix (seed 5381, multiplier
//! 33); the two name hashes combine as `(h1 ^ (h2 << 1)) mod capacity`.
//! This is not a collision-hardened hash.
//!
//! # Invariants
//!
//! At rest (after every insert returns), `occupied / capacity` is below
//! the load-factor threshold; exceeding it triggers a synchronous rehash
//! to the next prime at least twice the old capacity, during which
//! tombstones are discarded. Capacity only ever grows and is always prime.
//!
//! # Examples
//!
//! ```rust
//! use phonedex::{Contact, ProbingHashTable};
//!
//! let mut table = ProbingHashTable::new();
//! assert!(table.insert(Contact::new("JOHN", "SMITH", "555-1234", "BOSTON")));
//! assert!(!table.insert(Contact::new("JOHN", "SMITH", "555-0000", "AUSTIN")));
//! assert_eq!(table.find("JOHN", "SMITH").map(Contact::city), Some("BOSTON"));
//! ```

use std::fmt;
use std::iter::FromIterator;

use log::debug;

use crate::contact::Contact;
use crate::store::ContactStore;
use crate::store::prime::next_prime_at_least;

// =============================================================================
// Constants
// =============================================================================

/// Default initial capacity (prime).
pub const DEFAULT_CAPACITY: usize = 53;

/// Default load-factor threshold triggering a rehash.
pub const DEFAULT_LOAD_THRESHOLD: f64 = 0.5;

/// Thresholds are clamped into this range so growth always fires before
/// the table fills and never fires on a nearly empty table.
const THRESHOLD_RANGE: (f64, f64) = (0.1, 0.95);

// =============================================================================
// Hash computation
// =============================================================================

/// Rolling multiplicative/XOR hash over one name (seed 5381, multiplier 33).
fn hash_name(name: &str) -> u64 {
    let mut hash: u64 = 5381;
    for byte in name.bytes() {
        hash = hash.wrapping_mul(33) ^ u64::from(byte);
    }
    hash
}

// =============================================================================
// Slot Definition
// =============================================================================

/// State of one table slot.
///
/// A tombstone keeps the evicted record so that a probe for that exact key
/// still terminates at this slot (reporting it absent and reusable); for
/// any other key the tombstone is skipped like an occupied slot.
#[derive(Clone)]
enum Slot {
    Empty,
    Occupied(Contact),
    Tombstone(Contact),
}

// =============================================================================
// ProbingHashTable Definition
// =============================================================================

/// An open-addressing hash table of [`Contact`] records keyed by
/// `(first_name, last_name)`.
///
/// Collision resolution is quadratic probing with the step sequence
/// `index += 2 * probe_count`; deletion is by tombstone; growth rehashes
/// the whole table into the next prime at least twice the old capacity.
/// Duplicate keys are rejected on insert.
///
/// # Time Complexity
///
/// | Operation     | Complexity       |
/// |---------------|------------------|
/// | `insert`      | amortized O(1)   |
/// | `remove`      | amortized O(1)   |
/// | `find`        | amortized O(1)   |
/// | `load_factor` | O(1)             |
/// | `capacity`    | O(1)             |
/// | `len`         | O(1)             |
///
/// # Examples
///
/// ```rust
/// use phonedex::{Contact, ProbingHashTable};
///
/// let mut table = ProbingHashTable::with_capacity_and_threshold(53, 0.5);
/// table.insert(Contact::new("ALICE", "JONES", "555-5678", "DENVER"));
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.capacity(), 53);
/// ```
pub struct ProbingHashTable {
    slots: Vec<Slot>,
    length: usize,
    load_threshold: f64,
}

impl ProbingHashTable {
    /// Creates a table with the default capacity (53) and load-factor
    /// threshold (0.5).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity_and_threshold(DEFAULT_CAPACITY, DEFAULT_LOAD_THRESHOLD)
    }

    /// Creates a table with at least the given capacity and the default
    /// load-factor threshold.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_threshold(capacity, DEFAULT_LOAD_THRESHOLD)
    }

    /// Creates a table with at least the given capacity and the given
    /// load-factor threshold.
    ///
    /// The capacity is rounded up to the smallest prime ≥ `capacity`
    /// (minimum 2), so a requested capacity of 0 or 1 cannot produce a
    /// degenerate table. The threshold is clamped into `[0.1, 0.95]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use phonedex::ProbingHashTable;
    ///
    /// let table = ProbingHashTable::with_capacity_and_threshold(54, 0.7);
    /// assert_eq!(table.capacity(), 59); // next prime at or above 54
    /// ```
    #[must_use]
    pub fn with_capacity_and_threshold(capacity: usize, load_threshold: f64) -> Self {
        let capacity = next_prime_at_least(capacity.max(2));
        Self {
            slots: vec![Slot::Empty; capacity],
            length: 0,
            load_threshold: load_threshold.clamp(THRESHOLD_RANGE.0, THRESHOLD_RANGE.1),
        }
    }

    /// Number of records currently stored (tombstones excluded).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the table holds no records.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Current slot-array size. Always prime; never shrinks.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Occupied slots divided by capacity.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.length as f64 / self.slots.len() as f64
    }

    /// The configured load-factor threshold.
    #[inline]
    #[must_use]
    pub const fn load_threshold(&self) -> f64 {
        self.load_threshold
    }

    /// Removes every record, keeping the current capacity.
    pub fn clear(&mut self) {
        let capacity = self.slots.len();
        self.slots = vec![Slot::Empty; capacity];
        self.length = 0;
    }

    /// Inserts a record.
    ///
    /// Returns `true` if the key was absent and the record was added;
    /// `false` if the key already exists (no mutation). If the resulting
    /// load factor reaches the threshold, the table rehashes synchronously
    /// before this call returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use phonedex::{Contact, ProbingHashTable};
    ///
    /// let mut table = ProbingHashTable::new();
    /// assert!(table.insert(Contact::new("BOB", "SMITH", "555-9999", "BOSTON")));
    /// assert!(!table.insert(Contact::new("BOB", "SMITH", "555-1111", "DALLAS")));
    /// ```
    pub fn insert(&mut self, contact: Contact) -> bool {
        loop {
            if let Some(index) = self.probe(contact.first_name(), contact.last_name()) {
                if matches!(self.slots[index], Slot::Occupied(_)) {
                    return false;
                }
                self.slots[index] = Slot::Occupied(contact);
                self.length += 1;
                if self.load_factor() >= self.load_threshold {
                    self.grow();
                }
                return true;
            }
            // The probe sequence was exhausted by accumulated tombstones;
            // rehashing discards them, then the insert is retried.
            self.grow();
        }
    }

    /// Removes the record with exactly the key `(first, last)`.
    ///
    /// The slot becomes a tombstone rather than empty so later keys that
    /// probed past it remain reachable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use phonedex::{Contact, ProbingHashTable};
    ///
    /// let mut table = ProbingHashTable::new();
    /// table.insert(Contact::new("ALICE", "JONES", "555-5678", "DENVER"));
    /// assert!(table.remove("ALICE", "JONES"));
    /// assert!(!table.remove("ALICE", "JONES"));
    /// ```
    pub fn remove(&mut self, first: &str, last: &str) -> bool {
        let Some(index) = self.probe(first, last) else {
            return false;
        };
        match std::mem::replace(&mut self.slots[index], Slot::Empty) {
            Slot::Occupied(record) => {
                self.slots[index] = Slot::Tombstone(record);
                self.length -= 1;
                true
            }
            not_occupied => {
                self.slots[index] = not_occupied;
                false
            }
        }
    }

    /// Looks up the record with exactly the key `(first, last)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use phonedex::{Contact, ProbingHashTable};
    ///
    /// let mut table = ProbingHashTable::new();
    /// table.insert(Contact::new("JOHN", "SMITH", "555-1234", "BOSTON"));
    /// assert!(table.find("JOHN", "SMITH").is_some());
    /// assert!(table.find("JANE", "SMITH").is_none());
    /// ```
    #[must_use]
    pub fn find(&self, first: &str, last: &str) -> Option<&Contact> {
        match &self.slots[self.probe(first, last)?] {
            Slot::Occupied(record) => Some(record),
            _ => None,
        }
    }

    /// Iterates over stored records in unspecified (slot) order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(record) => Some(record),
            _ => None,
        })
    }

    /// Home slot for a key: `(h1 ^ (h2 << 1)) mod capacity`.
    #[allow(clippy::cast_possible_truncation)]
    fn home_index(&self, first: &str, last: &str) -> usize {
        let combined = hash_name(first) ^ hash_name(last).wrapping_shl(1);
        // The modulo keeps the value below capacity, so the cast is exact.
        (combined % self.slots.len() as u64) as usize
    }

    /// Quadratic probe starting at the home slot, stepping by
    /// `2 * probe_count` and wrapping modulo capacity.
    ///
    /// Terminates at the first empty slot, or at any slot (occupied or
    /// tombstone) whose resident key matches. Returns `None` only if the
    /// bounded probe visited a full capacity's worth of slots without
    /// terminating, which requires heavy tombstone accumulation; callers
    /// treat that as "absent" or trigger a rehash.
    fn probe(&self, first: &str, last: &str) -> Option<usize> {
        let capacity = self.slots.len();
        let mut index = self.home_index(first, last);
        let mut probe_count = 0;
        while probe_count <= capacity {
            match &self.slots[index] {
                Slot::Empty => return Some(index),
                Slot::Occupied(resident) | Slot::Tombstone(resident)
                    if resident.has_name(first, last) =>
                {
                    return Some(index);
                }
                _ => {
                    probe_count += 1;
                    index = (index + 2 * probe_count) % capacity;
                }
            }
        }
        None
    }

    /// Rehashes into the next prime at least twice the current capacity.
    ///
    /// Stop-the-world: the old slot array is discarded wholesale, every
    /// occupied record is re-inserted, and tombstones are dropped.
    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = next_prime_at_least(2 * old_capacity);
        let old_slots = std::mem::replace(&mut self.slots, vec![Slot::Empty; new_capacity]);
        self.length = 0;
        for slot in old_slots {
            if let Slot::Occupied(record) = slot {
                self.insert(record);
            }
        }
        debug!(
            "rehashed contact table: capacity {old_capacity} -> {new_capacity}, \
             occupied {}, load factor {:.3}",
            self.length,
            self.load_factor()
        );
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl Default for ProbingHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for ProbingHashTable {
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

impl fmt::Debug for ProbingHashTable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ProbingHashTable")
            .field("len", &self.length)
            .field("capacity", &self.slots.len())
            .field("load_threshold", &self.load_threshold)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ProbingHashTable {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self.iter().all(|record| {
                other.find(record.first_name(), record.last_name()) == Some(record)
            })
    }
}

impl Eq for ProbingHashTable {}

impl FromIterator<Contact> for ProbingHashTable {
    fn from_iter<I: IntoIterator<Item = Contact>>(contacts: I) -> Self {
        let mut table = Self::new();
        table.extend(contacts);
        table
    }
}

impl Extend<Contact> for ProbingHashTable {
    fn extend<I: IntoIterator<Item = Contact>>(&mut self, contacts: I) {
        for contact in contacts {
            self.insert(contact);
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ProbingHashTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ProbingHashTable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let contacts = Vec::<Contact>::deserialize(deserializer)?;
        Ok(contacts.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
