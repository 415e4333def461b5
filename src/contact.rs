//! The contact record and its name-ordering rules.
//!
//! This module provides [`Contact`], the record type shared by both store
//! backends, together with the single ordering utility every component
//! compares names with.
//!
//! # Ordering Key
//!
//! The canonical order for the balanced tree is the concatenation
//! `first_name + last_name`, compared byte-wise (shorter-is-earlier on
//! common-prefix ties). [`full_name_cmp`] implements exactly that
//! comparison without allocating the concatenated string.
//!
//! Ordering and matching are case-sensitive; callers are expected to
//! normalize case before insertion (the [`loader`](crate::loader)
//! upper-cases names with [`normalize_name`]).

use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// Ordering Utilities
// =============================================================================

/// Compares two full names by their concatenated `first + last` form,
/// byte-wise.
///
/// Equivalent to `(a_first.to_owned() + a_last).cmp(&(b_first.to_owned() +
/// b_last))` but without the intermediate allocations. On a common-prefix
/// tie the shorter concatenation orders first.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use phonedex::contact::full_name_cmp;
///
/// assert_eq!(full_name_cmp("ALICE", "JONES", "JOHN", "SMITH"), Ordering::Less);
///
/// // Only the concatenation matters: ("AB", "C") and ("A", "BC") compare equal.
/// assert_eq!(full_name_cmp("AB", "C", "A", "BC"), Ordering::Equal);
/// ```
#[must_use]
pub fn full_name_cmp(a_first: &str, a_last: &str, b_first: &str, b_last: &str) -> Ordering {
    a_first
        .bytes()
        .chain(a_last.bytes())
        .cmp(b_first.bytes().chain(b_last.bytes()))
}

/// Upper-cases a name the way the record loader does (ASCII only).
///
/// # Examples
///
/// ```rust
/// use phonedex::contact::normalize_name;
///
/// assert_eq!(normalize_name("Smith"), "SMITH");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_ascii_uppercase()
}

// =============================================================================
// Contact Definition
// =============================================================================

/// A phonebook record, immutable after construction.
///
/// The key is the `(first_name, last_name)` pair; both store backends
/// enforce key uniqueness, so inserting a duplicate key is rejected rather
/// than merged or overwritten.
///
/// # Examples
///
/// ```rust
/// use phonedex::Contact;
///
/// let contact = Contact::new("JOHN", "SMITH", "555-1234", "BOSTON");
/// assert_eq!(contact.first_name(), "JOHN");
/// assert!(contact.has_name("JOHN", "SMITH"));
/// assert!(!contact.has_name("JOHN", "DOE"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact {
    first_name: String,
    last_name: String,
    phone_number: String,
    city: String,
}

impl Contact {
    /// Creates a new contact record.
    ///
    /// No case normalization is applied here; see [`normalize_name`].
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            city: city.into(),
        }
    }

    /// The first-name half of the key.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The last-name half of the key.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The phone number field.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// The city field.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns `true` if this record's key is exactly `(first, last)`.
    #[must_use]
    pub fn has_name(&self, first: &str, last: &str) -> bool {
        self.first_name == first && self.last_name == last
    }

    /// Compares this record's ordering key against another record's.
    #[must_use]
    pub fn order_cmp(&self, other: &Self) -> Ordering {
        self.order_cmp_name(&other.first_name, &other.last_name)
    }

    /// Compares this record's ordering key against a bare `(first, last)`
    /// pair.
    #[must_use]
    pub fn order_cmp_name(&self, first: &str, last: &str) -> Ordering {
        full_name_cmp(&self.first_name, &self.last_name, first, last)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} {} {} {}",
            self.first_name, self.last_name, self.phone_number, self.city
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ALICE", "JONES", "JOHN", "SMITH", Ordering::Less)]
    #[case("JOHN", "SMITH", "ALICE", "JONES", Ordering::Greater)]
    #[case("JOHN", "SMITH", "JOHN", "SMITH", Ordering::Equal)]
    fn test_full_name_cmp_basic(
        #[case] a_first: &str,
        #[case] a_last: &str,
        #[case] b_first: &str,
        #[case] b_last: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(full_name_cmp(a_first, a_last, b_first, b_last), expected);
    }

    #[rstest]
    fn test_full_name_cmp_shorter_orders_first_on_prefix_tie() {
        // "ANNLEE" vs "ANNLEES"
        assert_eq!(full_name_cmp("ANN", "LEE", "ANN", "LEES"), Ordering::Less);
    }

    #[rstest]
    fn test_full_name_cmp_only_concatenation_matters() {
        // ("AB", "C") and ("A", "BC") concatenate identically.
        assert_eq!(full_name_cmp("AB", "C", "A", "BC"), Ordering::Equal);
    }

    #[rstest]
    fn test_full_name_cmp_matches_allocated_concatenation() {
        let pairs = [("JOHN", "SMITH"), ("JO", "HNSMITH"), ("A", ""), ("", "")];
        for (a_first, a_last) in pairs {
            for (b_first, b_last) in pairs {
                let expected =
                    format!("{a_first}{a_last}").cmp(&format!("{b_first}{b_last}"));
                assert_eq!(full_name_cmp(a_first, a_last, b_first, b_last), expected);
            }
        }
    }

    #[rstest]
    fn test_normalize_name_upper_cases_ascii() {
        assert_eq!(normalize_name("Smith"), "SMITH");
        assert_eq!(normalize_name("o'brien-II"), "O'BRIEN-II");
    }

    #[rstest]
    fn test_has_name_is_exact_and_case_sensitive() {
        let contact = Contact::new("JOHN", "SMITH", "555-1234", "BOSTON");
        assert!(contact.has_name("JOHN", "SMITH"));
        assert!(!contact.has_name("John", "Smith"));
        assert!(!contact.has_name("JOHN", "SMIT"));
    }

    #[rstest]
    fn test_display_is_space_separated_fields() {
        let contact = Contact::new("JOHN", "SMITH", "555-1234", "BOSTON");
        assert_eq!(contact.to_string(), "JOHN SMITH 555-1234 BOSTON");
    }
}
