//! Reading contact records from whitespace-delimited text.
//!
//! A record is four whitespace-separated tokens: first name, last name,
//! phone number, city. Tokens are read until end of input; a trailing
//! partial record (fewer than four tokens left) is discarded, not
//! inserted. First and last names are upper-cased before the record is
//! built, because store ordering and matching are case-sensitive.
//!
//! # Examples
//!
//! ```rust
//! use phonedex::loader::read_contacts;
//!
//! let input = "John Smith 555-1234 Boston\nAlice Jones 555-5678 Denver\n";
//! let contacts = read_contacts(input.as_bytes()).unwrap();
//! assert_eq!(contacts.len(), 2);
//! assert_eq!(contacts[0].first_name(), "JOHN");
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::warn;

use crate::contact::{Contact, normalize_name};
use crate::error::LoadError;
use crate::store::ContactStore;

/// Counts reported by [`load_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Records added to the store.
    pub inserted: usize,
    /// Records rejected as duplicate keys.
    pub rejected: usize,
}

/// Reads every complete record from the input.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the reader fails or the input is not
/// valid UTF-8.
pub fn read_contacts<R: Read>(reader: R) -> Result<Vec<Contact>, LoadError> {
    let mut text = String::new();
    BufReader::new(reader).read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();
    let mut contacts = Vec::new();
    while let Some(first) = tokens.next() {
        let (Some(last), Some(phone), Some(city)) = (tokens.next(), tokens.next(), tokens.next())
        else {
            warn!("discarding partial record at end of input (starts with {first:?})");
            break;
        };
        contacts.push(Contact::new(
            normalize_name(first),
            normalize_name(last),
            phone,
            city,
        ));
    }
    Ok(contacts)
}

/// Reads every complete record from a file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened or read.
pub fn read_contacts_from_path(path: impl AsRef<Path>) -> Result<Vec<Contact>, LoadError> {
    read_contacts(File::open(path)?)
}

/// Reads records from the input and inserts each into the store.
///
/// Duplicate keys are rejected by the store and counted, not overwritten.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the reader fails.
///
/// # Examples
///
/// ```rust
/// use phonedex::loader::load_into;
/// use phonedex::BalancedTree;
///
/// let input = "John Smith 555-1234 Boston\nJohn Smith 555-0000 Austin\n";
/// let mut tree = BalancedTree::new();
/// let summary = load_into(&mut tree, input.as_bytes()).unwrap();
/// assert_eq!(summary.inserted, 1);
/// assert_eq!(summary.rejected, 1);
/// ```
pub fn load_into<S: ContactStore, R: Read>(
    store: &mut S,
    reader: R,
) -> Result<LoadSummary, LoadError> {
    let mut summary = LoadSummary::default();
    for contact in read_contacts(reader)? {
        if store.insert(contact) {
            summary.inserted += 1;
        } else {
            summary.rejected += 1;
        }
    }
    Ok(summary)
}

// =============================================================================
// Tests
// =============================================================================
