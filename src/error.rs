//! Error types.
//!
//! The error taxonomy is deliberately narrow: duplicate-key inserts and
//! absent-key removals are signaled by `bool`/`Option` return values, not
//! errors. The enums here cover the remaining failure modes — querying
//! structure of an empty tree and I/O problems while loading records.

use thiserror::Error;

/// Errors surfaced by the store backends themselves.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// A subtree-height query was issued against an empty tree.
    ///
    /// The convention `height(empty) == -1` applies only to the total
    /// height; subtree accessors have no root to inspect and fail instead.
    #[error("operation requires a non-empty structure")]
    EmptyStructure,
}

/// Errors surfaced while reading records from a delimited text source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The underlying reader failed.
    #[error("failed to read contact records")]
    Io(#[from] std::io::Error),
}
