//! Error types for the strict helper variants and snapshot loading.
//!
//! The core helpers never fail: degenerate input yields `None`, an empty
//! vector or an untouched sequence. These errors only surface at the edges.

use thiserror::Error;

/// Result type alias for fallible helper operations.
pub type HelperResult<T> = Result<T, HelperError>;

/// Errors that can occur at the fallible edges of the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    /// A random pick was requested from an empty sequence.
    #[error("Cannot pick from an empty sequence")]
    EmptySequence,

    /// Explicit index outside the current sequence.
    #[error("Index {index} out of bounds for sequence of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Environment snapshot could not be parsed or written.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// A caller-supplied predicate failed (JS bindings only).
    #[error("Predicate error: {0}")]
    Predicate(String),
}

impl HelperError {
    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Creates a Snapshot error.
    pub fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }

    /// Creates a Predicate error.
    pub fn predicate(msg: impl Into<String>) -> Self {
        Self::Predicate(msg.into())
    }
}

impl From<serde_json::Error> for HelperError {
    fn from(err: serde_json::Error) -> Self {
        Self::snapshot(err.to_string())
    }
}
