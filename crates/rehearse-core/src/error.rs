//! Typed errors for rubric construction and submission loading.
//!
//! Scoring itself never fails; these cover malformed inputs handed to the
//! library by its callers.

use thiserror::Error;

/// Errors raised when building a [`Rubric`](crate::model::Rubric) strictly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RubricError {
    /// The ideal answer length was zero words.
    #[error("ideal answer length must be at least 1 word")]
    ZeroIdealLength,

    /// An expected keyword was empty after trimming.
    #[error("expected keyword at position {0} is blank")]
    BlankKeyword(usize),
}

/// Errors raised when loading an interview submission file.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The file extension is neither `.json` nor `.toml`.
    #[error("unsupported submission format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),

    /// The submission contains no answer records at all.
    #[error("submission contains no answers")]
    Empty,
}
