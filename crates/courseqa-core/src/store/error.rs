//! Store error types

use thiserror::Error;

/// Infrastructure failures of a course store
///
/// "Nothing matched" is not an error; it comes back as empty results or an
/// error marker on `SearchResults`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store cannot be reached
    #[error("course store unavailable: {0}")]
    Unavailable(String),

    #[error("course store error: {0}")]
    Other(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
