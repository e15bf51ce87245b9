//! Error taxonomy for the tokenization core
//!
//! Only construction and connectivity failures are represented here.
//! Per-token classification failures are absorbed where they occur: a
//! vocabulary row that fails a classification guard is dropped from the
//! catalog and the request continues with a smaller candidate set.

use thiserror::Error;

/// Fatal failures surfaced to the caller of the tokenization pipeline.
///
/// None of these are retried internally; retry policy belongs to the
/// caller's datastore access layer.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The normalization primitive could not be constructed or stopped
    /// producing output. Indicates a broken deployment, not a bad query.
    #[error("normalization module unavailable: {0}")]
    ModuleUnavailable(String),

    /// The vocabulary store could not be queried.
    #[error("vocabulary lookup failed: {0}")]
    QueryFailed(String),

    /// The vocabulary store is reachable but holds no entries, which means
    /// the token table was never populated.
    #[error("vocabulary store contains no data")]
    NoData,
}

pub type Result<T> = std::result::Result<T, QueryError>;
