//! Error types for sparql-cache-client
//!
//! Defines an error enum covering all failure modes across the system.
//! Uses thiserror for ergonomic error handling.
//!
//! Note that most degradations are deliberately *not* errors: partial cache
//! descriptions are silently excluded from the index, and oracle faults or
//! timeouts count as misses for the affected candidate. Only fact-stream
//! faults and materialization faults surface as `CacheError`.

use thiserror::Error;

/// Result type alias for sparql-cache-client operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Error type for cache ingestion and resolution
#[derive(Error, Debug)]
pub enum CacheError {
    /// The fact stream itself failed (network/file fault at the source)
    #[error("Fact source error: {0}")]
    Source(String),

    /// A query could not be parsed into its structured form
    #[error("Query parse error: {0}")]
    Parse(String),

    /// An equivalence oracle failed internally
    ///
    /// Never surfaced by `resolve` itself (an oracle fault is a miss for
    /// that candidate); available for oracle implementations to construct.
    #[error("Oracle error: {0}")]
    Oracle(String),

    /// HTTP request errors while materializing a result
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O errors while materializing a result from a local path
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding errors for a fetched result payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A confirmed hit whose payload could not be materialized
    #[error("Materialization error: {0}")]
    Materialize(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
