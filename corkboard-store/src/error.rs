//! Error types for the store boundary.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reaching the host note store.
///
/// Data absence (missing note, missing content, unsupported dates) is not
/// an error; these variants cover the backend itself failing. The engines
/// perform no retries — a store failure aborts the whole resolve, sort,
/// or group call.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store failed or timed out.
    #[error("store backend error: {0}")]
    Backend(String),

    /// Serialization error while decoding host records.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
