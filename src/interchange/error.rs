//! Error types for interchange operations.

use thiserror::Error;

/// Errors that can occur while exporting or importing delta graphs.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload names a node id no op refers to, or vice versa.
    #[error("inconsistent delta payload: {0}")]
    Inconsistent(String),
}
