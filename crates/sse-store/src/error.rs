//! Error types for the stores.

use thiserror::Error;

/// Errors from profile and tracking persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("store lock poisoned: {0}")]
    Lock(String),

    #[error("invalid vote '{0}' (expected 'accurate' or 'inaccurate')")]
    InvalidVote(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
