//! Error types shared across the prediction pipeline.

use thiserror::Error;

/// Errors that can surface from a prediction run.
///
/// Every stage before final validation is total over its input domain, so
/// in practice only configuration parsing and result validation produce
/// errors.
#[derive(Debug, Error)]
pub enum SseError {
    /// The assembled result violated one of its invariants.
    ///
    /// This is a defect in an upstream stage, never a user error.
    #[error("prediction result validation failed: {0}")]
    Validation(String),

    /// A configuration value could not be interpreted.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for prediction operations.
pub type SseResult<T> = Result<T, SseError>;
