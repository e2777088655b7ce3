//! Error types for the coinframe library.

use thiserror::Error;

/// Result type alias for coinframe operations.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Errors raised at the edges of the library.
///
/// The transformations themselves never fail; only record loading and
/// configuration validation produce these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Input could not be decoded into records.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Reading input failed.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TransformError {
    fn from(err: std::io::Error) -> Self {
        TransformError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TransformError {
    fn from(err: serde_json::Error) -> Self {
        TransformError::Parse(err.to_string())
    }
}
