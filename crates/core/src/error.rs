//! Error types for the datakit utilities.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the datakit utilities.
#[derive(Error, Debug)]
pub enum Error {
    /// Division by a zero count (mean of an empty sequence).
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// A record is missing a required field.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a division-by-zero error.
    pub fn division_by_zero(msg: impl Into<String>) -> Self {
        Error::DivisionByZero(msg.into())
    }

    /// Create a missing field error.
    pub fn missing_field(msg: impl Into<String>) -> Self {
        Error::MissingField(msg.into())
    }
}
