//! Error types for the fallible layers around the moon calculator.
//!
//! The numeric core never fails; these errors come from configuration
//! loading, strict date handling and report serialization.

/// Result type for moonkit operations
pub type MoonResult<T> = Result<T, MoonError>;

/// Error type for moonkit operations
#[derive(Debug, thiserror::Error)]
pub enum MoonError {
    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for MoonError {
    fn from(e: serde_json::Error) -> Self {
        MoonError::SerializationError(e.to_string())
    }
}
