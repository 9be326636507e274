//! Network loading error types.

use crate::domain::DomainError;

/// Errors that can occur when loading a network dataset.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Reading the dataset file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the dataset JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A record failed domain validation
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        NetworkError::Json {
            message: err.to_string(),
        }
    }
}
