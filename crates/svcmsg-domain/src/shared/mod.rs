use serde::{Deserialize, Serialize};

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Platform (5xxx)
    NetworkError = 5002,
    ExternalServiceError = 5004,
    MalformedResponse = 5005,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Missing access token: {0}")]
    MissingAccessToken(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::MissingAccessToken(msg) | DomainError::Configuration(msg) => msg,
        }
    }
}
