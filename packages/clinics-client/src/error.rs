//! Error types for the clinics client.

use thiserror::Error;

/// Result type for clinics client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Clinics client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Login response carried a missing or malformed authorization header.
    /// Fatal to the login attempt; the session is left untouched.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Non-2xx response from the remote service, already dispatched by the
    /// response pipeline. `messages` is the user-facing payload, when the
    /// service sent one.
    #[error("service returned status {code}")]
    Status { code: u16, messages: Vec<String> },

    /// Transport or decoding failure (connection refused, invalid JSON).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Input rejected before any network call was made.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ClientError {
    /// Status code of the remote error, if this is a `Status` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
