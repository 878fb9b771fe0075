use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures raised while interpreting model data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A role string outside the closed role set.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A note type string outside the closed sentiment set.
    #[error("unknown note type: {0}")]
    UnknownNoteType(String),
}

/// Error payload returned by the REST backend on non-2xx responses.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message.
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response with the provided message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
