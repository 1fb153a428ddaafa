//! Error types for the bumphole-eval library.

use thiserror::Error;

/// Result type for bumphole-eval operations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Error types that can occur while reading, matching or reporting detections.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Error during I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line in a detection CSV file.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error during JSON parsing of a session config.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Session config failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl EvalError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        EvalError::Parse {
            line,
            message: message.into(),
        }
    }
}
