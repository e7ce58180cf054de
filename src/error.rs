//! Error types for studyflow.

use thiserror::Error;

/// All errors surfaced by the studyflow crate.
#[derive(Debug, Error)]
pub enum StudyFlowError {
    /// Configuration problem (bad config file, unusable terminal, etc).
    #[error("Configuration error: {0}")]
    Config(String),

    /// A session was created with invalid parameters.
    #[error("Invalid session: {0}")]
    InvalidSession(String),

    /// A referenced resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The session snapshot could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
