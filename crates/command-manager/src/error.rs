//! Error types for the console front end.

use thiserror::Error;

/// Console error type.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// IO error (stdin, stdout, script or config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
