//! Common error types for TSD

use thiserror::Error;

/// Common result type for TSD operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the TSD crates
#[derive(Error, Debug)]
pub enum Error {
    /// CSV parse or read error (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tone selector that does not name a known tone
    #[error("Unknown tone: {0}")]
    UnknownTone(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
