//! Structured error types for codonym.

use thiserror::Error;

/// Unified error type for all codonym operations.
#[derive(Debug, Error)]
pub enum CodonymError {
    /// I/O error (closed pipe, unreadable terminal, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input (bad arguments, unusable separator)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Failure rendering a result as JSON or another structured format
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias used throughout codonym.
pub type Result<T> = std::result::Result<T, CodonymError>;
