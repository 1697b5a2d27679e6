//! Error types for query template operations.

use thiserror::Error;

/// Errors that can occur when building or querying a template registry.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Input failed top-level validation (e.g., a blank file path element).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Lookup key has no entry in the registry.
    #[error("'{0}' key does not exist")]
    KeyNotFound(String),
}

/// Convenience alias for results with [`QueryError`].
pub type Result<T> = std::result::Result<T, QueryError>;
