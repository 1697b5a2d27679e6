//! Error types for template file loading.

use query_manager_core::QueryError;
use thiserror::Error;

/// Errors that can occur while loading template files into a registry.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input validation failure from the core (e.g., a blank path element).
    #[error(transparent)]
    Query(#[from] QueryError),

    /// A builder was asked to build with no configured sources.
    #[error("no template sources configured")]
    NoSourcesConfigured,
}

/// Convenience alias for results with [`LoadError`].
pub type Result<T> = std::result::Result<T, LoadError>;
