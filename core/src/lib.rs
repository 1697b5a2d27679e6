//! Core extraction and registry primitives for SQL query templates.
//!
//! This crate turns raw SQL text into an in-memory template registry:
//!
//! - [`Extractor`] — scans documents for `@dotted.identifier@` markers,
//!   strips comments from each query body, and normalizes it to a single
//!   line ending in `;`.
//! - [`QueryRegistry`] — owns the merged identifier → query mapping across
//!   `add` calls and serves lookups with optional `{name}` parameter
//!   substitution.
//! - [`template`] — the placeholder substitution step used by
//!   [`QueryRegistry::get_with`].
//!
//! The core is pure computation over in-memory strings: no file I/O, no SQL
//! validation, no query execution. File loading lives in the companion
//! `query-manager-files` crate.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use query_manager_core::QueryRegistry;
//!
//! let mut registry = QueryRegistry::from_document(
//!     "--@users.getAll@\nSELECT * FROM users;",
//! );
//! registry.add_document("#@users.getEmailBy@\nSELECT * FROM users\nWHERE email='{email}';");
//!
//! assert_eq!(registry.get("users.getAll").unwrap(), "SELECT * FROM users;");
//!
//! let mut params = HashMap::new();
//! params.insert("email".to_string(), "jane@example.com".to_string());
//! assert_eq!(
//!     registry.get_with("users.getEmailBy", &params).unwrap(),
//!     "SELECT * FROM users WHERE email='jane@example.com';"
//! );
//! ```

mod error;
mod extract;
mod registry;
pub mod template;

pub use error::{QueryError, Result};
pub use extract::Extractor;
pub use registry::QueryRegistry;
