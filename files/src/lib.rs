//! Template file loading for SQL query registries.
//!
//! The core crate (`query-manager-core`) operates on in-memory strings only.
//! This crate is the "document loader" collaborator: it reads template files
//! from disk and feeds their contents to the core's extractor, producing a
//! ready-to-query [`QueryRegistry`](query_manager_core::QueryRegistry).
//!
//! # Quick start
//!
//! ```no_run
//! use query_manager_files::load_files;
//!
//! let registry = load_files(&["sql/users.sql", "sql/orders.sql"]).unwrap();
//! println!("{}", registry.get("users.getAll").unwrap());
//! ```

mod error;
mod loader;

pub use error::{LoadError, Result};
pub use loader::{RegistryLoader, load_dir, load_files};
