//! In-memory query registry with merge-on-add semantics.
//!
//! A [`QueryRegistry`] owns the mapping from dotted identifier to normalized
//! SQL text, built via [`Extractor`]. Repeated [`add`](QueryRegistry::add)
//! calls merge shallowly: new identifiers are added, duplicates are replaced
//! by the newly parsed value, everything else is preserved. There is no
//! deletion; the registry lives as long as its owner.
//!
//! Lookups are O(1) via the internal `HashMap`.
//!
//! # Examples
//!
//! ```
//! use query_manager_core::QueryRegistry;
//!
//! let mut registry = QueryRegistry::from_document("--@users.getAll@\nSELECT * FROM users;");
//! registry.add_document("--@users.getActive@\nSELECT * FROM users WHERE active = 1;");
//!
//! assert_eq!(registry.get("users.getAll").unwrap(), "SELECT * FROM users;");
//! assert_eq!(registry.len(), 2);
//! ```

use std::collections::HashMap;

use crate::error::{QueryError, Result};
use crate::extract::Extractor;
use crate::template;

/// Mutable store of extracted query templates, keyed by dotted identifier.
///
/// The registry assumes single-writer usage: `add` takes `&mut self`, so
/// concurrent merges must be serialized by the host. Merge order decides
/// duplicate resolution (last write wins).
#[derive(Debug)]
pub struct QueryRegistry {
    queries: HashMap<String, String>,
    extractor: Extractor,
}

impl QueryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            queries: HashMap::new(),
            extractor: Extractor::new(),
        }
    }

    /// Builds a registry from a sequence of raw documents.
    ///
    /// An empty slice is valid and yields an empty registry.
    pub fn from_documents<D: AsRef<str>>(documents: &[D]) -> Self {
        let mut registry = Self::new();
        registry.add(documents);
        registry
    }

    /// Builds a registry from a single raw document.
    ///
    /// Equivalent to [`from_documents`](Self::from_documents) with a
    /// one-element sequence.
    pub fn from_document(document: &str) -> Self {
        Self::from_documents(&[document])
    }

    /// Parses `documents` and merges the result into the registry.
    ///
    /// New identifiers are added; an identifier already present is replaced
    /// by the newly parsed value. Documents with no markers contribute
    /// nothing. Calling `add` twice with the same document leaves the
    /// registry in the same state as calling it once.
    pub fn add<D: AsRef<str>>(&mut self, documents: &[D]) {
        for document in documents {
            self.extractor
                .extract_into(document.as_ref(), &mut self.queries);
        }
    }

    /// Parses a single document and merges the result into the registry.
    pub fn add_document(&mut self, document: &str) {
        self.add(&[document]);
    }

    /// Looks up the stored query text for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::KeyNotFound`] if `key` has no entry.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.queries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| QueryError::KeyNotFound(key.to_string()))
    }

    /// Looks up `key` and substitutes `{name}` placeholders from `parameters`.
    ///
    /// The substitution step runs even when `parameters` is empty; a template
    /// without placeholders is returned unchanged. Placeholders with no
    /// matching parameter are left verbatim (see [`template::render`]).
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::KeyNotFound`] if `key` has no entry.
    pub fn get_with(&self, key: &str, parameters: &HashMap<String, String>) -> Result<String> {
        let query = self.get(key)?;
        Ok(template::render(query, parameters))
    }

    /// Returns `true` if the registry has an entry for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.queries.contains_key(key)
    }

    /// Returns the number of stored templates.
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Returns `true` if the registry holds no templates.
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Returns an iterator over stored identifiers, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.queries.keys().map(String::as_str)
    }

    /// Returns an iterator over `(identifier, query)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.queries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for QueryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
