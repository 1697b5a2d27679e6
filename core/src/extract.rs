//! Query template extraction from raw SQL text.
//!
//! The [`Extractor`] scans documents for `@dotted.identifier@` markers and
//! captures each marker's body up to the terminating `;`. The body is then
//! normalized: comments are stripped, newline runs collapse to single spaces,
//! and a single trailing `;` is appended, so every extracted template is one
//! logical line.
//!
//! Marker detection is comment-agnostic: a marker written inside a block
//! comment (`/* @users.getAll@ */`) is still recognized. Only comments inside
//! the body are stripped.
//!
//! # Example
//!
//! ```
//! use query_manager_core::Extractor;
//!
//! let extractor = Extractor::new();
//! let queries = extractor.extract(&["--@users.getAll@\nSELECT * FROM users;"]);
//! assert_eq!(queries["users.getAll"], "SELECT * FROM users;");
//! ```

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

/// Regex-driven tokenizer for query-id markers and their SQL bodies.
///
/// The patterns are compiled once at construction; a single `Extractor` can
/// process any number of documents.
#[derive(Debug)]
pub struct Extractor {
    marker: Regex,
    comment: Regex,
    line_break: Regex,
}

impl Extractor {
    pub fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure
        // indicates a programmer error in the pattern, not a runtime condition.
        Self {
            // `@ users.getAll @` with optional whitespace (including newlines)
            // around the identifier, then the body up to the next `;`. The
            // identifier ends in a letter, so it is at least two characters.
            // The run of `*/` sequences after the closing `@` lets a marker
            // sit inside a block comment without the `*/` leaking into the body.
            marker: Regex::new(r"@\s*([A-Za-z_.]+[A-Za-z])\s*@(?:\n|\*/|\s)*([^;]*)")
                .expect("static regex must compile"),
            // `# ...` and `-- ...` line comments to end of line, and lazy
            // `/* ... */` block comments. `[\s\S]` spans newlines without
            // requiring dot-all mode.
            comment: Regex::new(r"#+.*|-{2,}.*|/\*[\s\S]*?\*/")
                .expect("static regex must compile"),
            // Any whitespace run containing a newline.
            line_break: Regex::new(r"\s*\n\s*").expect("static regex must compile"),
        }
    }

    /// Extracts all query templates from `documents` into one mapping.
    ///
    /// Documents are scanned in order; a later document's identifier
    /// overwrites an earlier one's, and duplicates within a document
    /// overwrite in scan order. An empty slice, or documents with no
    /// markers, yield an empty mapping.
    pub fn extract<D: AsRef<str>>(&self, documents: &[D]) -> HashMap<String, String> {
        let mut queries = HashMap::new();
        for document in documents {
            self.extract_into(document.as_ref(), &mut queries);
        }
        queries
    }

    /// Extracts templates from a single document, merging into `queries`.
    pub fn extract_into(&self, document: &str, queries: &mut HashMap<String, String>) {
        for caps in self.marker.captures_iter(document) {
            let key = &caps[1];
            let body = &caps[2];

            let stripped = self.comment.replace_all(body, "");
            let mut sql = self
                .line_break
                .replace_all(&stripped, " ")
                .trim()
                .to_string();
            sql.push(';');

            debug!(key = key, len = sql.len(), "Extracted query template");
            queries.insert(key.to_string(), sql);
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
