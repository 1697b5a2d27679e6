//! Registry loading from template files with a multi-source builder.
//!
//! The core only accepts in-memory text; this module is the document loader
//! wired in front of it. [`load_files`] reads an explicit list of paths,
//! [`load_dir`] reads every `*.sql` file in a directory, and
//! [`RegistryLoader`] merges any number of file and directory sources into a
//! single [`QueryRegistry`].
//!
//! Sources are parsed in declaration order, and directory entries in file
//! name order, so last-write-wins duplicate resolution is deterministic.
//!
//! # Loading patterns
//!
//! ```no_run
//! use query_manager_files::{RegistryLoader, load_dir, load_files};
//!
//! // Explicit file list
//! let registry = load_files(&["sql/users.sql", "sql/orders.sql"]).unwrap();
//!
//! // Every *.sql file in a directory
//! let registry = load_dir("sql/").unwrap();
//!
//! // Mixed sources, merged in order
//! let registry = RegistryLoader::new()
//!     .from_dir("sql/")
//!     .from_file("overrides/users.sql")
//!     .build()
//!     .unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use query_manager_core::{QueryError, QueryRegistry};
use tracing::{debug, info};

use crate::error::{LoadError, Result};

/// Loads the given template files, in order, into a fresh registry.
///
/// Each path element must be non-blank; the files' extensions are not
/// checked, so any readable text file is accepted.
///
/// # Errors
///
/// Returns [`QueryError::InvalidInput`] (wrapped in [`LoadError::Query`])
/// for a blank path element, or [`LoadError::IoError`] if a file cannot be read.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<QueryRegistry> {
    let mut registry = QueryRegistry::new();
    add_files(&mut registry, paths)?;
    Ok(registry)
}

/// Loads every `*.sql` file in `dir` (sorted by file name) into a fresh
/// registry.
///
/// # Errors
///
/// Returns [`LoadError::IoError`] if the directory cannot be read or a file
/// cannot be opened.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<QueryRegistry> {
    let mut registry = QueryRegistry::new();
    add_dir(&mut registry, dir.as_ref())?;
    Ok(registry)
}

fn add_files<P: AsRef<Path>>(registry: &mut QueryRegistry, paths: &[P]) -> Result<()> {
    for (index, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        if path.to_string_lossy().trim().is_empty() {
            return Err(QueryError::InvalidInput(format!(
                "blank file path at index {index}"
            ))
            .into());
        }
        add_file(registry, path)?;
    }
    Ok(())
}

fn add_file(registry: &mut QueryRegistry, path: &Path) -> Result<()> {
    let document = fs::read_to_string(path)?;
    let before = registry.len();
    registry.add_document(&document);
    debug!(
        path = %path.display(),
        added = registry.len() - before,
        "Loaded template file"
    );
    Ok(())
}

fn add_dir(registry: &mut QueryRegistry, dir: &Path) -> Result<()> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("sql"))
        .collect();
    // File name order keeps duplicate resolution deterministic across runs.
    paths.sort();

    for path in &paths {
        add_file(registry, path)?;
    }
    info!(dir = %dir.display(), files = paths.len(), "Loaded template directory");
    Ok(())
}

/// Describes where a loader source points.
#[derive(Debug, Clone)]
enum LoaderSource {
    File(PathBuf),
    Dir(PathBuf),
}

/// Builder that merges multiple file and directory sources into one registry.
///
/// Sources are loaded in the order they are added; identifiers from later
/// sources overwrite earlier ones. Every source must load successfully —
/// there is no fallback semantics, a missing file is an error.
///
/// # Example
///
/// ```no_run
/// use query_manager_files::RegistryLoader;
///
/// let registry = RegistryLoader::new()
///     .from_dir("sql/base/")
///     .from_dir("sql/overrides/")
///     .build()
///     .unwrap();
/// ```
pub struct RegistryLoader {
    sources: Vec<LoaderSource>,
}

impl RegistryLoader {
    /// Creates a builder with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds a single template file as a source.
    pub fn from_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(LoaderSource::File(path.into()));
        self
    }

    /// Adds a directory of `*.sql` files as a source.
    pub fn from_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(LoaderSource::Dir(path.into()));
        self
    }

    /// Loads all configured sources, in order, into one registry.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NoSourcesConfigured`] if no source was added,
    /// otherwise the first error from a failing source.
    pub fn build(self) -> Result<QueryRegistry> {
        if self.sources.is_empty() {
            return Err(LoadError::NoSourcesConfigured);
        }

        let mut registry = QueryRegistry::new();
        for source in &self.sources {
            match source {
                LoaderSource::File(path) => add_file(&mut registry, path)?,
                LoaderSource::Dir(path) => add_dir(&mut registry, path)?,
            }
        }
        Ok(registry)
    }
}

impl Default for RegistryLoader {
    fn default() -> Self {
        Self::new()
    }
}
