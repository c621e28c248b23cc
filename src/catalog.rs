//! Named catalogs of video sources.
//!
//! Analysis scripts refer to recordings by scenario name rather than by
//! path. [`SourceCatalog`] holds that mapping explicitly: built in code
//! through the builder methods, or loaded from a small JSON object of
//! `"name": "path"` pairs.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::FrametabError;

/// A mapping from scenario names to video file paths.
///
/// Relative paths resolve against the catalog's root directory when one is
/// set; absolute paths are used as-is. Nothing is checked against the
/// filesystem until a source is actually opened.
///
/// # Example
///
/// ```
/// use frametab::SourceCatalog;
///
/// let catalog = SourceCatalog::new()
///     .with_root("recordings")
///     .with_source("lab", "lab_run.avi")
///     .with_source("field", "/data/field_run.avi");
///
/// assert_eq!(catalog.resolve("lab").unwrap().to_str(), Some("recordings/lab_run.avi"));
/// assert_eq!(catalog.resolve("field").unwrap().to_str(), Some("/data/field_run.avi"));
/// assert!(catalog.resolve("bench").is_err());
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct SourceCatalog {
    root: Option<PathBuf>,
    sources: HashMap<String, PathBuf>,
}

impl SourceCatalog {
    /// Create an empty catalog with no root directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory relative paths resolve against.
    pub fn with_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Add a scenario, replacing any previous path under the same name.
    pub fn with_source<N: Into<String>, P: Into<PathBuf>>(mut self, name: N, path: P) -> Self {
        self.insert(name, path);
        self
    }

    /// Add a scenario in place, replacing any previous path under the same
    /// name.
    pub fn insert<N: Into<String>, P: Into<PathBuf>>(&mut self, name: N, path: P) {
        self.sources.insert(name.into(), path.into());
    }

    /// Load a catalog from a JSON file holding one object of
    /// `"name": "path"` pairs.
    ///
    /// The loaded catalog has no root; chain [`with_root`](Self::with_root)
    /// to resolve relative paths against a directory.
    ///
    /// # Errors
    ///
    /// Returns [`FrametabError::Io`] when the file cannot be read and
    /// [`FrametabError::Json`] when it does not parse as a string-to-string
    /// object.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, FrametabError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let sources: HashMap<String, PathBuf> = serde_json::from_reader(BufReader::new(file))?;

        debug!(
            "Loaded {} catalog entries from {}",
            sources.len(),
            path.display(),
        );

        Ok(Self {
            root: None,
            sources,
        })
    }

    /// Resolve a scenario name to the path of its recording.
    ///
    /// # Errors
    ///
    /// Returns [`FrametabError::UnknownScenario`] when the name is not in
    /// the catalog.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, FrametabError> {
        let path = self
            .sources
            .get(name)
            .ok_or_else(|| FrametabError::UnknownScenario {
                name: name.to_string(),
            })?;

        Ok(match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.clone(),
        })
    }

    /// Scenario names in the catalog, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of scenarios in the catalog.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` when the catalog has no scenarios.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
