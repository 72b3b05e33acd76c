//! Loading of the navigation document that describes a site.
//!
//! A site's structure lives in a single JSON document at the content root:
//! `docpress.json`, with `docs.json` accepted from older layouts. This crate
//! locates that document, parses it and decodes it into the typed model in
//! [`document`]. Everything downstream works on that model.
//!
//! # Example
//! ```ignore
//! use std::path::Path;
//!
//! let document = docpress_config::load_from_dir(Path::new("docs"))?;
//! ```

mod decode;
pub mod document;

pub use document::{
    Container, ContainerContent, ContainerKind, GlobalNav, Icon, LanguageNav, LinkNode,
    NavDocument, NavNode, Navigation,
};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

/// Preferred filename of the navigation document.
pub const DOCUMENT_FILENAME: &str = "docpress.json";

/// Filename accepted from older site layouts.
pub const LEGACY_DOCUMENT_FILENAME: &str = "docs.json";

/// Errors produced while loading a navigation document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No navigation document found in {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse navigation document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Returns the path of the navigation document inside `source_dir`, or
/// `None` when neither filename exists.
///
/// `docpress.json` wins when both are present.
#[must_use]
pub fn find_document(source_dir: &Path) -> Option<PathBuf> {
    [DOCUMENT_FILENAME, LEGACY_DOCUMENT_FILENAME]
        .iter()
        .map(|name| source_dir.join(name))
        .find(|path| path.is_file())
}

/// Loads and decodes the navigation document at `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not valid JSON.
/// Malformed navigation nodes inside a well-formed document do not error;
/// they are dropped during decoding.
pub fn load_document(path: &Path) -> Result<NavDocument, ConfigError> {
    let raw = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    Ok(NavDocument::from_value(&value))
}

/// Locates and loads the navigation document inside `source_dir`.
pub fn load_from_dir(source_dir: &Path) -> Result<NavDocument, ConfigError> {
    let path = find_document(source_dir)
        .ok_or_else(|| ConfigError::NotFound(source_dir.to_path_buf()))?;
    load_document(&path)
}

/// Parsed document memoized by file modification time.
///
/// Repeated builds against an unchanged document reuse the previous parse;
/// the file is re-read as soon as its modification time moves.
#[derive(Debug)]
pub struct DocumentCache {
    path: PathBuf,
    cached: Mutex<Option<CachedDocument>>,
}

#[derive(Debug)]
struct CachedDocument {
    modified: SystemTime,
    document: Arc<NavDocument>,
}

impl DocumentCache {
    /// Creates a cache for the document at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: Mutex::new(None),
        }
    }

    /// Returns the path this cache reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the parsed document, re-parsing only when the file's
    /// modification time has changed since the last load.
    pub fn load(&self) -> Result<Arc<NavDocument>, ConfigError> {
        let modified = fs::metadata(&self.path)?.modified()?;
        let mut cached = self.cached.lock().unwrap();
        if let Some(entry) = cached.as_ref()
            && entry.modified == modified
        {
            return Ok(Arc::clone(&entry.document));
        }
        let document = Arc::new(load_document(&self.path)?);
        *cached = Some(CachedDocument {
            modified,
            document: Arc::clone(&document),
        });
        Ok(document)
    }

    /// Drops the memoized parse so the next load re-reads the file.
    pub fn invalidate(&self) {
        *self.cached.lock().unwrap() = None;
    }
}
