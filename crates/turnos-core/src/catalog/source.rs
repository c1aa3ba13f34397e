//! Where the catalog document comes from.

use std::path::{Path, PathBuf};

use super::{CatalogError, CatalogResult};

/// A single external read of the catalog document.
pub trait CatalogSource {
    /// Human-readable location, used in logs and errors.
    fn name(&self) -> String;

    /// Fetch the raw document.
    fn fetch(&self) -> CatalogResult<String>;
}

/// Catalog document stored on disk (e.g. `data.json`).
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for FileCatalogSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> CatalogResult<String> {
        std::fs::read_to_string(&self.path).map_err(|e| CatalogError::Fetch {
            source_name: self.name(),
            reason: e.to_string(),
        })
    }
}

/// Catalog document held in memory.
#[derive(Debug, Clone)]
pub struct InlineCatalogSource {
    document: String,
}

impl InlineCatalogSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl CatalogSource for InlineCatalogSource {
    fn name(&self) -> String {
        "inline".to_string()
    }

    fn fetch(&self) -> CatalogResult<String> {
        Ok(self.document.clone())
    }
}
