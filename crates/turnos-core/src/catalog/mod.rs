//! Doctor catalog: loading, session cache and specialty index.

mod index;
mod source;

pub use index::*;
pub use source::*;

use thiserror::Error;
use tracing::{error, info};

use crate::db::{SessionStorage, StorageError};
use crate::models::{CatalogDocument, Doctor, DoctorId};

/// Catalog loading errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog from {source_name}: {reason}")]
    Fetch { source_name: String, reason: String },

    #[error("Malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// The full, load-time list of doctors. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    doctors: Vec<Doctor>,
}

impl Catalog {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// Parse a catalog document.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::new(document.doctors))
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn find(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    /// Sorted distinct specialties of this catalog.
    pub fn specialty_index(&self) -> SpecialtyIndex {
        SpecialtyIndex::from_doctors(&self.doctors)
    }
}

/// Fetch the catalog once and write its session cache.
///
/// Failures are logged and returned; nothing is retried.
pub fn load_catalog(
    source: &dyn CatalogSource,
    storage: &SessionStorage,
) -> CatalogResult<Catalog> {
    let result = fetch_and_cache(source, storage);
    match &result {
        Ok(catalog) => info!(
            source = %source.name(),
            doctors = catalog.len(),
            "Catalog loaded"
        ),
        Err(e) => error!(source = %source.name(), error = %e, "Error fetching catalog"),
    }
    result
}

fn fetch_and_cache(source: &dyn CatalogSource, storage: &SessionStorage) -> CatalogResult<Catalog> {
    let json = source.fetch()?;
    let catalog = Catalog::from_json(&json)?;
    storage.cache_doctors(catalog.doctors())?;
    Ok(catalog)
}
