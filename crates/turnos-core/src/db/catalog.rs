//! Cached copy of the doctor catalog.

use super::{SessionStorage, StorageError, StorageResult};
use crate::models::{Doctor, DoctorId};

/// Fixed storage key holding the cached catalog.
pub const CATALOG_KEY: &str = "doctors";

impl SessionStorage {
    /// Serialize the doctor list under [`CATALOG_KEY`].
    pub fn cache_doctors(&self, doctors: &[Doctor]) -> StorageResult<()> {
        let json = serde_json::to_string(doctors)?;
        self.set_item(CATALOG_KEY, &json)
    }

    /// Parse the cached doctor list again from storage.
    pub fn cached_doctors(&self) -> StorageResult<Vec<Doctor>> {
        let json = self
            .get_item(CATALOG_KEY)?
            .ok_or_else(|| StorageError::NotFound(CATALOG_KEY.to_string()))?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Resolve a doctor by ID against the cached catalog.
    pub fn find_cached_doctor(&self, id: DoctorId) -> StorageResult<Option<Doctor>> {
        Ok(self.cached_doctors()?.into_iter().find(|d| d.id == id))
    }
}
