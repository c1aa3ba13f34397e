//! Application configuration.

use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::messages::DEFAULT_PATIENT_LABEL;

pub const DEFAULT_CATALOG_PATH: &str = "data.json";
/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for loading and running the booking page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the catalog document
    pub catalog_path: PathBuf,
    /// Session storage file; `None` keeps storage in memory for the session
    pub storage_path: Option<PathBuf>,
    /// How messages address the user
    pub patient_label: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            storage_path: None,
            patient_label: DEFAULT_PATIENT_LABEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from `TURNOS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog_path = lookup("TURNOS_CATALOG")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                warn!(
                    "TURNOS_CATALOG not set, using {}",
                    defaults.catalog_path.display()
                );
                defaults.catalog_path.clone()
            });

        let storage_path = lookup("TURNOS_STORAGE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let patient_label = lookup("TURNOS_PATIENT_LABEL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.patient_label);

        Self {
            catalog_path,
            storage_path,
            patient_label,
        }
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    pub fn with_patient_label(mut self, label: impl Into<String>) -> Self {
        self.patient_label = label.into();
        self
    }

    /// Whether session storage is kept in memory only.
    pub fn is_ephemeral(&self) -> bool {
        self.storage_path.is_none()
    }
}
