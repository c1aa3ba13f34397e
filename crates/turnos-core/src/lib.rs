//! Turnos Core Library
//!
//! Doctor search and appointment booking for a single page session.
//!
//! # Flow
//!
//! ```text
//! Catalog document ──load once──► Catalog ──► Session storage ("doctors")
//!        │                           │
//!        │                           ▼
//!        │                    Specialty index ──► specialty select
//!        ▼
//! Search form (specialty, coverage)
//!        │
//!        ▼
//! Doctor filter ──► available / not available
//!        │
//!        ▼
//! Search presenter ──► result area, doctor select, unavailable list
//!        │
//!        ▼
//! Booking form (doctor, date) ──► confirmation dialog ──► history
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite-backed session key/value storage
//! - [`models`]: Domain types (Doctor, Coverage, HistoryEntry, etc.)
//! - [`catalog`]: Catalog loading and specialty index
//! - [`search`]: Doctor filter and search presenter
//! - [`booking`]: Booking workflow
//! - [`notify`]: Dialog service abstraction
//! - [`view`]: Page regions
//! - [`page`]: Session context and page handlers

pub mod booking;
pub mod catalog;
pub mod config;
pub mod db;
pub mod messages;
pub mod models;
pub mod notify;
pub mod page;
pub mod search;
pub mod view;

// Re-export commonly used types
pub use booking::{BookingError, BookingOutcome, BookingWorkflow};
pub use catalog::{
    load_catalog, Catalog, CatalogError, CatalogSource, FileCatalogSource, InlineCatalogSource,
    SpecialtyIndex,
};
pub use config::AppConfig;
pub use db::{SessionStorage, StorageError};
pub use models::{
    AppointmentHistory, Coverage, Doctor, DoctorId, HistoryEntry, SearchForm, SpecialtyChoice,
};
pub use notify::{Alert, Confirmation, DialogOutcome, DialogService, Icon, ScriptedDialog};
pub use page::{BookingPage, PageSettings, SessionContext};
pub use search::{filter_doctors, SearchState};
pub use view::PageView;

use chrono::NaiveDate;
use thiserror::Error;

// =========================================================================
// Crate Error Type
// =========================================================================

#[derive(Debug, Error)]
pub enum TurnosError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type TurnosResult<T> = Result<T, TurnosError>;

/// Open session storage and load the booking page described by `config`.
pub fn open_page(config: &AppConfig, today: NaiveDate) -> TurnosResult<BookingPage> {
    let storage = match &config.storage_path {
        Some(path) => SessionStorage::open(path)?,
        None => SessionStorage::open_in_memory()?,
    };
    let source = FileCatalogSource::new(&config.catalog_path);
    let settings = PageSettings::new(config.patient_label.clone(), today);
    Ok(BookingPage::load(&source, storage, settings)?)
}
