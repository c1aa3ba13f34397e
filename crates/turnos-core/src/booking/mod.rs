//! Booking workflow: doctor + date, confirmation, history.

mod workflow;

pub use workflow::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::db::StorageError;
use crate::models::{DoctorId, HistoryEntry, DATE_FORMAT};

/// Booking errors. Every variant except `FormHidden` and `Storage` has already
/// been reported to the user through the dialog service when returned.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Booking form is not shown")]
    FormHidden,

    #[error("No date selected")]
    MissingDate,

    #[error("Date {} is before the minimum {}", .date.format(DATE_FORMAT), .min.format(DATE_FORMAT))]
    DateBeforeMinimum { date: NaiveDate, min: NaiveDate },

    #[error("Doctor {0:?} not found in cached catalog")]
    UnknownDoctor(Option<DoctorId>),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type BookingResult<T> = Result<T, BookingError>;

/// Result of a valid booking submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The user confirmed and the entry was appended to the history
    Booked(HistoryEntry),
    /// The user dismissed the confirmation
    Cancelled,
}

impl BookingOutcome {
    pub fn entry(&self) -> Option<&HistoryEntry> {
        match self {
            BookingOutcome::Booked(entry) => Some(entry),
            BookingOutcome::Cancelled => None,
        }
    }
}
