//! Appointment history models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::doctor::{Doctor, DoctorId};

/// Date format used by the date input and the history list.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A confirmed booking, appended to the in-page history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Unique entry ID
    pub entry_id: String,
    /// Doctor the booking was made with
    pub doctor_id: DoctorId,
    /// Doctor display name, resolved when the entry was created
    pub doctor_name: String,
    /// Booked calendar date
    pub date: NaiveDate,
    /// Creation timestamp
    pub created_at: String,
}

impl HistoryEntry {
    /// Create an entry for a resolved doctor.
    pub fn new(doctor: &Doctor, date: NaiveDate) -> Self {
        Self {
            entry_id: uuid::Uuid::new_v4().to_string(),
            doctor_id: doctor.id,
            doctor_name: doctor.name.clone(),
            date,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Text shown in the history list.
    pub fn label(&self) -> String {
        format!("Dr. {} - {}", self.doctor_name, self.date.format(DATE_FORMAT))
    }
}

/// Append-only list of bookings made during the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentHistory {
    entries: Vec<HistoryEntry>,
}

impl AppointmentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; entries are never removed or changed.
    pub fn record(&mut self, entry: HistoryEntry) -> &HistoryEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
