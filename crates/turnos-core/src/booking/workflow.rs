//! Booking sub-form submission.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::{BookingError, BookingOutcome, BookingResult};
use crate::db::SessionStorage;
use crate::messages;
use crate::models::{AppointmentHistory, Doctor, DoctorId, HistoryEntry};
use crate::notify::DialogService;
use crate::view::PageView;

/// Handles booking submissions against the cached catalog.
pub struct BookingWorkflow<'a> {
    storage: &'a SessionStorage,
}

impl<'a> BookingWorkflow<'a> {
    pub fn new(storage: &'a SessionStorage) -> Self {
        Self { storage }
    }

    /// Set the date input's minimum. Called once when the form is initialized.
    pub fn initialize_form(view: &mut PageView, today: NaiveDate) {
        view.booking_form.date_input.set_min(today);
    }

    /// Submit the booking sub-form.
    ///
    /// Pauses on the confirmation dialog. A confirmed booking resolves the
    /// chosen doctor against the session cache before anything is recorded.
    pub fn submit(
        &self,
        view: &mut PageView,
        history: &mut AppointmentHistory,
        dialog: &mut dyn DialogService,
    ) -> BookingResult<BookingOutcome> {
        if !view.booking_form.is_visible() {
            debug!("Booking submitted while the form is hidden");
            return Err(BookingError::FormHidden);
        }

        let date = match view.booking_form.date_input.value() {
            Some(date) => date,
            None => {
                warn!("Booking submitted without date");
                dialog.alert(&messages::missing_date());
                return Err(BookingError::MissingDate);
            }
        };

        if let Some(min) = view.booking_form.date_input.min() {
            if date < min {
                warn!(%date, %min, "Booking date before minimum");
                dialog.alert(&messages::date_before_minimum(min));
                return Err(BookingError::DateBeforeMinimum { date, min });
            }
        }

        let doctor_id = view.booking_form.selected_doctor();

        if !dialog.confirm(&messages::confirm_booking(date)).is_confirmed() {
            debug!(%date, "Booking cancelled");
            return Ok(BookingOutcome::Cancelled);
        }

        let doctor = match self.resolve(doctor_id) {
            Ok(doctor) => doctor,
            Err(e) => {
                warn!(error = %e, "Confirmed booking could not be resolved");
                dialog.alert(&messages::unknown_doctor());
                return Err(e);
            }
        };

        dialog.alert(&messages::booked());

        let entry = HistoryEntry::new(&doctor, date);
        view.history.push(entry.label());
        view.history.show();
        history.record(entry.clone());

        info!(doctor_id = doctor.id, %date, "Appointment booked");
        Ok(BookingOutcome::Booked(entry))
    }

    fn resolve(&self, doctor_id: Option<DoctorId>) -> BookingResult<Doctor> {
        let id = doctor_id.ok_or(BookingError::UnknownDoctor(None))?;
        self.storage
            .find_cached_doctor(id)?
            .ok_or(BookingError::UnknownDoctor(Some(id)))
    }
}
