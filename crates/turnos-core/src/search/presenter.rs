//! Renders search outcomes into the page regions.

use tracing::debug;

use super::SearchState;
use crate::catalog::SpecialtyIndex;
use crate::messages;
use crate::notify::DialogService;
use crate::view::{PageView, SelectOption};

/// Writes search states into a [`PageView`].
#[derive(Debug, Clone)]
pub struct SearchPresenter<'a> {
    patient_label: &'a str,
}

impl<'a> SearchPresenter<'a> {
    pub fn new(patient_label: &'a str) -> Self {
        Self { patient_label }
    }

    /// Render exactly one of the four search states.
    ///
    /// The result area, the doctor choice and the unavailable list are cleared
    /// first, so no earlier outcome survives a new submission.
    pub fn render(&self, view: &mut PageView, dialog: &mut dyn DialogService, state: &SearchState) {
        match state {
            SearchState::MissingSpecialty => {
                debug!("Search submitted without specialty");
                reset_results(view);
                dialog.alert(&messages::missing_specialty());
            }
            SearchState::NoMatches { .. } => {
                reset_results(view);
                view.results.push(messages::no_doctors(self.patient_label));
            }
            SearchState::Available { specialty, doctors } => {
                reset_results(view);
                view.results
                    .push(messages::available_header(self.patient_label, specialty));
                for doctor in doctors {
                    view.booking_form
                        .doctor_select
                        .append(SelectOption::new(doctor.id.to_string(), doctor.name.clone()));
                }
                view.booking_form.show();
            }
            SearchState::AllUnavailable { specialty, doctors } => {
                reset_results(view);
                view.results
                    .push(messages::unavailable_header(self.patient_label, specialty));
                for doctor in doctors {
                    view.unavailable.push(doctor.name.clone());
                }
                view.unavailable.show();
            }
        }
    }
}

/// Append one option per distinct specialty, in sorted order.
pub fn populate_specialty_select(view: &mut PageView, index: &SpecialtyIndex) {
    for specialty in index.specialties() {
        view.specialty_select
            .append(SelectOption::new(specialty.clone(), specialty.clone()));
    }
}

/// Reset after the coverage choice changes. History is left untouched.
pub fn clear_coverage(view: &mut PageView) {
    reset_results(view);
}

fn reset_results(view: &mut PageView) {
    view.results.clear();
    view.booking_form.doctor_select.clear();
    view.booking_form.hide();
    view.unavailable.clear();
}
