//! The booking page: session context plus event handlers.

use chrono::NaiveDate;
use tracing::info;

use crate::booking::{BookingOutcome, BookingResult, BookingWorkflow};
use crate::catalog::{load_catalog, Catalog, CatalogResult, CatalogSource};
use crate::db::SessionStorage;
use crate::messages;
use crate::models::{AppointmentHistory, Coverage, SearchForm};
use crate::notify::DialogService;
use crate::search::{self, SearchPresenter, SearchState};
use crate::view::PageView;

/// Everything fixed at page initialization.
///
/// Built once after the catalog loads and handed to every handler; nothing in
/// it changes afterwards.
#[derive(Debug)]
pub struct SessionContext {
    catalog: Catalog,
    storage: SessionStorage,
    patient_label: String,
}

impl SessionContext {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn storage(&self) -> &SessionStorage {
        &self.storage
    }
}

/// Options for [`BookingPage::load`].
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub patient_label: String,
    pub today: NaiveDate,
}

impl PageSettings {
    pub fn new(patient_label: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            patient_label: patient_label.into(),
            today,
        }
    }
}

/// A loaded booking page.
///
/// Only constructible after the catalog load succeeds, so search and booking
/// handlers never run against a missing catalog.
#[derive(Debug)]
pub struct BookingPage {
    context: SessionContext,
    view: PageView,
    history: AppointmentHistory,
}

impl BookingPage {
    /// Load the catalog once, cache it and initialize the page regions.
    pub fn load(
        source: &dyn CatalogSource,
        storage: SessionStorage,
        settings: PageSettings,
    ) -> CatalogResult<Self> {
        let catalog = load_catalog(source, &storage)?;
        let specialties = catalog.specialty_index();

        let mut view = PageView::new(messages::SPECIALTY_PLACEHOLDER);
        search::populate_specialty_select(&mut view, &specialties);
        BookingWorkflow::initialize_form(&mut view, settings.today);

        info!(
            specialties = specialties.len(),
            min_date = %settings.today,
            "Booking page ready"
        );

        Ok(Self {
            context: SessionContext {
                catalog,
                storage,
                patient_label: settings.patient_label,
            },
            view,
            history: AppointmentHistory::new(),
        })
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn history(&self) -> &AppointmentHistory {
        &self.history
    }

    /// Pick a value in the specialty select. Returns false for unknown values.
    pub fn select_specialty(&mut self, value: &str) -> bool {
        self.view.specialty_select.select(value)
    }

    /// Change the coverage radio. Any rendered result is cleared.
    pub fn set_coverage(&mut self, coverage: Coverage) {
        self.view.coverage = coverage;
        search::clear_coverage(&mut self.view);
    }

    /// Submit the search form with the current select and radio values.
    pub fn submit_search(&mut self, dialog: &mut dyn DialogService) -> SearchState {
        let form = SearchForm::new(self.view.specialty_choice(), self.view.coverage);
        let state = search::run_search(&self.context.catalog, &form);
        SearchPresenter::new(&self.context.patient_label).render(&mut self.view, dialog, &state);
        state
    }

    /// Pick a doctor in the booking sub-form. Returns false for unknown values.
    pub fn choose_doctor(&mut self, value: &str) -> bool {
        self.view.booking_form.doctor_select.select(value)
    }

    /// Set or clear the date input.
    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.view.booking_form.date_input.set_value(date);
    }

    /// Submit the booking sub-form.
    pub fn submit_booking(
        &mut self,
        dialog: &mut dyn DialogService,
    ) -> BookingResult<BookingOutcome> {
        BookingWorkflow::new(&self.context.storage).submit(
            &mut self.view,
            &mut self.history,
            dialog,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InlineCatalogSource;
    use crate::notify::{DialogOutcome, ScriptedDialog};

    const DOCUMENT: &str = r#"{"doctors": [
        {"id": 1, "nombre": "Ana", "especialidad": "Cardiología", "os": true, "available": true},
        {"id": 2, "nombre": "Luis", "especialidad": "Cardiología", "os": false, "available": false}
    ]}"#;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()
    }

    fn page() -> BookingPage {
        BookingPage::load(
            &InlineCatalogSource::new(DOCUMENT),
            SessionStorage::open_in_memory().unwrap(),
            PageSettings::new("paciente", today()),
        )
        .unwrap()
    }

    #[test]
    fn test_load_initializes_regions() {
        let page = page();

        assert_eq!(page.view().specialty_select.options().len(), 2);
        assert_eq!(page.view().booking_form.date_input.min(), Some(today()));
        assert_eq!(page.context().catalog().len(), 2);
        assert!(page.context().storage().get_item("doctors").unwrap().is_some());
    }

    #[test]
    fn test_load_failure_returns_error() {
        let result = BookingPage::load(
            &InlineCatalogSource::new("not json"),
            SessionStorage::open_in_memory().unwrap(),
            PageSettings::new("paciente", today()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_search_then_book() {
        let mut page = page();
        let mut dialog = ScriptedDialog::with_answers([DialogOutcome::Confirmed]);

        assert!(page.select_specialty("Cardiología"));
        page.set_coverage(Coverage::Required);
        let state = page.submit_search(&mut dialog);
        assert!(matches!(state, SearchState::Available { .. }));

        assert!(page.choose_doctor("1"));
        page.set_date(Some(today()));
        page.submit_booking(&mut dialog).unwrap();

        assert_eq!(page.history().len(), 1);
        assert_eq!(page.view().history.items(), &["Dr. Ana - 2030-06-01"]);
    }

    #[test]
    fn test_coverage_change_clears_results() {
        let mut page = page();
        let mut dialog = ScriptedDialog::new();

        page.select_specialty("Cardiología");
        page.submit_search(&mut dialog);
        assert!(page.view().booking_form.is_visible());

        page.set_coverage(Coverage::Required);
        assert!(page.view().results.is_empty());
        assert!(!page.view().booking_form.is_visible());
    }
}
