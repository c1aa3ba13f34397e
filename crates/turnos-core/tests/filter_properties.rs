//! Property tests for the specialty index, the doctor filter and search
//! validation.

use chrono::NaiveDate;
use proptest::prelude::*;
use turnos_core::catalog::{InlineCatalogSource, SpecialtyIndex};
use turnos_core::db::SessionStorage;
use turnos_core::models::{CatalogDocument, Coverage, Doctor};
use turnos_core::notify::ScriptedDialog;
use turnos_core::page::{BookingPage, PageSettings};
use turnos_core::search::filter_doctors;

const SPECIALTIES: &[&str] = &[
    "Cardiología",
    "Dermatología",
    "Neurología",
    "Pediatría",
    "Traumatología",
    "Clínica",
];

fn doctor_fields() -> impl Strategy<Value = (String, &'static str, bool, bool)> {
    (
        "[A-Z][a-z]{2,8}",
        prop::sample::select(SPECIALTIES),
        any::<bool>(),
        any::<bool>(),
    )
}

fn catalog() -> impl Strategy<Value = Vec<Doctor>> {
    prop::collection::vec(doctor_fields(), 0..30).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(i, (name, specialty, os, available))| {
                Doctor::new(i as u64 + 1, name, specialty, os, available)
            })
            .collect()
    })
}

fn coverage() -> impl Strategy<Value = Coverage> {
    prop_oneof![Just(Coverage::Required), Just(Coverage::NotRequired)]
}

proptest! {
    #[test]
    fn specialty_index_is_sorted_distinct(doctors in catalog()) {
        let index = SpecialtyIndex::from_doctors(&doctors);

        let mut expected: Vec<String> = doctors.iter().map(|d| d.specialty.clone()).collect();
        expected.sort();
        expected.dedup();

        prop_assert_eq!(index.specialties(), expected.as_slice());
    }

    #[test]
    fn filter_matches_definition(
        doctors in catalog(),
        specialty in prop::sample::select(SPECIALTIES),
        coverage in coverage(),
    ) {
        let result = filter_doctors(&doctors, specialty, coverage);

        let expected: Vec<u64> = doctors
            .iter()
            .filter(|d| d.specialty == specialty && (!coverage.is_required() || d.accepts_coverage))
            .map(|d| d.id)
            .collect();
        let matching: Vec<u64> = result.matching.iter().map(|d| d.id).collect();

        prop_assert_eq!(matching, expected);
    }

    #[test]
    fn availability_partition_is_exhaustive_and_disjoint(
        doctors in catalog(),
        specialty in prop::sample::select(SPECIALTIES),
        coverage in coverage(),
    ) {
        let result = filter_doctors(&doctors, specialty, coverage);

        prop_assert_eq!(
            result.available.len() + result.not_available.len(),
            result.matching.len()
        );
        for doctor in &result.matching {
            let in_available = result.available.iter().any(|d| d.id == doctor.id);
            let in_not_available = result.not_available.iter().any(|d| d.id == doctor.id);
            prop_assert!(in_available != in_not_available);
            prop_assert_eq!(in_available, doctor.available);
        }
    }

    #[test]
    fn sentinel_leaves_no_search_outcome(
        doctors in catalog(),
        specialty in prop::sample::select(SPECIALTIES),
        coverage in coverage(),
    ) {
        let document = serde_json::to_string(&CatalogDocument { doctors }).unwrap();
        let mut page = BookingPage::load(
            &InlineCatalogSource::new(document),
            SessionStorage::open_in_memory().unwrap(),
            PageSettings::new("paciente", NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()),
        )
        .unwrap();
        let mut dialog = ScriptedDialog::new();
        let fresh = page.view().clone();

        page.set_coverage(coverage);
        page.select_specialty(specialty);
        page.submit_search(&mut dialog);
        let alerts_before = dialog.alerts().len();

        page.select_specialty("default");
        let state = page.submit_search(&mut dialog);

        prop_assert!(state.is_error());
        prop_assert!(page.view().results.is_empty());
        prop_assert_eq!(&page.view().booking_form.doctor_select, &fresh.booking_form.doctor_select);
        prop_assert!(!page.view().booking_form.is_visible());
        prop_assert!(page.view().unavailable.is_empty());
        prop_assert_eq!(dialog.alerts().len(), alerts_before + 1);
    }
}
