//! Doctor search: filter the catalog and present the outcome.

mod filter;
mod presenter;

pub use filter::*;
pub use presenter::*;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{Doctor, SearchForm, SpecialtyChoice};

/// Outcome of one search submission. Exactly one state is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    /// The sentinel specialty was submitted
    MissingSpecialty,
    /// No doctor matches specialty and coverage
    NoMatches { specialty: String },
    /// At least one matching doctor is available
    Available {
        specialty: String,
        doctors: Vec<Doctor>,
    },
    /// Doctors match but none is available
    AllUnavailable {
        specialty: String,
        doctors: Vec<Doctor>,
    },
}

impl SearchState {
    pub fn is_error(&self) -> bool {
        matches!(self, SearchState::MissingSpecialty)
    }
}

/// Compute the search state for a submitted form.
pub fn run_search(catalog: &Catalog, form: &SearchForm) -> SearchState {
    let specialty = match &form.specialty {
        SpecialtyChoice::Unselected => return SearchState::MissingSpecialty,
        SpecialtyChoice::Specialty(s) => s.clone(),
    };

    let result = filter_doctors(catalog.doctors(), &specialty, form.coverage);
    debug!(
        specialty = %specialty,
        coverage = form.coverage.value(),
        matching = result.matching.len(),
        available = result.available.len(),
        "Search filtered"
    );

    if result.is_empty() {
        SearchState::NoMatches { specialty }
    } else if result.has_available() {
        SearchState::Available {
            specialty,
            doctors: result.available.into_iter().cloned().collect(),
        }
    } else {
        SearchState::AllUnavailable {
            specialty,
            doctors: result.not_available.into_iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coverage;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Doctor::new(1, "Ana", "Cardiología", true, true),
            Doctor::new(2, "Luis", "Cardiología", false, false),
            Doctor::new(3, "Eva", "Neurología", false, false),
        ])
    }

    fn form(specialty: &str, coverage: Coverage) -> SearchForm {
        SearchForm::new(SpecialtyChoice::from_value(specialty), coverage)
    }

    #[test]
    fn test_sentinel_short_circuits() {
        for coverage in [Coverage::Required, Coverage::NotRequired] {
            let state = run_search(&catalog(), &form("default", coverage));
            assert!(state.is_error());
        }
    }

    #[test]
    fn test_all_unavailable() {
        let state = run_search(&catalog(), &form("Neurología", Coverage::NotRequired));
        match state {
            SearchState::AllUnavailable { doctors, .. } => {
                assert_eq!(doctors.len(), 1);
                assert_eq!(doctors[0].name, "Eva");
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_coverage_can_empty_the_result() {
        let state = run_search(&catalog(), &form("Neurología", Coverage::Required));
        assert_eq!(
            state,
            SearchState::NoMatches {
                specialty: "Neurología".into()
            }
        );
    }
}
