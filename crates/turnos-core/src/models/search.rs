//! Search form values.

use serde::{Deserialize, Serialize};

/// Value of the specialty select meaning "no specialty chosen".
pub const SPECIALTY_SENTINEL: &str = "default";

/// Coverage radio-button state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coverage {
    /// Only doctors accepting the coverage (`"Si"`)
    Required,
    /// Any doctor (`"No"`)
    #[default]
    NotRequired,
}

impl Coverage {
    /// Parse a radio-button value.
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "Si" => Some(Coverage::Required),
            "No" => Some(Coverage::NotRequired),
            _ => None,
        }
    }

    /// Radio-button value for this state.
    pub fn value(&self) -> &'static str {
        match self {
            Coverage::Required => "Si",
            Coverage::NotRequired => "No",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Coverage::Required)
    }
}

/// Selected value of the specialty select.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpecialtyChoice {
    /// The sentinel option is selected
    Unselected,
    /// A real specialty value
    Specialty(String),
}

impl SpecialtyChoice {
    /// Interpret a raw select value, mapping the sentinel to `Unselected`.
    pub fn from_value(value: &str) -> Self {
        if value == SPECIALTY_SENTINEL {
            SpecialtyChoice::Unselected
        } else {
            SpecialtyChoice::Specialty(value.to_string())
        }
    }

    pub fn as_specialty(&self) -> Option<&str> {
        match self {
            SpecialtyChoice::Unselected => None,
            SpecialtyChoice::Specialty(s) => Some(s),
        }
    }
}

/// The values submitted with the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub specialty: SpecialtyChoice,
    pub coverage: Coverage,
}

impl SearchForm {
    pub fn new(specialty: SpecialtyChoice, coverage: Coverage) -> Self {
        Self {
            specialty,
            coverage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_values() {
        assert_eq!(Coverage::from_value("Si"), Some(Coverage::Required));
        assert_eq!(Coverage::from_value("No"), Some(Coverage::NotRequired));
        assert_eq!(Coverage::from_value("si"), None);
        assert_eq!(Coverage::Required.value(), "Si");
        assert!(Coverage::Required.is_required());
        assert!(!Coverage::NotRequired.is_required());
    }

    #[test]
    fn test_sentinel_maps_to_unselected() {
        assert_eq!(
            SpecialtyChoice::from_value("default"),
            SpecialtyChoice::Unselected
        );
        assert_eq!(
            SpecialtyChoice::from_value("Cardiología").as_specialty(),
            Some("Cardiología")
        );
    }
}
