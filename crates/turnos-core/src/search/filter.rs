//! Doctor filter: specialty plus coverage, partitioned by availability.

use crate::models::{Coverage, Doctor};

/// Doctors matching a search, in catalog order.
///
/// `available` and `not_available` partition `matching`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult<'a> {
    pub matching: Vec<&'a Doctor>,
    pub available: Vec<&'a Doctor>,
    pub not_available: Vec<&'a Doctor>,
}

impl<'a> FilterResult<'a> {
    /// No doctor matched the specialty and coverage.
    pub fn is_empty(&self) -> bool {
        self.matching.is_empty()
    }

    pub fn has_available(&self) -> bool {
        !self.available.is_empty()
    }
}

/// Check whether a doctor satisfies the coverage requirement.
pub fn meets_coverage(doctor: &Doctor, coverage: Coverage) -> bool {
    !coverage.is_required() || doctor.accepts_coverage
}

/// Filter doctors by specialty and coverage.
///
/// The specialty must be a real value; the sentinel is rejected by callers
/// before filtering.
pub fn filter_doctors<'a>(
    doctors: &'a [Doctor],
    specialty: &str,
    coverage: Coverage,
) -> FilterResult<'a> {
    let matching: Vec<&Doctor> = doctors
        .iter()
        .filter(|d| d.has_specialty(specialty) && meets_coverage(d, coverage))
        .collect();

    let (available, not_available): (Vec<&Doctor>, Vec<&Doctor>) =
        matching.iter().copied().partition(|d| d.available);

    FilterResult {
        matching,
        available,
        not_available,
    }
}
