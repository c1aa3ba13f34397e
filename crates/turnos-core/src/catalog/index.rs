//! Distinct, sorted specialties of the catalog.

use std::collections::BTreeSet;

use crate::models::Doctor;

/// Sorted set of distinct specialty values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialtyIndex {
    specialties: Vec<String>,
}

impl SpecialtyIndex {
    /// Collect the distinct specialties in lexicographic order.
    pub fn from_doctors(doctors: &[Doctor]) -> Self {
        let specialties: BTreeSet<&str> = doctors.iter().map(|d| d.specialty.as_str()).collect();
        Self {
            specialties: specialties.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    pub fn len(&self) -> usize {
        self.specialties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specialties.is_empty()
    }
}
