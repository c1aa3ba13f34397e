//! Doctor catalog models.

use serde::{Deserialize, Serialize};

/// Identifier of a doctor, unique and stable for the session.
pub type DoctorId = u64;

/// A single doctor record as published in the catalog document.
///
/// Field names on the wire are fixed by the existing catalog document and must
/// not change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Doctor {
    /// Unique identifier
    pub id: DoctorId,
    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,
    /// Medical specialty (e.g., "Cardiología")
    #[serde(rename = "especialidad")]
    pub specialty: String,
    /// Whether the doctor accepts the insurance coverage
    #[serde(rename = "os")]
    pub accepts_coverage: bool,
    /// Static availability flag
    pub available: bool,
}

impl Doctor {
    /// Create a new doctor record.
    pub fn new(
        id: DoctorId,
        name: impl Into<String>,
        specialty: impl Into<String>,
        accepts_coverage: bool,
        available: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
            accepts_coverage,
            available,
        }
    }

    /// Check whether this doctor practices the given specialty.
    ///
    /// Comparison is exact, the same way the specialty select values are
    /// produced from the catalog.
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialty == specialty
    }
}

/// The catalog document: `{ "doctors": [ ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogDocument {
    pub doctors: Vec<Doctor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_field_names() {
        let json = r#"{
            "doctors": [
                {"id": 1, "nombre": "Ana", "especialidad": "Cardiología", "os": true, "available": true}
            ]
        }"#;

        let doc: CatalogDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.doctors.len(), 1);

        let ana = &doc.doctors[0];
        assert_eq!(ana.id, 1);
        assert_eq!(ana.name, "Ana");
        assert_eq!(ana.specialty, "Cardiología");
        assert!(ana.accepts_coverage);
        assert!(ana.available);
    }

    #[test]
    fn test_serialize_keeps_catalog_field_names() {
        let doctor = Doctor::new(2, "Luis", "Cardiología", false, false);
        let value = serde_json::to_value(&doctor).unwrap();

        assert_eq!(value["nombre"], "Luis");
        assert_eq!(value["especialidad"], "Cardiología");
        assert_eq!(value["os"], false);
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_has_specialty_is_exact() {
        let doctor = Doctor::new(1, "Ana", "Cardiología", true, true);
        assert!(doctor.has_specialty("Cardiología"));
        assert!(!doctor.has_specialty("cardiología"));
        assert!(!doctor.has_specialty("Pediatría"));
    }
}
