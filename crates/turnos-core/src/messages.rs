//! User-facing texts of the booking page.

use chrono::NaiveDate;

use crate::models::DATE_FORMAT;
use crate::notify::{Alert, Confirmation, Icon};

/// Default way the page addresses the user.
pub const DEFAULT_PATIENT_LABEL: &str = "paciente";

/// Label of the sentinel option of the specialty select.
pub const SPECIALTY_PLACEHOLDER: &str = "Seleccione una especialidad";

pub fn no_doctors(user: &str) -> String {
    format!(
        "¡Disculpas estimado {}! Actualmente no hay médicos disponibles. Pruebe con otra cobertura.",
        user
    )
}

pub fn available_header(user: &str, specialty: &str) -> String {
    format!(
        "Estimado {}, los médicos de {} disponibles son: ",
        user, specialty
    )
}

pub fn unavailable_header(user: &str, specialty: &str) -> String {
    format!(
        "Estimado {}, lamentablemente los siguientes médicos de {} tienen la agenda cerrada, intente en otro momento.",
        user, specialty
    )
}

pub fn missing_specialty() -> Alert {
    Alert::new("Error", "Por favor, seleccione una especialidad.", Icon::Error)
        .with_confirm_label("OK")
}

pub fn missing_date() -> Alert {
    Alert::new("Error", "Por favor, selecciona una fecha.", Icon::Error)
}

pub fn date_before_minimum(min: NaiveDate) -> Alert {
    Alert::new(
        "Error",
        format!(
            "La fecha debe ser igual o posterior a {}.",
            min.format(DATE_FORMAT)
        ),
        Icon::Error,
    )
}

pub fn unknown_doctor() -> Alert {
    Alert::new("Error", "No se encontró el médico seleccionado.", Icon::Error)
}

pub fn booked() -> Alert {
    Alert::new("¡Reservado!", "Tu cita ha sido reservada.", Icon::Success)
}

pub fn confirm_booking(date: NaiveDate) -> Confirmation {
    Confirmation {
        title: "Confirmar Reserva".to_string(),
        text: format!(
            "¿Estás seguro de que quieres reservar una cita el {}?",
            date.format(DATE_FORMAT)
        ),
        icon: Icon::Question,
        confirm_label: "Sí, reservar".to_string(),
        cancel_label: "Cancelar".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_name_specialty_and_user() {
        assert_eq!(
            available_header("paciente", "Cardiología"),
            "Estimado paciente, los médicos de Cardiología disponibles son: "
        );
        assert!(unavailable_header("paciente", "Cardiología").contains("agenda cerrada"));
        assert!(no_doctors("paciente").starts_with("¡Disculpas estimado paciente!"));
    }

    #[test]
    fn test_confirmation_text_contains_iso_date() {
        let date = NaiveDate::from_ymd_opt(2030, 1, 5).unwrap();
        let confirmation = confirm_booking(date);
        assert_eq!(
            confirmation.text,
            "¿Estás seguro de que quieres reservar una cita el 2030-01-05?"
        );
        assert_eq!(confirmation.icon, Icon::Question);
    }
}
