//! Plain-text rendering of the page regions.

use std::fmt::Write;

use turnos_core::view::{element, PageView, Region, SelectControl};

/// Render every visible region, labelled with its element ID.
pub fn render_page(view: &PageView) -> String {
    let mut out = String::new();

    section(&mut out, element::SPECIALTY_SELECT);
    select(&mut out, &view.specialty_select);
    let _ = writeln!(out, "  {}: {}", element::COVERAGE_RADIO, view.coverage.value());

    if !view.results.is_empty() {
        section(&mut out, element::RESULT_CONTAINER);
        region(&mut out, &view.results, "");
    }

    if view.booking_form.is_visible() {
        section(&mut out, element::BOOKING_FORM);
        let _ = writeln!(out, "  {}:", element::DOCTOR_SELECT);
        select(&mut out, &view.booking_form.doctor_select);
        let date = &view.booking_form.date_input;
        let _ = writeln!(
            out,
            "  {}: {} (min {})",
            element::DATE_INPUT,
            date.value().map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
            date.min().map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
        );
    }

    if view.unavailable.is_visible() && !view.unavailable.is_empty() {
        section(&mut out, element::UNAVAILABLE_LIST);
        region(&mut out, &view.unavailable, "- ");
    }

    if view.history.is_visible() {
        section(&mut out, element::HISTORY);
        region(&mut out, &view.history, "- ");
    }

    out
}

fn section(out: &mut String, id: &str) {
    let _ = writeln!(out, "\n#{}", id);
}

fn select(out: &mut String, control: &SelectControl) {
    let selected = control.selected_value();
    for option in control.options() {
        let marker = if Some(option.value.as_str()) == selected {
            '*'
        } else {
            ' '
        };
        let _ = writeln!(out, "  {} [{}] {}", marker, option.value, option.label);
    }
}

fn region(out: &mut String, region: &Region, bullet: &str) {
    for item in region.items() {
        let _ = writeln!(out, "  {}{}", bullet, item);
    }
}
