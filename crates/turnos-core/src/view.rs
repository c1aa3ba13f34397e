//! Display regions of the booking page.
//!
//! Each region corresponds to a fixed element of the page markup, see
//! [`element`]. Handlers only ever touch regions through this model.

use chrono::NaiveDate;

use crate::models::{Coverage, DoctorId, SpecialtyChoice, SPECIALTY_SENTINEL};

/// Fixed element identifiers of the page.
pub mod element {
    pub const SPECIALTY_SELECT: &str = "especialidad";
    pub const COVERAGE_RADIO: &str = "coverage";
    pub const RESULT_CONTAINER: &str = "resultContainer";
    pub const DOCTOR_SELECT: &str = "doctorSelect";
    pub const BOOKING_FORM: &str = "selectAppointment";
    pub const DATE_INPUT: &str = "time";
    pub const UNAVAILABLE_LIST: &str = "notAvailableMessage";
    pub const HISTORY: &str = "appointment-history";
}

/// One `<option>` of a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A select control. The first option is selected unless another one was
/// picked, like a browser select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectControl {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl SelectControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, option: SelectOption) {
        self.options.push(option);
    }

    /// Remove every option.
    pub fn clear(&mut self) {
        self.options.clear();
        self.selected = None;
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Select the option with this value. Returns false if none matches.
    pub fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        match self.selected {
            Some(index) => self.options.get(index),
            None => self.options.first(),
        }
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected().map(|o| o.value.as_str())
    }
}

/// A block of text items (paragraphs or list items) with a visibility flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    items: Vec<String>,
    visible: bool,
}

impl Region {
    pub fn shown() -> Self {
        Self {
            items: Vec::new(),
            visible: true,
        }
    }

    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// The date input of the booking sub-form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateInput {
    min: Option<NaiveDate>,
    value: Option<NaiveDate>,
}

impl DateInput {
    pub fn min(&self) -> Option<NaiveDate> {
        self.min
    }

    pub fn set_min(&mut self, min: NaiveDate) {
        self.min = Some(min);
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        self.value = value;
    }
}

/// Booking sub-form: doctor choice plus date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFormView {
    pub doctor_select: SelectControl,
    pub date_input: DateInput,
    visible: bool,
}

impl BookingFormView {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Chosen doctor ID, if the selected option holds one.
    pub fn selected_doctor(&self) -> Option<DoctorId> {
        self.doctor_select
            .selected_value()
            .and_then(|v| v.parse().ok())
    }
}

/// Complete state of the page regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub specialty_select: SelectControl,
    pub coverage: Coverage,
    pub results: Region,
    pub booking_form: BookingFormView,
    pub unavailable: Region,
    pub history: Region,
}

impl PageView {
    /// Fresh page: only the sentinel specialty option, booking form and lists hidden.
    pub fn new(placeholder: &str) -> Self {
        let mut specialty_select = SelectControl::new();
        specialty_select.append(SelectOption::new(SPECIALTY_SENTINEL, placeholder));

        Self {
            specialty_select,
            coverage: Coverage::default(),
            results: Region::shown(),
            booking_form: BookingFormView::default(),
            unavailable: Region::hidden(),
            history: Region::hidden(),
        }
    }

    /// Current value of the specialty select.
    pub fn specialty_choice(&self) -> SpecialtyChoice {
        SpecialtyChoice::from_value(
            self.specialty_select
                .selected_value()
                .unwrap_or(SPECIALTY_SENTINEL),
        )
    }
}
