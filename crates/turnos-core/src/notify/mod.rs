//! Modal notifications: alerts and confirmations.
//!
//! The booking confirmation is the only point where a workflow waits for the
//! user. It is an explicit call on [`DialogService`] that returns a
//! [`DialogOutcome`].

mod scripted;

pub use scripted::*;

/// Icon / severity category of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Question,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Success => "success",
            Icon::Error => "error",
            Icon::Warning => "warning",
            Icon::Info => "info",
            Icon::Question => "question",
        }
    }
}

/// Informational or error modal with a single acknowledgement button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub text: String,
    pub icon: Icon,
    /// Acknowledgement button label; `None` uses the dialog default.
    pub confirm_label: Option<String>,
}

impl Alert {
    pub fn new(title: impl Into<String>, text: impl Into<String>, icon: Icon) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            icon,
            confirm_label: None,
        }
    }

    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }
}

/// Question modal with confirm and cancel buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub text: String,
    pub icon: Icon,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Which button closed a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
}

impl DialogOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, DialogOutcome::Confirmed)
    }
}

/// Any modal that was shown, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Alert(Alert),
    Confirmation(Confirmation),
}

impl Notification {
    pub fn title(&self) -> &str {
        match self {
            Notification::Alert(a) => &a.title,
            Notification::Confirmation(c) => &c.title,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Notification::Alert(a) => &a.text,
            Notification::Confirmation(c) => &c.text,
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Notification::Alert(a) => a.icon,
            Notification::Confirmation(c) => c.icon,
        }
    }
}

/// Modal dialog collaborator.
///
/// At most one modal is open at a time; callers never stack them.
pub trait DialogService {
    /// Show an alert and wait for the acknowledgement.
    fn alert(&mut self, alert: &Alert);

    /// Ask a question and wait for the user's answer.
    fn confirm(&mut self, confirmation: &Confirmation) -> DialogOutcome;
}
