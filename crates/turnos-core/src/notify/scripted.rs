//! Dialog service with pre-recorded answers.

use std::collections::VecDeque;

use tracing::warn;

use super::{Alert, Confirmation, DialogOutcome, DialogService, Notification};

/// Answers confirmations from a script and records every modal shown.
///
/// Used by tests and by non-interactive front ends.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialog {
    answers: VecDeque<DialogOutcome>,
    shown: Vec<Notification>,
}

impl ScriptedDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answers for upcoming confirmations.
    pub fn with_answers<I: IntoIterator<Item = DialogOutcome>>(answers: I) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            shown: Vec::new(),
        }
    }

    /// Every modal shown so far.
    pub fn shown(&self) -> &[Notification] {
        &self.shown
    }

    pub fn alerts(&self) -> Vec<&Alert> {
        self.shown
            .iter()
            .filter_map(|n| match n {
                Notification::Alert(a) => Some(a),
                Notification::Confirmation(_) => None,
            })
            .collect()
    }

    pub fn confirmations(&self) -> Vec<&Confirmation> {
        self.shown
            .iter()
            .filter_map(|n| match n {
                Notification::Confirmation(c) => Some(c),
                Notification::Alert(_) => None,
            })
            .collect()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.shown.last()
    }
}

impl DialogService for ScriptedDialog {
    fn alert(&mut self, alert: &Alert) {
        self.shown.push(Notification::Alert(alert.clone()));
    }

    fn confirm(&mut self, confirmation: &Confirmation) -> DialogOutcome {
        self.shown
            .push(Notification::Confirmation(confirmation.clone()));
        self.answers.pop_front().unwrap_or_else(|| {
            warn!(title = %confirmation.title, "No scripted answer left, cancelling");
            DialogOutcome::Cancelled
        })
    }
}
