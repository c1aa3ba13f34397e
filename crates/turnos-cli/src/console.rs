//! Line-based terminal I/O and the terminal dialog service.

use std::io::{self, BufRead, Write};

use tracing::warn;
use turnos_core::notify::{Alert, Confirmation, DialogOutcome, DialogService};

/// Answers accepted as "confirm" besides the button label itself.
const YES_ANSWERS: &[&str] = &["s", "si", "sí", "y", "yes"];

/// Reads answers from `input` and writes prompts to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a prompt and read one trimmed line. `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn show_alert(&mut self, alert: &Alert) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "[{}] {}", alert.icon.name(), alert.title)?;
        writeln!(self.output, "{}", alert.text)?;
        let button = alert.confirm_label.as_deref().unwrap_or("OK");
        self.prompt(&format!("[{}]", button))?;
        Ok(())
    }

    fn ask(&mut self, confirmation: &Confirmation) -> io::Result<DialogOutcome> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "[{}] {}",
            confirmation.icon.name(),
            confirmation.title
        )?;
        writeln!(self.output, "{}", confirmation.text)?;
        let label = format!(
            "{} (s) / {} (n)",
            confirmation.confirm_label, confirmation.cancel_label
        );

        let outcome = match self.prompt(&label)? {
            Some(answer) if is_yes(&answer, &confirmation.confirm_label) => {
                DialogOutcome::Confirmed
            }
            _ => DialogOutcome::Cancelled,
        };
        Ok(outcome)
    }
}

fn is_yes(answer: &str, confirm_label: &str) -> bool {
    let answer = answer.to_lowercase();
    YES_ANSWERS.contains(&answer.as_str()) || answer == confirm_label.to_lowercase()
}

impl<R: BufRead, W: Write> DialogService for Console<R, W> {
    fn alert(&mut self, alert: &Alert) {
        if let Err(e) = self.show_alert(alert) {
            warn!(error = %e, title = %alert.title, "Failed to show alert");
        }
    }

    fn confirm(&mut self, confirmation: &Confirmation) -> DialogOutcome {
        self.ask(confirmation).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read confirmation, cancelling");
            DialogOutcome::Cancelled
        })
    }
}
