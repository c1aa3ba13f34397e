//! Interactive menu driving the booking page.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use tracing::debug;
use turnos_core::models::{Coverage, DATE_FORMAT};
use turnos_core::page::BookingPage;

use crate::console::Console;
use crate::render::render_page;

/// Menu loop over a loaded page.
pub struct Shell<R, W> {
    page: BookingPage,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(page: BookingPage, console: Console<R, W>) -> Self {
        Self { page, console }
    }

    pub fn page(&self) -> &BookingPage {
        &self.page
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.console.println("")?;
        self.console.println("--- Turnos ---")?;
        self.console.println("1. Elegir especialidad")?;
        self.console.println("2. Elegir cobertura")?;
        self.console.println("3. Buscar")?;
        self.console.println("4. Elegir médico")?;
        self.console.println("5. Elegir fecha")?;
        self.console.println("6. Reservar turno")?;
        self.console.println("7. Ver página")?;
        self.console.println("8. Salir")
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        self.show_page()?;

        loop {
            self.print_menu()?;
            let choice = match self.console.prompt("Opción")? {
                Some(choice) => choice,
                None => break,
            };

            match choice.as_str() {
                "1" => self.choose_specialty()?,
                "2" => self.choose_coverage()?,
                "3" => {
                    let state = self.page.submit_search(&mut self.console);
                    debug!(?state, "Search rendered");
                    self.show_page()?;
                }
                "4" => self.choose_doctor()?,
                "5" => self.choose_date()?,
                "6" => {
                    if let Err(e) = self.page.submit_booking(&mut self.console) {
                        debug!(error = %e, "Booking not completed");
                    }
                    self.show_page()?;
                }
                "7" => self.show_page()?,
                "8" | "q" => break,
                _ => self.console.println("Opción inválida")?,
            }
        }

        Ok(())
    }

    fn show_page(&mut self) -> io::Result<()> {
        let text = render_page(self.page.view());
        write!(self.console.output(), "{}", text)
    }

    fn choose_specialty(&mut self) -> io::Result<()> {
        if let Some(value) = self.console.prompt("Especialidad")? {
            if !self.page.select_specialty(&value) {
                self.console.println("Especialidad desconocida")?;
            }
        }
        Ok(())
    }

    fn choose_coverage(&mut self) -> io::Result<()> {
        if let Some(value) = self.console.prompt("Cobertura (Si/No)")? {
            match Coverage::from_value(&value) {
                Some(coverage) => self.page.set_coverage(coverage),
                None => self.console.println("Valor inválido, use Si o No")?,
            }
        }
        Ok(())
    }

    fn choose_doctor(&mut self) -> io::Result<()> {
        if let Some(value) = self.console.prompt("Médico (id)")? {
            if !self.page.choose_doctor(&value) {
                self.console.println("Médico no listado")?;
            }
        }
        Ok(())
    }

    fn choose_date(&mut self) -> io::Result<()> {
        let value = match self.console.prompt("Fecha (AAAA-MM-DD, vacío para borrar)")? {
            Some(value) => value,
            None => return Ok(()),
        };

        if value.is_empty() {
            self.page.set_date(None);
            return Ok(());
        }

        match NaiveDate::parse_from_str(&value, DATE_FORMAT) {
            Ok(date) => self.page.set_date(Some(date)),
            Err(_) => self.console.println("Fecha inválida")?,
        }
        Ok(())
    }
}
