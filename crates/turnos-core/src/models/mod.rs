//! Domain models for the booking page.

mod appointment;
mod doctor;
mod search;

pub use appointment::*;
pub use doctor::*;
pub use search::*;
