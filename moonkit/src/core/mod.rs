pub mod domain;

pub use domain::{CalendarDate, MoonSnapshot, PhaseCategory};
