//! Services built on top of the moon formulas.
//!
//! - [`snapshot`]: single-date snapshot assembly (the main entry point)
//! - [`validation`]: date diagnostics with errors and warnings
//! - [`lunar_calendar`]: snapshots over a date range with transitions and summary

pub mod lunar_calendar;
pub mod snapshot;
pub mod validation;

pub use lunar_calendar::{LunarCalendar, LunarCalendarSummary, PhaseCount, PhaseTransition};
pub use snapshot::{compute_moon_snapshot, compute_moon_snapshot_strict};
pub use validation::{DateValidator, ValidationResult};
