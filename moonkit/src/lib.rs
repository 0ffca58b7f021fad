//! MoonKit - Moon age, phase, distance and ecliptic position for a calendar date.
//!
//! The calculator is a pure pipeline of closed-form approximations:
//! calendar date → Julian Day → synodic phase fraction → age and phase,
//! plus distance and ecliptic coordinates from the anomalistic, draconic and
//! sidereal months.
//!
//! ```
//! use moonkit_rust::core::domain::{CalendarDate, PhaseCategory};
//! use moonkit_rust::services::compute_moon_snapshot;
//!
//! let snapshot = compute_moon_snapshot(&CalendarDate::new(2020, 2, 24).with_time(18.0, 0.0));
//! assert_eq!(snapshot.phase, PhaseCategory::NewMoon);
//! assert!(snapshot.is_valid_calendar_date);
//! ```

pub mod algorithms;
pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod time;

#[cfg(feature = "python")]
pub mod python;

pub use crate::core::domain::{CalendarDate, MoonSnapshot, PhaseCategory};
pub use crate::error::{MoonError, MoonResult};
pub use crate::services::{compute_moon_snapshot, compute_moon_snapshot_strict};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// MoonKit Python module
#[cfg(feature = "python")]
#[pymodule]
fn moonkit_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_functions(m)
}
