//! Python bindings for the moon calculator.
//!
//! Exposed through PyO3 when the `python` feature is enabled. All functions
//! are available in the `moonkit_rust` Python module after installation.

pub mod snapshot_bindings;

pub use snapshot_bindings::*;

use pyo3::prelude::*;

/// Register all functions and classes with the Python module.
pub fn register_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMoonSnapshot>()?;
    m.add_class::<PyValidationResult>()?;

    m.add_function(wrap_pyfunction!(py_compute_moon_snapshot, m)?)?;
    m.add_function(wrap_pyfunction!(moon_snapshot_from_datetime, m)?)?;
    m.add_function(wrap_pyfunction!(py_is_leap_year, m)?)?;
    m.add_function(wrap_pyfunction!(py_is_valid_day_of_month, m)?)?;
    m.add_function(wrap_pyfunction!(validate_date, m)?)?;
    m.add_function(wrap_pyfunction!(lunar_calendar, m)?)?;

    Ok(())
}
