use pyo3::prelude::*;

use crate::core::domain::{CalendarDate, MoonSnapshot};
use crate::error::MoonError;
use crate::services::{self, DateValidator, LunarCalendar, ValidationResult};
use crate::time;

fn to_py_err(err: MoonError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Python wrapper for MoonSnapshot
#[pyclass(name = "MoonSnapshot", module = "moonkit_rust", frozen)]
#[derive(Clone)]
pub struct PyMoonSnapshot {
    inner: MoonSnapshot,
}

#[pymethods]
impl PyMoonSnapshot {
    #[getter]
    fn year(&self) -> i32 {
        self.inner.date.year
    }

    #[getter]
    fn month(&self) -> i32 {
        self.inner.date.month
    }

    #[getter]
    fn day(&self) -> i32 {
        self.inner.date.day
    }

    #[getter]
    fn julian_day(&self) -> f64 {
        self.inner.julian_day.value()
    }

    #[getter]
    fn phase_fraction(&self) -> f64 {
        self.inner.phase_fraction
    }

    #[getter]
    fn age(&self) -> f64 {
        self.inner.age_days()
    }

    /// Human readable phase name, e.g. "Full Moon".
    #[getter]
    fn phase(&self) -> &'static str {
        self.inner.phase.name()
    }

    #[getter]
    fn distance(&self) -> f64 {
        self.inner.distance_earth_radii()
    }

    #[getter]
    fn latitude(&self) -> f64 {
        self.inner.latitude_degrees()
    }

    #[getter]
    fn longitude(&self) -> f64 {
        self.inner.longitude_degrees()
    }

    #[getter]
    fn is_leap_year(&self) -> bool {
        self.inner.is_leap_year
    }

    #[getter]
    fn is_valid_calendar_date(&self) -> bool {
        self.inner.is_valid_calendar_date
    }

    /// Serialize the snapshot as a JSON object.
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner).map_err(|e| to_py_err(e.into()))
    }

    fn __repr__(&self) -> String {
        format!(
            "MoonSnapshot(date={}, phase='{}', age={:.2}, distance={:.2})",
            self.inner.date,
            self.inner.phase,
            self.inner.age_days(),
            self.inner.distance_earth_radii()
        )
    }
}

impl From<MoonSnapshot> for PyMoonSnapshot {
    fn from(inner: MoonSnapshot) -> Self {
        PyMoonSnapshot { inner }
    }
}

/// Python wrapper for ValidationResult
#[pyclass(name = "ValidationResult", module = "moonkit_rust")]
#[derive(Clone)]
pub struct PyValidationResult {
    #[pyo3(get)]
    pub is_valid: bool,
    #[pyo3(get)]
    pub errors: Vec<String>,
    #[pyo3(get)]
    pub warnings: Vec<String>,
}

#[pymethods]
impl PyValidationResult {
    fn __repr__(&self) -> String {
        format!(
            "ValidationResult(valid={}, errors={}, warnings={})",
            self.is_valid,
            self.errors.len(),
            self.warnings.len()
        )
    }
}

impl From<ValidationResult> for PyValidationResult {
    fn from(result: ValidationResult) -> Self {
        PyValidationResult {
            is_valid: result.is_valid,
            errors: result.errors,
            warnings: result.warnings,
        }
    }
}

fn snapshot_for(date: CalendarDate) -> PyMoonSnapshot {
    let snapshot = services::compute_moon_snapshot(&date);
    if !snapshot.is_valid_calendar_date {
        log::warn!("Computing moon snapshot for invalid date {}", date);
    }
    snapshot.into()
}

/// Compute the moon state for a calendar date
///
/// Args:
///     year, month, day: Calendar date (month and day are 1-based)
///     hour, minute: Time of day (default 0)
///
/// Returns:
///     MoonSnapshot
#[pyfunction]
#[pyo3(name = "compute_moon_snapshot", signature = (year, month, day, hour = 0.0, minute = 0.0))]
pub fn py_compute_moon_snapshot(
    year: i32,
    month: i32,
    day: i32,
    hour: f64,
    minute: f64,
) -> PyMoonSnapshot {
    snapshot_for(CalendarDate::new(year, month, day).with_time(hour, minute))
}

/// Compute the moon state for a Python `date` or `datetime`
#[pyfunction]
pub fn moon_snapshot_from_datetime(dt: &Bound<'_, PyAny>) -> PyResult<PyMoonSnapshot> {
    let year = dt.getattr("year")?.extract::<i32>()?;
    let month = dt.getattr("month")?.extract::<i32>()?;
    let day = dt.getattr("day")?.extract::<i32>()?;

    let (hour, minute) = if dt.hasattr("hour")? {
        (
            dt.getattr("hour")?.extract::<f64>()?,
            dt.getattr("minute")?.extract::<f64>()?,
        )
    } else {
        (0.0, 0.0)
    };

    Ok(snapshot_for(
        CalendarDate::new(year, month, day).with_time(hour, minute),
    ))
}

/// Gregorian leap-year test
#[pyfunction]
#[pyo3(name = "is_leap_year")]
pub fn py_is_leap_year(year: i32) -> bool {
    time::is_leap_year(year)
}

/// Whether `day` exists in `month` of `year`
#[pyfunction]
#[pyo3(name = "is_valid_day_of_month")]
pub fn py_is_valid_day_of_month(year: i32, month: i32, day: i32) -> bool {
    time::is_valid_day_of_month(year, month, day)
}

/// Validate a date, returning errors and warnings
#[pyfunction]
#[pyo3(signature = (year, month, day, hour = 0.0, minute = 0.0))]
pub fn validate_date(year: i32, month: i32, day: i32, hour: f64, minute: f64) -> PyValidationResult {
    DateValidator::validate(&CalendarDate::new(year, month, day).with_time(hour, minute)).into()
}

/// Moon snapshots for `days` consecutive days starting at the given date
///
/// Raises:
///     ValueError: if the start date does not exist, precedes 1582-10-15,
///         or `days`/`step_days` is zero
#[pyfunction]
#[pyo3(signature = (year, month, day, days, step_days = 1))]
pub fn lunar_calendar(
    year: i32,
    month: i32,
    day: i32,
    days: u32,
    step_days: u32,
) -> PyResult<Vec<PyMoonSnapshot>> {
    let calendar = LunarCalendar::build(&CalendarDate::new(year, month, day), days, step_days)
        .map_err(to_py_err)?;
    Ok(calendar
        .into_entries()
        .into_iter()
        .map(PyMoonSnapshot::from)
        .collect())
}
