//! Calendar date validation with error and warning reporting.
//!
//! Validation never blocks a computation. It explains why a snapshot's
//! `is_valid_calendar_date` flag is false, and flags dates that are valid
//! but sit at the edges of what the Julian Day formula handles.

use serde::{Deserialize, Serialize};

use crate::core::domain::CalendarDate;
use crate::time::{days_in_month, is_valid_day_of_month};

/// Earliest year covered by the Julian Day count (4713 BC is year -4712).
pub const JULIAN_PERIOD_START_YEAR: i32 = -4712;

/// 1582-10-05, the first day skipped when the Gregorian calendar was adopted.
const FIRST_DROPPED_DAY: (i32, i32, i32) = (1582, 10, 5);

/// 1582-10-15, the first Gregorian calendar day.
const FIRST_GREGORIAN_DAY: (i32, i32, i32) = (1582, 10, 15);

/// Validation outcome for one date.
///
/// Errors make `is_valid` false, warnings are informational only.
///
/// # Examples
///
/// ```
/// use moonkit_rust::services::validation::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid);
///
/// result.add_error("Day 30 is outside February 2021".to_string());
/// assert!(!result.is_valid);
/// assert_eq!(result.errors.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a valid result with no errors or warnings.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error and marks the result as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Adds a warning without invalidating the result.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for calendar dates fed to the moon calculator.
///
/// # Examples
///
/// ```
/// use moonkit_rust::core::domain::CalendarDate;
/// use moonkit_rust::services::validation::DateValidator;
///
/// let result = DateValidator::validate(&CalendarDate::new(2021, 2, 30));
/// assert!(!result.is_valid);
/// assert_eq!(result.errors.len(), 1);
/// ```
pub struct DateValidator;

impl DateValidator {
    /// Validates a date.
    ///
    /// Errors:
    /// - month outside 1..=12
    /// - day outside the month (February has 29 days in leap years)
    ///
    /// Warnings:
    /// - date before 1582-10-05 (read as Julian calendar)
    /// - date in the 1582-10-05..=1582-10-14 reform gap (read as proleptic Gregorian)
    /// - year before the start of the Julian Day count
    /// - hour or minute outside the clock range
    ///
    /// `is_valid` always agrees with [`is_valid_day_of_month`].
    pub fn validate(date: &CalendarDate) -> ValidationResult {
        let mut result = ValidationResult::new();

        match days_in_month(date.year, date.month) {
            None => {
                result.add_error(format!("Month {} is outside 1..=12", date.month));
            }
            Some(length) if date.day < 1 || date.day > length => {
                result.add_error(format!(
                    "Day {} is outside {:04}-{:02}, which has {} days",
                    date.day, date.year, date.month, length
                ));
            }
            Some(_) => {}
        }

        let ymd = (date.year, date.month, date.day);
        if ymd < FIRST_DROPPED_DAY {
            result.add_warning(format!(
                "{} precedes the Gregorian reform and is read as a Julian calendar date",
                date
            ));
        } else if ymd < FIRST_GREGORIAN_DAY {
            result.add_warning(format!(
                "{} falls in the days dropped by the Gregorian reform and is read as a \
                 proleptic Gregorian date",
                date
            ));
        }

        if date.year < JULIAN_PERIOD_START_YEAR {
            result.add_warning(format!(
                "Year {} is before the start of the Julian Day count ({})",
                date.year, JULIAN_PERIOD_START_YEAR
            ));
        }

        if !(0.0..24.0).contains(&date.hour) {
            result.add_warning(format!("Hour {} is outside [0, 24)", date.hour));
        }

        if !(0.0..60.0).contains(&date.minute) {
            result.add_warning(format!("Minute {} is outside [0, 60)", date.minute));
        }

        debug_assert_eq!(
            result.is_valid,
            is_valid_day_of_month(date.year, date.month, date.day)
        );

        result
    }
}
