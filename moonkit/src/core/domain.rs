//! Domain models for calendar input and the computed moon state.
//!
//! [`CalendarDate`] is what the caller hands in; [`MoonSnapshot`] is the
//! immutable record handed back. Neither type enforces calendar validity:
//! a snapshot always carries an `is_valid_calendar_date` diagnostic instead.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use qtty::length::nominal::EarthRadii;
use qtty::{Days, Degrees};
use serde::{Deserialize, Serialize};

use crate::time::JulianDay;

/// A calendar date with an optional time of day.
///
/// Months and days are 1-based. Nothing is checked at construction, so
/// `CalendarDate::new(2021, 2, 30)` is a perfectly good value; see
/// [`crate::time::calendar::is_valid_day_of_month`] for the check.
///
/// # Examples
///
/// ```
/// use moonkit_rust::core::domain::CalendarDate;
///
/// let date = CalendarDate::new(2020, 2, 24).with_time(18.0, 0.0);
/// assert_eq!(date.year, 2020);
/// assert_eq!(date.hour, 18.0);
/// assert_eq!(date.to_string(), "2020-02-24");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    #[serde(default)]
    pub hour: f64,
    #[serde(default)]
    pub minute: f64,
}

impl CalendarDate {
    /// Creates a date at 00:00.
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0.0,
            minute: 0.0,
        }
    }

    /// Returns a copy of this date with the given time of day.
    pub fn with_time(self, hour: f64, minute: f64) -> Self {
        Self {
            hour,
            minute,
            ..self
        }
    }

    /// Converts to a proleptic Gregorian `NaiveDate`.
    ///
    /// Returns `None` when the components do not name a real day.
    ///
    /// # Examples
    ///
    /// ```
    /// use moonkit_rust::core::domain::CalendarDate;
    ///
    /// assert!(CalendarDate::new(2020, 2, 29).to_naive_date().is_some());
    /// assert!(CalendarDate::new(2021, 2, 29).to_naive_date().is_none());
    /// ```
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(dt: NaiveDateTime) -> Self {
        CalendarDate::from(dt.date()).with_time(dt.hour() as f64, dt.minute() as f64)
    }
}

/// Named phase of the Moon, in cycle order starting at new moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseCategory {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseCategory {
    /// All phases in cycle order.
    pub const ALL: [PhaseCategory; 8] = [
        PhaseCategory::NewMoon,
        PhaseCategory::WaxingCrescent,
        PhaseCategory::FirstQuarter,
        PhaseCategory::WaxingGibbous,
        PhaseCategory::FullMoon,
        PhaseCategory::WaningGibbous,
        PhaseCategory::LastQuarter,
        PhaseCategory::WaningCrescent,
    ];

    /// Human readable name, e.g. `"Waxing Gibbous"`.
    pub fn name(&self) -> &'static str {
        match self {
            PhaseCategory::NewMoon => "New Moon",
            PhaseCategory::WaxingCrescent => "Waxing Crescent",
            PhaseCategory::FirstQuarter => "First Quarter",
            PhaseCategory::WaxingGibbous => "Waxing Gibbous",
            PhaseCategory::FullMoon => "Full Moon",
            PhaseCategory::WaningGibbous => "Waning Gibbous",
            PhaseCategory::LastQuarter => "Last Quarter",
            PhaseCategory::WaningCrescent => "Waning Crescent",
        }
    }

    /// True for the phases between new and full moon.
    pub fn is_waxing(&self) -> bool {
        matches!(
            self,
            PhaseCategory::WaxingCrescent
                | PhaseCategory::FirstQuarter
                | PhaseCategory::WaxingGibbous
        )
    }

    /// True for the phases between full and new moon.
    pub fn is_waning(&self) -> bool {
        matches!(
            self,
            PhaseCategory::WaningGibbous
                | PhaseCategory::LastQuarter
                | PhaseCategory::WaningCrescent
        )
    }
}

impl fmt::Display for PhaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// State of the Moon for one calendar date.
///
/// Every field is computed unconditionally. Distance and ecliptic
/// coordinates are rounded to two decimals; age and phase fraction are not.
///
/// # Fields
///
/// * `date` - The input date
/// * `julian_day` - Julian Day Number the formulas ran on
/// * `phase_fraction` - Position in the synodic cycle, `[0, 1)`
/// * `age` - Days since the last new moon, `[0, 29.53)`
/// * `phase` - Named phase derived from `age`
/// * `distance` - Geocentric distance in Earth radii
/// * `ecliptic_latitude` - Degrees above or below the ecliptic
/// * `ecliptic_longitude` - Degrees along the ecliptic, `[0, 360)`
/// * `is_leap_year` - Gregorian leap-year flag for `date.year`
/// * `is_valid_calendar_date` - Whether `date.day` exists in that month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonSnapshot {
    pub date: CalendarDate,
    pub julian_day: JulianDay,
    pub phase_fraction: f64,
    pub age: Days,
    pub phase: PhaseCategory,
    pub distance: EarthRadii,
    pub ecliptic_latitude: Degrees,
    pub ecliptic_longitude: Degrees,
    pub is_leap_year: bool,
    pub is_valid_calendar_date: bool,
}

impl MoonSnapshot {
    /// Age in days as a raw value.
    pub fn age_days(&self) -> f64 {
        self.age.value()
    }

    /// Distance in Earth radii as a raw value.
    pub fn distance_earth_radii(&self) -> f64 {
        self.distance.value()
    }

    /// Ecliptic latitude in degrees as a raw value.
    pub fn latitude_degrees(&self) -> f64 {
        self.ecliptic_latitude.value()
    }

    /// Ecliptic longitude in degrees as a raw value.
    pub fn longitude_degrees(&self) -> f64 {
        self.ecliptic_longitude.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date_defaults_to_midnight() {
        let date = CalendarDate::new(2021, 6, 15);
        assert_eq!(date.hour, 0.0);
        assert_eq!(date.minute, 0.0);
    }

    #[test]
    fn test_with_time_keeps_date() {
        let date = CalendarDate::new(2021, 6, 15).with_time(18.0, 30.0);
        assert_eq!((date.year, date.month, date.day), (2021, 6, 15));
        assert_eq!((date.hour, date.minute), (18.0, 30.0));
    }

    #[test]
    fn test_display_pads_components() {
        assert_eq!(CalendarDate::new(987, 3, 4).to_string(), "0987-03-04");
    }

    #[test]
    fn test_to_naive_date_rejects_nonsense() {
        assert!(CalendarDate::new(2021, 2, 30).to_naive_date().is_none());
        assert!(CalendarDate::new(2021, 13, 1).to_naive_date().is_none());
        assert!(CalendarDate::new(2021, -1, 1).to_naive_date().is_none());
        assert!(CalendarDate::new(2021, 1, 0).to_naive_date().is_none());
    }

    #[test]
    fn test_from_naive_datetime() {
        let dt = NaiveDate::from_ymd_opt(2020, 3, 9)
            .unwrap()
            .and_hms_opt(18, 45, 0)
            .unwrap();
        let date = CalendarDate::from(dt);
        assert_eq!(date, CalendarDate::new(2020, 3, 9).with_time(18.0, 45.0));
    }

    #[test]
    fn test_calendar_date_deserialize_without_time() {
        let date: CalendarDate =
            serde_json::from_str(r#"{"year": 2020, "month": 2, "day": 1}"#).unwrap();
        assert_eq!(date, CalendarDate::new(2020, 2, 1));
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(PhaseCategory::NewMoon.to_string(), "New Moon");
        assert_eq!(PhaseCategory::WaningCrescent.name(), "Waning Crescent");
    }

    #[test]
    fn test_phase_serde_tag() {
        let json = serde_json::to_string(&PhaseCategory::FirstQuarter).unwrap();
        assert_eq!(json, "\"first_quarter\"");
    }

    #[test]
    fn test_waxing_and_waning_are_disjoint() {
        for phase in PhaseCategory::ALL {
            assert!(!(phase.is_waxing() && phase.is_waning()));
        }
        assert!(!PhaseCategory::NewMoon.is_waxing());
        assert!(!PhaseCategory::FullMoon.is_waning());
    }
}
