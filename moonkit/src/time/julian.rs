use serde::{Deserialize, Serialize};

use crate::core::domain::CalendarDate;

/// Last Julian Day Number still counted in the Julian calendar
/// (1582-10-04). Later days get the Gregorian correction.
pub const GREGORIAN_CUTOVER_JD: f64 = 2_299_160.0;

/// Julian Day Number at 12h UT.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(qtty::Days);

impl JulianDay {
    /// Create a new Julian Day value.
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw Julian Day value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Days elapsed since `epoch`, may be negative.
    pub fn days_since(&self, epoch: f64) -> f64 {
        self.value() - epoch
    }
}

impl From<f64> for JulianDay {
    fn from(v: f64) -> Self {
        JulianDay::new(qtty::Days::new(v))
    }
}

/// Convert a calendar date to its Julian Day Number.
///
/// Dates up to 1582-10-04 are read as Julian calendar dates, later ones as
/// Gregorian. Only `year`, `month` and `day` take part: the result is the
/// day number at noon regardless of `hour`/`minute`.
///
/// Never fails. Out-of-range months or days still produce a number, which is
/// only meaningful for real dates.
///
/// # Example
/// ```
/// use moonkit_rust::core::domain::CalendarDate;
/// use moonkit_rust::time::calendar_to_julian_day;
///
/// let jd = calendar_to_julian_day(&CalendarDate::new(2000, 1, 1));
/// assert_eq!(jd.value(), 2_451_545.0);
/// ```
pub fn calendar_to_julian_day(date: &CalendarDate) -> JulianDay {
    let (year, month) = march_based(date.year as f64, date.month as f64);
    let day = date.day as f64;

    let k1 = (365.25 * (year + 4712.0)).floor();
    let k2 = (30.6 * month + 0.5).floor();
    let k3 = (((year / 100.0) + 49.0).floor() * 0.75).floor() - 38.0;

    let mut jd = k1 + k2 + day + 59.0;
    if jd > GREGORIAN_CUTOVER_JD {
        jd -= k3;
    }

    JulianDay::from(jd)
}

/// Renumber months so the year starts in March (0 = March, 11 = February),
/// moving January and February into the previous year.
fn march_based(year: f64, month: f64) -> (f64, f64) {
    let year = year - ((12.0 - month) / 10.0).floor();
    let mut month = month + 9.0;
    if month >= 12.0 {
        month -= 12.0;
    }
    (year, month)
}
