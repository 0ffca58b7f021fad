//! Snapshot assembly: runs the calendar → Julian Day → phase → orbit pipeline
//! and packages the result.

use qtty::length::nominal::EarthRadii;
use qtty::{Days, Degrees};

use crate::algorithms::{
    age_in_days, classify_phase, orbital_geometry, phase_fraction, round_hundredths,
};
use crate::core::domain::{CalendarDate, MoonSnapshot};
use crate::error::{MoonError, MoonResult};
use crate::time::{calendar_to_julian_day, is_leap_year, is_valid_day_of_month};

/// Compute the moon state for a calendar date.
///
/// Pure and total: any date yields a snapshot, and the same date always
/// yields the same snapshot. A date such as 2021-02-30 still produces
/// numbers; `is_valid_calendar_date` tells the caller not to trust them.
///
/// # Example
/// ```
/// use moonkit_rust::core::domain::{CalendarDate, PhaseCategory};
/// use moonkit_rust::services::compute_moon_snapshot;
///
/// let snapshot = compute_moon_snapshot(&CalendarDate::new(2020, 2, 9).with_time(18.0, 0.0));
/// assert_eq!(snapshot.phase, PhaseCategory::FullMoon);
/// assert!(snapshot.is_leap_year);
/// ```
pub fn compute_moon_snapshot(date: &CalendarDate) -> MoonSnapshot {
    let julian_day = calendar_to_julian_day(date);
    let leap_year = is_leap_year(date.year);

    let fraction = phase_fraction(julian_day);
    let age = age_in_days(fraction, leap_year);
    let geometry = orbital_geometry(julian_day, fraction);

    let mut longitude = round_hundredths(geometry.longitude);
    if longitude >= 360.0 {
        longitude -= 360.0;
    }

    MoonSnapshot {
        date: *date,
        julian_day,
        phase_fraction: fraction,
        age: Days::new(age),
        phase: classify_phase(age),
        distance: EarthRadii::new(round_hundredths(geometry.distance)),
        ecliptic_latitude: Degrees::new(round_hundredths(geometry.latitude)),
        ecliptic_longitude: Degrees::new(longitude),
        is_leap_year: leap_year,
        is_valid_calendar_date: is_valid_day_of_month(date.year, date.month, date.day),
    }
}

/// Like [`compute_moon_snapshot`], but rejects dates that do not exist.
///
/// # Errors
/// `MoonError::InvalidDate` when the day is outside its month or the month
/// is outside 1..=12.
pub fn compute_moon_snapshot_strict(date: &CalendarDate) -> MoonResult<MoonSnapshot> {
    let snapshot = compute_moon_snapshot(date);
    if !snapshot.is_valid_calendar_date {
        return Err(MoonError::InvalidDate(date.to_string()));
    }
    Ok(snapshot)
}
