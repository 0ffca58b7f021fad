use crate::core::domain::PhaseCategory;
use crate::time::JulianDay;

use super::normalize;

/// Julian Day of the reference new moon (2000-01-06 ~14:24 UT).
pub const NEW_MOON_EPOCH_JD: f64 = 2_451_550.1;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;

/// Length of the age scale in days. Ages live in `[0, LUNAR_CYCLE_DAYS)`.
pub const LUNAR_CYCLE_DAYS: f64 = 29.53;

/// Position within the synodic cycle: 0 at new moon, 0.5 at full moon.
pub fn phase_fraction(jd: JulianDay) -> f64 {
    normalize(jd.days_since(NEW_MOON_EPOCH_JD) / SYNODIC_MONTH_DAYS)
}

/// Age of the Moon in days for a phase fraction.
///
/// Leap years take an empirical one-day correction. An age pushed below
/// zero by the correction belongs to the end of the previous cycle and is
/// wrapped back into `[0, LUNAR_CYCLE_DAYS)`; its classification is
/// `NewMoon` either way.
pub fn age_in_days(phase_fraction: f64, leap_year: bool) -> f64 {
    let mut age = phase_fraction * LUNAR_CYCLE_DAYS;
    if leap_year {
        age -= 1.0;
        if age < 0.0 {
            age += LUNAR_CYCLE_DAYS;
        }
    }
    age
}

/// Bucket an age into a named phase.
///
/// The age is rounded *up* to whole days and compared against fixed
/// thresholds, so 7.0 is a first quarter while 7.01 is already gibbous.
pub fn classify_phase(age: f64) -> PhaseCategory {
    match age.ceil() as i64 {
        i64::MIN..=0 => PhaseCategory::NewMoon,
        1..=6 => PhaseCategory::WaxingCrescent,
        7 => PhaseCategory::FirstQuarter,
        8..=14 => PhaseCategory::WaxingGibbous,
        15 => PhaseCategory::FullMoon,
        16..=21 => PhaseCategory::WaningGibbous,
        22 => PhaseCategory::LastQuarter,
        23..=28 => PhaseCategory::WaningCrescent,
        _ => PhaseCategory::NewMoon,
    }
}
