//! Day-by-day moon snapshots over a date range, with phase transitions and
//! a summary of the span.

use serde::Serialize;

use crate::core::domain::{CalendarDate, MoonSnapshot, PhaseCategory};
use crate::error::{MoonError, MoonResult};
use crate::time::{calendar_to_julian_day, GREGORIAN_CUTOVER_JD};

use super::snapshot::compute_moon_snapshot;

/// Phase change between two consecutive entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseTransition {
    /// First date showing the new phase.
    pub date: CalendarDate,
    pub from: PhaseCategory,
    pub to: PhaseCategory,
}

/// Number of entries falling in one phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseCount {
    pub phase: PhaseCategory,
    pub days: usize,
}

/// Aggregate view of a lunar calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LunarCalendarSummary {
    pub total_entries: usize,
    /// One entry per phase, in cycle order.
    pub phase_counts: Vec<PhaseCount>,
    /// Entry with the smallest distance.
    pub nearest: Option<MoonSnapshot>,
    /// Entry with the largest distance.
    pub farthest: Option<MoonSnapshot>,
    pub full_moon_dates: Vec<CalendarDate>,
    pub new_moon_dates: Vec<CalendarDate>,
}

/// Consecutive moon snapshots starting at a given date.
///
/// # Examples
///
/// ```
/// use moonkit_rust::core::domain::CalendarDate;
/// use moonkit_rust::services::LunarCalendar;
///
/// let calendar = LunarCalendar::build(&CalendarDate::new(2020, 2, 1), 29, 1).unwrap();
/// assert_eq!(calendar.len(), 29);
/// assert!(!calendar.transitions().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LunarCalendar {
    entries: Vec<MoonSnapshot>,
}

impl LunarCalendar {
    /// Build snapshots for the `days` days starting at `start`, one every
    /// `step_days` days.
    ///
    /// Days are stepped on the Gregorian calendar, so `start` must be on or
    /// after 1582-10-15. Earlier dates are read as Julian calendar dates by
    /// the Julian Day conversion and cannot be stepped consistently. The
    /// time of day of `start` is copied to every entry.
    ///
    /// # Errors
    ///
    /// - `MoonError::InvalidDate` if `start` is not a real date or precedes
    ///   the Gregorian calendar
    /// - `MoonError::ConfigurationError` if `days` or `step_days` is zero
    pub fn build(start: &CalendarDate, days: u32, step_days: u32) -> MoonResult<Self> {
        if days == 0 {
            return Err(MoonError::ConfigurationError(
                "Lunar calendar needs at least one day".to_string(),
            ));
        }
        if step_days == 0 {
            return Err(MoonError::ConfigurationError(
                "Lunar calendar step must be at least one day".to_string(),
            ));
        }

        let first = start
            .to_naive_date()
            .ok_or_else(|| MoonError::InvalidDate(start.to_string()))?;
        if calendar_to_julian_day(start).value() <= GREGORIAN_CUTOVER_JD {
            return Err(MoonError::InvalidDate(format!(
                "{} precedes 1582-10-15, the first Gregorian calendar day",
                start
            )));
        }

        let entries: Vec<MoonSnapshot> = first
            .iter_days()
            .take(days as usize)
            .step_by(step_days as usize)
            .map(|day| {
                let date = CalendarDate::from(day).with_time(start.hour, start.minute);
                compute_moon_snapshot(&date)
            })
            .collect();

        log::debug!(
            "Built lunar calendar with {} entries from {} ({} days, step {})",
            entries.len(),
            start,
            days,
            step_days
        );

        Ok(Self { entries })
    }

    /// All snapshots in date order.
    pub fn entries(&self) -> &[MoonSnapshot] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<MoonSnapshot> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries where the phase differs from the previous entry.
    pub fn transitions(&self) -> Vec<PhaseTransition> {
        self.entries
            .windows(2)
            .filter(|pair| pair[0].phase != pair[1].phase)
            .map(|pair| PhaseTransition {
                date: pair[1].date,
                from: pair[0].phase,
                to: pair[1].phase,
            })
            .collect()
    }

    /// Summarize the span: phase counts, distance extremes and the dates of
    /// full and new moons.
    pub fn summary(&self) -> LunarCalendarSummary {
        let phase_counts = PhaseCategory::ALL
            .iter()
            .map(|phase| PhaseCount {
                phase: *phase,
                days: self.entries.iter().filter(|s| s.phase == *phase).count(),
            })
            .collect();

        let nearest = self
            .entries
            .iter()
            .min_by(|a, b| a.distance.value().total_cmp(&b.distance.value()))
            .copied();
        let farthest = self
            .entries
            .iter()
            .max_by(|a, b| a.distance.value().total_cmp(&b.distance.value()))
            .copied();

        LunarCalendarSummary {
            total_entries: self.entries.len(),
            phase_counts,
            nearest,
            farthest,
            full_moon_dates: self.dates_in_phase(PhaseCategory::FullMoon),
            new_moon_dates: self.dates_in_phase(PhaseCategory::NewMoon),
        }
    }

    /// Serialize the entries as a JSON array.
    pub fn to_json(&self, pretty: bool) -> MoonResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.entries)?
        } else {
            serde_json::to_string(&self.entries)?
        };
        Ok(json)
    }

    fn dates_in_phase(&self, phase: PhaseCategory) -> Vec<CalendarDate> {
        self.entries
            .iter()
            .filter(|s| s.phase == phase)
            .map(|s| s.date)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_daily() {
        let calendar = LunarCalendar::build(&CalendarDate::new(2020, 2, 1), 30, 1).unwrap();
        assert_eq!(calendar.len(), 30);
        assert_eq!(calendar.entries()[0].date, CalendarDate::new(2020, 2, 1));
        assert_eq!(calendar.entries()[28].date, CalendarDate::new(2020, 2, 29));
        assert_eq!(calendar.entries()[29].date, CalendarDate::new(2020, 3, 1));
    }

    #[test]
    fn test_build_with_step() {
        let calendar = LunarCalendar::build(&CalendarDate::new(2021, 1, 1), 10, 3).unwrap();
        let days: Vec<i32> = calendar.entries().iter().map(|s| s.date.day).collect();
        assert_eq!(days, vec![1, 4, 7, 10]);
    }

    #[test]
    fn test_time_of_day_is_carried() {
        let start = CalendarDate::new(2021, 1, 1).with_time(18.0, 30.0);
        let calendar = LunarCalendar::build(&start, 3, 1).unwrap();
        assert!(calendar.entries().iter().all(|s| s.date.hour == 18.0 && s.date.minute == 30.0));
    }

    #[test]
    fn test_build_rejects_invalid_start() {
        let err = LunarCalendar::build(&CalendarDate::new(2021, 2, 30), 10, 1).unwrap_err();
        assert!(matches!(err, MoonError::InvalidDate(_)));
    }

    #[test]
    fn test_build_rejects_pre_gregorian_start() {
        for (y, m, d) in [(1582, 10, 3), (1582, 10, 14), (1500, 2, 27), (-100, 6, 1)] {
            let err = LunarCalendar::build(&CalendarDate::new(y, m, d), 5, 1).unwrap_err();
            assert!(matches!(err, MoonError::InvalidDate(_)), "{:?}", err);
        }
    }

    #[test]
    fn test_entries_are_one_julian_day_apart() {
        for (y, m, d) in [(1582, 10, 15), (1600, 2, 27), (1700, 2, 27), (2020, 2, 27)] {
            let calendar = LunarCalendar::build(&CalendarDate::new(y, m, d), 10, 1).unwrap();
            let jds: Vec<f64> = calendar
                .entries()
                .iter()
                .map(|s| s.julian_day.value())
                .collect();
            for pair in jds.windows(2) {
                assert_eq!(pair[1] - pair[0], 1.0, "{:?}", jds);
            }
            assert!(calendar.entries().iter().all(|s| s.is_valid_calendar_date));
        }
    }

    #[test]
    fn test_first_gregorian_day_starts_at_cutover() {
        let calendar = LunarCalendar::build(&CalendarDate::new(1582, 10, 15), 1, 1).unwrap();
        assert_eq!(
            calendar.entries()[0].julian_day.value(),
            GREGORIAN_CUTOVER_JD + 1.0
        );
    }

    #[test]
    fn test_build_rejects_zero_lengths() {
        let start = CalendarDate::new(2021, 1, 1);
        assert!(matches!(
            LunarCalendar::build(&start, 0, 1),
            Err(MoonError::ConfigurationError(_))
        ));
        assert!(matches!(
            LunarCalendar::build(&start, 5, 0),
            Err(MoonError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_february_2020_transitions() {
        let calendar = LunarCalendar::build(&CalendarDate::new(2020, 2, 1), 29, 1).unwrap();
        let transitions = calendar.transitions();

        let full = transitions
            .iter()
            .find(|t| t.to == PhaseCategory::FullMoon)
            .unwrap();
        assert_eq!(full.date, CalendarDate::new(2020, 2, 9));
        assert_eq!(full.from, PhaseCategory::WaxingGibbous);

        let new = transitions
            .iter()
            .find(|t| t.to == PhaseCategory::NewMoon)
            .unwrap();
        assert_eq!(new.date, CalendarDate::new(2020, 2, 23));
        assert_eq!(new.from, PhaseCategory::WaningCrescent);
    }

    #[test]
    fn test_summary_counts_cover_all_entries() {
        let calendar = LunarCalendar::build(&CalendarDate::new(2020, 1, 1), 366, 1).unwrap();
        let summary = calendar.summary();
        assert_eq!(summary.total_entries, 366);
        assert_eq!(summary.phase_counts.len(), 8);
        let counted: usize = summary.phase_counts.iter().map(|c| c.days).sum();
        assert_eq!(counted, 366);
        assert!(summary.full_moon_dates.len() >= 12);
    }

    #[test]
    fn test_summary_distance_extremes() {
        let calendar = LunarCalendar::build(&CalendarDate::new(2020, 1, 1), 60, 1).unwrap();
        let summary = calendar.summary();
        let nearest = summary.nearest.unwrap();
        let farthest = summary.farthest.unwrap();
        assert!(nearest.distance_earth_radii() < farthest.distance_earth_radii());
        for entry in calendar.entries() {
            assert!(entry.distance_earth_radii() >= nearest.distance_earth_radii());
            assert!(entry.distance_earth_radii() <= farthest.distance_earth_radii());
        }
    }

    #[test]
    fn test_to_json() {
        let calendar = LunarCalendar::build(&CalendarDate::new(2020, 2, 9), 2, 1).unwrap();
        let json = calendar.to_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["phase"], "full_moon");
        assert_eq!(entries[0]["date"]["day"], 9);
    }
}
