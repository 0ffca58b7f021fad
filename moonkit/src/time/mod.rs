pub mod calendar;
pub mod julian;

pub use calendar::{days_in_month, is_leap_year, is_valid_day_of_month};
pub use julian::{calendar_to_julian_day, JulianDay, GREGORIAN_CUTOVER_JD};
