//! Gregorian leap-year rule and month lengths.

const DAYS_IN_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year test.
///
/// Uses Euclidean remainders so proleptic and negative years follow the same
/// 4/100/400 rule.
///
/// ```
/// use moonkit_rust::time::calendar::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    let year = i64::from(year);
    match (year.rem_euclid(4), year.rem_euclid(100), year.rem_euclid(400)) {
        (0, 0, 0) => true,
        (0, 0, _) => false,
        (0, _, _) => true,
        _ => false,
    }
}

/// Number of days in `month` of `year`, `None` for months outside 1..=12.
pub fn days_in_month(year: i32, month: i32) -> Option<i32> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    let days = *DAYS_IN_MONTH.get(index)?;
    if month == 2 && is_leap_year(year) {
        Some(days + 1)
    } else {
        Some(days)
    }
}

/// Whether `day` exists in `month` of `year`.
pub fn is_valid_day_of_month(year: i32, month: i32, day: i32) -> bool {
    match days_in_month(year, month) {
        Some(length) => (1..=length).contains(&day),
        None => false,
    }
}
