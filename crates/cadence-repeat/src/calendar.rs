//! Gregorian calendar arithmetic with day-of-month clamping.
//!
//! Adding months or years to a date can land on a day the target month does
//! not have (Jan 31 + 1 month, Feb 29 + 1 year). These helpers clamp the day
//! to the last day of the target month instead of rolling over.

use chrono::{Datelike, NaiveDate};

/// Gregorian leap year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`, or `None` for a month
/// outside `1..=12`.
#[must_use]
pub const fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Builds `year-month-day`, lowering `day` to the month's last day if needed.
fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let last_day = last_day_of_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, day.min(last_day))
}

/// ## Summary
/// Adds `months` to the month counter of `date`, carrying into years, and
/// clamps the day to the target month's length.
///
/// Returns `None` if the result is outside chrono's supported range.
#[must_use]
pub fn add_months_clamped(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;
    clamped_date(year, month, date.day())
}

/// ## Summary
/// Adds `years` to `date`. Feb 29 lands on Feb 28 when the target year is not
/// a leap year.
///
/// Returns `None` if the result is outside chrono's supported range.
#[must_use]
pub fn add_years_clamped(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = date.year().checked_add(i32::try_from(years).ok()?)?;
    clamped_date(year, date.month(), date.day())
}

/// ## Summary
/// Places the day-of-month of `base` into the year and month of `target`,
/// clamped to that month's length. The day of `target` is ignored.
///
/// Examples:
/// - base 2024-02-29, target 2025-02-01 -> 2025-02-28
/// - base 2024-01-31, target 2024-04-10 -> 2024-04-30
#[must_use]
pub fn next_repeat_date(base: NaiveDate, target: NaiveDate) -> Option<NaiveDate> {
    clamped_date(target.year(), target.month(), base.day())
}
