//! Proleptic Gregorian calendar arithmetic.

use chrono::{Datelike, NaiveDate};

use crate::error::{CalendarError, CalendarResult};

/// Number of weekday columns in a calendar grid, Monday to Sunday.
pub const DAYS_PER_WEEK: u32 = 7;

/// ## Summary
/// Returns `true` for leap years: divisible by 4, except centuries not divisible by 400.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// ## Summary
/// Returns the number of days in a 1-based month, or `None` if `month` is not in 1..=12.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// ## Summary
/// Returns the weekday of the first day of the month, 0 = Monday through 6 = Sunday.
///
/// ## Errors
/// Returns `CalendarError::InvalidMonth` if `month` is not in 1..=12, and
/// `CalendarError::InvalidYear` if the year lies outside the range chrono can represent.
pub fn first_weekday_offset(year: i32, month: u32) -> CalendarResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidYear { year })?;
    Ok(first.weekday().num_days_from_monday())
}

/// ## Summary
/// Returns the number of week rows needed to hold `days` days starting at column `offset`.
#[must_use]
pub const fn week_count(offset: u32, days: u32) -> u32 {
    (offset + days).div_ceil(DAYS_PER_WEEK)
}
