use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_MONTH, MIN_YEAR,
};

/// Returns `true` for leap years: divisible by 4 but not by 100,
/// or divisible by 400.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Returns the number of days in the given month, accounting for leap years.
pub const fn days_in_month(year: i32, month: i32) -> i32 {
    debug_assert!(month >= MIN_MONTH && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Checks that a year falls within `MIN_YEAR..=MAX_YEAR`.
///
/// # Errors
/// Returns `DateError::InvalidYear` carrying the offending value.
pub(crate) fn check_year(year: i32) -> Result<(), DateError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DateError::InvalidYear(year));
    }
    Ok(())
}

/// Checks that a month falls within `MIN_MONTH..=MAX_MONTH`.
///
/// # Errors
/// Returns `DateError::InvalidMonth` carrying the offending value.
pub(crate) fn check_month(month: i32) -> Result<(), DateError> {
    if !(MIN_MONTH..=MAX_MONTH).contains(&month) {
        return Err(DateError::InvalidMonth(month));
    }
    Ok(())
}

/// Checks that a day does not exceed the month's limit (leap-aware for
/// February). Only the upper bound is enforced; zero and negative days
/// pass, matching the historical contract of this type.
///
/// The month must already be validated.
///
/// # Errors
/// Returns `DateError::InvalidDay` carrying the offending value.
pub(crate) fn check_day(month: i32, day: i32, year: i32) -> Result<(), DateError> {
    if day > days_in_month(year, month) {
        return Err(DateError::InvalidDay(day));
    }
    Ok(())
}
