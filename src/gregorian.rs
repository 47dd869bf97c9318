//! Proleptic Gregorian calendar.
//!
//! Conversions use the integer Julian Day formulas with floor division, so
//! they hold for every year including zero and negative (astronomical) years.

use crate::CalendarError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, JULIAN_DAY_OFFSET,
    LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::types::{CalendarKind, DayIndex};

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, `None` if `month` is not 1..=12.
pub const fn days_in_month(year: i32, month: u8) -> Option<u8> {
    if month == 0 || month > MAX_MONTH {
        None
    } else if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

/// Whether `(year, month, day)` names a real Gregorian day
pub const fn is_valid(year: i32, month: u8, day: u8) -> bool {
    match days_in_month(year, month) {
        Some(max) => day != 0 && day <= max,
        None => false,
    }
}

/// Day count of `(year, month, day)` relative to the day index epoch.
///
/// Total: out-of-range months and days are carried arithmetically
/// (January 32 lands on February 1).
pub const fn day_number(year: i32, month: u8, day: u8) -> i64 {
    let a = (14 - month as i64).div_euclid(12);
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    let jdn = day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045;
    jdn - JULIAN_DAY_OFFSET
}

/// Validates `(year, month, day)` and returns its day index.
///
/// # Errors
/// `CalendarError::InvalidDate` for an impossible month or day.
pub fn from_civil(year: i32, month: u8, day: u8) -> Result<DayIndex, CalendarError> {
    if !is_valid(year, month, day) {
        return Err(CalendarError::invalid_date(CalendarKind::Gregorian, year, month, day));
    }
    // Every valid date of an i32 year lies inside `DayIndex::MIN..=DayIndex::MAX`
    Ok(DayIndex::new(day_number(year, month, day)))
}

/// Gregorian `(year, month, day)` of a day index.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn to_civil(day_index: DayIndex) -> (i32, u8, u8) {
    let a = day_index.get() + JULIAN_DAY_OFFSET + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    // Fits an i32 inside `DayIndex::MIN..=DayIndex::MAX`
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year as i32, month as u8, day as u8)
}

/// 1-based day of the Gregorian year containing `day_index`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn day_of_year(day_index: DayIndex) -> u16 {
    let (year, _, _) = to_civil(day_index);
    (day_index.get() - day_number(year, JANUARY, 1) + 1) as u16
}
