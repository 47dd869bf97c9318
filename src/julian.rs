//! Proleptic Julian (old style) calendar.

use crate::CalendarError;
use crate::consts::{DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, JULIAN_DAY_OFFSET, LEAP_YEAR_CYCLE, MAX_MONTH};
use crate::types::{CalendarKind, DayIndex};

/// Every fourth year, centuries included
pub const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

pub const fn days_in_month(year: i32, month: u8) -> Option<u8> {
    if month == 0 || month > MAX_MONTH {
        None
    } else if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

pub const fn is_valid(year: i32, month: u8, day: u8) -> bool {
    match days_in_month(year, month) {
        Some(max) => day != 0 && day <= max,
        None => false,
    }
}

/// Day count of the Julian `(year, month, day)` relative to the day index epoch.
pub const fn day_number(year: i32, month: u8, day: u8) -> i64 {
    let a = (14 - month as i64).div_euclid(12);
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    let jdn = day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32_083;
    jdn - JULIAN_DAY_OFFSET
}

/// # Errors
/// `CalendarError::InvalidDate` for an impossible month or day, and
/// `CalendarError::DayOutOfRange` within about 44 000 years of either end of
/// the `i32` year range, where the Julian calendar runs past `DayIndex::MAX`
/// (or before `DayIndex::MIN`).
pub fn from_civil(year: i32, month: u8, day: u8) -> Result<DayIndex, CalendarError> {
    if !is_valid(year, month, day) {
        return Err(CalendarError::invalid_date(CalendarKind::Julian, year, month, day));
    }
    DayIndex::try_from(day_number(year, month, day))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn to_civil(day_index: DayIndex) -> (i32, u8, u8) {
    let c = day_index.get() + JULIAN_DAY_OFFSET + 32_082;
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = d - 4800 + m.div_euclid(10);
    (year as i32, month as u8, day as u8)
}
