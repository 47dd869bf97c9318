//! Chinese lunisolar calendar for Gregorian years 1901-2099.
//!
//! Months are reported as 1..=12. The intercalary (leap) month is reported as
//! the number of the month it repeats plus 16, so a second fourth month is 20.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, trace};

use crate::CalendarError;
use crate::consts::{
    CHINESE_YEAR_OFFSET, FIRST_CHINESE_DAY, FIRST_CHINESE_YEAR, INTERCALARY_MONTH_OFFSET, LAST_CHINESE_DAY,
    LAST_CHINESE_YEAR,
};
use crate::gregorian;
use crate::lunar_table::{self, LunarYear};
use crate::prelude::*;
use crate::types::{CalendarKind, DayIndex};

/// A decoded Chinese date together with the day it was decoded from.
///
/// Decoding walks the lunar table, so callers that need several fields of
/// the same day should keep the `ChineseDate` around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{year}-{month:02}-{day:02}")]
pub struct ChineseDate {
    year: i32,
    month: u8,
    day: u8,
    day_index: DayIndex,
}

impl ChineseDate {
    /// Chinese year, the Gregorian year of its New Year plus 2698
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month code: 1..=12, or 17..=28 for an intercalary month
    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn day_index(&self) -> DayIndex {
        self.day_index
    }

    pub const fn is_intercalary(&self) -> bool {
        self.month > INTERCALARY_MONTH_OFFSET
    }

    /// Month number without the intercalary flag
    pub const fn month_number(&self) -> u8 {
        if self.is_intercalary() {
            self.month - INTERCALARY_MONTH_OFFSET
        } else {
            self.month
        }
    }

    /// Gregorian year whose table record holds this date
    pub const fn gregorian_year(&self) -> i32 {
        self.year - CHINESE_YEAR_OFFSET
    }
}

impl PartialOrd for ChineseDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChineseDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Month codes are not chronological within a leap year
        self.day_index.cmp(&other.day_index)
    }
}

fn day_out_of_range(day_index: i64) -> CalendarError {
    CalendarError::DayOutOfRange {
        day_index,
        min: FIRST_CHINESE_DAY,
        max: LAST_CHINESE_DAY,
    }
}

fn rejected(year: i32, month: u8, day: u8) -> CalendarError {
    debug!(year, month, day, "rejected chinese date");
    CalendarError::invalid_date(CalendarKind::Chinese, year, month, day)
}

/// Record of the lunar year containing `day_index`
fn lunar_year_of(day_index: DayIndex) -> Result<&'static LunarYear, CalendarError> {
    let (gregorian_year, _, _) = gregorian::to_civil(day_index);
    let record = lunar_table::lookup(gregorian_year)?;
    if day_index - record.cycle_start() < i64::from(record.new_year_offset()) {
        trace!(day_index = day_index.get(), gregorian_year, "before chinese new year, using previous record");
        return lunar_table::lookup(gregorian_year - 1);
    }
    Ok(record)
}

/// Decodes the Chinese date of `day_index`.
///
/// # Errors
/// `CalendarError::DayOutOfRange` before the Chinese New Year of 1901
/// (1901-02-19) or after 2099-12-31.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_civil(day_index: DayIndex) -> Result<ChineseDate, CalendarError> {
    if !(FIRST_CHINESE_DAY..=LAST_CHINESE_DAY).contains(&day_index.get()) {
        return Err(day_out_of_range(day_index.get()));
    }
    let record = lunar_year_of(day_index)?;

    let count = record.month_count();
    let mut remaining = day_index - record.new_year();
    let mut position = 1;
    for length in record.lengths() {
        let length = i64::from(length);
        if remaining < length || position == count {
            break;
        }
        remaining -= length;
        position += 1;
    }

    Ok(ChineseDate {
        year: record.gregorian_year() + CHINESE_YEAR_OFFSET,
        month: record.month_code(position),
        // At most 29 once the walk stops
        day: (remaining + 1) as u8,
        day_index,
    })
}

/// Day index of the Chinese `(year, month, day)`, `month` being a month code.
///
/// # Errors
/// `CalendarError::YearOutOfRange` outside Chinese years 4599..=4797,
/// and `CalendarError::InvalidDate` for a month code the year does not have
/// or a day past the month's length.
///
/// The months of 4797 that run into 2100 still encode, although
/// [`to_civil`] stops at 2099-12-31.
pub fn from_civil(year: i32, month: u8, day: u8) -> Result<DayIndex, CalendarError> {
    if !(FIRST_CHINESE_YEAR..=LAST_CHINESE_YEAR).contains(&year) {
        debug!(year, "chinese year outside the lunar table");
        return Err(CalendarError::YearOutOfRange {
            year,
            min: FIRST_CHINESE_YEAR,
            max: LAST_CHINESE_YEAR,
        });
    }
    let record = lunar_table::lookup(year - CHINESE_YEAR_OFFSET)?;

    let position = record
        .month_position(month)
        .ok_or_else(|| rejected(year, month, day))?;
    let length = record
        .month_len(position)
        .ok_or_else(|| rejected(year, month, day))?;
    if day == 0 || day > length {
        return Err(rejected(year, month, day));
    }

    let preceding: i32 = record
        .lengths()
        .take(usize::from(position - 1))
        .map(i32::from)
        .sum();
    Ok(record.new_year() + preceding + i32::from(day) - 1)
}
