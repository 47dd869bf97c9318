use std::{cmp::Ordering, iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    CHINESE_YEAR_OFFSET, CalendarError, DECEMBER, Date, DayIndex, JANUARY, RANGE_SEPARATOR, chinese, lunar_table,
    prelude::*,
};

/// An inclusive run of days. The start is never after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: Date,
    end:   Date,
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidRange` if start > end.
    pub fn new(start: Date, end: Date) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Every day of the Gregorian `year`
    ///
    /// # Errors
    /// None for an `i32` year; the `Result` mirrors the other constructors.
    pub fn gregorian_year(year: i32) -> Result<Self, CalendarError> {
        let start = Date::from_gregorian(year, JANUARY, 1)?;
        let end = Date::from_gregorian(year, DECEMBER, 31)?;
        Self::new(start, end)
    }

    /// Every day of the Gregorian `month` of `year`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a month outside 1..=12.
    pub fn gregorian_month(year: i32, month: u8) -> Result<Self, CalendarError> {
        let start = Date::from_gregorian(year, month, 1)?;
        Self::new(start, start + i32::from(start.days_in_gregorian_month()) - 1)
    }

    /// Chinese New Year of `year` up to the eve of the next one.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` outside Chinese years 4599..=4797.
    pub fn chinese_year(year: i32) -> Result<Self, CalendarError> {
        let new_year = chinese::from_civil(year, 1, 1)?;
        let record = lunar_table::lookup(year - CHINESE_YEAR_OFFSET)?;
        let eve = record.new_year() + i32::from(record.days_in_year()) - 1;
        Self::new(Date::from_day_index(new_year), Date::from_day_index(eve))
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (Date, Date) {
        (self.start, self.end)
    }

    /// Number of days in the range, both ends included
    #[allow(clippy::len_without_is_empty, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn contains(&self, date: &Date) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            front: self.start.day_index().get(),
            back:  self.end.day_index().get(),
        }
    }
}

/// Iterator over the days of a [`DateRange`], in either direction.
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    front: i64,
    back:  i64,
}

impl DateRangeIter {
    const fn date(raw: i64) -> Date {
        Date::from_day_index(DayIndex::new(raw))
    }
}

impl Iterator for DateRangeIter {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let date = Self::date(self.front);
        self.front += 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.back - self.front + 1).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for DateRangeIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let date = Self::date(self.back);
        self.back -= 1;
        Some(date)
    }
}

impl ExactSizeIterator for DateRangeIter {}

impl FusedIterator for DateRangeIter {}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for DateRange {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(CalendarError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    CalendarError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found in {s}"))
                })?;

                let start = start_str.parse::<Date>()?;
                let end = end_str.parse::<Date>()?;

                Self::new(start, end)
            },
            _ => Err(CalendarError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
