use crate::CalendarError;
use crate::consts::JULIAN_DAY_OFFSET;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Canonical day count, `0` being 1858-11-17 (Modified Julian Day).
///
/// Every calendar representation in this crate is derived from a `DayIndex`.
/// The span `MIN..=MAX` covers every Gregorian year that fits an `i32`;
/// stepping past either end stops there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Into, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct DayIndex(i64);

impl DayIndex {
    /// 1858-11-17, a Wednesday
    pub const EPOCH: Self = Self(0);
    /// Gregorian `i32::MIN`-01-01
    pub const MIN: Self = Self(-784_352_975_246);
    /// Gregorian `i32::MAX`-12-31
    pub const MAX: Self = Self(784_351_617_363);

    /// Creates a day index from a raw day count, clamped to `MIN..=MAX`
    #[inline]
    pub const fn new(value: i64) -> Self {
        if value < Self::MIN.0 {
            Self::MIN
        } else if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Returns the raw day count
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Creates a day index from a Julian Day Number (the Julian day at noon)
    ///
    /// # Errors
    /// Returns `CalendarError::DayOutOfRange` if the day is outside `MIN..=MAX`.
    pub fn from_julian_day_number(jdn: i64) -> Result<Self, CalendarError> {
        Self::try_from(jdn.saturating_sub(JULIAN_DAY_OFFSET))
    }

    /// Returns the Julian Day Number of this day
    pub const fn julian_day_number(self) -> i64 {
        self.0 + JULIAN_DAY_OFFSET
    }

    /// Adds `days`, returning `None` past `MIN` or `MAX`
    pub const fn checked_add(self, days: i32) -> Option<Self> {
        let value = self.0 + days as i64;
        if value < Self::MIN.0 || value > Self::MAX.0 {
            None
        } else {
            Some(Self(value))
        }
    }
}

impl From<i32> for DayIndex {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl TryFrom<i64> for DayIndex {
    type Error = CalendarError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CalendarError::DayOutOfRange {
                day_index: value,
                min: Self::MIN.0,
                max: Self::MAX.0,
            })
        }
    }
}

/// Saturates at `MIN` and `MAX`
impl Add<i32> for DayIndex {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        Self::new(self.0 + i64::from(rhs))
    }
}

/// Saturates at `MIN` and `MAX`
impl Sub<i32> for DayIndex {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self::Output {
        Self::new(self.0 - i64::from(rhs))
    }
}

impl Sub for DayIndex {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// Calendars a civil (year, month, day) triple can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    /// Proleptic Gregorian calendar
    #[display(fmt = "gregorian")]
    Gregorian,
    /// Proleptic Julian (old style) calendar
    #[display(fmt = "julian")]
    Julian,
    /// Chinese lunisolar calendar, 1901-2099 only
    #[display(fmt = "chinese")]
    Chinese,
}

impl FromStr for CalendarKind {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" => Ok(Self::Gregorian),
            "julian" => Ok(Self::Julian),
            "chinese" => Ok(Self::Chinese),
            _ => Err(CalendarError::InvalidKind(s.to_owned())),
        }
    }
}

/// Numeric discriminants: 0 Gregorian, 1 Chinese, 2 Julian
impl TryFrom<u8> for CalendarKind {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Gregorian),
            1 => Ok(Self::Chinese),
            2 => Ok(Self::Julian),
            other => Err(CalendarError::InvalidKind(other.to_string())),
        }
    }
}

/// Day of the week, numbered from Sunday = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday = 0,
    #[display(fmt = "Monday")]
    Monday = 1,
    #[display(fmt = "Tuesday")]
    Tuesday = 2,
    #[display(fmt = "Wednesday")]
    Wednesday = 3,
    #[display(fmt = "Thursday")]
    Thursday = 4,
    #[display(fmt = "Friday")]
    Friday = 5,
    #[display(fmt = "Saturday")]
    Saturday = 6,
}

impl Weekday {
    /// All days, Sunday first
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday for `number` taken modulo 7
    pub const fn from_number(number: i64) -> Self {
        Self::ALL[number.rem_euclid(7) as usize]
    }

    /// Returns the day number, Sunday = 0 through Saturday = 6
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }
}
