//! Error types for the lunisolar_date crate.

use crate::Date;
use crate::types::CalendarKind;

/// Error type for all fallible operations in the lunisolar_date crate.
///
/// Gregorian and Julian arithmetic never fails; errors come from validating
/// civil triples, from the bounded Chinese lunar table, and from parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A year outside the range covered by the lunar table.
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// A day that cannot be represented or decoded.
    #[error("day index {day_index} is outside the supported range {min}..={max}")]
    DayOutOfRange {
        /// The rejected day index.
        day_index: i64,
        /// Smallest supported day index.
        min: i64,
        /// Largest supported day index.
        max: i64,
    },

    /// A (year, month, day) triple that violates the calendar's rules.
    #[error("invalid {calendar} date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Calendar the triple was interpreted in.
        calendar: CalendarKind,
        /// Year of the triple.
        year: i32,
        /// Month of the triple.
        month: u8,
        /// Day of the triple.
        day: u8,
    },

    /// An unrecognized calendar discriminator.
    #[error("unknown calendar kind: {0}")]
    InvalidKind(String),

    /// Start date is after end date.
    #[error("invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: Date, end: Date },

    /// Text that is not a date or a range.
    #[error("invalid date format: {0}")]
    InvalidFormat(String),
}

impl CalendarError {
    /// Returns `true` for the errors raised by the bounded supported range.
    pub const fn is_range_error(&self) -> bool {
        matches!(self, Self::YearOutOfRange { .. } | Self::DayOutOfRange { .. })
    }

    pub(crate) const fn invalid_date(calendar: CalendarKind, year: i32, month: u8, day: u8) -> Self {
        Self::InvalidDate {
            calendar,
            year,
            month,
            day,
        }
    }
}
