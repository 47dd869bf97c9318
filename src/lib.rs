//! Day-exact conversions between the Gregorian, Julian and Chinese lunisolar
//! calendars.
//!
//! Every date is a single [`DayIndex`] (the Modified Julian Day count from
//! 1858-11-17); the civil fields of each calendar are derived from it on
//! demand. Gregorian arithmetic covers every day of every `i32` year, and Julian
//! arithmetic the same span of days. The Chinese calendar covers Gregorian years 1901-2099 through a compiled-in
//! lunar table.
//!
//! ```
//! use lunisolar_date::{CalendarKind, Date, Weekday};
//!
//! let date = Date::from_civil(CalendarKind::Gregorian, 2012, 1, 23).unwrap();
//! assert_eq!(date.day_of_week(), Weekday::Monday);
//! assert_eq!(date.julian(), (2012, 1, 10));
//!
//! let chinese = date.chinese().unwrap();
//! assert_eq!((chinese.year(), chinese.month(), chinese.day()), (4710, 1, 1));
//! ```

mod consts;
mod error;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub mod chinese;
pub mod gregorian;
pub mod julian;
pub mod lunar_table;

pub use chinese::ChineseDate;
pub use consts::*;
pub use error::CalendarError;
pub use lunar_table::{LunarYear, lookup as lunar_year_record};
pub use range::{DateRange, DateRangeIter};
pub use types::{CalendarKind, DayIndex, Weekday};

use std::ops::{Add, Sub};
use std::str::FromStr;
use std::{fmt, iter};

/// A single day, stored as its [`DayIndex`].
///
/// Equality, ordering and hashing use the day index only, so the same day
/// built from different calendars compares equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date {
    day_index: DayIndex,
}

impl Date {
    pub const fn from_day_index(day_index: DayIndex) -> Self {
        Self { day_index }
    }

    /// Creates a date from a civil triple of `kind`.
    ///
    /// For [`CalendarKind::Chinese`] the year is the Chinese year (4599..=4797)
    /// and the month a month code (an intercalary month is its number + 16).
    ///
    /// # Errors
    /// `CalendarError::InvalidDate` for a triple the calendar does not have,
    /// `CalendarError::YearOutOfRange` for a Chinese year outside the lunar
    /// table, and `CalendarError::DayOutOfRange` if the day cannot be held.
    pub fn from_civil(kind: CalendarKind, year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let day_index = match kind {
            CalendarKind::Gregorian => gregorian::from_civil(year, month, day)?,
            CalendarKind::Julian => julian::from_civil(year, month, day)?,
            CalendarKind::Chinese => chinese::from_civil(year, month, day)?,
        };
        Ok(Self { day_index })
    }

    /// # Errors
    /// See [`Date::from_civil`].
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::from_civil(CalendarKind::Gregorian, year, month, day)
    }

    /// # Errors
    /// See [`Date::from_civil`].
    pub fn from_julian(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::from_civil(CalendarKind::Julian, year, month, day)
    }

    /// # Errors
    /// See [`Date::from_civil`].
    pub fn from_chinese(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::from_civil(CalendarKind::Chinese, year, month, day)
    }

    /// # Errors
    /// `CalendarError::DayOutOfRange` if the day does not fit a `DayIndex`.
    pub fn from_julian_day_number(jdn: i64) -> Result<Self, CalendarError> {
        DayIndex::from_julian_day_number(jdn).map(Self::from_day_index)
    }

    pub const fn day_index(&self) -> DayIndex {
        self.day_index
    }

    pub const fn julian_day_number(&self) -> i64 {
        self.day_index.julian_day_number()
    }

    /// Gregorian `(year, month, day)`
    pub const fn gregorian(&self) -> (i32, u8, u8) {
        gregorian::to_civil(self.day_index)
    }

    pub const fn gregorian_year(&self) -> i32 {
        self.gregorian().0
    }

    pub const fn gregorian_month(&self) -> u8 {
        self.gregorian().1
    }

    pub const fn gregorian_day(&self) -> u8 {
        self.gregorian().2
    }

    /// Julian `(year, month, day)`
    pub const fn julian(&self) -> (i32, u8, u8) {
        julian::to_civil(self.day_index)
    }

    pub const fn julian_year(&self) -> i32 {
        self.julian().0
    }

    pub const fn julian_month(&self) -> u8 {
        self.julian().1
    }

    pub const fn julian_day(&self) -> u8 {
        self.julian().2
    }

    /// Decodes the Chinese date. Keep the result when several of its fields
    /// are needed.
    ///
    /// # Errors
    /// `CalendarError::DayOutOfRange` outside 1901-02-19..=2099-12-31.
    pub fn chinese(&self) -> Result<ChineseDate, CalendarError> {
        chinese::to_civil(self.day_index)
    }

    /// # Errors
    /// See [`Date::chinese`].
    pub fn chinese_year(&self) -> Result<i32, CalendarError> {
        self.chinese().map(|c| c.year())
    }

    /// Chinese month code, 17..=28 for an intercalary month
    ///
    /// # Errors
    /// See [`Date::chinese`].
    pub fn chinese_month(&self) -> Result<u8, CalendarError> {
        self.chinese().map(|c| c.month())
    }

    /// # Errors
    /// See [`Date::chinese`].
    pub fn chinese_day(&self) -> Result<u8, CalendarError> {
        self.chinese().map(|c| c.day())
    }

    /// # Errors
    /// See [`Date::chinese`].
    pub fn is_intercalary_month(&self) -> Result<bool, CalendarError> {
        self.chinese().map(|c| c.is_intercalary())
    }

    /// # Errors
    /// See [`Date::chinese`].
    pub fn is_chinese_new_year(&self) -> Result<bool, CalendarError> {
        self.chinese().map(|c| c.month() == 1 && c.day() == 1)
    }

    /// Lunar table record of the Chinese year this date falls in.
    ///
    /// Before the Chinese New Year this is the record of the previous
    /// Gregorian year. Use [`lunar_year_record`] with
    /// [`Date::gregorian_year`] for the record keyed by the Gregorian year.
    ///
    /// # Errors
    /// See [`Date::chinese`].
    pub fn chinese_year_record(&self) -> Result<&'static LunarYear, CalendarError> {
        lunar_table::lookup(self.chinese()?.gregorian_year())
    }

    pub const fn day_of_week(&self) -> Weekday {
        // Day index 0 was a Wednesday
        Weekday::from_number(self.day_index.get() + Weekday::Wednesday as i64)
    }

    /// 1-based day of the Gregorian year
    pub const fn day_of_year(&self) -> u16 {
        gregorian::day_of_year(self.day_index)
    }

    pub const fn is_leap_gregorian_year(&self) -> bool {
        gregorian::is_leap_year(self.gregorian_year())
    }

    /// Length of the Gregorian month containing this date
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn days_in_gregorian_month(&self) -> u8 {
        let (year, month, _) = self.gregorian();
        // Month 13 carries into January of the next year
        (gregorian::day_number(year, month + 1, 1) - gregorian::day_number(year, month, 1)) as u8
    }

    /// The next day, staying at [`DayIndex::MAX`] once there
    pub fn succ(self) -> Self {
        self + 1
    }

    /// The previous day, staying at [`DayIndex::MIN`] once there
    pub fn pred(self) -> Self {
        self - 1
    }

    /// Adds `days`, saturating at the ends of the day index range
    pub fn add_days(self, days: i32) -> Self {
        self + days
    }

    /// Adds `days`, returning `None` past the ends of the day index range
    pub const fn checked_add_days(self, days: i32) -> Option<Self> {
        match self.day_index.checked_add(days) {
            Some(day_index) => Some(Self { day_index }),
            None => None,
        }
    }

    /// Every day from `self` onward
    pub fn iter_days(self) -> impl Iterator<Item = Self> {
        iter::successors(Some(self), |d| d.checked_add_days(1))
    }
}

impl From<DayIndex> for Date {
    fn from(day_index: DayIndex) -> Self {
        Self::from_day_index(day_index)
    }
}

impl From<Date> for DayIndex {
    fn from(date: Date) -> Self {
        date.day_index
    }
}

impl Add<i32> for Date {
    type Output = Self;

    fn add(self, days: i32) -> Self::Output {
        Self::from_day_index(self.day_index + days)
    }
}

impl Sub<i32> for Date {
    type Output = Self;

    fn sub(self, days: i32) -> Self::Output {
        Self::from_day_index(self.day_index - days)
    }
}

/// Days from `rhs` to `self`
impl Sub for Date {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.day_index - rhs.day_index
    }
}

/// ISO 8601 Gregorian date, `YYYY-MM-DD`, with a leading `-` before year 0
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.gregorian();
        if year < 0 {
            write!(f, "{DATE_SEPARATOR}")?;
        }
        write!(
            f,
            "{:04}{DATE_SEPARATOR}{month:02}{DATE_SEPARATOR}{day:02}",
            year.unsigned_abs()
        )
    }
}

impl FromStr for Date {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidFormat(s.to_owned());
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(invalid());
        };
        if !parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(invalid());
        }

        // Parsed wider so that the year -2147483648 keeps its sign
        let year = year.parse::<i64>().map_err(|_| invalid())?;
        let year = i32::try_from(if negative { -year } else { year }).map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        let day = day.parse::<u8>().map_err(|_| invalid())?;
        Self::from_gregorian(year, month, day)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{chinese, gregorian, julian};
    use std::collections::HashSet;

    #[test]
    fn test_2012_anchor() {
        let date = gregorian(2012, 1, 1);
        assert_eq!(date.day_index(), DayIndex::new(55927));
        assert_eq!(date.julian_day_number(), 2_455_928);
        assert_eq!(date.day_of_week(), Weekday::Sunday);
        assert_eq!(date.gregorian(), (2012, 1, 1));
        assert_eq!(date.julian(), (2011, 12, 19));
        assert_eq!(
            (date.julian_year(), date.julian_month(), date.julian_day()),
            (2011, 12, 19)
        );
        assert_eq!(date.chinese_year().unwrap(), 4709);
        assert_eq!(date.chinese_month().unwrap(), 12);
        assert_eq!(date.chinese_day().unwrap(), 8);
        assert_eq!(date.day_of_year(), 1);
    }

    #[test]
    fn test_same_day_from_every_calendar() {
        let from_gregorian = gregorian(2012, 1, 23);
        let from_julian = julian(2012, 1, 10);
        let from_chinese = chinese(4710, 1, 1);
        let from_index = Date::from_day_index(DayIndex::new(55949));
        let from_jdn = Date::from_julian_day_number(2_455_950).unwrap();
        for date in [from_julian, from_chinese, from_index, from_jdn] {
            assert_eq!(date, from_gregorian);
        }

        let set: HashSet<Date> = [from_gregorian, from_julian, from_chinese].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_civil_dispatch() {
        struct TestCase {
            kind: CalendarKind,
            civil: (i32, u8, u8),
            day_index: i64,
        }

        let cases = [
            TestCase {
                kind: CalendarKind::Gregorian,
                civil: (1858, 11, 17),
                day_index: 0,
            },
            TestCase {
                kind: CalendarKind::Julian,
                civil: (1858, 11, 5),
                day_index: 0,
            },
            TestCase {
                kind: CalendarKind::Chinese,
                civil: (4710, 20, 1),
                day_index: 56068,
            },
            TestCase {
                kind: CalendarKind::Gregorian,
                civil: (2099, 12, 31),
                day_index: 88068,
            },
        ];

        for case in &cases {
            let (y, m, d) = case.civil;
            let date = Date::from_civil(case.kind, y, m, d).unwrap();
            assert_eq!(date.day_index().get(), case.day_index, "{} {y}-{m}-{d}", case.kind);
        }
    }

    #[test]
    fn test_from_civil_errors() {
        assert!(matches!(
            Date::from_chinese(4710, 13, 1),
            Err(CalendarError::InvalidDate {
                calendar: CalendarKind::Chinese,
                month: 13,
                ..
            })
        ));
        assert!(matches!(
            Date::from_chinese(1900, 1, 1),
            Err(CalendarError::YearOutOfRange { .. })
        ));
        assert!(matches!(
            Date::from_chinese(2100, 1, 1),
            Err(CalendarError::YearOutOfRange { .. })
        ));
        assert!(matches!(
            Date::from_gregorian(2012, 2, 30),
            Err(CalendarError::InvalidDate {
                calendar: CalendarKind::Gregorian,
                ..
            })
        ));
        assert!(matches!(
            Date::from_julian(1901, 2, 29),
            Err(CalendarError::InvalidDate {
                calendar: CalendarKind::Julian,
                ..
            })
        ));
        assert!(Date::from_julian(1900, 2, 29).is_ok());
        assert!(matches!(
            Date::from_julian_day_number(i64::MAX),
            Err(CalendarError::DayOutOfRange { .. })
        ));
    }

    #[test]
    fn test_chinese_outside_table() {
        let before = gregorian(1901, 1, 1);
        assert!(matches!(before.chinese(), Err(CalendarError::DayOutOfRange { .. })));
        assert!(before.chinese_year().unwrap_err().is_range_error());
        assert!(before.is_intercalary_month().is_err());
        assert!(gregorian(2100, 1, 1).chinese_month().is_err());
        // Gregorian and Julian fields still work
        assert_eq!(before.gregorian(), (1901, 1, 1));
        assert_eq!(before.julian(), (1900, 12, 19));
    }

    #[test]
    fn test_weekday() {
        assert_eq!(Date::from_day_index(DayIndex::EPOCH).day_of_week(), Weekday::Wednesday);
        assert_eq!(Date::from_day_index(DayIndex::new(-1)).day_of_week(), Weekday::Tuesday);
        assert_eq!(gregorian(2000, 1, 1).day_of_week(), Weekday::Saturday);
        assert_eq!(Date::from_day_index(DayIndex::MIN).day_of_week(), Weekday::Tuesday);
        assert_eq!(Date::from_day_index(DayIndex::MAX).day_of_week(), Weekday::Tuesday);

        let mut expected = Date::from_day_index(DayIndex::new(-10_000)).day_of_week().number();
        for raw in -9_999..=100_000 {
            expected = (expected + 1) % 7;
            let date = Date::from_day_index(DayIndex::new(raw));
            assert_eq!(date.day_of_week().number(), expected, "day {raw}");
            assert_eq!((date + 7).day_of_week(), date.day_of_week());
        }
    }

    #[test]
    fn test_leap_anchors() {
        assert!(!gregorian(1900, 6, 1).is_leap_gregorian_year());
        assert!(gregorian(1904, 6, 1).is_leap_gregorian_year());
        assert!(gregorian(2000, 6, 1).is_leap_gregorian_year());
        assert!(!gregorian(2023, 6, 1).is_leap_gregorian_year());
    }

    #[test]
    fn test_days_in_gregorian_month() {
        assert_eq!(gregorian(2012, 2, 10).days_in_gregorian_month(), 29);
        assert_eq!(gregorian(1900, 2, 10).days_in_gregorian_month(), 28);
        assert_eq!(gregorian(2012, 12, 31).days_in_gregorian_month(), 31);
        assert_eq!(gregorian(2012, 4, 1).days_in_gregorian_month(), 30);
    }

    #[test]
    fn test_intercalary_and_new_year() {
        assert!(gregorian(2012, 5, 21).is_intercalary_month().unwrap());
        assert!(!gregorian(2012, 6, 19).is_intercalary_month().unwrap());
        assert!(gregorian(2012, 1, 23).is_chinese_new_year().unwrap());
        assert!(!gregorian(2012, 1, 24).is_chinese_new_year().unwrap());
    }

    #[test]
    fn test_chinese_year_record() {
        // Still in the Chinese year that began in 2011
        let date = gregorian(2012, 1, 1);
        let record = date.chinese_year_record().unwrap();
        assert_eq!(record.gregorian_year(), 2011);
        assert_eq!(record.gregorian_year(), date.chinese().unwrap().gregorian_year());
        assert_eq!(lunar_year_record(date.gregorian_year()).unwrap().gregorian_year(), 2012);

        let record = gregorian(2012, 6, 1).chinese_year_record().unwrap();
        assert_eq!(record.leap_month(), Some(4));
        assert_eq!(lunar_year_record(2012).unwrap(), record);
        assert!(gregorian(1901, 1, 1).chinese_year_record().is_err());
    }

    #[test]
    fn test_stepping() {
        let date = gregorian(2012, 2, 28);
        assert_eq!(date.succ(), gregorian(2012, 2, 29));
        assert_eq!(date.succ().succ(), gregorian(2012, 3, 1));
        assert_eq!(gregorian(2012, 1, 1).pred(), gregorian(2011, 12, 31));
        assert_eq!(date.add_days(-28), gregorian(2012, 1, 31));
        assert_eq!(date + 366, gregorian(2013, 2, 28));
        assert_eq!(date - 59, gregorian(2011, 12, 31));
        assert_eq!(gregorian(2013, 1, 1) - gregorian(2012, 1, 1), 366);
        assert_eq!(gregorian(2012, 1, 1) - gregorian(2013, 1, 1), -366);
        // Stepping returns a new value
        assert_eq!(date, gregorian(2012, 2, 28));

        let last = Date::from_day_index(DayIndex::MAX);
        assert_eq!(last.checked_add_days(1), None);
        assert_eq!(last.checked_add_days(-1), Some(last.pred()));
    }

    #[test]
    fn test_stepping_at_day_index_limits() {
        let first = Date::from_day_index(DayIndex::MIN);
        let last = Date::from_day_index(DayIndex::MAX);
        assert_eq!(last.succ(), last);
        assert!(last.succ() >= last);
        assert_eq!(last + i32::MAX, last);
        assert!(last.pred() < last);
        assert_eq!(first.pred(), first);
        assert_eq!(first - i32::MAX, first);
        assert!(first.succ() > first);
        assert_eq!(last.gregorian(), (i32::MAX, 12, 31));
        assert_eq!(last.days_in_gregorian_month(), 31);
        assert_eq!(first.gregorian(), (i32::MIN, 1, 1));

        // Sums past the i32 range are still exact
        let far = Date::from_day_index(DayIndex::new(2_000_000_000));
        assert_eq!(far.add_days(500_000_000).day_index().get(), 2_500_000_000);
        assert_eq!(far.add_days(500_000_000) - far, 500_000_000);
    }

    #[test]
    fn test_iter_days() {
        let days: Vec<Date> = gregorian(2012, 2, 27).iter_days().take(3).collect();
        assert_eq!(days, [gregorian(2012, 2, 27), gregorian(2012, 2, 28), gregorian(2012, 2, 29)]);
        assert_eq!(Date::from_day_index(DayIndex::MAX).iter_days().count(), 1);
    }

    #[test]
    fn test_ordering() {
        assert!(gregorian(2012, 1, 1) < gregorian(2012, 1, 2));
        assert!(chinese(4710, 20, 1) < chinese(4710, 5, 1));
        assert_eq!(Date::default(), Date::from_day_index(DayIndex::EPOCH));
    }

    #[test]
    fn test_display() {
        assert_eq!(gregorian(2012, 1, 1).to_string(), "2012-01-01");
        assert_eq!(gregorian(33, 7, 4).to_string(), "0033-07-04");
        assert_eq!(gregorian(0, 1, 1).to_string(), "0000-01-01");
        assert_eq!(gregorian(-1, 12, 31).to_string(), "-0001-12-31");
        assert_eq!(gregorian(12345, 6, 7).to_string(), "12345-06-07");
    }

    #[test]
    fn test_parse() {
        assert_eq!("2012-01-01".parse::<Date>().unwrap(), gregorian(2012, 1, 1));
        assert_eq!(" 2012-02-29 ".parse::<Date>().unwrap(), gregorian(2012, 2, 29));
        assert_eq!("-0001-12-31".parse::<Date>().unwrap(), gregorian(-1, 12, 31));
        assert_eq!(
            "-2147483648-01-01".parse::<Date>().unwrap().day_index(),
            DayIndex::MIN
        );
        assert_eq!(
            "2147483647-12-31".parse::<Date>().unwrap().day_index(),
            DayIndex::MAX
        );
        assert!(matches!(
            "2147483648-01-01".parse::<Date>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2011-02-29".parse::<Date>(),
            Err(CalendarError::InvalidDate { .. })
        ));
        for bad in ["", "2012", "2012-01", "2012-01-01-01", "2012/01/01", "2012-1a-01", "2012--01", "+2012-01-01"] {
            assert!(
                matches!(bad.parse::<Date>(), Err(CalendarError::InvalidFormat(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_display_parse_extremes() {
        for raw in [DayIndex::MIN.get(), i64::from(i32::MIN), -1_000_000, 0, 1_000_000, DayIndex::MAX.get()] {
            let date = Date::from_day_index(DayIndex::new(raw));
            assert_eq!(date.to_string().parse::<Date>().unwrap(), date, "day {raw}");
        }
    }

    #[test]
    fn test_serde() {
        let date = gregorian(2012, 5, 21);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2012-05-21""#);
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        let result: Result<Date, _> = serde_json::from_str(r#""2012-02-30""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_conversions() {
        let day_index = DayIndex::new(55927);
        let date = Date::from(day_index);
        let back: DayIndex = date.into();
        assert_eq!(back, day_index);
    }
}
