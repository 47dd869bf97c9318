/// First Gregorian year covered by the lunar table (inclusive)
pub const FIRST_LUNAR_YEAR: i32 = 1901;
/// Last Gregorian year covered by the lunar table (inclusive)
pub const LAST_LUNAR_YEAR: i32 = 2099;
/// Number of records in the lunar table
pub const LUNAR_TABLE_LEN: usize = (LAST_LUNAR_YEAR - FIRST_LUNAR_YEAR + 1) as usize;

/// Chinese year 1 began in 2698 BCE (Chinese-American convention)
pub const CHINESE_YEAR_OFFSET: i32 = 2698;
/// First Chinese year covered by the lunar table (inclusive)
pub const FIRST_CHINESE_YEAR: i32 = FIRST_LUNAR_YEAR + CHINESE_YEAR_OFFSET;
/// Last Chinese year covered by the lunar table (inclusive)
pub const LAST_CHINESE_YEAR: i32 = LAST_LUNAR_YEAR + CHINESE_YEAR_OFFSET;

/// Added to a month number to mark it as the intercalary repeat of that month
pub const INTERCALARY_MONTH_OFFSET: u8 = 16;
/// Days in a "small" lunar month
pub const SMALL_MONTH_DAYS: u8 = 29;
/// Days in a "big" lunar month
pub const BIG_MONTH_DAYS: u8 = 30;
/// Maximum month slots in a lunar year (12 ordinary plus one intercalary)
pub const MAX_LUNAR_MONTHS: u8 = 13;

/// Day index of the Chinese New Year of 1901, the first decodable day
pub const FIRST_CHINESE_DAY: i64 = 15_434;
/// Day index of Gregorian 2099-12-31, the last decodable day
pub const LAST_CHINESE_DAY: i64 = 88_068;

/// Julian Day Number of the day with day index 0 (1858-11-17)
pub const JULIAN_DAY_OFFSET: i64 = 2_400_001;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;
/// Maximum valid Gregorian/Julian month (December)
pub const MAX_MONTH: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by the leap year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
