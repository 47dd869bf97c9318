//! Shorthand constructors for tests.

use crate::Date;

pub fn gregorian(year: i32, month: u8, day: u8) -> Date {
    Date::from_gregorian(year, month, day).unwrap()
}

pub fn julian(year: i32, month: u8, day: u8) -> Date {
    Date::from_julian(year, month, day).unwrap()
}

pub fn chinese(year: i32, month: u8, day: u8) -> Date {
    Date::from_chinese(year, month, day).unwrap()
}
