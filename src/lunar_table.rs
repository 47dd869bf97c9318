//! Packed per-year records of the Chinese lunisolar calendar, 1901-2099.
//!
//! Each record is one `u32`:
//!
//! | bits    | meaning                                                    |
//! |---------|------------------------------------------------------------|
//! | 28..=31 | leap month, `0` if the year has none                       |
//! | 15..=27 | month positions 1..=13, bit set for a 30-day month         |
//! | 0..=14  | day offset of Chinese New Year from the record's band start |
//!
//! Records come in four 50-year bands; the offset of every record is counted
//! from the day before January 1 of the band's first year.

use serde::Serialize;

use crate::CalendarError;
use crate::consts::{
    BIG_MONTH_DAYS, FIRST_LUNAR_YEAR, INTERCALARY_MONTH_OFFSET, LAST_LUNAR_YEAR, LUNAR_TABLE_LEN, MAX_LUNAR_MONTHS,
    MAX_MONTH, SMALL_MONTH_DAYS,
};
use crate::types::DayIndex;

/// Day index of 1900-12-31
const BAND_1901: i64 = 15_384;
/// Day index of 1950-12-31
const BAND_1951: i64 = 33_646;
/// Day index of 2000-12-31
const BAND_2001: i64 = 51_909;
/// Day index of 2050-12-31
const BAND_2051: i64 = 70_171;

const LEAP_SHIFT: u32 = 28;
const NEW_YEAR_MASK: u32 = 0x7FFF;
/// Bit of month position 1; position `p` lives at `MONTH_BIT_TOP - p`
const MONTH_BIT_TOP: u32 = 28;

#[rustfmt::skip]
#[allow(clippy::unreadable_literal)]
const RAW_TABLE: [u32; LUNAR_TABLE_LEN] = [
    // 1901-1910
    0x04AE0032, 0x0A570194, 0x552682F7, 0x0D260476, 0x0D9505D8, 0x46AA873B, 0x056A08BB, 0x09AD0A1D, 0x24AE8B80, 0x04AE0D00,
    // 1911-1920
    0x6A4D8E62, 0x0A4D0FE2, 0x0D251144, 0x5D5292A6, 0x0B541426, 0x0D6A1588, 0x296D16EB, 0x095B186B, 0x749B99CE, 0x04971B4E,
    // 1921-1930
    0x0A4B1CB0, 0x5B259E12, 0x06A51F92, 0x06D420F4, 0x4ADAA256, 0x02B623D7, 0x09572539, 0x2497A69C, 0x0497281C, 0x664B297E,
    // 1931-1940
    0x0D4A2AFD, 0x0EA52C5F, 0x56D4ADC2, 0x05AD2F42, 0x02B630A5, 0x39373207, 0x092E3387, 0x7C96B4E9, 0x0C953669, 0x0D4A37CB,
    // 1941-1950
    0x6DA5392D, 0x0B553AAD, 0x056A3C10, 0x4AADBD72, 0x025D3EF3, 0x092D4055, 0x2C95C1B7, 0x0A954337, 0x7B4AC499, 0x06CA4619,
    // 1951-1960
    0x0B550025, 0x555A8188, 0x04DA0308, 0x0A5B046A, 0x352B85CD, 0x052B074D, 0x8A9508AF, 0x0E950A2E, 0x06AA0B91, 0x6AD50CF3,
    // 1961-1970
    0x0AB50E73, 0x04B60FD6, 0x4A571138, 0x0A5712B8, 0x0526141B, 0x3E93157C, 0x0D9516FC, 0x75AA985F, 0x056A19DF, 0x096D1B41,
    // 1971-1980
    0x54AE9CA4, 0x04AD1E24, 0x0A4D1F86, 0x4D26A0E8, 0x0D252268, 0x8D52A3CA, 0x0B54254A, 0x0B6A26AC, 0x696D280F, 0x095B298F,
    // 1981-1990
    0x049B2AF2, 0x4A4BAC54, 0x0A4B2DD4, 0xAB25AF36, 0x06A530B6, 0x06D43218, 0x6ADA337A, 0x0AB634FA, 0x0937365D, 0x5497B7C0,
    // 1991-2000
    0x04973940, 0x064B3AA2, 0x36A53C04, 0x0EA53D83, 0x86B2BEE6, 0x05AC4066, 0x0AB641C8, 0x5936C32B, 0x092E44AB, 0x0C96460D,
    // 2001-2010
    0x4D4A8018, 0x0D4A0198, 0x0DA502FA, 0x25AA845D, 0x056A05DD, 0x7AAD873F, 0x025D08C0, 0x092D0A22, 0x5C958B84, 0x0A950D04,
    // 2011-2020
    0x0B4A0E66, 0x4B550FC8, 0x0AD51148, 0x955A92AB, 0x04BA142B, 0x0A5B158D, 0x652B96F0, 0x052B1870, 0x0A9319D2, 0x474A9B34,
    // 2021-2030
    0x06AA1CB4, 0x0AD51E16, 0x24DA9F79, 0x04B620F9, 0x6957225B, 0x0A4E23DB, 0x0D26253D, 0x5E93269F, 0x0D53281F, 0x05AA2982,
    // 2031-2040
    0x36B52AE4, 0x096D2C64, 0xB4AEADC7, 0x04AD2F47, 0x0A4D30A9, 0x6D25B20B, 0x0D25338B, 0x0D5234ED, 0x5DAA364F, 0x0B5A37CF,
    // 2041-2050
    0x056D3932, 0x24ADBA95, 0x049B3C15, 0x7A4BBD77, 0x0A4B3EF7, 0x0AA54059, 0x5B52C1BB, 0x06D2433B, 0x0ADA449D, 0x355B4600,
    // 2051-2060
    0x0937002A, 0x8497818D, 0x0497030D, 0x064B046F, 0x66A505D1, 0x0EA50750, 0x06B208B3, 0x4AB60A15, 0x0AAE0B95, 0x092E0CF8,
    // 2061-2070
    0x3C970E5A, 0x0C960FDA, 0x7D4A913C, 0x0D4A12BC, 0x0DA5141E, 0x55AA9581, 0x056A1701, 0x0A6D1863, 0x452E99C6, 0x052D1B46,
    // 2071-2080
    0x8A959CA8, 0x0A951E28, 0x0B4A1F8A, 0x6B5520EC, 0x0AD5226C, 0x055A23CF, 0x4A5D2531, 0x0A5B26B1, 0x052B2814, 0x3A93A976,
    // 2081-2090
    0x06932AF6, 0x7729AC58, 0x06AA2DD8, 0x0AD52F3A, 0x54DAB09D, 0x04B6321D, 0x0A57337F, 0x452734E2, 0x0D263661, 0x8E9337C3,
    // 2091-2099
    0x0D523943, 0x0DAA3AA5, 0x66B53C08, 0x056D3D88, 0x04AE3EEB, 0x4A4EC04D, 0x0A4D41CD, 0x0D15432F, 0x2D92C491,
];

static TABLE: [LunarYear; LUNAR_TABLE_LEN] = decode_table();

/// One decoded year of the lunar table, keyed by Gregorian year.
///
/// Month *positions* count the months of the year in order, 1..=13.
/// Month *codes* are what callers see: 1..=12, with the intercalary month
/// reported as the month it repeats plus 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarYear {
    gregorian_year: i32,
    leap_month: Option<u8>,
    month_lengths: [bool; MAX_LUNAR_MONTHS as usize],
    new_year_offset: u16,
    cycle_start: DayIndex,
}

const fn band_start(year: i32) -> DayIndex {
    DayIndex::new(if year > 2050 {
        BAND_2051
    } else if year > 2000 {
        BAND_2001
    } else if year > 1950 {
        BAND_1951
    } else {
        BAND_1901
    })
}

#[allow(clippy::cast_possible_truncation)]
const fn decode(gregorian_year: i32, raw: u32) -> LunarYear {
    let leap = (raw >> LEAP_SHIFT) as u8;
    let mut month_lengths = [false; MAX_LUNAR_MONTHS as usize];
    let mut i = 0;
    while i < month_lengths.len() {
        month_lengths[i] = raw & (1 << (MONTH_BIT_TOP - 1 - i as u32)) != 0;
        i += 1;
    }
    LunarYear {
        gregorian_year,
        leap_month: if leap == 0 { None } else { Some(leap) },
        month_lengths,
        new_year_offset: (raw & NEW_YEAR_MASK) as u16,
        cycle_start: band_start(gregorian_year),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn decode_table() -> [LunarYear; LUNAR_TABLE_LEN] {
    let mut table = [decode(FIRST_LUNAR_YEAR, RAW_TABLE[0]); LUNAR_TABLE_LEN];
    let mut i = 1;
    while i < LUNAR_TABLE_LEN {
        table[i] = decode(FIRST_LUNAR_YEAR + i as i32, RAW_TABLE[i]);
        i += 1;
    }
    table
}

/// Returns the record of Gregorian `year`.
///
/// # Errors
/// `CalendarError::YearOutOfRange` outside 1901..=2099.
#[allow(clippy::cast_sign_loss)]
pub fn lookup(year: i32) -> Result<&'static LunarYear, CalendarError> {
    let out_of_range = CalendarError::YearOutOfRange {
        year,
        min: FIRST_LUNAR_YEAR,
        max: LAST_LUNAR_YEAR,
    };
    if !(FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR).contains(&year) {
        return Err(out_of_range);
    }
    TABLE.get((year - FIRST_LUNAR_YEAR) as usize).ok_or(out_of_range)
}

/// All records in Gregorian year order
#[cfg(test)]
pub(crate) fn records() -> impl DoubleEndedIterator<Item = &'static LunarYear> + ExactSizeIterator {
    TABLE.iter()
}

impl LunarYear {
    pub const fn gregorian_year(&self) -> i32 {
        self.gregorian_year
    }

    /// The ordinary month this year repeats, if any
    pub const fn leap_month(&self) -> Option<u8> {
        self.leap_month
    }

    /// 30-day flags by month position; slot 12 is only used in leap years
    pub const fn month_lengths(&self) -> [bool; MAX_LUNAR_MONTHS as usize] {
        self.month_lengths
    }

    /// The 13 month-length bits as stored, month position 1 most significant
    pub const fn month_length_mask(&self) -> u16 {
        let mut mask = 0;
        let mut i = 0;
        while i < self.month_lengths.len() {
            mask <<= 1;
            if self.month_lengths[i] {
                mask |= 1;
            }
            i += 1;
        }
        mask
    }

    /// Days from `cycle_start` to Chinese New Year
    pub const fn new_year_offset(&self) -> u16 {
        self.new_year_offset
    }

    /// Day before January 1 of the first year of this record's 50-year band
    pub const fn cycle_start(&self) -> DayIndex {
        self.cycle_start
    }

    /// Chinese New Year of this Gregorian year
    pub const fn new_year(&self) -> DayIndex {
        DayIndex::new(self.cycle_start.get() + self.new_year_offset as i64)
    }

    /// 13 in leap years, otherwise 12
    pub const fn month_count(&self) -> u8 {
        if self.leap_month.is_some() { MAX_LUNAR_MONTHS } else { MAX_MONTH }
    }

    /// Length of the month at `position`, `None` past the end of the year.
    pub const fn month_len(&self, position: u8) -> Option<u8> {
        if position == 0 || position > self.month_count() {
            None
        } else if self.month_lengths[(position - 1) as usize] {
            Some(BIG_MONTH_DAYS)
        } else {
            Some(SMALL_MONTH_DAYS)
        }
    }

    /// Month lengths in year order
    pub fn lengths(&self) -> impl Iterator<Item = u8> + '_ {
        self.month_lengths[..usize::from(self.month_count())]
            .iter()
            .map(|&big| if big { BIG_MONTH_DAYS } else { SMALL_MONTH_DAYS })
    }

    /// Days from this New Year to the next
    pub fn days_in_year(&self) -> u16 {
        self.lengths().map(u16::from).sum()
    }

    /// Month code shown for `position`.
    ///
    /// With leap month `L`, position `L + 1` is the intercalary month
    /// (`L + 16`) and later positions move down by one.
    pub const fn month_code(&self, position: u8) -> u8 {
        match self.leap_month {
            Some(leap) if position == leap + 1 => leap + INTERCALARY_MONTH_OFFSET,
            Some(leap) if position > leap + 1 => position - 1,
            _ => position,
        }
    }

    /// Month position of `code`, `None` if this year has no such month.
    pub const fn month_position(&self, code: u8) -> Option<u8> {
        if code >= 1 && code <= MAX_MONTH {
            match self.leap_month {
                Some(leap) if code > leap => Some(code + 1),
                _ => Some(code),
            }
        } else if code > INTERCALARY_MONTH_OFFSET {
            match self.leap_month {
                Some(leap) if code - INTERCALARY_MONTH_OFFSET == leap => Some(leap + 1),
                _ => None,
            }
        } else {
            None
        }
    }

    /// Length of the month with `code`
    pub const fn days_in_month(&self, code: u8) -> Option<u8> {
        match self.month_position(code) {
            Some(position) => self.month_len(position),
            None => None,
        }
    }
}
