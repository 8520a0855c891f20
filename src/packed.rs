//! A year, month and day packed into a single `i32`.
//!
//! Experimental and unused by the rest of the crate. Fields are stored
//! off-by-one so that the all-zero value is 0001-01-01:
//!
//! | bits   | field     | range       |
//! |--------|-----------|-------------|
//! | 0..6   | day - 1   | 1..=64      |
//! | 6..10  | month - 1 | 1..=16      |
//! | 10..25 | year - 1  | ±16K        |
//!
//! Nothing is validated. A month or day outside its range silently
//! spills into the neighbouring field.

use std::fmt;
use std::str::FromStr;

use crate::ParseError;
use crate::prelude::*;

const DAY_BITS: u32 = 6;
const MONTH_BITS: u32 = 4;
const YEAR_SHIFT: u32 = DAY_BITS + MONTH_BITS;

const DAY_MASK: i32 = (1 << DAY_BITS) - 1;
const MONTH_MASK: i32 = ((1 << MONTH_BITS) - 1) << DAY_BITS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, From, Into)]
pub struct PackedYearMonthDay(i32);

impl PackedYearMonthDay {
    /// Packs the fields with no range checks.
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self(
            (year.wrapping_sub(1) << YEAR_SHIFT)
                | (month.wrapping_sub(1) << DAY_BITS)
                | day.wrapping_sub(1),
        )
    }

    pub const fn year(self) -> i32 {
        (self.0 >> YEAR_SHIFT) + 1
    }

    pub const fn month(self) -> i32 {
        ((self.0 & MONTH_MASK) >> DAY_BITS) + 1
    }

    pub const fn day(self) -> i32 {
        (self.0 & DAY_MASK) + 1
    }
}

impl fmt::Display for PackedYearMonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        let sign = if year < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:04}-{:02}-{:02}",
            year.unsigned_abs(),
            self.month(),
            self.day()
        )
    }
}

impl FromStr for PackedYearMonthDay {
    type Err = ParseError;

    /// Reads `[-]Y-M-D`. The numbers are not range-checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidFormat(s.to_owned());
        let (negative, unsigned) = s.strip_prefix('-').map_or((false, s), |rest| (true, rest));

        let mut parts = unsigned.split('-').map(str::parse::<i32>);
        let (Some(Ok(year)), Some(Ok(month)), Some(Ok(day)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let year = if negative { -year } else { year };
        Ok(Self::new(year, month, day))
    }
}
