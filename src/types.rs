use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A month of the Gregorian calendar.
///
/// The discriminants are the conventional month numbers, so
/// `Month::March as u8 == 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub(crate) const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Returns the month for a 1-based month number, or `None` outside `1..=12`.
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// Returns the month number (1..=12)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

impl From<Month> for i64 {
    fn from(month: Month) -> Self {
        Self::from(month.number())
    }
}

/// A day of the week, starting from Monday as ISO 8601 does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Monday = 1,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the weekday `n` days after a Monday; `n` may be negative.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn from_days_after_monday(n: i64) -> Self {
        // rem_euclid(7) is always in 0..7
        Self::ALL[n.rem_euclid(7) as usize]
    }

    /// ISO 8601 weekday number, Monday = 1 through Sunday = 7
    #[inline]
    pub const fn number_from_monday(self) -> u8 {
        self as u8
    }

    /// Days since the preceding Monday (Monday = 0)
    #[inline]
    pub const fn days_from_monday(self) -> u8 {
        self as u8 - 1
    }
}

// Helper functions

/// Gregorian leap-year rule over astronomical years (year 0 is 1 BC and is a leap year).
pub const fn is_leap_year(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

pub const fn days_in_month(year: i64, month: Month) -> u8 {
    if month as u8 == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
