//! Conversion between day counts and proleptic Gregorian (year, month, day).
//!
//! Day zero is 0001-01-01. Years are astronomical: year 0 is 1 BC.

use crate::consts::{
    DAYS_BEFORE_MONTH, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, DAYS_PER_4_YEARS, DAYS_PER_YEAR,
    GREGORIAN_CYCLE, MONTHS_PER_YEAR, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::types::{Month, Weekday, days_in_month, is_leap_year};

/// A day count broken down into calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Civil {
    pub year: i64,
    pub month: Month,
    pub day: u8,
    /// Day of the year, 1-based
    pub year_day: u16,
}

/// Days from 0001-01-01 to January 1 of `year`.
const fn days_before_year(year: i64) -> i64 {
    let y = year.saturating_sub(1);
    y.saturating_mul(DAYS_PER_YEAR)
        .saturating_add(y.div_euclid(4))
        .saturating_sub(y.div_euclid(100))
        .saturating_add(y.div_euclid(GREGORIAN_CYCLE))
}

/// Normalizes (year, month, day) into a day count. Month and day may be
/// outside their usual ranges; the excess carries into the larger unit.
pub(crate) const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let month0 = month.saturating_sub(1);
    let year = year.saturating_add(month0.div_euclid(MONTHS_PER_YEAR));
    // rem_euclid(12) is always in 0..12
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let month0 = month0.rem_euclid(MONTHS_PER_YEAR) as usize;

    let mut days = days_before_year(year).saturating_add(DAYS_BEFORE_MONTH[month0]);
    if month0 >= 2 && is_leap_year(year) {
        days = days.saturating_add(1);
    }
    days.saturating_add(day.saturating_sub(1))
}

/// Seconds from midnight for (hour, minute, second), with carry and no range checks.
pub(crate) const fn seconds_from_clock(hour: i64, minute: i64, second: i64) -> i64 {
    hour.saturating_mul(SECONDS_PER_HOUR)
        .saturating_add(minute.saturating_mul(SECONDS_PER_MINUTE))
        .saturating_add(second)
}

/// Normalizes a full date and time into seconds since 0001-01-01T00:00:00.
pub(crate) const fn seconds_from_civil(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
) -> i64 {
    days_from_civil(year, month, day)
        .saturating_mul(SECONDS_PER_DAY)
        .saturating_add(seconds_from_clock(hour, minute, second))
}

/// Breaks a day count into calendar fields.
///
/// Works like the cycle split in the Gregorian calendar itself: whole
/// 400-year cycles first, then 100-year, 4-year and single years. Each
/// cycle starts on a year congruent to 1 mod its length, so the leap day
/// always falls at the end of a cycle and the "last" cycle of each level is
/// one day longer than the others.
pub(crate) fn civil_from_days(days: i64) -> Civil {
    let mut year = days.div_euclid(DAYS_PER_400_YEARS) * GREGORIAN_CYCLE;
    let mut rem = days.rem_euclid(DAYS_PER_400_YEARS);

    let mut n = rem / DAYS_PER_100_YEARS;
    n -= n >> 2;
    year += 100 * n;
    rem -= DAYS_PER_100_YEARS * n;

    n = rem / DAYS_PER_4_YEARS;
    year += 4 * n;
    rem -= DAYS_PER_4_YEARS * n;

    n = rem / DAYS_PER_YEAR;
    n -= n >> 2;
    year += n + 1;
    rem -= DAYS_PER_YEAR * n;

    // rem is now the 0-based day of the year, at most 365
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let year_day = rem as u16 + 1;

    let mut month = Month::December;
    for candidate in Month::ALL {
        let len = i64::from(days_in_month(year, candidate));
        if rem < len {
            month = candidate;
            break;
        }
        rem -= len;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = rem as u8 + 1;

    Civil {
        year,
        month,
        day,
        year_day,
    }
}

/// Day of the week for a day count. 0001-01-01 was a Monday.
pub(crate) fn weekday_from_days(days: i64) -> Weekday {
    Weekday::from_days_after_monday(days)
}

/// ISO 8601 (year, week) for a day count.
///
/// A week belongs to the year that contains its Thursday, so the week
/// number is just the Thursday's ordinal day divided by seven.
pub(crate) fn iso_week_from_days(days: i64) -> (i64, u8) {
    let offset = i64::from(weekday_from_days(days).days_from_monday());
    let thursday = civil_from_days(days.saturating_sub(offset).saturating_add(3));
    // year_day <= 366, so the week is at most 53
    #[allow(clippy::cast_possible_truncation)]
    let week = ((thursday.year_day - 1) / 7 + 1) as u8;
    (thursday.year, week)
}

/// Splits seconds since midnight into (hour, minute, second).
///
/// Input must be in `0..SECONDS_PER_DAY`.
pub(crate) const fn clock_from_seconds(seconds: i64) -> (u8, u8, u8) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hms = (
        (seconds / SECONDS_PER_HOUR) as u8,
        (seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
        (seconds % SECONDS_PER_MINUTE) as u8,
    );
    hms
}
