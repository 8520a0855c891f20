use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::Deserialize;

use crate::civil::{civil_from_days, days_from_civil, iso_week_from_days, weekday_from_days};
use crate::clock::unix_seconds_now;
use crate::consts::{JANUARY, NANOS_PER_DAY, SECONDS_PER_DAY, UNIX_EPOCH_DAYS};
use crate::{Duration, Month, ParseError, Weekday, parse};

/// A date without a time of day or a time zone.
///
/// Internally this is the number of days since 0001-01-01, so comparison
/// and arithmetic are plain integer operations. The default value,
/// 0001-01-01, is the "zero" date (see [`LocalDate::is_zero`]).
///
/// Serializes as a `YYYY-MM-DD` string and deserializes from anything
/// [`parse_date`](crate::parse_date) accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LocalDate {
    days: i64,
}

impl LocalDate {
    /// Returns the date for `year-month-day`.
    ///
    /// Month and day may be outside their usual ranges and are normalized,
    /// so `LocalDate::new(2019, 10, 32)` is November 1 and
    /// `LocalDate::new(2019, 3, 0)` is February 28.
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self {
            days: days_from_civil(year, month, day),
        }
    }

    /// Returns day `year_day` of `year`, counting January 1 as day 1.
    ///
    /// Days past the end of the year roll into the next one, so day 366 of
    /// a non-leap year is January 1 of the following year.
    pub fn from_ordinal(year: i64, year_day: i64) -> Self {
        Self::new(year, JANUARY, 1)
            .add_duration(Duration::from_days(year_day.saturating_sub(1)))
    }

    /// The date, in UTC, that contains the Unix timestamp `seconds`.
    pub const fn from_unix(seconds: i64) -> Self {
        Self {
            days: seconds.div_euclid(SECONDS_PER_DAY).saturating_add(UNIX_EPOCH_DAYS),
        }
    }

    /// The current date in UTC.
    pub fn today() -> Self {
        Self::from_unix(unix_seconds_now())
    }

    /// Parses text in any of the supported date layouts.
    ///
    /// Every layout takes exactly four year digits, so only years from
    /// -9999 to 9999 survive a trip through [`Display`](std::fmt::Display)
    /// and back.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the text matches no layout.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse::parse_date(s)
    }

    /// Parses text that is known to be a valid date.
    ///
    /// # Panics
    /// Panics if the text matches no layout.
    pub fn must_parse(s: &str) -> Self {
        parse::must_parse_date(s)
    }

    pub fn before(self, other: Self) -> bool {
        self < other
    }

    pub fn after(self, other: Self) -> bool {
        self > other
    }

    pub fn equal(self, other: Self) -> bool {
        self == other
    }

    /// Reports whether this is the zero date, January 1 of year 1.
    pub const fn is_zero(self) -> bool {
        self.days == 0
    }

    /// Returns the year, month and day.
    pub fn ymd(self) -> (i64, Month, u8) {
        let civil = civil_from_days(self.days);
        (civil.year, civil.month, civil.day)
    }

    /// The year. Year 0 is 1 BC, year -1 is 2 BC and so on.
    pub fn year(self) -> i64 {
        civil_from_days(self.days).year
    }

    pub fn month(self) -> Month {
        civil_from_days(self.days).month
    }

    /// The day of the month, from 1 to 31.
    pub fn day(self) -> u8 {
        civil_from_days(self.days).day
    }

    pub fn weekday(self) -> Weekday {
        weekday_from_days(self.days)
    }

    /// Returns the ISO 8601 year and week number (1 to 53).
    ///
    /// January 1 to 3 may belong to the last week of the previous year,
    /// and December 29 to 31 to the first week of the next.
    pub fn iso_week(self) -> (i64, u8) {
        iso_week_from_days(self.days)
    }

    /// The day of the year, from 1 to 365, or 366 in leap years.
    pub fn year_day(self) -> u16 {
        civil_from_days(self.days).year_day
    }

    /// Seconds from 1970-01-01T00:00:00 UTC to midnight UTC of this date.
    pub const fn unix(self) -> i64 {
        self.days
            .saturating_sub(UNIX_EPOCH_DAYS)
            .saturating_mul(SECONDS_PER_DAY)
    }

    pub(crate) const fn from_days(days: i64) -> Self {
        Self { days }
    }

    pub(crate) const fn days(self) -> i64 {
        self.days
    }

    /// Returns the date `duration` later, ignoring any part of a day.
    ///
    /// The duration is truncated towards zero, so adding 47 hours moves
    /// one day forward and adding -47 hours one day back.
    pub const fn add_duration(self, duration: Duration) -> Self {
        Self {
            days: self.days.saturating_add(duration.whole_days()),
        }
    }

    /// Adds years, months and days, normalizing the result the same way as
    /// [`LocalDate::new`]. Adding one month to October 31 gives December 1.
    pub fn add_date(self, years: i64, months: i64, days: i64) -> Self {
        let (year, month, day) = self.ymd();
        Self::new(
            year.saturating_add(years),
            i64::from(month).saturating_add(months),
            i64::from(day).saturating_add(days),
        )
    }

    /// The duration from `earlier` to `self`, a whole number of days.
    ///
    /// Saturates at [`Duration::MAX`] or [`Duration::MIN`] when the gap is
    /// too large to represent (about 292 years).
    pub fn duration_since(self, earlier: Self) -> Duration {
        let nanos = (i128::from(self.days) - i128::from(earlier.days)) * i128::from(NANOS_PER_DAY);
        i64::try_from(nanos).map_or(
            if nanos < 0 { Duration::MIN } else { Duration::MAX },
            Duration::from_nanos,
        )
    }
}

impl Add<Duration> for LocalDate {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        self.add_duration(rhs)
    }
}

impl Sub<Duration> for LocalDate {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        self.add_duration(-rhs)
    }
}

impl Sub<LocalDate> for LocalDate {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.duration_since(rhs)
    }
}

/// `YYYY-MM-DD`, with a leading `-` for negative years and more than four
/// year digits outside -9999 to 9999.
impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.ymd();
        let sign = if year < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:04}-{:02}-{day:02}",
            year.unsigned_abs(),
            month.number()
        )
    }
}

impl FromStr for LocalDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_date(s)
    }
}

impl serde::Serialize for LocalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for LocalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
