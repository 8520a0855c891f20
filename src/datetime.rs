use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::Deserialize;

use crate::civil::{
    Civil, civil_from_days, clock_from_seconds, iso_week_from_days, seconds_from_civil,
    weekday_from_days,
};
use crate::clock::unix_seconds_now;
use crate::consts::{NANOS_PER_SECOND, SECONDS_PER_DAY, UNIX_EPOCH_DAYS};
use crate::{Duration, LocalDate, Month, ParseError, Weekday, parse};

/// A date and time of day, to the second, without a time zone.
///
/// Useful when something happens at a wall-clock time wherever you are,
/// such as a dose of medication scheduled for 08:00 regardless of which
/// time zone the patient is in. Because such a value never names a
/// unique instant there is no sub-second part.
///
/// Internally this is the number of seconds since 0001-01-01T00:00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LocalDateTime {
    seconds: i64,
}

impl LocalDateTime {
    /// Returns the date-time for the given fields.
    ///
    /// Every field may be outside its usual range; the excess carries into
    /// the next larger unit, so hour 24 is midnight of the following day.
    pub const fn new(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Self {
        Self {
            seconds: seconds_from_civil(year, month, day, hour, minute, second),
        }
    }

    /// The date-time, in UTC, of the Unix timestamp `seconds`.
    pub const fn from_unix(seconds: i64) -> Self {
        Self {
            seconds: seconds.saturating_add(UNIX_EPOCH_DAYS * SECONDS_PER_DAY),
        }
    }

    /// The current date and time in UTC, truncated to the second.
    pub fn now() -> Self {
        Self::from_unix(unix_seconds_now())
    }

    /// Parses text in any of the supported date-time layouts.
    ///
    /// Every layout takes exactly four year digits, so only years from
    /// -9999 to 9999 survive a trip through [`Display`](std::fmt::Display)
    /// and back.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the text matches no layout.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse::parse_date_time(s)
    }

    /// Parses text that is known to be a valid date-time.
    ///
    /// # Panics
    /// Panics if the text matches no layout.
    pub fn must_parse(s: &str) -> Self {
        parse::must_parse_date_time(s)
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

    /// Reports whether this is midnight, January 1 of year 1.
    pub const fn is_zero(self) -> bool {
        self.seconds == 0
    }

    const fn days(self) -> i64 {
        self.seconds.div_euclid(SECONDS_PER_DAY)
    }

    const fn seconds_of_day(self) -> i64 {
        self.seconds.rem_euclid(SECONDS_PER_DAY)
    }

    fn civil(self) -> Civil {
        civil_from_days(self.days())
    }

    /// The date part, dropping the time of day.
    pub const fn date(self) -> LocalDate {
        LocalDate::from_days(self.days())
    }

    /// Returns the year, month and day.
    pub fn ymd(self) -> (i64, Month, u8) {
        let civil = self.civil();
        (civil.year, civil.month, civil.day)
    }

    /// Returns the hour, minute and second.
    pub const fn clock(self) -> (u8, u8, u8) {
        clock_from_seconds(self.seconds_of_day())
    }

    /// Returns all six fields: year, month, day, hour, minute, second.
    pub fn date_time(self) -> (i64, Month, u8, u8, u8, u8) {
        let (year, month, day) = self.ymd();
        let (hour, minute, second) = self.clock();
        (year, month, day, hour, minute, second)
    }

    pub fn year(self) -> i64 {
        self.civil().year
    }

    pub fn month(self) -> Month {
        self.civil().month
    }

    pub fn day(self) -> u8 {
        self.civil().day
    }

    /// The hour, from 0 to 23.
    pub const fn hour(self) -> u8 {
        self.clock().0
    }

    pub const fn minute(self) -> u8 {
        self.clock().1
    }

    pub const fn second(self) -> u8 {
        self.clock().2
    }

    pub fn weekday(self) -> Weekday {
        weekday_from_days(self.days())
    }

    /// Returns the ISO 8601 year and week number (1 to 53).
    pub fn iso_week(self) -> (i64, u8) {
        iso_week_from_days(self.days())
    }

    /// The day of the year, from 1 to 365, or 366 in leap years.
    pub fn year_day(self) -> u16 {
        self.civil().year_day
    }

    /// Seconds since 1970-01-01T00:00:00 UTC, treating this value as UTC.
    pub const fn unix(self) -> i64 {
        self.seconds.saturating_sub(UNIX_EPOCH_DAYS * SECONDS_PER_DAY)
    }

    /// Returns the date-time `duration` later, dropping any fraction of a
    /// second (truncated towards zero).
    pub const fn add_duration(self, duration: Duration) -> Self {
        Self {
            seconds: self.seconds.saturating_add(duration.whole_seconds()),
        }
    }

    /// Adds years, months and days, keeping the time of day and normalizing
    /// the date the same way as [`LocalDateTime::new`].
    pub fn add_date(self, years: i64, months: i64, days: i64) -> Self {
        let (year, month, day, hour, minute, second) = self.date_time();
        Self::new(
            year.saturating_add(years),
            i64::from(month).saturating_add(months),
            i64::from(day).saturating_add(days),
            i64::from(hour),
            i64::from(minute),
            i64::from(second),
        )
    }

    /// The duration from `earlier` to `self`, a whole number of seconds.
    ///
    /// Saturates at [`Duration::MAX`] or [`Duration::MIN`] when the gap is
    /// too large to represent.
    pub fn duration_since(self, earlier: Self) -> Duration {
        let nanos =
            (i128::from(self.seconds) - i128::from(earlier.seconds)) * i128::from(NANOS_PER_SECOND);
        i64::try_from(nanos).map_or(
            if nanos < 0 { Duration::MIN } else { Duration::MAX },
            Duration::from_nanos,
        )
    }
}

impl From<LocalDate> for LocalDateTime {
    /// Midnight at the start of `date`.
    fn from(date: LocalDate) -> Self {
        Self {
            seconds: date.days().saturating_mul(SECONDS_PER_DAY),
        }
    }
}

impl Add<Duration> for LocalDateTime {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        self.add_duration(rhs)
    }
}

impl Sub<Duration> for LocalDateTime {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        self.add_duration(-rhs)
    }
}

impl Sub<LocalDateTime> for LocalDateTime {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.duration_since(rhs)
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, minute, second) = self.clock();
        write!(f, "{}T{hour:02}:{minute:02}:{second:02}", self.date())
    }
}

impl FromStr for LocalDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_date_time(s)
    }
}

impl serde::Serialize for LocalDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for LocalDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
