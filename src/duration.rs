//! Signed lengths of time, used for date arithmetic.

use std::ops::{Add, Mul, Neg, Sub};

use crate::consts::{NANOS_PER_DAY, NANOS_PER_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::prelude::*;

/// A **duration** is a signed length of time with nanosecond precision,
/// covering roughly ±292 years.
///
/// All arithmetic saturates at [`Duration::MIN`] and [`Duration::MAX`]
/// instead of wrapping or panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display)]
#[display(fmt = "{nanos}ns")]
pub struct Duration {
    nanos: i64,
}

impl Duration {
    pub const ZERO: Self = Self { nanos: 0 };
    pub const MAX: Self = Self { nanos: i64::MAX };
    pub const MIN: Self = Self { nanos: i64::MIN };

    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    pub const fn from_secs(seconds: i64) -> Self {
        Self::from_nanos(seconds.saturating_mul(NANOS_PER_SECOND))
    }

    pub const fn from_mins(minutes: i64) -> Self {
        Self::from_secs(minutes.saturating_mul(SECONDS_PER_MINUTE))
    }

    pub const fn from_hours(hours: i64) -> Self {
        Self::from_secs(hours.saturating_mul(SECONDS_PER_HOUR))
    }

    /// A duration of exactly `days` 24-hour days.
    pub const fn from_days(days: i64) -> Self {
        Self::from_nanos(days.saturating_mul(NANOS_PER_DAY))
    }

    /// Total length in nanoseconds
    pub const fn as_nanos(self) -> i64 {
        self.nanos
    }

    /// Number of whole seconds, truncated towards zero.
    pub const fn whole_seconds(self) -> i64 {
        self.nanos / NANOS_PER_SECOND
    }

    /// Number of whole days, truncated towards zero.
    pub const fn whole_days(self) -> i64 {
        self.nanos / NANOS_PER_DAY
    }

    pub const fn is_negative(self) -> bool {
        self.nanos < 0
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_nanos(self.nanos.saturating_add(rhs.nanos))
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_nanos(self.nanos.saturating_sub(rhs.nanos))
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        Self::from_nanos(self.nanos.saturating_mul(amount))
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_nanos(self.nanos.saturating_neg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn test_units() {
            assert_eq!(Duration::from_secs(1).as_nanos(), 1_000_000_000);
            assert_eq!(Duration::from_mins(2), Duration::from_secs(120));
            assert_eq!(Duration::from_hours(1), Duration::from_mins(60));
            assert_eq!(Duration::from_days(1), Duration::from_hours(24));
        }

        #[test]
        fn test_saturates() {
            assert_eq!(Duration::from_days(i64::MAX), Duration::MAX);
            assert_eq!(Duration::from_days(i64::MIN), Duration::MIN);
            assert_eq!(Duration::from_secs(-i64::MAX), Duration::MIN);
        }

        #[test]
        fn test_display() {
            assert_eq!(Duration::from_secs(2).to_string(), "2000000000ns");
        }
    }

    mod truncation {
        use super::*;

        #[test]
        fn test_whole_days_towards_zero() {
            let almost_two_days = Duration::from_days(2) - Duration::from_nanos(1);
            assert_eq!(almost_two_days.whole_days(), 1);
            assert_eq!((-almost_two_days).whole_days(), -1);
            assert_eq!(Duration::from_hours(23).whole_days(), 0);
            assert_eq!(Duration::from_hours(-23).whole_days(), 0);
        }

        #[test]
        fn test_whole_seconds_towards_zero() {
            assert_eq!(Duration::from_nanos(1_999_999_999).whole_seconds(), 1);
            assert_eq!(Duration::from_nanos(-1_999_999_999).whole_seconds(), -1);
        }
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn test_addition() {
            assert_eq!(
                Duration::from_secs(10),
                Duration::from_secs(2) + Duration::from_secs(8)
            );
            assert_eq!(Duration::MAX, Duration::MAX + Duration::from_secs(1));
        }

        #[test]
        fn test_subtraction() {
            assert_eq!(
                Duration::from_secs(13),
                Duration::from_secs(28) - Duration::from_secs(15)
            );
            assert_eq!(Duration::MIN, Duration::MIN - Duration::from_secs(1));
        }

        #[test]
        fn test_multiplication() {
            assert_eq!(Duration::from_secs(16), Duration::from_secs(8) * 2);
            assert_eq!(Duration::MAX, Duration::from_days(1) * i64::MAX);
        }

        #[test]
        fn test_negation() {
            assert_eq!(-Duration::from_secs(5), Duration::from_secs(-5));
            assert_eq!(-Duration::MIN, Duration::MAX);
            assert!((-Duration::from_secs(5)).is_negative());
        }
    }
}
