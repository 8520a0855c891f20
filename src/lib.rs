//! Dates and date-times without a time zone.
//!
//! [`LocalDate`] is a calendar date and [`LocalDateTime`] a calendar date
//! with a time of day to the second. Both are normalized on construction,
//! so out-of-range fields carry into the next unit the way a calendar
//! does (October 32 is November 1, month 13 is January of the following
//! year). All calculations use the proleptic Gregorian calendar in UTC.
//!
//! Parsing is lenient and accepts several ISO 8601-style
//! layouts:
//!
//! ```
//! use local_date::{LocalDate, LocalDateTime};
//!
//! let a: LocalDate = "2095-09-30".parse().unwrap();
//! let b: LocalDate = "2095/09/30".parse().unwrap();
//! let c = LocalDate::must_parse("2095273"); // ordinal date
//! assert_eq!(a, b);
//! assert_eq!(a, c);
//!
//! let dt = LocalDateTime::must_parse("2001-02-03T04:05");
//! assert_eq!(dt.to_string(), "2001-02-03T04:05:00");
//! ```
//!
//! The [`currency`] module is an unrelated static table of ISO 4217
//! currencies.

mod civil;
mod clock;
mod consts;
pub mod currency;
mod date;
mod datetime;
mod duration;
mod packed;
mod parse;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use currency::{Currency, CurrencyError};
pub use date::LocalDate;
pub use datetime::LocalDateTime;
pub use duration::Duration;
pub use packed::PackedYearMonthDay;
pub use parse::{must_parse_date, must_parse_date_time, parse_date, parse_date_time};
pub use types::{Month, Weekday, days_in_month, is_leap_year};

/// Error returned when text cannot be read as a date or date-time.
///
/// There is only one kind of failure: the input matched none
/// of the recognised layouts. Field values are never range-checked, so
/// `"2019-13-45"` is accepted and normalized rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid date format: {0:?}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::InvalidFormat("nope".to_owned());
        assert_eq!(err.to_string(), r#"invalid date format: "nope""#);
    }

    #[test]
    fn test_parse_error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<ParseError>();
        assert_impl::<CurrencyError>();
    }

    #[test]
    fn test_values_are_send_and_sync() {
        fn assert_impl<T: Send + Sync + Copy>() {}
        assert_impl::<LocalDate>();
        assert_impl::<LocalDateTime>();
        assert_impl::<Duration>();
        assert_impl::<Currency>();
    }

    #[test]
    fn test_parse_error_is_clone() {
        let err = ParseError::InvalidFormat(String::new());
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn test_unrecognised_input_fails_both_parsers() {
        for input in ["", "   ", "abc", "\"\"", "yesterday", "--", "T12:00:00"] {
            assert!(
                matches!(parse_date(input), Err(ParseError::InvalidFormat(_))),
                "parse_date({input:?}) should fail"
            );
            assert!(
                matches!(parse_date_time(input), Err(ParseError::InvalidFormat(_))),
                "parse_date_time({input:?}) should fail"
            );
        }
    }
}
