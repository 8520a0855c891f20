//! Text parsing for [`LocalDate`] and [`LocalDateTime`].
//!
//! Recognised date layouts, tried in this order:
//!
//! | Layout       | Example      |
//! |--------------|--------------|
//! | `YYYY-M-D`   | `2095-9-30`  |
//! | `YYYYMMDD`   | `20950930`   |
//! | `YYYY.M.D`   | `2095.09.30` |
//! | `YYYY/M/D`   | `2095/09/30` |
//! | `YYYY-DDD`   | `2095-273`   |
//! | `YYYYDDD`    | `2095273`    |
//!
//! Any year may carry a leading `-`. A date-time is one of the above,
//! optionally followed by `T` and `H:M:S[.f]`, `H:M`, `HHMMSS[.f]` or
//! `HHMM`. Fractional seconds are accepted and dropped.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::consts::{JANUARY, TIME_DESIGNATOR, TRIM_CHARS};
use crate::{Duration, LocalDate, LocalDateTime, ParseError};

const CALENDAR_DATES: [&str; 4] = [
    r"(-?[0-9]{4})-([0-9]{1,2})-([0-9]{1,2})",
    r"(-?[0-9]{4})([0-9]{2})([0-9]{2})",
    // Not ISO 8601, but still unambiguous
    r"(-?[0-9]{4})\.([0-9]{1,2})\.([0-9]{1,2})",
    r"(-?[0-9]{4})/([0-9]{1,2})/([0-9]{1,2})",
];

const ORDINAL_DATES: [&str; 2] = [r"(-?[0-9]{4})-([0-9]{3})", r"(-?[0-9]{4})([0-9]{3})"];

const TIMES: [&str; 4] = [
    r"([0-9]{1,2}):([0-9]{1,2}):([0-9]{1,2})(\.[0-9]*)?",
    r"([0-9]{1,2}):([0-9]{1,2})",
    r"([0-9]{2})([0-9]{2})([0-9]{2})(\.[0-9]*)?",
    r"([0-9]{2})([0-9]{2})",
];

/// Anything that looks like a time and offset; matched and ignored by the date parser.
const THROW_AWAY_TIME: &str = r"(T[0-9:.zZ+-]*)?";

/// The compiled layouts, anchored at both ends.
struct FormatTable {
    calendar_dates: Vec<Regex>,
    ordinal_dates: Vec<Regex>,
    calendar_date_times: Vec<Regex>,
    ordinal_date_times: Vec<Regex>,
}

static FORMATS: LazyLock<FormatTable> = LazyLock::new(FormatTable::build);

impl FormatTable {
    fn build() -> Self {
        let table = Self {
            calendar_dates: Self::dates(&CALENDAR_DATES),
            ordinal_dates: Self::dates(&ORDINAL_DATES),
            calendar_date_times: Self::date_times(&CALENDAR_DATES),
            ordinal_date_times: Self::date_times(&ORDINAL_DATES),
        };
        debug!(
            calendar_dates = table.calendar_dates.len(),
            ordinal_dates = table.ordinal_dates.len(),
            calendar_date_times = table.calendar_date_times.len(),
            ordinal_date_times = table.ordinal_date_times.len(),
            "compiled date format table"
        );
        table
    }

    fn dates(layouts: &[&str]) -> Vec<Regex> {
        layouts
            .iter()
            .map(|date| compile(&format!("^{date}{THROW_AWAY_TIME}$")))
            .collect()
    }

    /// Each date layout on its own, then followed by each time layout.
    fn date_times(layouts: &[&str]) -> Vec<Regex> {
        layouts
            .iter()
            .flat_map(|date| {
                std::iter::once(compile(&format!("^{date}$"))).chain(
                    TIMES
                        .iter()
                        .map(move |time| compile(&format!("^{date}{TIME_DESIGNATOR}{time}$"))),
                )
            })
            .collect()
    }
}

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in date layouts are valid regular expressions")
}

fn trim(s: &str) -> &str {
    s.trim_matches(&TRIM_CHARS[..])
}

/// First table entry matching the whole of `s`.
fn first_match<'t>(table: &[Regex], s: &'t str) -> Option<Captures<'t>> {
    table.iter().find_map(|re| re.captures(s))
}

/// Integer value of capture group `index`, or zero if the group did not take part.
fn field(caps: &Captures<'_>, index: usize) -> Result<i64, ParseError> {
    caps.get(index).map_or(Ok(0), |m| {
        m.as_str()
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidFormat(caps[0].to_owned()))
    })
}

/// Parses a date. Leading and trailing spaces, tabs and quote marks are
/// ignored, and anything after a `T` that looks like a time or UTC offset
/// is discarded without being checked.
///
/// # Errors
/// Returns `ParseError::InvalidFormat` if the text matches no date layout.
pub fn parse_date(s: &str) -> Result<LocalDate, ParseError> {
    let s = trim(s);

    if let Some(caps) = first_match(&FORMATS.calendar_dates, s) {
        return Ok(LocalDate::new(
            field(&caps, 1)?,
            field(&caps, 2)?,
            field(&caps, 3)?,
        ));
    }

    if let Some(caps) = first_match(&FORMATS.ordinal_dates, s) {
        return Ok(LocalDate::from_ordinal(field(&caps, 1)?, field(&caps, 2)?));
    }

    trace!(input = s, "no date layout matched");
    Err(ParseError::InvalidFormat(s.to_owned()))
}

/// Like [`parse_date`], but panics if `s` is not a date.
///
/// Meant for literals and tests where the text is known to be valid.
///
/// # Panics
/// Panics with the parse error message if `s` matches no date layout.
pub fn must_parse_date(s: &str) -> LocalDate {
    parse_date(s).unwrap_or_else(|err| panic!("{err}"))
}

/// Parses a date-time. Leading and trailing spaces, tabs and quote marks
/// are ignored. A date with no time part is midnight.
///
/// # Errors
/// Returns `ParseError::InvalidFormat` if the text matches no date-time layout.
pub fn parse_date_time(s: &str) -> Result<LocalDateTime, ParseError> {
    let s = trim(s);

    if let Some(caps) = first_match(&FORMATS.calendar_date_times, s) {
        return Ok(LocalDateTime::new(
            field(&caps, 1)?,
            field(&caps, 2)?,
            field(&caps, 3)?,
            field(&caps, 4)?,
            field(&caps, 5)?,
            field(&caps, 6)?,
        ));
    }

    if let Some(caps) = first_match(&FORMATS.ordinal_date_times, s) {
        let year_day = field(&caps, 2)?;
        let start_of_year = LocalDateTime::new(
            field(&caps, 1)?,
            JANUARY,
            1,
            field(&caps, 3)?,
            field(&caps, 4)?,
            field(&caps, 5)?,
        );
        let offset = Duration::from_days(year_day - 1);
        return Ok(start_of_year.add_duration(offset));
    }

    trace!(input = s, "no date-time layout matched");
    Err(ParseError::InvalidFormat(s.to_owned()))
}

/// Like [`parse_date_time`], but panics if `s` is not a date-time.
///
/// # Panics
/// Panics with the parse error message if `s` matches no date-time layout.
pub fn must_parse_date_time(s: &str) -> LocalDateTime {
    parse_date_time(s).unwrap_or_else(|err| panic!("{err}"))
}
