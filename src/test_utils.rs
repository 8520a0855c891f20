//! Shared assertions for the date and date-time tests.

use crate::{LocalDate, LocalDateTime};

/// Expected canonical text for a date: sign, then at least four year digits.
pub fn date_text(year: i64, month: u8, day: u8) -> String {
    let sign = if year < 0 { "-" } else { "" };
    format!("{sign}{:04}-{month:02}-{day:02}", year.unsigned_abs())
}

/// Checks accessors, rendering and every encoding round trip for `date`.
pub fn check_local_date(date: LocalDate, year: i64, month: u8, day: u8) {
    assert_eq!(date.year(), year);
    assert_eq!(date.month().number(), month);
    assert_eq!(date.day(), day);

    let text = date_text(year, month, day);
    assert_eq!(date.to_string(), text);

    let parsed: LocalDate = text.parse().unwrap_or_else(|e| panic!("{text}: {e}"));
    assert_eq!(parsed, date, "FromStr: {text}");

    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, format!("\"{text}\""));
    let from_json: LocalDate = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, date, "JSON: {json}");
}

/// Checks accessors, rendering and every encoding round trip for `dt`.
pub fn check_local_date_time(dt: LocalDateTime, ymd: (i64, u8, u8), hms: (u8, u8, u8)) {
    let (year, month, day) = ymd;
    let (hour, minute, second) = hms;
    assert_eq!(dt.year(), year);
    assert_eq!(dt.month().number(), month);
    assert_eq!(dt.day(), day);
    assert_eq!(dt.clock(), hms);

    let text = format!(
        "{}T{hour:02}:{minute:02}:{second:02}",
        date_text(year, month, day)
    );
    assert_eq!(dt.to_string(), text);

    let parsed: LocalDateTime = text.parse().unwrap_or_else(|e| panic!("{text}: {e}"));
    assert_eq!(parsed, dt, "FromStr: {text}");

    let json = serde_json::to_string(&dt).unwrap();
    assert_eq!(json, format!("\"{text}\""));
    let from_json: LocalDateTime = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, dt, "JSON: {json}");
}
