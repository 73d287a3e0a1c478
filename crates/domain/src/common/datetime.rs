//! DateTime parsing and formatting with consistent error handling.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};

/// Parses a wire date string.
///
/// Accepts a full RFC 3339 timestamp or a bare calendar date (`YYYY-MM-DD`),
/// which is read as midnight UTC.
///
/// # Examples
///
/// ```
/// use envlicense_domain::common::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("2024-01-15T10:30:00Z").unwrap();
/// assert_eq!(dt.year(), 2024);
///
/// let day = parse_datetime("2024-01-15").unwrap();
/// assert_eq!(day.day(), 15);
/// ```
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string matches neither format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let s = s.trim();
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(rfc_err) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Ok(date.and_time(NaiveTime::MIN).and_utc()),
            Err(_) => Err(rfc_err),
        },
    }
}

/// Formats a timestamp as ISO-8601 UTC with millisecond precision
/// (`2024-01-15T10:30:00.000Z`).
pub fn to_iso_string(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
