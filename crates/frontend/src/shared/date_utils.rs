/// Utilities for date formatting
///
/// Server timestamps arrive as strings in a handful of shapes; these helpers
/// render the calendar date as written, without timezone conversion.
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse the calendar date out of an ISO-like timestamp
/// Accepts "2024-01-05", "2024-01-05T10:20:30[.123]", RFC 3339 and epoch
/// milliseconds ("1704412800000", read as UTC).
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(millis) = raw.parse::<i64>() {
        return DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format a timestamp as a long US date
/// Example: "2024-01-05" -> "January 5, 2024"
///
/// Unparseable input is returned as is.
pub fn format_long_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
