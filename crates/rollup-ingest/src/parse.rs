//! Cell-level value parsing.
//!
//! All parsers return `None` for empty or undecodable input. An undecodable
//! value is a data-quality condition, not an error: the cleaner drops and
//! counts the row downstream.

use chrono::NaiveDate;

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Permissive date parser.
///
/// Tries ISO `YYYY-MM-DD` first, then the common slashed, dotted, compact,
/// and named-month forms, each with and without a time-of-day suffix.
/// Unparseable input yields `None` rather than an error.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(date) = try_parse_date(trimmed) {
        return Some(date);
    }
    try_parse_datetime(trimmed)
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d-%b-%Y",  // 15-Jan-2024
        "%d-%B-%Y",  // 15-January-2024
        "%m/%d/%Y",  // US: 01/15/2024
        "%d.%m.%Y",  // German: 15.01.2024
        "%Y%m%d",    // Compact: 20240115
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
        "%d %b %Y",  // 15 Jan 2024
        "%d %B %Y",  // 15 January 2024
        "%Y-%b-%d",  // 2024-Jan-15
    ];
    for fmt in &formats {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }
    None
}

fn try_parse_datetime(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%m/%d/%Y %H:%M:%S",
        "%d-%b-%Y %H:%M:%S", // 15-Jan-2024 10:30:00
    ];
    for fmt in &formats {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }
    None
}
