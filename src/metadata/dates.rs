//! Lenient calendar-date parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date output format used throughout the crate (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string from a meta tag, datetime attribute, or text node.
///
/// Accepts RFC 3339, ISO 8601 without timezone, bare dates, and a handful
/// of human-readable formats. Returns the date formatted `YYYY-MM-DD`, or
/// `None` when nothing parses; the date extractor then skips the selector
/// and continues down the chain.
#[must_use]
pub fn parse_page_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive().format(DATE_FORMAT).to_string());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date().format(DATE_FORMAT).to_string());
    }

    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%B %d, %Y", // January 15, 2024
        "%b %d, %Y", // Jan 15, 2024
        "%d %B %Y",  // 15 January 2024
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date.format(DATE_FORMAT).to_string());
        }
    }

    None
}
