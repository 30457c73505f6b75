//! Display Formatting
//!
//! Date helpers for cards and form inputs.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown where a date is missing
pub const NO_DATE: &str = "None";

/// Parse the timestamp shapes the backend and `<input type="datetime-local">` produce
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// `Jan 05, 2025 14:30`; unparseable input is echoed back
pub fn format_date(raw: Option<&str>) -> String {
    match raw.filter(|r| !r.trim().is_empty()) {
        None => NO_DATE.to_string(),
        Some(r) => parse_timestamp(r)
            .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
            .unwrap_or_else(|| r.to_string()),
    }
}

/// Value for a `datetime-local` input: `YYYY-MM-DDTHH:MM`
pub fn format_date_for_input(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}
