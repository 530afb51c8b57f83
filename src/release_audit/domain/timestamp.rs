//! Parsing and display of registry timestamps.

use chrono::{DateTime, Utc};

/// Human-readable layout used for release dates and the cutoff banner
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Parses an RFC 3339 timestamp (e.g. `2020-01-01T00:00:00.000Z`) into UTC.
///
/// Offsets other than `Z` are accepted and normalized. Returns `None` for
/// anything that is not a complete RFC 3339 date-time.
pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.format(DISPLAY_FORMAT).to_string()
}
