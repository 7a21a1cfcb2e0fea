//! Timestamp display formatting.
//!
//! The board shows each message's server timestamp converted to the
//! viewer's local time as `DD:MM:YYYY HH:MM:SS`. The day:month:year field
//! order is a long-standing quirk of this application's display format and
//! is kept as-is for compatibility.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike, Utc};

/// Render an ISO-8601 instant as `DD:MM:YYYY HH:MM:SS` in the viewer's
/// local time zone. Empty or unparseable input renders as the empty string.
pub fn format_timestamp(iso: &str) -> String {
    format_timestamp_with_zone(iso, &Local)
}

/// Zone-explicit variant of [`format_timestamp`]; pure in `(iso, zone)`.
pub fn format_timestamp_with_zone<Tz: TimeZone>(iso: &str, zone: &Tz) -> String {
    let Some(instant) = parse_instant(iso) else {
        return String::new();
    };
    let shown = instant.with_timezone(zone);
    format!(
        "{:02}:{:02}:{:04} {:02}:{:02}:{:02}",
        shown.day(),
        shown.month(),
        shown.year(),
        shown.hour(),
        shown.minute(),
        shown.second()
    )
}

/// Parse an ISO-8601 instant. The server normally sends RFC 3339 with an
/// offset, but instants serialized without one are treated as UTC.
fn parse_instant(iso: &str) -> Option<DateTime<Utc>> {
    if iso.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(iso) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
