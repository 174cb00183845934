//! `xsd:dateTime` literals.
//!
//! Accepted: RFC 3339 (`2024-05-01T12:30:00Z`, `2024-05-01T12:30:00.25+02:00`)
//! and the minutes-only form `2024-05-01T12:30Z` some servers emit.
//! Emitted: RFC 3339 with the shortest exact fractional seconds, and `Z` for a
//! zero offset.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::Value;

/// Length of `YYYY-MM-DDTHH:MM`.
const MINUTES_PREFIX_LEN: usize = 16;

pub(crate) fn parse_date_time(value: &Value) -> Option<DateTime<FixedOffset>> {
    parse_date_time_str(value.as_str()?)
}

/// Parses the lexical forms accepted for `xsd:dateTime`.
#[must_use]
pub fn parse_date_time_str(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .or_else(|| parse_minutes_form(text))
}

fn parse_minutes_form(text: &str) -> Option<DateTime<FixedOffset>> {
    let (head, offset) = text.split_at_checked(MINUTES_PREFIX_LEN)?;
    if head.as_bytes().get(10) != Some(&b'T') || offset.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(&format!("{head}:00{offset}")).ok()
}

/// Formats a timestamp in canonical RFC 3339 form.
#[must_use]
pub fn format_date_time_str(value: &DateTime<FixedOffset>) -> String {
    let utc = value.offset().local_minus_utc() == 0;
    value.to_rfc3339_opts(SecondsFormat::AutoSi, utc)
}

pub(crate) fn format_date_time(value: &DateTime<FixedOffset>) -> Value {
    Value::String(format_date_time_str(value))
}
