//! Chronological ordering of date strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Sort key for a record date.
///
/// Parseable dates order chronologically and come before any date that
/// fails to parse; unparseable dates order lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateKey<'a> {
    Parsed(NaiveDateTime),
    Raw(&'a str),
}

/// Build the ordering key for a date string.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (normalized to UTC) and
/// `YYYY-MM-DDTHH:MM:SS` without an offset.
pub fn date_key(date: &str) -> DateKey<'_> {
    parse_date(date).map_or(DateKey::Raw(date), DateKey::Parsed)
}

/// Parse a record date, if it is in a recognized format.
pub fn parse_date(date: &str) -> Option<NaiveDateTime> {
    let s = date.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok()
}
