//! Calendar date parsing and rendering
//!
//! Dates are stored and compared as [`NaiveDate`]. They are rendered to the
//! human-readable calendar form (`Thu Jan 05 2023`) only when a response is
//! serialized.

use chrono::{DateTime, NaiveDate, Utc};

/// Response rendering, e.g. `Mon Jan 01 2024`
pub const CALENDAR_FORMAT: &str = "%a %b %d %Y";

/// Request format for form dates and log bounds
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a date in the calendar format
pub fn render(date: NaiveDate) -> String {
    date.format(CALENDAR_FORMAT).to_string()
}

/// Parse a client-supplied date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the date part is kept) and the
/// calendar format itself. Blank or unrecognised input yields `None`.
pub fn parse(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .or_else(|| NaiveDate::parse_from_str(raw, CALENDAR_FORMAT).ok())
}

/// 1970-01-01, the lower bound of an open log range
pub fn epoch() -> NaiveDate {
    NaiveDate::default()
}

/// Current UTC date
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Serde `serialize_with` hook writing a [`NaiveDate`] in the calendar format
pub fn serialize_calendar<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(CALENDAR_FORMAT))
}
