//! Coercion of raw form and query values
//!
//! Clients send everything as strings. Malformed dates and limits fall back to
//! defaults instead of being rejected; a duration without a leading integer
//! is reported as `None` so the caller can refuse the write.

use chrono::NaiveDate;
use tracker_types::calendar;

/// Whether `id` has the shape of a store-assigned id
pub fn is_well_formed_id(id: &str) -> bool {
    uuid::Uuid::parse_str(id).is_ok()
}

/// Integer-prefix parse: leading whitespace, an optional sign, then digits.
///
/// `"30"` and `"30min"` give 30, `"12.9"` gives 12, `"abc"` gives `None`.
pub fn parse_duration(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.chars().next() {
        Some('-') => (true, &trimmed[1..]),
        Some('+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Exercise date from an optional form value, defaulting to `today`
pub fn resolve_exercise_date(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    raw.and_then(calendar::parse).unwrap_or(today)
}

/// Positive result limit. Zero, negative, blank and non-numeric input mean
/// "unlimited"; fractions truncate.
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    let value: f64 = raw?.trim().parse().ok()?;
    if !value.is_finite() || value < 1.0 {
        return None;
    }
    Some(value.trunc() as usize)
}

/// Resolved log filter with defaults applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub limit: Option<usize>,
}

impl LogRange {
    /// `from` defaults to the epoch and `to` to `today`; unparseable bounds
    /// count as omitted.
    pub fn resolve(
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<&str>,
        today: NaiveDate,
    ) -> Self {
        Self {
            from: from.and_then(calendar::parse).unwrap_or_else(calendar::epoch),
            to: to.and_then(calendar::parse).unwrap_or(today),
            limit: parse_limit(limit),
        }
    }
}
