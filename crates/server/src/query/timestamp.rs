//! Timestamp normalization.
//!
//! The store keeps `created_at` as UTC text with exactly six fractional digits
//! (`2024-05-01T10:06:00.000000Z`). In that form lexical order equals chronological
//! order, so every bound handed to SQL is first rewritten into it.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::QueryError;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%z"];

/// Render a UTC instant in the canonical stored form.
pub fn canonical(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse caller input into a UTC instant.
///
/// Offsets are honoured; inputs without one are taken as UTC. A bare date means
/// midnight.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Validate and normalize a timestamp query parameter named `field`.
pub fn normalize(field: &str, raw: &str) -> Result<String, QueryError> {
    chatlog_shared::validation::validate_timestamp_input(field, raw).map_err(QueryError::invalid)?;

    let instant = parse_instant(raw).ok_or_else(|| {
        QueryError::invalid(format!("{} is not a valid timestamp: {:?}", field, raw.trim()))
    })?;

    // Outside four-digit years the text gains a sign and stops sorting lexically.
    if !(0..=9999).contains(&instant.year()) {
        return Err(QueryError::invalid(format!(
            "{} must fall within years 0000-9999",
            field
        )));
    }

    Ok(canonical(instant))
}
