//! Epoch-seconds to UTC calendar conversion.

use chrono::{DateTime, Utc};

use crate::Cleaned;

/// Interprets an integer-like string as seconds since the Unix epoch.
///
/// Non-numeric input and timestamps outside chrono's representable range map
/// to absent.
pub fn epoch_to_utc(value: Option<&str>) -> Cleaned<DateTime<Utc>> {
    let Some(value) = value else {
        return Cleaned::blank();
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Cleaned::blank();
    }
    let Ok(seconds) = trimmed.parse::<i64>() else {
        return Cleaned::malformed();
    };
    match DateTime::from_timestamp(seconds, 0) {
        Some(timestamp) => Cleaned::Value(timestamp),
        None => Cleaned::malformed(),
    }
}
