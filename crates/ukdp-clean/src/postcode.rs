//! UK postcode shape validation.

use std::sync::OnceLock;

use regex::Regex;

use crate::Cleaned;

/// Outward code of 1-2 letters, 1-2 digits, and an optional final letter
/// (central-London districts like EC1A, W1A), optional space, inward code of
/// 1 digit and 2 letters. Shape only; no postal-area whitelist.
const POSTCODE_SHAPE: &str = r"^[A-Z]{1,2}\d{1,2}[A-Z]? ?\d[A-Z]{2}$";

fn postcode_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(POSTCODE_SHAPE).expect("postcode shape regex"))
}

/// Validates and formats a UK postcode.
///
/// Returns the uppercased, trimmed form when the value matches the UK
/// postcode shape, absent otherwise.
pub fn clean_postcode(value: Option<&str>) -> Cleaned<String> {
    let Some(value) = value else {
        return Cleaned::blank();
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Cleaned::blank();
    }
    let upper = trimmed.to_uppercase();
    if postcode_regex().is_match(&upper) {
        Cleaned::Value(upper)
    } else {
        Cleaned::malformed()
    }
}
