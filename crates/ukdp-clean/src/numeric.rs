//! Currency amount parsing.

use crate::Cleaned;

/// Parses a salary amount, stripping thousands separators.
///
/// The literal token `na` (any case) means "not available" in the source
/// data and maps to a blank outcome; anything else that fails to parse as a
/// decimal is malformed.
pub fn clean_salary(value: Option<&str>) -> Cleaned<f64> {
    let Some(value) = value else {
        return Cleaned::blank();
    };
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("na") {
        return Cleaned::blank();
    }
    match trimmed.replace(',', "").parse::<f64>() {
        Ok(amount) => Cleaned::Value(amount),
        Err(_) => Cleaned::malformed(),
    }
}
