//! Placeholder-token cleaning for free-text fields.

use crate::{AbsentReason, Cleaned};

/// Placeholder tokens that mean "no middle initials" in the source data.
const NAME_PLACEHOLDERS: &[&str] = &["none", "-", "{null}"];

/// Tokens that mean "no gender recorded" in the source data.
const GENDER_PLACEHOLDERS: &[&str] = &["-", "blank"];

fn clean_with_placeholders(value: Option<&str>, placeholders: &[&str]) -> Cleaned<String> {
    let Some(value) = value else {
        return Cleaned::blank();
    };
    let trimmed = value.trim();
    let lowered = trimmed.to_lowercase();
    if trimmed.is_empty() || placeholders.contains(&lowered.as_str()) {
        return Cleaned::Absent(AbsentReason::Blank);
    }
    Cleaned::Value(trimmed.to_string())
}

/// Cleans a name fragment such as middle initials.
///
/// Trims, then maps the placeholder tokens `none`, `-`, `{null}`, and the
/// empty string (any case) to absent.
pub fn clean_name_fragment(value: Option<&str>) -> Cleaned<String> {
    clean_with_placeholders(value, NAME_PLACEHOLDERS)
}

/// Normalizes a gender value; `-`, `blank`, and the empty string are absent.
pub fn clean_gender(value: Option<&str>) -> Cleaned<String> {
    clean_with_placeholders(value, GENDER_PLACEHOLDERS)
}

/// Trims a descriptive pass-through field; only emptiness maps to absent.
pub fn clean_passthrough(value: Option<&str>) -> Cleaned<String> {
    clean_with_placeholders(value, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_placeholders_are_absent_in_any_case() {
        for token in ["none", "NONE", "None", "-", "{null}", "{NULL}", "", "  "] {
            let cleaned = clean_name_fragment(Some(token));
            assert!(cleaned.is_blank(), "token {token:?} should be blank");
        }
        assert!(clean_name_fragment(None).is_blank());
    }

    #[test]
    fn name_fragment_is_trimmed() {
        assert_eq!(
            clean_name_fragment(Some("  J.R. ")),
            Cleaned::Value("J.R.".to_string())
        );
    }

    #[test]
    fn gender_placeholders_are_absent() {
        for token in ["-", "blank", "BLANK", "Blank", "", "   "] {
            assert!(clean_gender(Some(token)).is_blank(), "token {token:?}");
        }
        assert_eq!(clean_gender(Some(" Female ")), Cleaned::Value("Female".into()));
        // "none" is a middle-initials placeholder, not a gender one.
        assert_eq!(clean_gender(Some("none")), Cleaned::Value("none".into()));
    }

    #[test]
    fn passthrough_keeps_everything_non_empty() {
        assert_eq!(clean_passthrough(Some(" Leeds ")), Cleaned::Value("Leeds".into()));
        assert_eq!(clean_passthrough(Some("-")), Cleaned::Value("-".into()));
        assert!(clean_passthrough(Some("")).is_blank());
        assert!(clean_passthrough(None).is_blank());
    }
}
