//! Column-name normalization.

/// Normalizes a raw column name to the canonical lookup key.
///
/// Lowercases, trims (including a UTF-8 BOM on the first header), and joins
/// interior whitespace runs with underscores, so `"First Name"` and
/// `first_name` resolve to the same key. This runs for every dataset — the
/// input revisions disagree on header style and the assemblers only ever see
/// normalized keys.
pub fn normalize_column_name(raw: &str) -> String {
    let trimmed = raw.trim_matches('\u{feff}').trim();
    let mut normalized = String::with_capacity(trimmed.len());
    let mut parts = trimmed.split_whitespace();
    if let Some(first) = parts.next() {
        normalized.push_str(&first.to_lowercase());
        for part in parts {
            normalized.push('_');
            normalized.push_str(&part.to_lowercase());
        }
    }
    normalized
}
