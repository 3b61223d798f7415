//! One untyped record from a tabular source.

use std::collections::BTreeMap;

use crate::header::normalize_column_name;

/// An untyped row keyed by normalized column name.
///
/// Values are stored trimmed; a blank cell reads back as absent, so callers
/// never have to distinguish "column missing" from "cell empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: BTreeMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from parallel header/value slices, normalizing each key.
    pub fn from_cells<'a>(
        headers: &[String],
        values: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut row = Self::new();
        for (header, value) in headers.iter().zip(values) {
            row.insert(header, value);
        }
        row
    }

    /// Inserts a cell, normalizing the column name and trimming the value.
    pub fn insert(&mut self, column: &str, value: &str) {
        let key = normalize_column_name(column);
        if key.is_empty() {
            return;
        }
        let value = value.trim_matches('\u{feff}').trim();
        self.cells.insert(key, value.to_string());
    }

    /// Returns the cell value for a normalized column name, absent when the
    /// column is missing or the cell is blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .get(column)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// True when every cell in the row is blank.
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|value| value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
