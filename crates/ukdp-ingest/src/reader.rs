//! CSV reading with a text-encoding hint.

use std::borrow::Cow;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::row::RawRow;

/// Text encoding of a source dataset.
///
/// The user dataset ships as Latin-1 in practice; everything else is UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
}

fn decode(bytes: &[u8], encoding: TextEncoding) -> Cow<'_, str> {
    match encoding {
        TextEncoding::Utf8 => String::from_utf8_lossy(bytes),
        TextEncoding::Latin1 => encoding_rs::mem::decode_latin1(bytes),
    }
}

/// Reads every row of a CSV dataset.
///
/// Headers are normalized via [`crate::normalize_column_name`]; rows that are
/// entirely blank are skipped. Short records are padded with blank cells so a
/// ragged file still yields lookup-able rows.
pub fn read_rows(path: &Path, encoding: TextEncoding) -> Result<Vec<RawRow>> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let text = decode(&bytes, encoding);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(crate::normalize_column_name)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let values = (0..headers.len()).map(|idx| record.get(idx).unwrap_or(""));
        let row = RawRow::from_cells(&headers, values);
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = headers.len(),
        "read dataset"
    );
    Ok(rows)
}
