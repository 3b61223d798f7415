//! Tabular row source for the UK data pipeline.
//!
//! Reads a CSV dataset into an ordered sequence of [`RawRow`]s. Column names
//! are normalized unconditionally — lowercase, trimmed, spaces replaced with
//! underscores — so downstream assemblers reference one naming convention no
//! matter which input revision produced the file.

#![deny(unsafe_code)]

mod error;
mod header;
mod reader;
mod row;

pub use error::{IngestError, Result};
pub use header::normalize_column_name;
pub use reader::{TextEncoding, read_rows};
pub use row::RawRow;
