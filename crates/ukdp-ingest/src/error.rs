//! Error types for the row source.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a tabular dataset.
///
/// Any of these is fatal for the run: a pipeline cannot proceed without its
/// source data.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Dataset file not found.
    #[error("dataset not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the dataset file.
    #[error("failed to read dataset {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a CSV record.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

/// Result type for row-source operations.
pub type Result<T> = std::result::Result<T, IngestError>;
