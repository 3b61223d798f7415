//! Error types for the persistence sink.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the SQLite sink.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or created.
    #[error("failed to open store {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Schema creation failed.
    #[error("schema setup failed: {0}")]
    Schema(#[source] rusqlite::Error),

    /// A login batch referenced a user id that is not in the users table.
    ///
    /// The assemblers filter these out by construction, so seeing this means
    /// data corruption or a caller that skipped the user commit.
    #[error("login references unknown user id {user_id}")]
    MissingUser { user_id: String },

    /// Any other SQLite failure.
    #[error("store operation failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for sink operations.
pub type Result<T> = std::result::Result<T, StoreError>;
