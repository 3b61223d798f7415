//! SQLite-backed store for users and logins.

use std::path::Path;

use rusqlite::{Connection, params};
use tracing::{debug, info};

use ukdp_model::{Login, User};

use crate::error::{Result, StoreError};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id              TEXT PRIMARY KEY,
    first_name      TEXT NOT NULL,
    middle_initials TEXT,
    surname         TEXT NOT NULL,
    dob             TEXT,
    gender          TEXT,
    favourite_colour TEXT,
    favourite_animal TEXT,
    favourite_food  TEXT,
    city            TEXT,
    county          TEXT,
    postcode        TEXT,
    email           TEXT NOT NULL,
    phone           TEXT,
    mobile          TEXT,
    rqf             TEXT,
    salary          REAL,
    password_hash   TEXT
);

CREATE TABLE IF NOT EXISTS logins (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id  TEXT NOT NULL REFERENCES users(id),
    login_ts TEXT NOT NULL
);
";

const INSERT_USER: &str = "
INSERT INTO users (
    id, first_name, middle_initials, surname, dob, gender,
    favourite_colour, favourite_animal, favourite_food,
    city, county, postcode, email, phone, mobile, rqf, salary, password_hash
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
ON CONFLICT(id) DO UPDATE SET
    first_name = excluded.first_name,
    middle_initials = excluded.middle_initials,
    surname = excluded.surname,
    dob = excluded.dob,
    gender = excluded.gender,
    favourite_colour = excluded.favourite_colour,
    favourite_animal = excluded.favourite_animal,
    favourite_food = excluded.favourite_food,
    city = excluded.city,
    county = excluded.county,
    postcode = excluded.postcode,
    email = excluded.email,
    phone = excluded.phone,
    mobile = excluded.mobile,
    rqf = excluded.rqf,
    salary = excluded.salary,
    password_hash = excluded.password_hash
";

const INSERT_LOGIN: &str = "INSERT INTO logins (user_id, login_ts) VALUES (?1, ?2)";

/// Handle to the SQLite database.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens (creating if needed) the database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_connection(conn)
    }

    /// Opens an in-memory database, mainly for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // Foreign keys are off by default in SQLite; the logins FK depends on it.
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }

    /// Creates the users and logins tables. Idempotent.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(SCHEMA)
            .map_err(StoreError::Schema)?;
        debug!("schema ensured");
        Ok(())
    }

    /// Stores a batch of users in one transaction.
    ///
    /// Re-inserting an existing id updates the row, so re-running the
    /// pipeline against unchanged input is a no-op rewrite.
    pub fn store_users(&mut self, users: &[User]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT_USER)?;
            for user in users {
                stmt.execute(params![
                    user.id.to_hex(),
                    user.first_name,
                    user.middle_initials,
                    user.surname,
                    user.date_of_birth.map(|d| d.format("%Y-%m-%d").to_string()),
                    user.gender,
                    user.favourite_colour,
                    user.favourite_animal,
                    user.favourite_food,
                    user.city,
                    user.county,
                    user.postcode,
                    user.email,
                    user.phone,
                    user.mobile,
                    user.rqf,
                    user.salary,
                    user.password_hash,
                ])?;
            }
        }
        tx.commit()?;
        info!(count = users.len(), "stored user batch");
        Ok(users.len())
    }

    /// Stores a batch of logins in one transaction.
    ///
    /// Fails with [`StoreError::MissingUser`] if a login references an id
    /// absent from the users table; nothing from the batch is committed in
    /// that case.
    pub fn store_logins(&mut self, logins: &[Login]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT_LOGIN)?;
            for login in logins {
                let user_id = login.user_id.to_hex();
                let ts = login
                    .login_timestamp
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string();
                stmt.execute(params![user_id, ts])
                    .map_err(|e| classify_login_error(e, &user_id))?;
            }
        }
        tx.commit()?;
        info!(count = logins.len(), "stored login batch");
        Ok(logins.len())
    }

    /// Number of rows in the users table.
    pub fn user_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Number of rows in the logins table.
    pub fn login_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM logins", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Classifies a login-insert failure.
///
/// Only a foreign-key violation means the referenced user is absent; any
/// other constraint failure passes through as a plain store error.
fn classify_login_error(error: rusqlite::Error, user_id: &str) -> StoreError {
    match error {
        rusqlite::Error::SqliteFailure(inner, _)
            if inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            StoreError::MissingUser {
                user_id: user_id.to_string(),
            }
        }
        other => StoreError::Sqlite(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(extended_code: std::ffi::c_int) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(rusqlite::ffi::Error::new(extended_code), None)
    }

    #[test]
    fn foreign_key_violation_means_missing_user() {
        let err = classify_login_error(
            sqlite_failure(rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY),
            "deadbeef",
        );
        let StoreError::MissingUser { user_id } = err else {
            panic!("expected MissingUser, got {err}");
        };
        assert_eq!(user_id, "deadbeef");
    }

    #[test]
    fn other_constraint_failures_pass_through() {
        let err = classify_login_error(
            sqlite_failure(rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL),
            "deadbeef",
        );
        assert!(matches!(err, StoreError::Sqlite(_)));
    }
}
