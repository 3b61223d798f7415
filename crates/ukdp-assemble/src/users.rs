//! User record assembly.

use chrono::{Datelike, Utc};
use thiserror::Error;
use tracing::warn;

use ukdp_clean::{
    clean_gender, clean_name_fragment, clean_passthrough, clean_postcode, clean_salary,
    derive_date_of_birth, derive_user_id, hash_secret,
};
use ukdp_ingest::RawRow;
use ukdp_model::User;

/// Why a user row could not be assembled.
///
/// Only missing required fields reject a row; everything else degrades to an
/// absent field on the assembled record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("missing email")]
    MissingEmail,
    #[error("missing first name")]
    MissingFirstName,
    #[error("missing surname")]
    MissingSurname,
}

/// One rejected source row, identified by its zero-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRejection {
    pub row: usize,
    pub reason: RejectReason,
}

/// Result of assembling a batch of user rows.
#[derive(Debug, Clone, Default)]
pub struct UserAssembly {
    pub users: Vec<User>,
    pub rejected: Vec<RowRejection>,
}

/// Assembles users with the century inferred from the current calendar year.
pub fn assemble_users(rows: &[RawRow]) -> UserAssembly {
    assemble_users_at(rows, Utc::now().year())
}

/// Assembles users against an explicit current year.
///
/// One bad row never aborts the batch: rejects are accumulated alongside the
/// successes and surfaced in the run summary.
pub fn assemble_users_at(rows: &[RawRow], current_year: i32) -> UserAssembly {
    let mut assembly = UserAssembly::default();
    for (idx, row) in rows.iter().enumerate() {
        match assemble_user(row, current_year) {
            Ok(user) => assembly.users.push(user),
            Err(reason) => {
                warn!(row = idx, %reason, "rejected user row");
                assembly.rejected.push(RowRejection { row: idx, reason });
            }
        }
    }
    assembly
}

fn assemble_user(row: &RawRow, current_year: i32) -> Result<User, RejectReason> {
    let email = row.get("email").ok_or(RejectReason::MissingEmail)?;
    // A user whose id cannot be derived cannot be persisted; with a non-blank
    // email the derivation always succeeds.
    let id = derive_user_id(Some(email))
        .into_option()
        .ok_or(RejectReason::MissingEmail)?;
    let first_name = row
        .get("first_name")
        .ok_or(RejectReason::MissingFirstName)?;
    let surname = row.get("surname").ok_or(RejectReason::MissingSurname)?;

    Ok(User {
        id,
        first_name: first_name.to_string(),
        middle_initials: clean_name_fragment(row.get("middle_initials")).into_option(),
        surname: surname.to_string(),
        date_of_birth: derive_date_of_birth(
            row.get("dob"),
            row.get("age_last_birthday"),
            current_year,
        )
        .into_option(),
        gender: clean_gender(row.get("gender")).into_option(),
        favourite_colour: clean_passthrough(row.get("favourite_colour")).into_option(),
        favourite_animal: clean_passthrough(row.get("favourite_animal")).into_option(),
        favourite_food: clean_passthrough(row.get("favourite_food")).into_option(),
        city: clean_passthrough(row.get("city")).into_option(),
        county: clean_passthrough(row.get("county")).into_option(),
        postcode: clean_postcode(row.get("postcode")).into_option(),
        email: email.to_string(),
        phone: clean_passthrough(row.get("phone")).into_option(),
        mobile: clean_passthrough(row.get("mobile")).into_option(),
        rqf: clean_passthrough(row.get("rqf")).into_option(),
        salary: clean_salary(row.get("salary")).into_option(),
        password_hash: hash_secret(row.get("password")).into_option(),
    })
}
