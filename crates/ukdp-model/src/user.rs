use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::UserId;

/// One cleaned user profile record.
///
/// Required fields (`id`, `first_name`, `surname`, `email`) are enforced at
/// assembly time; everything else normalizes to `None` when the source value
/// is blank, a placeholder token, or malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub middle_initials: Option<String>,
    pub surname: String,
    /// Derived from the D/M/Y text plus stated age; the century comes from
    /// `current_year - age`, which is approximate around birthdays.
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub favourite_colour: Option<String>,
    pub favourite_animal: Option<String>,
    pub favourite_food: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
    /// Case preserved as supplied; identity derivation lowercases a copy.
    pub email: String,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub rqf: Option<String>,
    pub salary: Option<f64>,
    /// Hex SHA-256 of the raw secret. The raw secret is never stored.
    /// SHA-256 is a stand-in until an adaptive, salted scheme replaces it.
    pub password_hash: Option<String>,
}
