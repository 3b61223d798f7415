//! Field cleaning for the UK user/login pipeline.
//!
//! Every function in this crate is total: malformed input is data, not a
//! program fault, so each normalizer maps *any* input — including an absent
//! cell — to either a typed value or an explicit [`Cleaned::Absent`] outcome:
//!
//! - **name**: placeholder-token cleaning for name fragments and gender
//! - **dob**: date-of-birth derivation with age-based century inference
//! - **numeric**: currency amount parsing
//! - **postcode**: UK postcode shape validation
//! - **epoch**: epoch-seconds to UTC datetime conversion
//! - **identity**: deterministic user id derivation from email
//! - **secret**: one-way digest of raw secrets

#![deny(unsafe_code)]

mod dob;
mod epoch;
mod identity;
mod name;
mod numeric;
mod outcome;
mod postcode;
mod secret;

pub use dob::derive_date_of_birth;
pub use epoch::epoch_to_utc;
pub use identity::derive_user_id;
pub use name::{clean_gender, clean_name_fragment, clean_passthrough};
pub use numeric::clean_salary;
pub use outcome::{AbsentReason, Cleaned};
pub use postcode::clean_postcode;
pub use secret::hash_secret;
