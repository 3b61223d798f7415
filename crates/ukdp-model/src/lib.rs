//! Data model for the UK user/login pipeline.
//!
//! Records are constructed once by the assemblers and never mutated. A
//! [`Login`] has no existence independent of a resolvable [`User`]: its
//! `user_id` is guaranteed by construction to reference an assembled user.

#![deny(unsafe_code)]

mod error;
mod ids;
mod login;
mod user;

pub use error::ModelError;
pub use ids::UserId;
pub use login::Login;
pub use user::User;
