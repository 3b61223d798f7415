//! SQLite persistence sink.
//!
//! The sink exposes three operations — `ensure_schema`, `store_users`,
//! `store_logins` — each inside its own transaction. Users must be committed
//! before logins are submitted; the logins table carries a foreign key to
//! `users`, so the store enforces the referential invariant the assemblers
//! already maintain by construction.

#![deny(unsafe_code)]

mod error;
mod store;

pub use error::{Result, StoreError};
pub use store::Store;
