//! Record assembly: raw rows in, linked `User`/`Login` records out.
//!
//! Users are assembled first; the email→id index is then built once and
//! treated as read-only while logins resolve against it. A login row that
//! cannot be linked to a known user is dropped and counted — logins are a
//! best-effort audit trail, users are authoritative.

#![deny(unsafe_code)]

mod index;
mod logins;
mod users;

pub use index::{EmailIndex, UsernameMatchPolicy};
pub use logins::{LoginAssembly, assemble_logins};
pub use users::{RejectReason, RowRejection, UserAssembly, assemble_users, assemble_users_at};
