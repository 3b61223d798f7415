//! UK data pipeline CLI library.
//!
//! The binary in `main.rs` is a thin wrapper over these modules so the
//! pipeline can be driven from integration tests without spawning a process.

pub mod logging;
pub mod pipeline;
pub mod summary;
