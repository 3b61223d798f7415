//! Login record assembly.

use tracing::warn;

use ukdp_clean::epoch_to_utc;
use ukdp_ingest::RawRow;
use ukdp_model::Login;

use crate::index::EmailIndex;

/// Result of assembling a batch of login rows.
///
/// Dropped rows are counted per cause so the run summary can report them;
/// dropping is policy, not failure — a login with no resolvable owner has no
/// meaning in the store.
#[derive(Debug, Clone, Default)]
pub struct LoginAssembly {
    pub logins: Vec<Login>,
    pub dropped_unresolved: usize,
    pub dropped_bad_timestamp: usize,
}

impl LoginAssembly {
    pub fn dropped(&self) -> usize {
        self.dropped_unresolved + self.dropped_bad_timestamp
    }
}

/// Assembles logins against a fully built, read-only email index.
pub fn assemble_logins(rows: &[RawRow], index: &EmailIndex) -> LoginAssembly {
    let mut assembly = LoginAssembly::default();
    for (idx, row) in rows.iter().enumerate() {
        let username = row.get("username").unwrap_or_default();
        let Some(user_id) = index.resolve(username) else {
            warn!(row = idx, username, "dropping login: no matching user");
            assembly.dropped_unresolved += 1;
            continue;
        };
        let Some(login_timestamp) = epoch_to_utc(row.get("logints")).into_option() else {
            warn!(row = idx, username, "dropping login: unparseable timestamp");
            assembly.dropped_bad_timestamp += 1;
            continue;
        };
        assembly.logins.push(Login {
            user_id,
            login_timestamp,
        });
    }
    assembly
}
