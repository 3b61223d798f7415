//! Deterministic user id derivation.

use sha2::{Digest, Sha256};

use ukdp_model::UserId;

use crate::Cleaned;

/// Derives the stable user identifier from an email address.
///
/// Trims, lowercases, then takes the SHA-256 digest, so the same address
/// modulo case and surrounding whitespace always maps to the same id. A user
/// without a derivable id cannot be persisted, which is why the caller treats
/// an absent outcome as a row-level rejection.
pub fn derive_user_id(email: Option<&str>) -> Cleaned<UserId> {
    let Some(email) = email else {
        return Cleaned::blank();
    };
    let normalized = email.trim().to_lowercase();
    if normalized.is_empty() {
        return Cleaned::blank();
    }
    let digest: [u8; 32] = Sha256::digest(normalized.as_bytes()).into();
    Cleaned::Value(UserId::from_sha256(digest))
}
