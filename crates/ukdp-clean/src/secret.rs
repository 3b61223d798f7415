//! One-way obfuscation of raw secrets.

use sha2::{Digest, Sha256};

use crate::Cleaned;

/// Computes a hex SHA-256 digest of a raw secret.
///
/// A plain unsalted digest is NOT a production password scheme; it stands in
/// until an adaptive, salted hash (argon2/bcrypt) replaces it. The raw secret
/// itself is never stored anywhere downstream of this function.
pub fn hash_secret(value: Option<&str>) -> Cleaned<String> {
    let Some(value) = value else {
        return Cleaned::blank();
    };
    if value.is_empty() {
        return Cleaned::blank();
    }
    let digest = Sha256::digest(value.as_bytes());
    Cleaned::Value(hex::encode(digest))
}
