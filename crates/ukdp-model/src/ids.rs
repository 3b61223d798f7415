#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// A deterministic user identifier.
///
/// Derived as the SHA-256 digest of the trimmed, lowercased email address and
/// rendered as 64 lowercase hex characters. The same email modulo case and
/// surrounding whitespace always yields the same id, which is what makes
/// re-runs of the pipeline idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId([u8; 32]);

impl UserId {
    pub fn from_sha256(digest: [u8; 32]) -> Self {
        Self(digest)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(value: &str) -> Result<Self, ModelError> {
        let bytes =
            hex::decode(value).map_err(|_| ModelError::InvalidUserId(value.to_string()))?;
        let digest: [u8; 32] = bytes
            .try_into()
            .map_err(|_| ModelError::InvalidUserId(value.to_string()))?;
        Ok(Self(digest))
    }
}

impl serde::Serialize for UserId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for UserId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let id = UserId::from_sha256([0xab; 32]);
        let hex = id.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(UserId::from_hex(&hex).unwrap(), id);
    }

    #[test]
    fn rejects_short_hex() {
        assert!(UserId::from_hex("abcd").is_err());
    }

    #[test]
    fn serde_as_hex_string() {
        let id = UserId::from_sha256([0x01; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.to_hex()));
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
