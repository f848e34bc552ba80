//! Record identifiers: 32-byte content digests.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ParseError;

/// A 32-byte record identifier.
///
/// Used both as a record's content hash and as the input reference of the
/// record that spends it. The all-zero value is reserved as the "no
/// predecessor" sentinel carried only by genesis records.
///
/// Serializes as a hex string in human-readable formats and as raw bytes
/// otherwise.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id([u8; 32]);

impl Default for Id {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Id {
    pub const LEN: usize = 32;

    /// The empty sentinel.
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The sentinel input of a genesis record.
    pub fn empty() -> Self {
        Self::ZERO
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Lowercase hex, always 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, ParseError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| ParseError::InvalidHex(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({}\u{2026})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_hex(&s).map_err(serde::de::Error::custom)
        } else {
            <[u8; 32]>::deserialize(deserializer).map(Self)
        }
    }
}

impl From<[u8; 32]> for Id {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Render a list of identifiers as hex strings, preserving order.
pub fn ids_to_hex(ids: &[Id]) -> Vec<String> {
    ids.iter().map(Id::to_hex).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_all_zero() {
        assert_eq!(Id::empty(), Id::ZERO);
        assert!(Id::empty().is_empty());
        assert_eq!(Id::empty().as_bytes(), &[0u8; 32]);
        assert!(!Id::new([1u8; 32]).is_empty());
    }

    #[test]
    fn hex_is_lowercase_and_fixed_length() {
        let id = Id::new([0xAB; 32]);
        let hex = id.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(hex, "ab".repeat(32));
        assert_eq!(id.to_string(), hex);
        assert_eq!(Id::ZERO.to_hex(), "0".repeat(64));
    }

    #[test]
    fn from_hex_roundtrip() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let id = Id::new(bytes);
        assert_eq!(Id::from_hex(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(Id::from_hex("abcd").is_err());
        assert!(Id::from_hex(&"zz".repeat(32)).is_err());
        assert!(Id::from_hex(&"00".repeat(33)).is_err());
    }

    #[test]
    fn equality_is_bytewise() {
        let mut a = [7u8; 32];
        let b = Id::new(a);
        a[31] ^= 1;
        assert_ne!(Id::new(a), b);
    }

    #[test]
    fn ids_to_hex_preserves_order() {
        let ids = [Id::new([1u8; 32]), Id::ZERO];
        let out = ids_to_hex(&ids);
        assert_eq!(out, vec!["01".repeat(32), "00".repeat(32)]);
        assert!(ids_to_hex(&[]).is_empty());
    }

    #[test]
    fn json_uses_hex() {
        let id = Id::new([0x0F; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "0f".repeat(32)));
        assert_eq!(serde_json::from_str::<Id>(&json).unwrap(), id);
        assert!(serde_json::from_str::<Id>("\"0f\"").is_err());
    }

    #[test]
    fn debug_is_abbreviated() {
        let id = Id::new([0xFF; 32]);
        assert_eq!(format!("{:?}", id), "Id(ffffffff\u{2026})");
    }
}
