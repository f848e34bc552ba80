//! Asset identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the item a chain of records transfers.
///
/// Opaque to the protocol; it is fixed by the genesis record and carried
/// unchanged by every transfer.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AssetId(pub u64);

impl AssetId {
    pub const LEN: usize = 8;

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_le_bytes(bytes))
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AssetId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
