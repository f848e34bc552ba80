//! The ownership record, its canonical encoding, and its hashes.
//!
//! Canonical encoding, 136 bytes, fields in declared order:
//!
//! ```text
//! offset  len  field
//!      0    8  asset_id   u64 little-endian
//!      8   32  input      record id (all zero for genesis)
//!     40   32  output     public key embedded in the owner address
//!     72   64  signature  Ed25519 signature, R || s
//! ```
//!
//! [`Transaction::hash`] is Blake2b-256 over these bytes. The signed
//! payload, [`Transaction::inner_hash`], is the same hash taken with the
//! signature field zeroed.

use chattel_crypto::{hash_to_id, sign_message};
use chattel_types::{Address, AssetId, Id, PrivateKey, Signature};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TransactionError;

const ASSET_OFFSET: usize = 0;
const INPUT_OFFSET: usize = ASSET_OFFSET + AssetId::LEN;
const OUTPUT_OFFSET: usize = INPUT_OFFSET + Id::LEN;
const SIGNATURE_OFFSET: usize = OUTPUT_OFFSET + Address::LEN;

/// Length of the canonical encoding of a [`Transaction`].
pub const ENCODED_LEN: usize = SIGNATURE_OFFSET + Signature::LEN;

/// A single ownership record.
///
/// A genesis record has `input == Id::ZERO` and is signed by the issuer.
/// A transfer record's `input` is the hash of the record it spends and it
/// is signed by the owner named in that record's `output`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    pub asset_id: AssetId,
    pub input: Id,
    pub output: Address,
    pub signature: Signature,
}

impl Transaction {
    /// Encode into the canonical byte layout.
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut out = [0u8; ENCODED_LEN];
        out[ASSET_OFFSET..INPUT_OFFSET].copy_from_slice(&self.asset_id.to_le_bytes());
        out[INPUT_OFFSET..OUTPUT_OFFSET].copy_from_slice(self.input.as_bytes());
        out[OUTPUT_OFFSET..SIGNATURE_OFFSET].copy_from_slice(self.output.as_bytes());
        out[SIGNATURE_OFFSET..].copy_from_slice(self.signature.as_bytes());
        out
    }

    /// Decode the canonical byte layout.
    ///
    /// Only the length is checked; whether the record is valid is decided by
    /// [`crate::verify_with`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let bytes: &[u8; ENCODED_LEN] =
            bytes
                .try_into()
                .map_err(|_| TransactionError::Malformed {
                    reason: format!("expected {} bytes, got {}", ENCODED_LEN, bytes.len()),
                })?;

        let mut asset_id = [0u8; AssetId::LEN];
        asset_id.copy_from_slice(&bytes[ASSET_OFFSET..INPUT_OFFSET]);
        let mut input = [0u8; Id::LEN];
        input.copy_from_slice(&bytes[INPUT_OFFSET..OUTPUT_OFFSET]);
        let mut output = [0u8; Address::LEN];
        output.copy_from_slice(&bytes[OUTPUT_OFFSET..SIGNATURE_OFFSET]);
        let mut signature = [0u8; Signature::LEN];
        signature.copy_from_slice(&bytes[SIGNATURE_OFFSET..]);

        Ok(Self {
            asset_id: AssetId::from_le_bytes(asset_id),
            input: Id::new(input),
            output: Address::from_bytes(output),
            signature: Signature(signature),
        })
    }

    /// Content hash of the complete signed record.
    ///
    /// This is the value the `input` of a record spending this one must carry.
    pub fn hash(&self) -> Id {
        self.hash_with(&self.signature)
    }

    /// Hash of the record with its signature zeroed; the signed payload.
    pub fn inner_hash(&self) -> Id {
        self.hash_with(&Signature::ZERO)
    }

    /// Hash the canonical encoding field by field, with `signature` in the
    /// signature slot.
    fn hash_with(&self, signature: &Signature) -> Id {
        hash_to_id(&[
            &self.asset_id.to_le_bytes()[..],
            &self.input.as_bytes()[..],
            &self.output.as_bytes()[..],
            &signature.as_bytes()[..],
        ])
    }

    /// Sign the inner hash with `private_key`.
    ///
    /// Does not store the signature; builders assign it to `signature`.
    pub fn sign(&self, private_key: &PrivateKey) -> Signature {
        sign_message(self.inner_hash().as_bytes(), private_key)
    }

    /// Whether `input` is the empty sentinel.
    pub fn spends_nothing(&self) -> bool {
        self.input.is_empty()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "asset_id:{}|in:{}|out:{}|sig:{}",
            self.asset_id,
            self.input,
            self.output.to_hex(),
            self.signature
        )
    }
}
