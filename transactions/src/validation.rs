//! Record verification and the genesis classifier.
//!
//! [`verify_with`] is the trust boundary: given a candidate record, the record
//! it claims to spend (or none, for a genesis record) and the trusted issuer
//! key, it decides whether the transition is authorized. It is pure and does
//! not know which records are already spent; callers that need double-spend
//! protection must track spent input hashes themselves.

use chattel_crypto::{verify_address, verify_signature, CryptoError};
use chattel_types::{Address, Id, PublicKey};
use std::fmt;

use crate::error::TransactionError;
use crate::record::Transaction;

/// What a candidate record is checked against.
#[derive(Clone, Copy, Debug)]
pub enum Input<'a> {
    /// No predecessor: the candidate must be a genesis record.
    Genesis,
    /// The record whose output the candidate spends.
    Spends(&'a Transaction),
}

/// Verify `tx` against its input.
///
/// Genesis, in order:
/// 1. `tx.input` is the empty sentinel ([`TransactionError::BrokenLink`]).
/// 2. `tx.output` is the issuer's address ([`TransactionError::AddressMismatch`]).
/// 3. The signature verifies under `issuer` ([`TransactionError::BadSignature`]).
///
/// Transfer, in order:
/// 1. `tx.input` is the hash of the spent record ([`TransactionError::BrokenLink`]).
/// 2. The asset is unchanged ([`TransactionError::AssetMismatch`]).
/// 3. The signature verifies under the key named by the spent record's output
///    ([`TransactionError::BadSignature`]).
pub fn verify_with(
    tx: &Transaction,
    input: Input<'_>,
    issuer: &PublicKey,
) -> Result<(), TransactionError> {
    match input {
        Input::Genesis => verify_genesis(tx, issuer),
        Input::Spends(spent) => verify_transfer(tx, spent),
    }
}

fn verify_genesis(tx: &Transaction, issuer: &PublicKey) -> Result<(), TransactionError> {
    if !tx.spends_nothing() {
        return Err(TransactionError::BrokenLink {
            expected: Id::empty(),
            actual: tx.input,
        });
    }

    match verify_address(&tx.output, issuer) {
        Ok(()) => {}
        Err(CryptoError::AddressMismatch { expected, actual }) => {
            return Err(TransactionError::AddressMismatch { expected, actual });
        }
        // Output is bound to the issuer, but the issuer key is unusable, so
        // no signature can verify under it.
        Err(CryptoError::InvalidPublicKey) => {
            return Err(TransactionError::BadSignature { tx_hash: tx.hash() });
        }
    }

    check_signature(tx, issuer)
}

fn verify_transfer(tx: &Transaction, spent: &Transaction) -> Result<(), TransactionError> {
    let expected = spent.hash();
    if tx.input != expected {
        return Err(TransactionError::BrokenLink {
            expected,
            actual: tx.input,
        });
    }

    if tx.asset_id != spent.asset_id {
        return Err(TransactionError::AssetMismatch {
            expected: spent.asset_id,
            actual: tx.asset_id,
        });
    }

    check_signature(tx, &spent.output.public_key())
}

fn check_signature(tx: &Transaction, signer: &PublicKey) -> Result<(), TransactionError> {
    if verify_signature(tx.inner_hash().as_bytes(), &tx.signature, signer) {
        Ok(())
    } else {
        Err(TransactionError::BadSignature { tx_hash: tx.hash() })
    }
}

/// Why a record does or does not look like a genesis record for a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenesisShape {
    /// Empty input, output bound to the key.
    Genesis,
    /// The record spends another record.
    HasInput(Id),
    /// The output names a different key.
    ForeignOutput { expected: Address, actual: Address },
    /// The output is bound to the key, but the key itself is not a usable
    /// Ed25519 public key.
    InvalidKey,
}

impl GenesisShape {
    pub fn is_genesis(&self) -> bool {
        matches!(self, Self::Genesis)
    }
}

impl fmt::Display for GenesisShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Genesis => write!(f, "genesis"),
            Self::HasInput(input) => write!(f, "input is not empty: {}", input),
            Self::ForeignOutput { expected, actual } => {
                write!(f, "output {} is not {}", actual.to_hex(), expected.to_hex())
            }
            Self::InvalidKey => write!(f, "public key is invalid"),
        }
    }
}

/// Classify `tx` against `public_key` without checking its signature.
///
/// Advisory only: a genesis-shaped record may still fail [`verify_with`].
pub fn classify_genesis(tx: &Transaction, public_key: &PublicKey) -> GenesisShape {
    if !tx.spends_nothing() {
        return GenesisShape::HasInput(tx.input);
    }
    match verify_address(&tx.output, public_key) {
        Ok(()) => GenesisShape::Genesis,
        Err(CryptoError::AddressMismatch { expected, actual }) => {
            GenesisShape::ForeignOutput { expected, actual }
        }
        Err(CryptoError::InvalidPublicKey) => GenesisShape::InvalidKey,
    }
}

/// Whether `tx` looks like a genesis record minted by `public_key`.
pub fn is_genesis_shaped(tx: &Transaction, public_key: &PublicKey) -> bool {
    classify_genesis(tx, public_key).is_genesis()
}
