use chattel_types::{Address, AssetId, Id};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error(
        "secret key controls {}, but the input record pays {}",
        .actual.to_hex(),
        .expected.to_hex()
    )]
    Unauthorized { expected: Address, actual: Address },

    #[error("broken link: expected 'in:{expected}', but got 'in:{actual}'")]
    BrokenLink { expected: Id, actual: Id },

    #[error(
        "output {} is not the issuer address {}",
        .actual.to_hex(),
        .expected.to_hex()
    )]
    AddressMismatch { expected: Address, actual: Address },

    #[error("asset mismatch: expected 'asset_id:{expected}', but got 'asset_id:{actual}'")]
    AssetMismatch { expected: AssetId, actual: AssetId },

    #[error("invalid signature on transaction {tx_hash}")]
    BadSignature { tx_hash: Id },

    #[error("malformed transaction encoding: {reason}")]
    Malformed { reason: String },

    #[error("config error: {0}")]
    Config(String),
}
