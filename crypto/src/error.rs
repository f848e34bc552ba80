use chattel_types::Address;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error(
        "address {} is not bound to the public key for {}",
        .actual.to_hex(),
        .expected.to_hex()
    )]
    AddressMismatch { expected: Address, actual: Address },

    #[error("invalid Ed25519 public key")]
    InvalidPublicKey,
}
