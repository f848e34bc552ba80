//! Address derivation and address-to-key binding.
//!
//! The text encoding lives on [`chattel_types::Address`]; this module is the
//! capability the record layer calls to turn keys into addresses and to check
//! that an address names a given key.

use chattel_types::{Address, PrivateKey, PublicKey};
use ed25519_dalek::VerifyingKey;

use crate::error::CryptoError;

/// Derive the owner address for a public key.
pub fn derive_address(public_key: &PublicKey) -> Address {
    Address::from_public_key(public_key)
}

/// Derive the owner address controlled by a private key.
pub fn address_from_private(private_key: &PrivateKey) -> Address {
    derive_address(&crate::keys::public_from_private(private_key))
}

/// Check that `address` names the holder of `public_key`.
///
/// The binding is compared first: [`CryptoError::AddressMismatch`] if the
/// address was derived from a different key, then
/// [`CryptoError::InvalidPublicKey`] if the key is not a valid Ed25519 point.
pub fn verify_address(address: &Address, public_key: &PublicKey) -> Result<(), CryptoError> {
    let expected = derive_address(public_key);
    if *address != expected {
        return Err(CryptoError::AddressMismatch {
            expected,
            actual: *address,
        });
    }
    VerifyingKey::from_bytes(&public_key.0).map_err(|_| CryptoError::InvalidPublicKey)?;
    Ok(())
}
