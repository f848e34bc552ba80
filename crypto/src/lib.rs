//! Cryptographic primitives for chattel records.
//!
//! - **Ed25519** for signing and signature verification
//! - **Blake2b-256** for record hashing
//! - Address derivation and address-to-key binding checks

pub mod address;
pub mod error;
pub mod hash;
pub mod keys;
pub mod sign;

pub use address::{address_from_private, derive_address, verify_address};
pub use error::CryptoError;
pub use hash::{blake2b_256, blake2b_256_multi, hash_to_id};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature};
