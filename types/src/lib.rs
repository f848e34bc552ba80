//! Fundamental types for chattel ownership records.
//!
//! This crate defines the value types shared across the workspace:
//! record identifiers, asset identifiers, owner addresses, keys and signatures.

pub mod address;
pub mod asset;
pub mod error;
pub mod hash;
pub mod keys;

pub use address::Address;
pub use asset::AssetId;
pub use error::ParseError;
pub use hash::{ids_to_hex, Id};
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
