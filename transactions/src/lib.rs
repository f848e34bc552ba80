//! Ownership records for a single transferable item.
//!
//! An item is minted once by a trusted issuer in a **genesis** record and then
//! passed from owner to owner through **transfer** records. Each transfer names
//! the hash of the record it spends in its `input` and is signed by the owner
//! that record paid, so the history forms a hash-linked chain that anyone can
//! check with [`verify_with`] given only the issuer's public key.
//!
//! - [`record`]: the [`Transaction`] record, canonical encoding, hashes, signing
//! - [`builder`]: genesis and transfer construction
//! - [`validation`]: single-step verification and the genesis classifier
//! - [`meta`]: sequence/timestamp metadata for presentation
//! - [`config`]: trust configuration loaded from TOML
//! - [`verifier`]: issuer-bound verifier that logs its verdicts
//!
//! Double-spend detection is out of scope: verification checks one record
//! against the one record it claims to spend.

pub mod builder;
pub mod config;
pub mod error;
pub mod meta;
pub mod record;
pub mod validation;
pub mod verifier;

pub use builder::{build_genesis_tx, build_transfer_tx};
pub use config::TrustConfig;
pub use error::TransactionError;
pub use meta::{Meta, Wrapper};
pub use record::{Transaction, ENCODED_LEN};
pub use validation::{classify_genesis, is_genesis_shaped, verify_with, GenesisShape, Input};
pub use verifier::Verifier;
