//! A verifier bound to one trusted issuer, with structured logging.
//!
//! The functions in [`crate::validation`] stay pure; this wrapper is where
//! verdicts and classification reasons are reported through `tracing`.

use chattel_types::PublicKey;
use tracing::{debug, warn};

use crate::config::TrustConfig;
use crate::error::TransactionError;
use crate::record::Transaction;
use crate::validation::{classify_genesis, verify_with, GenesisShape, Input};

#[derive(Clone, Debug)]
pub struct Verifier {
    issuer: PublicKey,
}

impl Verifier {
    pub fn new(issuer: PublicKey) -> Self {
        Self { issuer }
    }

    pub fn from_config(config: &TrustConfig) -> Self {
        Self::new(config.issuer_public_key())
    }

    pub fn issuer(&self) -> &PublicKey {
        &self.issuer
    }

    /// Verify `tx` against `input` under this verifier's issuer.
    pub fn verify(&self, tx: &Transaction, input: Input<'_>) -> Result<(), TransactionError> {
        let result = verify_with(tx, input, &self.issuer);
        let genesis = matches!(input, Input::Genesis);
        match &result {
            Ok(()) => debug!(
                hash = %tx.hash(),
                asset_id = %tx.asset_id,
                genesis,
                "record accepted"
            ),
            Err(e) => warn!(
                hash = %tx.hash(),
                asset_id = %tx.asset_id,
                genesis,
                error = %e,
                "record rejected"
            ),
        }
        result
    }

    /// Verify `tx` as a genesis record.
    pub fn verify_genesis(&self, tx: &Transaction) -> Result<(), TransactionError> {
        self.verify(tx, Input::Genesis)
    }

    /// Verify `tx` as a transfer spending `spent`.
    pub fn verify_transfer(
        &self,
        tx: &Transaction,
        spent: &Transaction,
    ) -> Result<(), TransactionError> {
        self.verify(tx, Input::Spends(spent))
    }

    /// Classify `tx` against the issuer and log the reason.
    pub fn classify(&self, tx: &Transaction) -> GenesisShape {
        let shape = classify_genesis(tx, &self.issuer);
        debug!(
            hash = %tx.hash(),
            genesis = shape.is_genesis(),
            reason = %shape,
            "genesis classification"
        );
        shape
    }

    /// Whether `tx` looks like a genesis record from the issuer. Advisory only.
    pub fn is_genesis(&self, tx: &Transaction) -> bool {
        self.classify(tx).is_genesis()
    }
}
