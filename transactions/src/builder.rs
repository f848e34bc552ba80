//! Record construction: genesis and transfer.

use chattel_crypto::address_from_private;
use chattel_types::{Address, AssetId, Id, PrivateKey, Signature};
use tracing::debug;

use crate::error::TransactionError;
use crate::record::Transaction;

/// Build the genesis record that brings `asset_id` into existence.
///
/// The output is the issuer's own address, the input is the empty sentinel,
/// and the record is signed by the issuer.
pub fn build_genesis_tx(asset_id: AssetId, issuer: &PrivateKey) -> Transaction {
    let mut tx = Transaction {
        asset_id,
        input: Id::empty(),
        output: address_from_private(issuer),
        signature: Signature::ZERO,
    };
    tx.signature = tx.sign(issuer);

    debug!(%asset_id, hash = %tx.hash(), "built genesis record");
    tx
}

/// Build a record transferring the asset of `input` to `output`.
///
/// Fails with [`TransactionError::Unauthorized`] when `owner` does not
/// control `input.output`. This only guards honest callers; a forged record
/// is still caught by [`crate::verify_with`].
pub fn build_transfer_tx(
    input: &Transaction,
    output: Address,
    owner: &PrivateKey,
) -> Result<Transaction, TransactionError> {
    let owner_address = address_from_private(owner);
    if owner_address != input.output {
        return Err(TransactionError::Unauthorized {
            expected: input.output,
            actual: owner_address,
        });
    }

    let mut tx = Transaction {
        asset_id: input.asset_id,
        input: input.hash(),
        output,
        signature: Signature::ZERO,
    };
    tx.signature = tx.sign(owner);

    debug!(
        asset_id = %tx.asset_id,
        input = %tx.input,
        hash = %tx.hash(),
        "built transfer record"
    );
    Ok(tx)
}
