use proptest::prelude::*;

use chattel_crypto::{derive_address, keypair_from_seed};
use chattel_transactions::{
    build_genesis_tx, build_transfer_tx, verify_with, Input, Transaction, TransactionError,
};
use chattel_types::{AssetId, Signature};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every genesis record verifies under its own issuer key.
    #[test]
    fn genesis_always_verifies(seed in prop::array::uniform32(0u8..), asset in any::<u64>()) {
        let kp = keypair_from_seed(&seed);
        let g = build_genesis_tx(AssetId::new(asset), &kp.private);
        prop_assert_eq!(verify_with(&g, Input::Genesis, &kp.public), Ok(()));
    }

    /// Flipping any single bit of the signed fields of a genesis record is rejected.
    #[test]
    fn genesis_single_bit_tamper_rejected(
        seed in prop::array::uniform32(0u8..),
        asset in any::<u64>(),
        bit in 0usize..(72 * 8),
    ) {
        let kp = keypair_from_seed(&seed);
        let g = build_genesis_tx(AssetId::new(asset), &kp.private);

        let mut bytes = g.to_bytes();
        bytes[bit / 8] ^= 1 << (bit % 8);
        let tampered = Transaction::from_bytes(&bytes).unwrap();

        let err = verify_with(&tampered, Input::Genesis, &kp.public).unwrap_err();
        let expected_kind = matches!(
            err,
            TransactionError::BrokenLink { .. }
                | TransactionError::AddressMismatch { .. }
                | TransactionError::BadSignature { .. }
        );
        prop_assert!(expected_kind, "unexpected error {:?}", err);
    }

    /// The owner of an output can always spend it, and the spend verifies.
    #[test]
    fn owner_transfer_verifies(
        issuer_seed in prop::array::uniform32(0u8..),
        next_seed in prop::array::uniform32(0u8..),
        asset in any::<u64>(),
    ) {
        let issuer = keypair_from_seed(&issuer_seed);
        let next = keypair_from_seed(&next_seed);
        let g = build_genesis_tx(AssetId::new(asset), &issuer.private);
        let t = build_transfer_tx(&g, derive_address(&next.public), &issuer.private).unwrap();
        prop_assert_eq!(t.input, g.hash());
        prop_assert_eq!(verify_with(&t, Input::Spends(&g), &issuer.public), Ok(()));
    }

    /// A key that does not own the output cannot build a transfer.
    #[test]
    fn non_owner_transfer_unauthorized(
        issuer_seed in prop::array::uniform32(0u8..),
        wrong_seed in prop::array::uniform32(0u8..),
    ) {
        prop_assume!(issuer_seed != wrong_seed);
        let issuer = keypair_from_seed(&issuer_seed);
        let wrong = keypair_from_seed(&wrong_seed);
        let g = build_genesis_tx(AssetId::new(1), &issuer.private);
        let result = build_transfer_tx(&g, derive_address(&wrong.public), &wrong.private);
        let unauthorized = matches!(result, Err(TransactionError::Unauthorized { .. }));
        prop_assert!(unauthorized);
    }

    /// The inner hash does not depend on the signature bytes.
    #[test]
    fn inner_hash_ignores_signature(
        seed in prop::array::uniform32(0u8..),
        sig_lo in prop::array::uniform32(0u8..),
        sig_hi in prop::array::uniform32(0u8..),
    ) {
        let kp = keypair_from_seed(&seed);
        let g = build_genesis_tx(AssetId::new(3), &kp.private);
        let mut sig = [0u8; 64];
        sig[..32].copy_from_slice(&sig_lo);
        sig[32..].copy_from_slice(&sig_hi);
        let mut other = g.clone();
        other.signature = Signature(sig);
        prop_assert_eq!(other.inner_hash(), g.inner_hash());
    }

    /// Decoding arbitrary bytes of the right length never panics, and
    /// verifying the result against a real record never panics either.
    #[test]
    fn arbitrary_records_never_panic(raw in prop::collection::vec(any::<u8>(), 136)) {
        let kp = keypair_from_seed(&[1u8; 32]);
        let g = build_genesis_tx(AssetId::new(1), &kp.private);
        let tx = Transaction::from_bytes(&raw).unwrap();
        let _ = verify_with(&tx, Input::Genesis, &kp.public);
        let _ = verify_with(&tx, Input::Spends(&g), &kp.public);
        prop_assert_eq!(tx.to_bytes().to_vec(), raw);
    }
}
