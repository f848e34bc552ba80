#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Canonical decoding must never panic, and anything it accepts must
    // re-encode to the same bytes.
    if let Ok(tx) = chattel_transactions::Transaction::from_bytes(data) {
        assert_eq!(&tx.to_bytes()[..], data);
        let _ = tx.hash();
        let _ = tx.inner_hash();
        let _ = tx.to_string();
    }

    // Serde forms must not panic on malformed input either.
    let _ = bincode::deserialize::<chattel_transactions::Transaction>(data);
    let _ = bincode::deserialize::<chattel_types::Id>(data);
    let _ = bincode::deserialize::<chattel_types::Signature>(data);
    let _ = serde_json::from_slice::<chattel_transactions::Wrapper>(data);
});
