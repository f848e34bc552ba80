#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use chattel_transactions::{classify_genesis, verify_with, Input, Transaction};
use chattel_types::PublicKey;

#[derive(Arbitrary, Debug)]
struct Case {
    candidate: Vec<u8>,
    spent: Option<Vec<u8>>,
    issuer: [u8; 32],
}

fuzz_target!(|case: Case| {
    // Verification runs on adversarial data: it must return, never panic.
    let Ok(candidate) = Transaction::from_bytes(&case.candidate) else {
        return;
    };
    let issuer = PublicKey(case.issuer);

    let spent = case
        .spent
        .as_deref()
        .and_then(|bytes| Transaction::from_bytes(bytes).ok());

    let input = match &spent {
        Some(tx) => Input::Spends(tx),
        None => Input::Genesis,
    };
    let _ = verify_with(&candidate, input, &issuer);
    let _ = classify_genesis(&candidate, &issuer);
});
