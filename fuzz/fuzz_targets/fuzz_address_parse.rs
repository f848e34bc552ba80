#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Address and hex parsing must never panic on arbitrary text.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(addr) = text.parse::<chattel_types::Address>() {
            let reparsed = addr.to_string().parse::<chattel_types::Address>();
            assert_eq!(reparsed, Ok(addr));
            let _ = chattel_crypto::verify_address(&addr, &addr.public_key());
        }
        let _ = chattel_types::Id::from_hex(text);
    }
});
