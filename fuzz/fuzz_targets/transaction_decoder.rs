//! Fuzz target for the signed transaction decoder.
//!
//! # Running
//!
//! ```bash
//! cargo +nightly fuzz run transaction_decoder
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use rawtx_chain::codec;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode to the exact input.
    if let Ok(tx) = codec::decode(data) {
        assert_eq!(codec::encode(&tx), data);
        let _ = tx.hash();
        let _ = tx.signing_hash();
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = codec::decode_hex(text);
    }
});
