//! Fuzz target for decimal amount parsing.
//!
//! # Running
//!
//! ```bash
//! cargo +nightly fuzz run amount_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use rawtx_core::amount::{format_amount, parse_amount, ETHER_DECIMALS};

fuzz_target!(|text: &str| {
    if let Ok(wei) = parse_amount(text) {
        // Formatting is lossless, so a parsed amount survives a second pass.
        let formatted = format_amount(wei, ETHER_DECIMALS);
        assert_eq!(parse_amount(&formatted).ok(), Some(wei));
    }
});
