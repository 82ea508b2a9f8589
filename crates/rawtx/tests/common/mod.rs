//! # Test Utilities for rawtx
//!
//! - [`temp_config`] - Write a configuration file into an isolated temp dir
//! - [`new_args`] - Arguments for `rawtx new` matching the EIP-155 example
//! - [`RecordingBroadcaster`] - A [`Broadcast`] that records instead of sending
//!
//! ## Proptest Strategies
//!
//! - [`ethereum_address`] - 0x-prefixed 20-byte addresses
//! - [`hex_bytes`] - hex payloads with or without a prefix
//! - [`ether_amount`] - decimal ether strings with up to 18 fractional digits

#![allow(dead_code)]

use std::cell::RefCell;
use std::fmt::Write as FmtWrite;
use std::path::PathBuf;

use proptest::prelude::*;
use rawtx::cli::{NewArgs, OutputFormat};
use rawtx::Broadcast;
use rawtx_core::error::NetworkResult;
use tempfile::TempDir;

/// Private key from the EIP-155 example (`0x46` repeated).
pub const EIP155_KEY: &str = "4646464646464646464646464646464646464646464646464646464646464646";

/// Address of [`EIP155_KEY`].
pub const EIP155_SENDER: &str = "0x9d8A62f656a8d1615C1294fd71e9CFb3E4855A4F";

/// The EIP-155 example transaction signed for chain 1.
pub const EIP155_SIGNED: &str = "f86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83";

/// Create a temp dir holding `config.toml` with `contents`.
///
/// The directory is removed when the returned [`TempDir`] drops.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("failed to write config");
    (dir, path)
}

/// `new` arguments for the EIP-155 example: nonce 9, 20 gwei, 21000 gas,
/// 1 ether to `0x3535...35`.
pub fn new_args() -> NewArgs {
    NewArgs {
        privkey: EIP155_KEY.to_string(),
        to: Some(format!("0x{}", "35".repeat(20))),
        data: String::new(),
        value: "1".to_string(),
        gas_price: Some("20000000000".to_string()),
        gas_limit: Some("21000".to_string()),
        nonce: 9,
        chain_id: None,
        format: OutputFormat::Text,
    }
}

/// Pull the `Hex:` line out of a text summary.
pub fn hex_line(summary: &str) -> String {
    summary
        .lines()
        .find_map(|line| line.strip_prefix("Hex:"))
        .map(|hex| hex.trim().to_string())
        .expect("summary has a Hex line")
}

/// Records every broadcast and answers with a canned body.
#[derive(Debug, Default)]
pub struct RecordingBroadcaster {
    pub sent: RefCell<Vec<String>>,
}

impl RecordingBroadcaster {
    pub fn calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Broadcast for RecordingBroadcaster {
    fn broadcast(&self, raw_hex: &str) -> NetworkResult<String> {
        self.sent.borrow_mut().push(raw_hex.to_string());
        Ok(format!(
            r#"{{"jsonrpc":"2.0","id":1,"result":"0x{}"}}"#,
            "ab".repeat(32)
        ))
    }
}

/// Strategy for 0x-prefixed lowercase addresses.
pub fn ethereum_address() -> impl Strategy<Value = String> {
    prop::array::uniform20(any::<u8>()).prop_map(|bytes| {
        let mut s = String::with_capacity(42);
        s.push_str("0x");
        for byte in bytes {
            let _ = write!(s, "{byte:02x}");
        }
        s
    })
}

/// Strategy for hex payloads up to `max_len` bytes, randomly `0x`-prefixed.
pub fn hex_bytes(max_len: usize) -> impl Strategy<Value = String> {
    (prop::collection::vec(any::<u8>(), 0..=max_len), any::<bool>()).prop_map(
        |(bytes, prefixed)| {
            let hex = hex::encode(bytes);
            if prefixed {
                format!("0x{hex}")
            } else {
                hex
            }
        },
    )
}

/// Strategy for decimal ether amounts such as `12`, `0.5` or `.000001`.
pub fn ether_amount() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u64..1_000_000).prop_map(|n| n.to_string()),
        (0u64..1_000_000, "[0-9]{1,18}").prop_map(|(n, frac)| format!("{n}.{frac}")),
        "[0-9]{1,18}".prop_map(|frac| format!(".{frac}")),
    ]
}
