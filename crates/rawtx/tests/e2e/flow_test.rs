//! `new` -> `show` -> `push` flows through the command handlers.

use proptest::prelude::*;
use rawtx::cli::commands::{CommandError, NewCommand, PushCommand, ShowCommand};
use rawtx::cli::OutputFormat;
use rawtx_chain::codec;
use rawtx_core::config::Config;
use rawtx_core::error::ErrorKind;

use crate::common::{
    ether_amount, ethereum_address, hex_bytes, hex_line, new_args, RecordingBroadcaster,
    EIP155_SENDER, EIP155_SIGNED,
};

fn run_new(args: rawtx::cli::NewArgs, config: &Config) -> Result<String, CommandError> {
    let mut out = Vec::new();
    NewCommand::new(args).run_with(config, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

fn run_show(tx: &str, format: OutputFormat) -> Result<String, CommandError> {
    let mut out = Vec::new();
    ShowCommand::new(tx, format).run_with(&mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_new_produces_reference_transaction() {
    let summary = run_new(new_args(), &Config::default()).unwrap();
    assert_eq!(hex_line(&summary), format!("0x{EIP155_SIGNED}"));
    assert!(summary.contains(&format!("From:     {EIP155_SENDER}")));
}

#[test]
fn test_new_then_show_round_trip() {
    let created = run_new(new_args(), &Config::default()).unwrap();
    let shown = run_show(&hex_line(&created), OutputFormat::Text).unwrap();
    assert_eq!(created, shown);
}

#[test]
fn test_new_then_push_confirmed() {
    let created = run_new(new_args(), &Config::default()).unwrap();
    let hex = hex_line(&created);

    let broadcaster = RecordingBroadcaster::default();
    let mut out = Vec::new();
    PushCommand::new(hex.clone(), None)
        .run_with(&b"y\n"[..], &mut out, || Ok(&broadcaster))
        .unwrap();

    assert_eq!(broadcaster.sent.borrow().as_slice(), [EIP155_SIGNED.to_string()]);
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("your transaction:\n"));
    assert!(out.contains(&created));
    assert!(out.contains("\"result\":\"0xabab"));
}

#[test]
fn test_push_declined_never_broadcasts() {
    for answer in ["n\n", "N\n", "\n", "maybe\nn\n"] {
        let broadcaster = RecordingBroadcaster::default();
        let mut out = Vec::new();
        PushCommand::new(EIP155_SIGNED, None)
            .run_with(answer.as_bytes(), &mut out, || Ok(&broadcaster))
            .unwrap();
        assert_eq!(broadcaster.calls(), 0, "answer {answer:?} broadcast");
    }
}

#[test]
fn test_contract_creation_flow() {
    let mut args = new_args();
    args.to = None;
    args.data = "0x6080604052".to_string();
    args.value = "0".to_string();

    let created = run_new(args, &Config::default()).unwrap();
    assert!(created.contains("Contract: true"));
    assert!(created.contains("To:       [contract creation]"));

    let decoded = codec::decode_hex(&hex_line(&created)).unwrap();
    assert!(decoded.tx().is_contract_creation());
    assert_eq!(decoded.tx().input().as_ref(), &[0x60u8, 0x80, 0x60, 0x40, 0x52]);
}

#[test]
fn test_json_output_round_trip() {
    let mut args = new_args();
    args.format = OutputFormat::Json;
    let created: serde_json::Value =
        serde_json::from_str(&run_new(args, &Config::default()).unwrap()).unwrap();

    let raw = created["raw"].as_str().unwrap();
    let shown: serde_json::Value =
        serde_json::from_str(&run_show(raw, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(created, shown);
}

#[test]
fn test_show_rejects_corruption() {
    let mut corrupted = EIP155_SIGNED.to_string();
    corrupted.replace_range(0..2, "f7");
    assert_eq!(
        run_show(&corrupted, OutputFormat::Text).unwrap_err().kind(),
        Some(ErrorKind::DecodeError)
    );

    assert_eq!(
        run_show(&format!("{EIP155_SIGNED}00"), OutputFormat::Text)
            .unwrap_err()
            .kind(),
        Some(ErrorKind::DecodeError)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_new_show_agree(
        to in proptest::option::of(ethereum_address()),
        value in ether_amount(),
        data in hex_bytes(64),
        nonce in any::<u64>(),
        chain_id in 1u64..100_000,
    ) {
        let mut args = new_args();
        args.to = to.clone();
        args.value = value;
        args.data = data;
        args.nonce = nonce;
        args.chain_id = Some(chain_id);

        let created = run_new(args, &Config::default()).unwrap();
        let decoded = codec::decode_hex(&hex_line(&created)).unwrap();

        prop_assert_eq!(decoded.tx().nonce(), nonce);
        prop_assert_eq!(decoded.chain_id(), Some(chain_id));
        prop_assert_eq!(decoded.tx().is_contract_creation(), to.is_none());
        let sender_line = format!("From:     {EIP155_SENDER}");
        prop_assert!(created.contains(&sender_line));
        prop_assert_eq!(run_show(&hex_line(&created), OutputFormat::Text).unwrap(), created);
    }

    #[test]
    fn prop_show_never_panics(input in "(0x)?[0-9a-f]{0,300}") {
        let _ = run_show(&input, OutputFormat::Text);
    }
}
