//! CLI parsing feeding directly into command handlers.

use clap::Parser;
use rawtx::cli::commands::{NewCommand, PushCommand, ShowCommand};
use rawtx::cli::{Cli, Commands, OutputFormat};
use rawtx::logging::{verbosity_to_level, LogFormat, LogLevel};
use rawtx_core::config::Config;

use crate::common::{hex_line, EIP155_KEY, EIP155_SIGNED};

#[test]
fn test_parsed_new_command_signs_reference_vector() {
    let cli = Cli::try_parse_from([
        "rawtx",
        "new",
        "--privkey",
        EIP155_KEY,
        "--to",
        "0x3535353535353535353535353535353535353535",
        "--value",
        "1",
        "--gasPrice",
        "20000000000",
        "--gasLimit",
        "21000",
        "--nonce",
        "9",
    ])
    .expect("CLI should parse");

    let Commands::New(args) = cli.command else {
        panic!("expected new");
    };

    let mut out = Vec::new();
    NewCommand::new(args)
        .run_with(&Config::default(), &mut out)
        .unwrap();
    assert_eq!(
        hex_line(&String::from_utf8(out).unwrap()),
        format!("0x{EIP155_SIGNED}")
    );
}

#[test]
fn test_parsed_show_command() {
    let cli = Cli::try_parse_from(["rawtx", "show", EIP155_SIGNED, "--format", "json"])
        .expect("CLI should parse");

    let Commands::Show {
        transaction,
        format,
    } = cli.command
    else {
        panic!("expected show");
    };
    assert_eq!(format, OutputFormat::Json);

    let mut out = Vec::new();
    ShowCommand::new(transaction, format)
        .run_with(&mut out)
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["gas_limit"], "0x5208");
}

#[test]
fn test_parsed_push_command_keeps_endpoint() {
    let cli = Cli::try_parse_from([
        "rawtx",
        "push",
        EIP155_SIGNED,
        "--endpoint",
        "https://api-sepolia.etherscan.io/api",
    ])
    .expect("CLI should parse");

    let Commands::Push {
        transaction,
        endpoint,
    } = cli.command
    else {
        panic!("expected push");
    };

    let cmd = PushCommand::new(transaction, endpoint);
    assert_eq!(
        cmd.endpoint.as_deref(),
        Some("https://api-sepolia.etherscan.io/api")
    );
}

#[test]
fn test_verbosity_and_log_flags() {
    let cli = Cli::try_parse_from(["rawtx", "-vvv", "--log-format", "pretty", "show", "00"])
        .expect("CLI should parse");
    assert_eq!(verbosity_to_level(cli.verbose), LogLevel::Trace);
    assert_eq!(cli.log_format, LogFormat::Pretty);

    let cli = Cli::try_parse_from(["rawtx", "show", "00"]).expect("CLI should parse");
    assert_eq!(verbosity_to_level(cli.verbose), LogLevel::Warn);
    assert_eq!(cli.log_format, LogFormat::Compact);
}

#[test]
fn test_usage_errors() {
    for argv in [
        vec!["rawtx", "sign"],
        vec!["rawtx", "new", "--privkey", EIP155_KEY],
        vec!["rawtx", "show", "--format", "yaml", "00"],
        vec!["rawtx", "new", "--privkey", "k", "--value", "1", "--nonce", "x"],
    ] {
        let err = Cli::try_parse_from(&argv).unwrap_err();
        assert_eq!(err.exit_code(), 2, "{argv:?}");
    }
}
