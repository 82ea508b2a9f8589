//! Error messages and exit codes as the user sees them.

use std::error::Error;

use rawtx::cli::commands::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use rawtx::cli::commands::{CommandError, NewCommand, ShowCommand};
use rawtx::cli::OutputFormat;
use rawtx::logging::LogError;
use rawtx::prompt::PromptError;
use rawtx_core::config::Config;
use rawtx_core::error::{ErrorKind, FormatError, RawTxError};

use crate::common::new_args;

fn new_error(mutate: impl FnOnce(&mut rawtx::cli::NewArgs)) -> CommandError {
    let mut args = new_args();
    mutate(&mut args);
    NewCommand::new(args)
        .sign(&Config::default())
        .expect_err("command should fail")
}

#[test]
fn test_format_error_messages() {
    assert_eq!(
        new_error(|a| a.value = "1.2.3".into()).to_string(),
        "expected at most one decimal point"
    );
    assert_eq!(
        new_error(|a| a.gas_price = Some("lots".into())).to_string(),
        "invalid gas price"
    );
    assert_eq!(
        new_error(|a| a.gas_limit = Some("1e6".into())).to_string(),
        "invalid gas limit"
    );
    assert_eq!(
        new_error(|a| a.data = "0xgg".into()).to_string(),
        "bad hex data: \"0xgg\""
    );
    assert_eq!(
        new_error(|a| a.privkey = "zz".into()).to_string(),
        "error decoding private key"
    );
}

#[test]
fn test_error_kinds() {
    assert_eq!(
        new_error(|a| a.value = "abc".into()).kind(),
        Some(ErrorKind::InvalidFormat)
    );
    assert_eq!(
        new_error(|a| a.privkey = "ff".repeat(32)).kind(),
        Some(ErrorKind::SigningError)
    );

    let mut out = Vec::new();
    let err = ShowCommand::new("0xdead", OutputFormat::Text)
        .run_with(&mut out)
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::DecodeError));
    assert!(out.is_empty());
}

#[test]
fn test_every_failure_exits_one() {
    let errors = [
        new_error(|a| a.value = String::new()),
        CommandError::from(PromptError::UnexpectedEof),
        CommandError::from(std::io::Error::other("closed pipe")),
    ];
    for err in errors {
        assert_eq!(err.exit_code(), EXIT_ERROR);
        assert_ne!(err.exit_code(), EXIT_SUCCESS);
    }
}

#[test]
fn test_error_sources() {
    // Transparent wrapping exposes the domain error as the source.
    let err = CommandError::from(RawTxError::from(FormatError::InvalidGasPrice));
    assert_eq!(err.to_string(), "invalid gas price");
    assert_eq!(
        err.source().map(ToString::to_string).as_deref(),
        Some("invalid gas price")
    );

    let err = LogError::FileCreation(std::io::Error::other("denied"));
    assert!(err.source().is_some());
    assert!(LogError::SubscriberInit("x".into()).source().is_none());
}
