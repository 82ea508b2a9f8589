//! # Show Command
//!
//! Implementation of `rawtx show`, which decodes a hex-encoded signed
//! transaction and prints its fields and recovered sender.

use std::io::{self, Write};

use rawtx_chain::{codec, SignedTransaction};
use tracing::info;

use super::{write_summary, CommandError};
use crate::cli::args::OutputFormat;
use crate::summary::TransactionSummary;

/// The `rawtx show` command handler.
#[derive(Debug, Clone)]
pub struct ShowCommand {
    /// The hex-encoded transaction, with or without `0x`.
    pub transaction: String,
    /// The output format.
    pub format: OutputFormat,
}

impl ShowCommand {
    /// Create a new `ShowCommand`.
    #[must_use]
    pub fn new(transaction: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            transaction: transaction.into(),
            format,
        }
    }

    /// Decode the transaction argument.
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` (wrapped) for invalid hex or bytes that are
    /// not a signed legacy transaction.
    pub fn decode(&self) -> Result<SignedTransaction, CommandError> {
        let signed = codec::decode_hex(&self.transaction)?;
        info!(hash = %signed.hash(), "decoded transaction");
        Ok(signed)
    }

    /// Run the command, printing to stdout.
    ///
    /// # Errors
    ///
    /// See [`decode`](Self::decode); also fails if stdout cannot be written.
    pub fn run(&self) -> Result<(), CommandError> {
        let stdout = io::stdout();
        self.run_with(&mut stdout.lock())
    }

    /// Run the command, printing to `out`.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        let signed = self.decode()?;
        write_summary(out, &TransactionSummary::from_signed(&signed), self.format)
    }
}
