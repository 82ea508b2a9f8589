//! # Push Command
//!
//! Implementation of `rawtx push`: decode and display a signed transaction,
//! ask `submit? [y/N]`, and on yes hand the hex to a [`Broadcast`]
//! implementation, printing whatever the endpoint answers.
//!
//! Declining is not an error; the command exits 0 without any network
//! activity. The broadcaster is only built once the user says yes, so a bad
//! endpoint never hides the transaction.

use std::io::{self, BufRead, Write};

use rawtx_chain::codec;
use rawtx_core::config::NetworkConfig;
use rawtx_core::error::NetworkResult;
use tracing::info;

use super::CommandError;
use crate::broadcast::{Broadcast, EtherscanBroadcaster};
use crate::prompt::confirm;
use crate::summary::TransactionSummary;

/// The `rawtx push` command handler.
#[derive(Debug, Clone)]
pub struct PushCommand {
    /// The hex-encoded transaction, with or without `0x`.
    pub transaction: String,
    /// Endpoint override from `--endpoint`.
    pub endpoint: Option<String>,
}

impl PushCommand {
    /// Create a new `PushCommand`.
    #[must_use]
    pub fn new(transaction: impl Into<String>, endpoint: Option<String>) -> Self {
        Self {
            transaction: transaction.into(),
            endpoint,
        }
    }

    /// Run the command against the terminal and the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction does not decode, the prompt fails,
    /// the endpoint is invalid, or the broadcast fails.
    pub fn run(&self, network: &NetworkConfig) -> Result<(), CommandError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout.lock(), || {
            EtherscanBroadcaster::from_config(network, self.endpoint.as_deref())
        })
    }

    /// Run the command with explicit streams.
    ///
    /// `connect` is called only after the user confirms. Returns once the
    /// user declines or the broadcast response is printed.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn run_with<R, W, B, F>(
        &self,
        mut input: R,
        output: &mut W,
        connect: F,
    ) -> Result<(), CommandError>
    where
        R: BufRead,
        W: Write,
        B: Broadcast,
        F: FnOnce() -> NetworkResult<B>,
    {
        let signed = codec::decode_hex(&self.transaction)?;

        writeln!(output, "your transaction:")?;
        writeln!(output, "{}", TransactionSummary::from_signed(&signed))?;

        if !confirm("submit?", false, &mut input, &mut *output)? {
            info!("broadcast declined");
            return Ok(());
        }

        let broadcaster = connect()?;
        // The user's own hex is sent, not a re-encoding.
        let response = broadcaster.broadcast(codec::strip_hex_prefix(&self.transaction))?;
        writeln!(output, "{response}")?;
        Ok(())
    }
}
