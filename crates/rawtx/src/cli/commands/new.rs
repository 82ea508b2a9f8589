//! # New Command
//!
//! Implementation of `rawtx new`, which validates the command-line fields,
//! builds a legacy transaction, signs it with EIP-155 replay protection and
//! prints the result.
//!
//! ## Usage
//!
//! ```text
//! rawtx new --privkey 4646...46 --to 0x3535...35 --value 1 --nonce 9 \
//!     --gasPrice 20000000000 --gasLimit 21000
//! ```
//!
//! Omitting `--to` creates a contract with `--data` as its init code.

use std::io::{self, Write};
use std::str::FromStr;

use alloy_primitives::{Address, Bytes, U256};
use rawtx_chain::{SignedTransaction, UnsignedTransaction};
use rawtx_core::amount::{parse_amount, parse_integer};
use rawtx_core::config::{Config, DefaultsConfig};
use rawtx_core::error::{FormatError, FormatResult};
use rawtx_crypto::{Eip155Signer, SecretKey};
use tracing::{debug, info};

use super::{write_summary, CommandError};
use crate::cli::args::NewArgs;
use crate::summary::TransactionSummary;

/// The `rawtx new` command handler.
#[derive(Debug, Clone)]
pub struct NewCommand {
    /// Parsed command-line arguments.
    pub args: NewArgs,
}

impl NewCommand {
    /// Create a new `NewCommand`.
    #[must_use]
    pub const fn new(args: NewArgs) -> Self {
        Self { args }
    }

    /// Validate the arguments and assemble the unsigned transaction.
    ///
    /// Fields are checked in order: recipient, value, gas price, gas limit,
    /// data. Gas values fall back to `defaults` when their flag is absent.
    ///
    /// # Errors
    ///
    /// Returns the [`FormatError`] of the first invalid field.
    pub fn build(&self, defaults: &DefaultsConfig) -> FormatResult<UnsignedTransaction> {
        let to = parse_recipient(self.args.to.as_deref().unwrap_or_default())?;
        let value = parse_amount(&self.args.value)?;
        let gas_price = parse_gas_price(
            self.args
                .gas_price
                .as_deref()
                .unwrap_or(&defaults.gas_price),
        )?;
        let gas_limit = parse_gas_limit(
            self.args
                .gas_limit
                .as_deref()
                .unwrap_or(&defaults.gas_limit),
        )?;
        let input = parse_data(&self.args.data)?;

        debug!(
            nonce = self.args.nonce,
            to = ?to,
            %value,
            %gas_price,
            %gas_limit,
            data_len = input.len(),
            "built transaction"
        );

        Ok(UnsignedTransaction::build(
            self.args.nonce,
            to,
            value,
            gas_limit,
            gas_price,
            input,
        ))
    }

    /// Build and sign the transaction.
    ///
    /// The chain id is `--chain-id` if given, else `network.chain_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] for invalid fields or a malformed key, and a
    /// `SignError` if the key is not a valid secp256k1 scalar.
    pub fn sign(&self, config: &Config) -> Result<SignedTransaction, CommandError> {
        let tx = self.build(&config.defaults)?;
        let key = SecretKey::from_hex(&self.args.privkey)?;
        let chain_id = self.args.chain_id.unwrap_or(config.network.chain_id);

        info!(chain_id, "signing transaction");
        Ok(Eip155Signer::new(chain_id).sign_transaction(tx, &key)?)
    }

    /// Run the command, printing to stdout.
    ///
    /// # Errors
    ///
    /// See [`sign`](Self::sign); also fails if stdout cannot be written.
    pub fn run(&self, config: &Config) -> Result<(), CommandError> {
        let stdout = io::stdout();
        self.run_with(config, &mut stdout.lock())
    }

    /// Run the command, printing to `out`.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn run_with<W: Write>(&self, config: &Config, out: &mut W) -> Result<(), CommandError> {
        let signed = self.sign(config)?;
        write_summary(out, &TransactionSummary::from_signed(&signed), self.args.format)
    }
}

/// Parse the `--to` value. Empty means contract creation.
///
/// # Errors
///
/// Returns [`FormatError::InvalidRecipient`] unless the text is empty or a
/// 20-byte hex address with optional `0x`.
pub fn parse_recipient(text: &str) -> FormatResult<Option<Address>> {
    if text.is_empty() {
        return Ok(None);
    }

    Address::from_str(text)
        .map(Some)
        .map_err(|_| FormatError::invalid_recipient(text))
}

/// Parse the `--gasPrice` value as a base-10 integer.
///
/// # Errors
///
/// Returns [`FormatError::InvalidGasPrice`].
pub fn parse_gas_price(text: &str) -> FormatResult<U256> {
    parse_integer(text).ok_or(FormatError::InvalidGasPrice)
}

/// Parse the `--gasLimit` value as a base-10 integer.
///
/// # Errors
///
/// Returns [`FormatError::InvalidGasLimit`].
pub fn parse_gas_limit(text: &str) -> FormatResult<U256> {
    parse_integer(text).ok_or(FormatError::InvalidGasLimit)
}

/// Parse the `--data` value as hex.
///
/// A `0x`/`0X` prefix is optional and an odd digit count is left-padded with
/// one `0`, so `0x1` is the single byte `0x01`.
///
/// # Errors
///
/// Returns [`FormatError::BadHexData`] if the digits are not hex.
pub fn parse_data(text: &str) -> FormatResult<Bytes> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    };

    decoded
        .map(Bytes::from)
        .map_err(|_| FormatError::bad_hex_data(text))
}
