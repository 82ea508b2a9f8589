//! # CLI Argument Definitions
//!
//! - `rawtx new --privkey <HEX> --value <DECIMAL> [--to <ADDR>] ...` - Build and sign a transaction
//! - `rawtx show <HEXTX>` - Decode and display a signed transaction
//! - `rawtx push <HEXTX>` - Display, confirm and broadcast a signed transaction
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level
//! - `-c, --config <PATH>` - Path to configuration file
//! - `--log-format <FORMAT>` - Log line layout on stderr
//! - `--log-file <PATH>` - Also write logs to a daily-rolling file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::logging::LogFormat;

/// Build, sign, inspect and broadcast raw Ethereum transactions.
#[derive(Debug, Parser)]
#[command(name = "rawtx")]
#[command(author, version, about = "Build, sign, inspect and broadcast raw Ethereum transactions")]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    ///
    /// Logs go to stderr; stdout only carries command output.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file
    ///
    /// Defaults to `~/.rawtx/config.toml`. A missing default file means
    /// built-in defaults; a missing explicit file is an error.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log line layout
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact, value_name = "FORMAT")]
    pub log_format: LogFormat,

    /// Also write logs to this file (rotated daily)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build and sign a legacy transaction
    ///
    /// Prints the signed transaction, including its raw hex, which can be
    /// passed to `show` or `push`.
    New(NewArgs),

    /// Decode and display a signed transaction
    Show {
        /// Hex-encoded signed transaction, with or without `0x`
        #[arg(value_name = "HEXTX")]
        transaction: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t, value_name = "FORMAT")]
        format: OutputFormat,
    },

    /// Display a signed transaction, ask for confirmation, then broadcast it
    Push {
        /// Hex-encoded signed transaction, with or without `0x`
        #[arg(value_name = "HEXTX")]
        transaction: String,

        /// Broadcast endpoint, overriding `network.broadcast_url`
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },
}

/// Arguments for `rawtx new`.
#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// Hex-encoded 32-byte private key, with or without `0x`
    #[arg(long, value_name = "HEX")]
    pub privkey: String,

    /// Recipient address; omit to create a contract
    #[arg(long, value_name = "ADDRESS")]
    pub to: Option<String>,

    /// Call data or contract init code as hex
    #[arg(long, value_name = "HEX", default_value = "")]
    pub data: String,

    /// Amount in ether as a decimal, e.g. `1.5`
    #[arg(long, value_name = "DECIMAL")]
    pub value: String,

    /// Gas price in wei [default: 4000000000 or `defaults.gas_price`]
    #[arg(long = "gasPrice", value_name = "WEI")]
    pub gas_price: Option<String>,

    /// Gas limit [default: 100000 or `defaults.gas_limit`]
    #[arg(long = "gasLimit", value_name = "GAS")]
    pub gas_limit: Option<String>,

    /// Sender nonce
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub nonce: u64,

    /// EIP-155 chain id [default: 1 or `network.chain_id`]
    #[arg(long = "chain-id", value_name = "ID", value_parser = clap::value_parser!(u64).range(1..))]
    pub chain_id: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t, value_name = "FORMAT")]
    pub format: OutputFormat,
}

/// Output format for transaction summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `Label: value` line per field
    #[default]
    Text,

    /// Pretty-printed JSON object
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
