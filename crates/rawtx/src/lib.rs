//! # rawtx
//!
//! Build, sign, inspect and broadcast raw Ethereum transactions.
//!
//! The library half of the `rawtx` binary exposes the CLI definitions and
//! command handlers so they can be driven from tests with in-memory streams.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions and handlers
//! - [`broadcast`] - Submission to an Etherscan-compatible endpoint
//! - [`prompt`] - Yes/no confirmation
//! - [`summary`] - Text and JSON transaction views
//! - [`logging`] - `tracing` subscriber setup
//!
//! ## Usage
//!
//! ```no_run
//! use clap::Parser;
//! use rawtx::cli::Cli;
//!
//! let cli = Cli::parse();
//! println!("Verbose level: {}", cli.verbose);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod broadcast;
pub mod cli;
pub mod logging;
pub mod prompt;
pub mod summary;

pub use broadcast::{Broadcast, EtherscanBroadcaster};
pub use logging::{
    init_logging, redact_sensitive, verbosity_to_level, LogConfig, LogError, LogFormat, LogGuard,
    LogLevel,
};
pub use summary::TransactionSummary;
