//! # CLI Module
//!
//! Command-line interface for `rawtx`.
//!
//! ## Module Structure
//!
//! - [`args`] - Argument parsing and CLI structure definitions
//! - [`commands`] - Command handler implementations
//!
//! ## Usage
//!
//! ```no_run
//! use clap::Parser;
//! use rawtx::cli::{Cli, Commands};
//!
//! let cli = Cli::parse();
//!
//! match cli.command {
//!     Commands::New(args) => {
//!         // Build and sign
//!     }
//!     Commands::Show { transaction, format } => {
//!         // Decode and print
//!     }
//!     Commands::Push { transaction, endpoint } => {
//!         // Confirm and broadcast
//!     }
//! }
//! ```

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, NewArgs, OutputFormat};
