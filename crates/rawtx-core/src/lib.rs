//! # rawtx-core
//!
//! Shared building blocks for the `rawtx` command-line tool.
//!
//! ## Modules
//!
//! - [`amount`] - Decimal ether parsing and wei formatting
//! - [`config`] - Configuration types
//! - [`config_loader`] - Configuration file discovery and loading
//! - [`error`] - Error types and result aliases
//!
//! ## Parsing amounts
//!
//! ```rust
//! use rawtx_core::{parse_amount, FormatError, U256};
//!
//! assert_eq!(parse_amount("0.000000000000000001").unwrap(), U256::from(1u64));
//! assert_eq!(parse_amount("1.2.3"), Err(FormatError::MultipleDecimalPoints));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod amount;
pub mod config;
pub mod config_loader;
pub mod error;

pub use alloy_primitives::U256;
pub use amount::{format_amount, parse_amount, parse_integer, ETHER_DECIMALS};
pub use config::Config;
pub use config_loader::ConfigLoader;
pub use error::{
    ConfigError, DecodeError, ErrorKind, FormatError, NetworkError, RawTxError, SignError,
};
