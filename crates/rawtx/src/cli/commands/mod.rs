//! # CLI Commands
//!
//! - [`NewCommand`] - Build and sign a transaction
//! - [`ShowCommand`] - Decode and display a transaction
//! - [`PushCommand`] - Confirm and broadcast a transaction
//!
//! Every command has a `run` that talks to the real terminal and network and
//! a `run_with` that takes its streams (and broadcaster) as parameters, which
//! is what the tests drive.

pub mod exit_codes;
pub mod new;
pub mod push;
pub mod show;

use std::io::{self, Write};
use std::path::Path;

use rawtx_core::config::Config;
use rawtx_core::config_loader::ConfigLoader;
use rawtx_core::error::{
    ConfigError, DecodeError, ErrorKind, FormatError, NetworkError, RawTxError, SignError,
};

use crate::cli::args::OutputFormat;
use crate::prompt::PromptError;
use crate::summary::TransactionSummary;
use exit_codes::EXIT_ERROR;

pub use new::NewCommand;
pub use push::PushCommand;
pub use show::ShowCommand;

/// Errors returned by command handlers.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A domain error from parsing, signing, decoding, broadcasting or config.
    #[error(transparent)]
    RawTx(#[from] RawTxError),

    /// The confirmation prompt failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Writing command output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON output could not be produced.
    #[error("failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CommandError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::RawTx(_) | Self::Prompt(_) | Self::Io(_) | Self::Serialization(_) => EXIT_ERROR,
        }
    }

    /// The taxonomy class, for domain errors.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::RawTx(e) => Some(e.kind()),
            _ => None,
        }
    }
}

macro_rules! impl_from_domain_error {
    ($($error:ty),* $(,)?) => {
        $(
            impl From<$error> for CommandError {
                fn from(err: $error) -> Self {
                    Self::RawTx(RawTxError::from(err))
                }
            }
        )*
    };
}

impl_from_domain_error!(FormatError, SignError, DecodeError, NetworkError, ConfigError);

/// Load the configuration from `path`, or from `~/.rawtx/config.toml`.
///
/// Without an explicit `path`, a machine with no resolvable home directory
/// gets the built-in defaults.
///
/// # Errors
///
/// Returns a [`ConfigError`] (wrapped) if the file cannot be read or is
/// invalid, or if an explicit `path` does not exist.
pub fn load_config(path: Option<&Path>) -> Result<Config, CommandError> {
    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "loading configuration");
        return Ok(ConfigLoader::from_file(path.to_path_buf()).load_required()?);
    }

    let Some(loader) = home_loader(ConfigLoader::new())? else {
        return Ok(Config::default());
    };
    tracing::debug!(
        path = %loader.config_path().display(),
        exists = loader.exists(),
        "loading configuration"
    );
    Ok(loader.load()?)
}

fn home_loader(
    loader: Result<ConfigLoader, ConfigError>,
) -> Result<Option<ConfigLoader>, ConfigError> {
    match loader {
        Ok(loader) => Ok(Some(loader)),
        Err(ConfigError::NoHomeDirectory) => {
            tracing::debug!("no home directory, using built-in configuration");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Write `summary` to `out` in the requested format, followed by a newline.
///
/// # Errors
///
/// Returns [`CommandError::Io`] if writing fails, or
/// [`CommandError::Serialization`] for JSON that cannot be produced.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &TransactionSummary,
    format: OutputFormat,
) -> Result<(), CommandError> {
    match format {
        OutputFormat::Text => writeln!(out, "{summary}")?,
        OutputFormat::Json => writeln!(out, "{}", summary.to_json()?)?,
    }
    Ok(())
}
