//! # rawtx
//!
//! Build, sign, inspect and broadcast raw Ethereum transactions.
//!
//! ## Usage
//!
//! ```bash
//! # Sign a 1 ether transfer with nonce 9
//! rawtx new --privkey <HEX> --to 0x3535353535353535353535353535353535353535 --value 1 --nonce 9
//!
//! # Inspect a signed transaction
//! rawtx show 0xf86c...
//!
//! # Confirm and broadcast it
//! rawtx push 0xf86c...
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use clap::Parser;
use rawtx::cli::commands::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use rawtx::cli::commands::{load_config, CommandError, NewCommand, PushCommand, ShowCommand};
use rawtx::cli::{Cli, Commands};
use rawtx::logging::{init_logging, verbosity_to_level, LogConfig, LogError, LogGuard};

/// Set up logging from the global flags.
///
/// # Errors
///
/// Returns [`LogError`] if logging initialization fails.
fn setup_logging(cli: &Cli) -> Result<LogGuard, LogError> {
    let config = LogConfig {
        level: verbosity_to_level(cli.verbose),
        format: cli.log_format,
        file_path: cli.log_file.clone(),
    };
    init_logging(&config)
}

/// Dispatch the parsed command.
fn run(cli: Cli) -> Result<(), CommandError> {
    match cli.command {
        Commands::New(args) => {
            let config = load_config(cli.config.as_deref())?;
            NewCommand::new(args).run(&config)
        }
        Commands::Show {
            transaction,
            format,
        } => ShowCommand::new(transaction, format).run(),
        Commands::Push {
            transaction,
            endpoint,
        } => {
            let config = load_config(cli.config.as_deref())?;
            PushCommand::new(transaction, endpoint).run(&config.network)
        }
    }
}

/// Main entry point for the `rawtx` application.
fn main() {
    let cli = Cli::parse();

    let guard = match setup_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            std::process::exit(EXIT_ERROR);
        }
    };

    let code = match run(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };

    // Flush the file writer; process::exit skips destructors.
    drop(guard);
    std::process::exit(code);
}
