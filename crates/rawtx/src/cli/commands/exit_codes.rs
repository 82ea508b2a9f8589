//! Exit code constants for CLI commands.
//!
//! Argument errors are reported by clap with its own exit code (2).

/// Successful operation, including a `push` the user declined.
pub const EXIT_SUCCESS: i32 = 0;

/// Any failure: invalid input, decode, signing, network, configuration or I/O.
pub const EXIT_ERROR: i32 = 1;
