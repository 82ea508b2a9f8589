//! Focused tests of the binary crate's public surface.

pub mod cli_integration_test;
pub mod error_handling_test;
