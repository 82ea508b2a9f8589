//! End-to-end command flows.

pub mod config_test;
pub mod flow_test;
