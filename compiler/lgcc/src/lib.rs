//! Library side of the `lgc` command-line tool.
//!
//! The binary only parses arguments; everything else lives here so that
//! integration tests can drive the commands on in-memory input.

pub mod commands;
mod error;
pub mod reporting;
pub mod resolver;
mod tracing_setup;

pub use error::CliError;
pub use tracing_setup::init_tracing;
