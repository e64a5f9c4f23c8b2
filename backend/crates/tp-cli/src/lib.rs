//! tp-cli library
//!
//! Snapshot loading, command dispatch and logging for the `tpulse` binary.
//! Exported so the integration tests can drive a report without a process.

pub(crate) mod cli;
pub(crate) mod clock;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub(crate) mod report;
pub(crate) mod snapshot;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use clock::resolve_now;
pub use commands::Commands;
pub use error::{CliError, CliResult};
pub use report::{render, run_command};
pub use snapshot::{STDIN_PATH, load_snapshot, parse_snapshot};
