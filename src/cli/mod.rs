//! CLI module for filtq
//!
//! Provides the command-line interface for:
//! - compile: print the expression tree as JSON
//! - check: report success or failure only
//! - inspect: print the human-readable rendering

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, compile, inspect, run, run_command};
pub use errors::{CliError, CliResult};
