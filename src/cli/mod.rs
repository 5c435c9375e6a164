//! # CLI
//!
//! Argument parsing and command dispatch. `run` is the only entry point
//! `main.rs` calls.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, load_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
