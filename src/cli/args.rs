//! CLI argument definitions using clap
//!
//! Commands:
//! - rolodex init --config <path>
//! - rolodex serve --config <path> [--port <p>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rolodex - a minimal person directory served over a REST API
#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./rolodex.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./rolodex.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
