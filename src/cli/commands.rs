//! CLI command implementations
//!
//! `init` writes a default config file; `serve` loads the config, opens the
//! store, and runs the HTTP server on a tokio runtime.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::store::{FileStore, MemoryStore, PersonStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Load and validate configuration from file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    validate(&config)?;

    Ok(config)
}

fn validate(config: &HttpServerConfig) -> CliResult<()> {
    if config.host.is_empty() {
        return Err(CliError::config_error("host must not be empty"));
    }
    if config.port == 0 {
        return Err(CliError::config_error("port must be > 0"));
    }
    Ok(())
}

/// Write a default configuration file
///
/// Refuses to overwrite an existing file.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized());
    }

    let config = HttpServerConfig::default();
    let content = serde_json::to_string_pretty(&config)?;
    fs::write(config_path, content)?;

    println!("{}", json!({"initialized": true}));

    Ok(())
}

/// Start the HTTP server
///
/// 1. Load and validate configuration
/// 2. Open the store (file-backed when `data_file` is set)
/// 3. Serve until interrupted
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;

    if let Some(port) = port {
        config.port = port;
    }

    let store: Arc<dyn PersonStore> = match &config.data_file {
        Some(path) => {
            let store = FileStore::open(path)
                .map_err(|e| CliError::serve_failed(format!("Failed to open store: {}", e)))?;
            Logger::info(
                "STORE_OPENED",
                &[("backend", "file"), ("path", &path.display().to_string())],
            );
            Arc::new(store)
        }
        None => {
            Logger::info("STORE_OPENED", &[("backend", "memory")]);
            Arc::new(MemoryStore::new())
        }
    };

    let server = HttpServer::with_config(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}
