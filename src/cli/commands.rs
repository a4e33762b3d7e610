//! CLI command implementations

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::http_server::{service_routes, HttpServer, HttpServerConfig};
use crate::observability::{init_tracing, parse_filter};
use crate::store::{InMemoryProductStore, ProductStore};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Tracing filter directive (optional, default "info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Reject values the server cannot start with
    pub fn validate(&self) -> CliResult<()> {
        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("http.host must not be empty"));
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        parse_filter(&self.log_filter).map_err(|e| CliError::config_error(e.to_string()))?;

        Ok(())
    }
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
        Command::Routes => routes(&mut std::io::stdout()),
    }
}

/// Write a default configuration file.
///
/// Never overwrites an existing file.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::config_exists(config_path));
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(&Config::default())?;
    fs::write(config_path, content + "\n")?;

    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}

/// Boot the HTTP server and serve until shutdown
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
        config.validate()?;
    }

    init_tracing(&config.log_filter).map_err(|e| CliError::boot_failed(e.to_string()))?;

    let store: Arc<dyn ProductStore> = Arc::new(InMemoryProductStore::new());
    let server = HttpServer::new(config.http.clone(), store)
        .map_err(|e| CliError::boot_failed(format!("Failed to build routes: {}", e)))?;

    info!(addr = %server.socket_addr(), "starting product API");

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print one `METHOD pattern` line per registered route
pub fn routes(out: &mut impl Write) -> CliResult<()> {
    let table =
        service_routes().map_err(|e| CliError::boot_failed(format!("Invalid route table: {}", e)))?;

    for route in table.routes() {
        writeln!(out, "{:<7} {}", route.method().as_str(), route.pattern())?;
    }
    Ok(())
}
