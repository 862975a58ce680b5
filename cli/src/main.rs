//! Sample users REST API — CLI Server
//!
//! ```sh
//! # Run with default config (~/.config/sample-users/config.toml)
//! sample-users
//!
//! # Custom config path
//! sample-users --config /etc/sample-users/config.toml
//!
//! # Override listener
//! sample-users --host 127.0.0.1 --port 8080
//!
//! # Validate config without starting
//! sample-users --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use sample_users::config::AppConfig;
use sample_users::server::{init_tracing, ServerHandle, ServerOptions};

/// Sample users REST API server.
#[derive(Parser, Debug)]
#[command(
    name = "sample-users",
    version,
    about = "Template REST API exposing CRUD endpoints over sample users",
    long_about = "Sample users REST API: list, get, create, replace, patch and delete \
                  hardcoded sample users over HTTP/JSON.\n\n\
                  Default config: ~/.config/sample-users/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TEMPLATE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the REST API listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(sample_users::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            if cli.check {
                return Err(e.into());
            }
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    if let Some(host) = cli.host {
        info!("CLI override: host = {}", host);
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        println!("   Metrics     : {}", config.metrics.enabled);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions { config }).await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
