//! Menu service CLI server
//!
//! ```sh
//! # Run with default config (~/.config/menu-service/config.toml)
//! menu-service
//!
//! # Custom config path
//! menu-service --config /etc/menu-service/config.toml
//!
//! # Override the port
//! menu-service --port 8081
//!
//! # Validate config without starting
//! menu-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use menu_service::config::AppConfig;
use menu_service::server::{init_tracing, ServerHandle, ServerOptions};

/// Restaurant menu backend: sections, items and accounts over REST.
#[derive(Parser, Debug)]
#[command(
    name = "menu-service",
    version,
    about = "Restaurant menu management REST API",
    long_about = "Menu service: REST API for managing restaurant menu sections and items.\n\n\
                  Default config: ~/.config/menu-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "MENU_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip creating the default admin user.
    #[arg(long)]
    no_admin: bool,
}

#[tokio::main]
async fn main() -> Result<(), menu_service::server::BoxError> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(menu_service::default_config_path);

    let loaded = AppConfig::load(&config_path);
    let load_error = loaded.as_ref().err().map(|e| e.to_string());
    let mut config = loaded.unwrap_or_default();

    // The log level override has to land before tracing starts.
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            if cli.check {
                eprintln!("Configuration is invalid: {}", e);
                std::process::exit(1);
            }
            error!("{}", e);
            error!("Using default configuration.");
        }
    }

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        create_default_admin: !cli.no_admin,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
