//! CRO Dashboard - risk-management dashboard server
//!
//! Binary entry point: parses the command line, resolves settings and serves
//! the dashboard until Ctrl-C. All logic lives in the workspace crates.

use std::path::{Path, PathBuf};

use clap::Parser;
use crodash_app::config::{self, Settings};
use crodash_app::AppState;
use crodash_core::logging;
use crodash_core::prelude::*;

/// CRO Dashboard - risk-management dashboard server
#[derive(Parser, Debug)]
#[command(name = "crodash")]
#[command(about = "Risk-management dashboard for the CRO office", long_about = None)]
struct Args {
    /// Config file (defaults to .crodash/config.toml in the working directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Directory holding the JSON data files
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Write a default .crodash/config.toml and exit
    #[arg(long)]
    init: bool,
}

/// Settings from the config file, then command-line overrides
///
/// An explicit `--config` must exist and parse; the default location falls
/// back to built-in defaults.
fn resolve_settings(args: &Args, base_dir: &Path) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => config::read_settings_file(path)?,
        None => config::load_settings(base_dir),
    };

    if let Some(host) = &args.host {
        settings.server.host = host.clone();
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(dir) = &args.data_dir {
        settings.data.dir = dir.clone();
    }
    Ok(settings)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init {
        let path = config::init_config_dir(&base_dir)?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    logging::init()?;

    let settings = resolve_settings(&args, &base_dir)?;
    info!("Data directory: {}", settings.data.dir.display());
    let app = AppState::new(settings)?;

    let listener = crodash_web::server::bind(&app.settings.bind_addr()).await?;
    if let Ok(addr) = listener.local_addr() {
        eprintln!("🏦 CRO Dashboard: http://{}", addr);
    }
    if let Ok(log_file) = logging::get_current_log_file() {
        eprintln!("   Logs: {}", log_file.display());
    }

    let result = crodash_web::serve(listener, app, shutdown_signal()).await;
    if let Err(ref e) = result {
        error!("Server error: {:?}", e);
    }

    info!("CRO Dashboard exiting");
    Ok(result?)
}
