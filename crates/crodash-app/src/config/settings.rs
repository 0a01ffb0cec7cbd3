//! Settings parser for .crodash/config.toml

use super::types::Settings;
use crodash_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CRODASH_DIR: &str = ".crodash";

/// Default location of the config file under `base_dir`
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CRODASH_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<base_dir>/.crodash/config.toml`
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(base_dir: &Path) -> Settings {
    load_settings_file(&config_path(base_dir))
}

/// Load settings from an explicit file path
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings_file(config_path: &Path) -> Settings {
    match read_settings_file(config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(Error::ConfigNotFound { .. }) => {
            debug!("No config file at {:?}, using defaults", config_path);
            Settings::default()
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            Settings::default()
        }
    }
}

/// Read a config file, failing when it is missing or invalid
///
/// Used for a path given explicitly on the command line.
pub fn read_settings_file(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::ConfigNotFound {
            path: config_path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(config_path)?;
    toml::from_str(&content).map_err(|e| Error::ConfigInvalid {
        message: format!("{}: {}", config_path.display(), e),
    })
}

/// Create the default config file in `.crodash/` if missing
///
/// Returns the config file path. Idempotent: an existing file is kept as is.
pub fn init_config_dir(base_dir: &Path) -> Result<PathBuf> {
    let crodash_dir = base_dir.join(CRODASH_DIR);

    if !crodash_dir.exists() {
        std::fs::create_dir_all(&crodash_dir)
            .map_err(|e| Error::config(format!("Failed to create .crodash dir: {}", e)))?;
        info!("Created .crodash directory");
    }

    let config_path = crodash_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Wrote default config to {:?}", config_path);
    }

    Ok(config_path)
}

const DEFAULT_CONFIG: &str = r#"# CRO Dashboard Configuration

[server]
host = "127.0.0.1"
port = 8501

[data]
# Directory holding kpi_data.json, pillars_data.json, checklist_data.json,
# pnl_data.json, historical_ratios.json and benchmarking_data.json.
# Missing files are replaced by empty defaults.
dir = "data"

[navigation]
# Page shown when the URL has no (or an unknown) ?page= parameter.
# default_page = "overview"

[ui]
title = "CRO Dashboard"
mobile_hint = true          # One-time hint when the tab strip layout is used
show_debug_toggle = true    # "Forcer le mode mobile" checkbox in the sidebar
"#;
