//! Configuration types for the CRO Dashboard
//!
//! Defines `Settings` (`.crodash/config.toml`) and its sections.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (.crodash/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub data: DataSettings,

    #[serde(default)]
    pub navigation: NavigationSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// `host:port` the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

/// Location of the JSON data files
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataSettings {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Routing settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NavigationSettings {
    /// Overrides the built-in fallback page (`overview`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_page: Option<String>,
}

/// Presentation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default = "default_title")]
    pub title: String,

    /// Show the one-time navigation hint in mobile layout
    #[serde(default = "default_true")]
    pub mobile_hint: bool,

    /// Show the "Forcer le mode mobile" toggle in the desktop sidebar
    #[serde(default = "default_true")]
    pub show_debug_toggle: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            mobile_hint: true,
            show_debug_toggle: true,
        }
    }
}

fn default_title() -> String {
    "CRO Dashboard".to_string()
}

fn default_true() -> bool {
    true
}
