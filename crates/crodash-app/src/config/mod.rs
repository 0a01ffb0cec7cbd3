//! Configuration file parsing for the CRO Dashboard
//!
//! Supports:
//! - `.crodash/config.toml` - Server, data, navigation and UI settings

pub mod settings;
pub mod types;

pub use settings::{
    config_path, init_config_dir, load_settings, load_settings_file, read_settings_file,
};
pub use types::*;
