//! Application configuration
//!
//! Configuration loaded from .gh-activity-overlay.toml.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration loaded from .gh-activity-overlay.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Title shown in the overlay header
    #[serde(default = "default_title")]
    pub title: String,

    /// Directory holding the `images/` icon assets (used for HTML output)
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    /// How long the newest entry stays highlighted, in milliseconds
    #[serde(default = "default_flash_duration_ms")]
    pub flash_duration_ms: u64,

    /// Address the broadcast listener binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Broadcast target the overlay subscribes to
    #[serde(default = "default_broadcast_target")]
    pub broadcast_target: String,

    /// When set, the overlay's HTML is rewritten to this file after every change
    #[serde(default)]
    pub html_output: Option<String>,
}

fn default_title() -> String {
    "Code Activity".to_string()
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

fn default_flash_duration_ms() -> u64 {
    1000
}

fn default_listen_addr() -> String {
    "127.0.0.1:7878".to_string()
}

fn default_broadcast_target() -> String {
    "broadcast".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            assets_dir: default_assets_dir(),
            flash_duration_ms: default_flash_duration_ms(),
            listen_addr: default_listen_addr(),
            broadcast_target: default_broadcast_target(),
            html_output: None,
        }
    }
}

impl AppConfig {
    /// Load config from the first file [`crate::config_search_paths`] finds, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_duration_ms)
    }
}
