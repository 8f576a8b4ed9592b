//! Config file discovery
//!
//! The first readable candidate wins:
//! 1. `.gh-activity-overlay.toml` in the working directory
//! 2. `config.toml` in the application config directory (see [`crate::paths`])
//! 3. `.gh-activity-overlay.toml` in the home directory

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".gh-activity-overlay.toml";

/// File name used inside the application config directory
pub const CONFIG_DIR_FILE_NAME: &str = "config.toml";

/// Candidate config files, highest priority first.
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];

    match crate::paths::config_dir() {
        Ok(dir) => candidates.push(dir.join(CONFIG_DIR_FILE_NAME)),
        Err(e) => log::debug!("Skipping config directory lookup: {:#}", e),
    }

    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(CONFIG_FILE_NAME));
    }

    candidates
}

/// Content of the first config file found, if any.
pub fn load_config_file() -> Option<String> {
    read_first_existing(&config_search_paths())
}

fn read_first_existing(candidates: &[PathBuf]) -> Option<String> {
    candidates.iter().find_map(|path| read_candidate(path))
}

fn read_candidate(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Ignoring unreadable config file {}: {}", path.display(), e);
            None
        }
    }
}
