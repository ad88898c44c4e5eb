//! CLI command implementations.

pub mod ask;
pub mod config;
pub mod init;
pub mod load;
pub mod serve;

use anyhow::{Context, Result};
use docbot_config::{AppPaths, Config};
use std::path::{Path, PathBuf};

/// Get the application paths.
pub fn get_paths() -> Result<AppPaths> {
    AppPaths::new().context("Failed to determine application directories")
}

/// The config file in use: the explicit one, or the platform default.
pub fn config_file(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(get_paths()?.config_file),
    }
}

/// Load configuration, falling back to defaults when no file exists.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Config::load().context("Failed to load configuration"),
    }
}
