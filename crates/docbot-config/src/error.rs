//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, validating or writing `config.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Cannot render config as TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("No home directory to keep the config file in")]
    NoConfigDir,

    #[error("Config file already exists at {0}")]
    AlreadyExists(PathBuf),

    #[error("Invalid setting {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
