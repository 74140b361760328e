//! Configuration loading from disk and the environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::InitConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// A required environment variable is unset or empty.
    #[error("{0} environment variable not set")]
    MissingEnv(String),

    /// A value passed validation's shape checks but could not be converted.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read a TOML file into an [`InitConfig`] and reject semantically bad values.
pub fn load_config(path: &Path) -> Result<InitConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = toml::from_str::<InitConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_config(&config).map_err(ConfigError::Validation)?;
    tracing::debug!(path = %path.display(), "Config file loaded");

    Ok(config)
}

/// Load from `path` when given, otherwise validate and return the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<InitConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = InitConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

/// Resolve the wallet keypair path from the named environment variable.
pub fn wallet_path_from_env(var: &str) -> Result<PathBuf, ConfigError> {
    match std::env::var_os(var) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(ConfigError::MissingEnv(var.to_string())),
    }
}
