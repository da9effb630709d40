//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_NAME: &str = "RELAY_NAME";
pub const ENV_REG_NO: &str = "RELAY_REG_NO";
pub const ENV_EMAIL: &str = "RELAY_EMAIL";
pub const ENV_SOURCE_URL: &str = "RELAY_SOURCE_URL";
pub const ENV_MAX_ATTEMPTS: &str = "RELAY_MAX_ATTEMPTS";
pub const ENV_BACKOFF_UNIT_MS: &str = "RELAY_BACKOFF_UNIT_MS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Environment variable {var} has invalid value '{value}'")]
    Env { var: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML configuration file. Missing sections fall back to defaults.
pub fn read_config_file(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load defaults or the given file, then overlay the process environment.
///
/// The result is not validated yet; CLI overrides are applied by the caller
/// before [`ensure_valid`].
pub fn load_config(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => RelayConfig::default(),
    };
    apply_env_overrides(&mut config, |var| std::env::var(var).ok())?;
    Ok(config)
}

/// Overlay `RELAY_*` variables resolved through `lookup`.
pub fn apply_env_overrides<F>(config: &mut RelayConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(ENV_NAME) {
        config.identity.name = v;
    }
    if let Some(v) = lookup(ENV_REG_NO) {
        config.identity.reg_no = v;
    }
    if let Some(v) = lookup(ENV_EMAIL) {
        config.identity.email = v;
    }
    if let Some(v) = lookup(ENV_SOURCE_URL) {
        config.source.url = v;
    }
    if let Some(v) = lookup(ENV_MAX_ATTEMPTS) {
        config.delivery.max_attempts = v.trim().parse().map_err(|_| ConfigError::Env {
            var: ENV_MAX_ATTEMPTS,
            value: v.clone(),
        })?;
    }
    if let Some(v) = lookup(ENV_BACKOFF_UNIT_MS) {
        config.delivery.backoff_unit_ms = v.trim().parse().map_err(|_| ConfigError::Env {
            var: ENV_BACKOFF_UNIT_MS,
            value: v.clone(),
        })?;
    }
    Ok(())
}

/// Run semantic validation, returning the config on success.
pub fn ensure_valid(config: RelayConfig) -> Result<RelayConfig, ConfigError> {
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
