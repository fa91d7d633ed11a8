//! Configuration loading from disk and command-line overrides.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Override {0} is set but empty")]
    InvalidOverride(&'static str),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values that take precedence over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub log_level: Option<String>,
}

impl Overrides {
    /// Apply every set override to `config`. A blank value is rejected
    /// rather than silently replacing the configured one.
    pub fn apply(&self, config: &mut AppConfig) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = non_blank(base_url, "--base-url")?;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = non_blank(level, "--log-level")?;
        }
        Ok(())
    }
}

fn non_blank(value: &str, name: &'static str) -> Result<String, ConfigError> {
    match value.trim() {
        "" => Err(ConfigError::InvalidOverride(name)),
        trimmed => Ok(trimmed.to_string()),
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Resolve the effective configuration: file (or defaults), then overrides.
///
/// The result is validated after overrides are applied.
pub fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => AppConfig::default(),
    };

    overrides.apply(&mut config)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
