//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Base address must be an absolute http(s) URL
//! - Timeouts must be non-zero
//! - Route paths must be absolute and unique
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("api.base_url {0:?} is not a valid URL: {1}")]
    InvalidBaseUrl(String, String),

    #[error("api.base_url {0:?} must use http or https")]
    UnsupportedScheme(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("route {name:?} has path {path:?}, which does not start with '/'")]
    RelativeRoutePath { name: String, path: String },

    #[error("route path {0:?} is registered more than once")]
    DuplicateRoutePath(String),
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.api.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(_) => errors.push(ValidationError::UnsupportedScheme(config.api.base_url.clone())),
        Err(e) => errors.push(ValidationError::InvalidBaseUrl(
            config.api.base_url.clone(),
            e.to_string(),
        )),
    }

    if config.api.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("api.timeout_secs"));
    }
    if config.api.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("api.connect_timeout_secs"));
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    let mut seen = HashSet::new();
    for route in &config.routes {
        if !route.path.starts_with('/') {
            errors.push(ValidationError::RelativeRoutePath {
                name: route.name.clone(),
                path: route.path.clone(),
            });
        }
        if !seen.insert(route.path.trim_end_matches('/')) {
            errors.push(ValidationError::DuplicateRoutePath(route.path.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
