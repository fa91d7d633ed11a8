//! Startup orchestration.
//!
//! # Responsibilities
//! - Build providers from the validated configuration
//! - Construct the application root
//! - Fire the root's init hook exactly once

use thiserror::Error;

use crate::app::{AppRoot, Providers};
use crate::config::AppConfig;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid api.base_url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// A started application.
pub struct Running {
    pub providers: Providers,
    pub root: AppRoot,
}

/// Wire the application together and initialize the root.
///
/// Must be called from within a Tokio runtime.
pub fn start(config: &AppConfig) -> Result<Running, StartupError> {
    let providers = Providers::from_config(config)?;

    tracing::info!(
        base_url = %providers.api().base_url(),
        routes = providers.router().routes().len(),
        "Providers ready"
    );

    let mut root = AppRoot::new(providers.api().clone());
    root.init();

    Ok(Running { providers, root })
}
