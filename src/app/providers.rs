//! Process-wide providers, built once at startup and passed explicitly.

use std::time::Duration;

use url::Url;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::lifecycle::startup::StartupError;
use crate::routing::Router;

/// Routing and HTTP transport capabilities for the application.
#[derive(Debug, Clone)]
pub struct Providers {
    router: Router,
    api: ApiClient,
}

impl Providers {
    /// Construct every provider from a validated configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, StartupError> {
        let base_url = Url::parse(&config.api.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .connect_timeout(Duration::from_secs(config.api.connect_timeout_secs))
            .build()?;

        Ok(Self {
            router: Router::from_config(config.routes.clone()),
            api: ApiClient::new(http, base_url),
        })
    }

    /// Registered routes.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Client for the backend API.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}
