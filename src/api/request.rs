//! Cold, single-value requests and their subscriptions.
//!
//! # Data Flow
//! ```text
//! ApiClient::fetch_users()  → Fetch (nothing sent yet)
//!     → Fetch::run()        → one GET, awaited inline
//!     → Fetch::subscribe()  → one GET on a spawned task
//!                              → Observer::next | Observer::error
//!                              → or nothing, if cancelled first
//! ```

use serde_json::Value;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::Instrument;
use url::Url;
use uuid::Uuid;

use crate::api::error::ApiError;

/// Receiver of the single outcome of an activated [`Fetch`].
///
/// Both callbacks consume the observer, so at most one of them can run.
pub trait Observer {
    /// The request succeeded and the body decoded as JSON.
    fn next(self, value: Value);

    /// The request failed.
    fn error(self, err: ApiError);
}

/// A GET request that has been described but not sent.
///
/// Every activation sends its own request; nothing is cached or shared
/// between two `Fetch` values for the same URL.
#[derive(Debug, Clone)]
pub struct Fetch {
    http: reqwest::Client,
    url: Url,
}

impl Fetch {
    pub(crate) fn new(http: reqwest::Client, url: Url) -> Self {
        Self { http, url }
    }

    /// Target of the request.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Send the request and decode the body as opaque JSON.
    pub async fn run(self) -> Result<Value, ApiError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("fetch", %request_id, url = %self.url);

        self.send().instrument(span).await
    }

    async fn send(self) -> Result<Value, ApiError> {
        tracing::debug!("Sending GET request");

        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| ApiError::request_failed(&self.url, e))?;

        let status = response.status();
        let response = response
            .error_for_status()
            .map_err(|e| ApiError::request_failed(&self.url, e))?;

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::request_failed(&self.url, e))?;

        tracing::debug!(status = %status, "Response received");
        Ok(body)
    }

    /// Activate the request on the runtime and hand the outcome to `observer`.
    ///
    /// When `cancel` fires, or its sender is dropped, before the outcome is
    /// known, the in-flight request is dropped and the observer is never
    /// called.
    pub fn subscribe<O>(self, observer: O, mut cancel: broadcast::Receiver<()>) -> JoinHandle<()>
    where
        O: Observer + Send + 'static,
    {
        let url = self.url.clone();

        tokio::spawn(async move {
            tokio::select! {
                biased;

                _ = cancel.recv() => {
                    tracing::debug!(url = %url, "Subscription torn down before completion");
                }
                result = self.run() => match result {
                    Ok(value) => observer.next(value),
                    Err(err) => observer.error(err),
                },
            }
        })
    }
}
