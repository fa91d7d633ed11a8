//! API client error type.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single API request.
///
/// There is one kind: the request failed. Connection errors, timeouts,
/// non-success statuses and undecodable bodies all land here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub(crate) fn request_failed(url: &url::Url, source: reqwest::Error) -> Self {
        Self::RequestFailed {
            url: url.to_string(),
            source,
        }
    }

    /// URL of the failed request.
    pub fn url(&self) -> &str {
        match self {
            Self::RequestFailed { url, .. } => url,
        }
    }

    /// HTTP status, if the backend answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::RequestFailed { source, .. } => source.status(),
        }
    }

    /// True when the request did not finish within the configured timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::RequestFailed { source, .. } => source.is_timeout(),
        }
    }
}
