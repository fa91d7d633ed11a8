//! Backend API client.

use url::Url;

use crate::api::request::Fetch;

const USERS_PATH: &str = "users";

/// Client for the backend REST API.
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client that sends requests through `http` to `base_url`.
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Base address every endpoint is built from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Describe a `GET {base}/users` request. Nothing is sent until the
    /// returned [`Fetch`] is activated.
    pub fn fetch_users(&self) -> Fetch {
        Fetch::new(self.http.clone(), self.endpoint(USERS_PATH))
    }

    /// Append one path segment to the base address, keeping any base path.
    fn endpoint(&self, segment: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(reqwest::Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn test_users_url_from_default_base() {
        let fetch = client("http://127.0.0.1:8000").fetch_users();
        assert_eq!(fetch.url().as_str(), "http://127.0.0.1:8000/users");
    }

    #[test]
    fn test_users_url_trailing_slash() {
        let fetch = client("http://127.0.0.1:8000/").fetch_users();
        assert_eq!(fetch.url().as_str(), "http://127.0.0.1:8000/users");
    }

    #[test]
    fn test_users_url_keeps_base_path() {
        let fetch = client("https://example.com/api/").fetch_users();
        assert_eq!(fetch.url().as_str(), "https://example.com/api/users");

        let fetch = client("https://example.com/api").fetch_users();
        assert_eq!(fetch.url().as_str(), "https://example.com/api/users");
    }
}
