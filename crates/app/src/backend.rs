//! Hosted backend connector.
//!
//! A cheap, clonable handle bundling the HTTP client, base URL, and API key
//! for the hosted backend. Components receive one explicitly instead of
//! reaching for a process-wide lazily-initialised client.

use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, InvalidHeaderValue},
};
use thiserror::Error;

/// API key header expected by the hosted backend.
const API_KEY_HEADER: &str = "apikey";

#[derive(Debug, Error)]
pub enum BackendHandleError {
    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),

    #[error("api key is not a valid header value")]
    ApiKey(#[source] InvalidHeaderValue),
}

/// Connection handle for the hosted backend's REST surface.
#[derive(Debug, Clone)]
pub struct BackendHandle {
    http: Client,
    base_url: String,
    auth_headers: HeaderMap,
}

impl BackendHandle {
    /// Build a handle for the backend at `base_url`, authenticating every
    /// request with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed or the
    /// API key cannot be sent as a header.
    pub fn connect(
        base_url: impl Into<String>,
        api_key: &str,
    ) -> Result<Self, BackendHandleError> {
        let http = Client::builder()
            .build()
            .map_err(BackendHandleError::Client)?;

        let mut auth_headers = HeaderMap::new();
        auth_headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(api_key).map_err(BackendHandleError::ApiKey)?,
        );

        let base_url = base_url.into().trim_end_matches('/').to_owned();

        Ok(Self {
            http,
            base_url,
            auth_headers,
        })
    }

    /// The shared HTTP client.
    #[must_use]
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Absolute URL for a path under the backend base.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Headers authenticating a request to the backend.
    #[must_use]
    pub fn auth_headers(&self) -> HeaderMap {
        self.auth_headers.clone()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn urls_join_cleanly_regardless_of_trailing_slash() -> TestResult {
        let with = BackendHandle::connect("http://localhost:8000/", "key")?;
        let without = BackendHandle::connect("http://localhost:8000", "key")?;

        assert_eq!(with.url("products"), "http://localhost:8000/products");
        assert_eq!(without.url("products"), "http://localhost:8000/products");

        Ok(())
    }

    #[test]
    fn a_non_ascii_api_key_is_rejected_up_front() {
        let result = BackendHandle::connect("http://localhost:8000", "bad\nkey");

        assert!(result.is_err(), "control characters cannot be sent");
    }
}
