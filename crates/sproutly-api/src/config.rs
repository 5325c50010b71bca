// Shared transport configuration for building reqwest::Client instances.
//
// The backend is a plain JSON/REST service, so there is no TLS or cookie
// special-casing here -- just the base URL, an optional timeout, and the
// user agent string.

use std::time::Duration;

use url::Url;

use crate::error::Error;

/// Default backend address for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Configuration for building an [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL, including the API path prefix
    /// (e.g. `http://localhost:5000/api`).
    pub base_url: Url,
    /// Request timeout. `None` means requests may hang indefinitely --
    /// the wire contract has no timeout, so this is opt-in.
    pub timeout: Option<Duration>,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default URL is valid"),
            timeout: None,
            user_agent: concat!("sproutly/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl ApiConfig {
    /// Create a config for the given base URL with library defaults.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().map_err(Error::Transport)
    }
}
