// Backend HTTP client
//
// Wraps `reqwest::Client` with base-URL construction, auth-header
// injection from the session store, and error-body normalization. All
// endpoint modules (auth, content, forum, ...) are implemented as
// inherent methods via separate files to keep this module focused on
// transport mechanics.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::error::Error;
use crate::session::SessionStore;

/// Request header carrying the session token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Callback fired when the server rejects the session (401). The hook
/// runs after the stored session has been cleared -- the embedding view
/// layer uses it to route to its login surface.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client for the Sproutly REST backend.
///
/// One instance is shared by every service call. Requests are fire-once:
/// no retry, no de-duplication, no cancellation. The session store is
/// consulted on every call, so a login in one task is visible to the
/// next request from any other.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Arc<dyn SessionStore>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl ApiClient {
    /// Create a client from an [`ApiConfig`] and a session store.
    pub fn new(config: &ApiConfig, session: Arc<dyn SessionStore>) -> Result<Self, Error> {
        let http = config.build_client()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session,
            on_unauthorized: None,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Used by tests and by embedders that need custom transport settings.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            http,
            base_url,
            session,
            on_unauthorized: None,
        }
    }

    /// Register the hook fired on a 401 response, after session teardown.
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The session store this client reads tokens from.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for a backend path, e.g. `forums/f1/posts`.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, Error> {
        let full = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&full).map_err(Error::InvalidUrl)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.endpoint(path)?;
        debug!("GET {url}");
        self.send(self.http.get(url)).await
    }

    /// Send a GET request with typed query parameters.
    pub(crate) async fn get_with<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        debug!("GET {url}");
        self.send(self.http.get(url).query(query)).await
    }

    /// Send a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        debug!("POST {url}");
        self.send(self.http.post(url).json(body)).await
    }

    /// Send a PUT request with a JSON body.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        debug!("PUT {url}");
        self.send(self.http.put(url).json(body)).await
    }

    /// Send a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.endpoint(path)?;
        debug!("DELETE {url}");
        self.send(self.http.delete(url)).await
    }

    /// Attach the session token (if any) and dispatch.
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, Error> {
        let request = match self.session.load() {
            Some(session) => request.header(AUTH_HEADER, session.token),
            None => request,
        };

        let response = request.send().await.map_err(Error::Transport)?;
        self.parse_response(response).await
    }

    /// Normalize the response: 401 tears down the session, other non-2xx
    /// statuses surface the server's error body, 2xx parses as `T`.
    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, Error> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(Error::SessionExpired);
        }

        let body = response.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_owned()
                });
            return Err(Error::Api {
                message,
                status: status.as_u16(),
            });
        }

        // Empty 2xx bodies (204-style responses) parse as JSON null.
        let body = if body.trim().is_empty() {
            "null".to_owned()
        } else {
            body
        };

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }

    /// 401 teardown: drop the persisted session, then fire the hook once.
    fn expire_session(&self) {
        warn!("session rejected by server -- clearing stored credentials");
        self.session.clear();
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }
}

/// Error body shape the backend sends on non-2xx responses. Field name
/// varies across routes, hence the aliases.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(alias = "msg", alias = "error")]
    message: Option<String>,
}
