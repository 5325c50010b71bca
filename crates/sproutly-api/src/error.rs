use thiserror::Error;

/// Top-level error type for the `sproutly-api` crate.
///
/// Covers every failure mode of the client surface: local validation,
/// authentication, transport, server-reported errors, and response parsing.
/// `sproutly-core` maps these into user-facing store messages.
#[derive(Debug, Error)]
pub enum Error {
    // ── Local validation ────────────────────────────────────────────
    /// Client-side field check failed before any network call was made.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    // ── Authentication ──────────────────────────────────────────────
    /// Login or registration rejected (wrong credentials, duplicate
    /// email, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The server answered 401 -- the local session has been torn down.
    #[error("Session expired -- sign in again")]
    SessionExpired,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Server-reported ─────────────────────────────────────────────
    /// Structured error from the backend (non-2xx with a JSON body).
    #[error("API error (HTTP {status}): {message}")]
    Api { message: String, status: u16 },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means the session is gone and
    /// re-authentication might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::SessionExpired | Self::Authentication { .. })
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if the failure happened before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::InvalidUrl(_))
    }
}
