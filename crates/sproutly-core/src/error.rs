// ── Core error types ──
//
// User-facing errors from sproutly-core. Stores record these as flat
// message strings in their state and rethrow them so the calling view
// can branch locally. The `From<sproutly_api::Error>` impl translates
// transport-layer errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Session expired -- sign in again")]
    SessionExpired,

    /// No response obtained at all (connection refused, DNS, ...).
    #[error("Network error: {message}")]
    Network { message: String },

    /// Server-reported failure with a structured body.
    #[error("{message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    /// The server answered 2xx but the payload didn't parse.
    #[error("Unexpected response: {message}")]
    BadResponse { message: String },
}

impl CoreError {
    /// The flat string stores record in their `error` field.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if signing in again might resolve this.
    pub fn is_auth_expired(&self) -> bool {
        matches!(
            self,
            Self::SessionExpired | Self::AuthenticationFailed { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<sproutly_api::Error> for CoreError {
    fn from(err: sproutly_api::Error) -> Self {
        match err {
            sproutly_api::Error::Validation { message } => Self::ValidationFailed { message },
            sproutly_api::Error::Authentication { message } => {
                Self::AuthenticationFailed { message }
            }
            sproutly_api::Error::SessionExpired => Self::SessionExpired,
            sproutly_api::Error::Transport(e) => Self::Network {
                message: e.to_string(),
            },
            sproutly_api::Error::InvalidUrl(e) => Self::Network {
                message: e.to_string(),
            },
            sproutly_api::Error::Api { message, status } => Self::Api {
                message,
                status: Some(status),
            },
            sproutly_api::Error::Deserialization { message, .. } => {
                Self::BadResponse { message }
            }
        }
    }
}
