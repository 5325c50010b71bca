// Authentication store
//
// Owns the signed-in user record. The persisted session itself lives in
// the api crate's SessionStore; this store mirrors the user into
// reactive state for view consumption.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use sproutly_api::model::{Credentials, NewUser, ProfileUpdate, User};
use sproutly_api::{ApiClient, Error as ApiError};
use secrecy::SecretString;

use crate::error::CoreError;

/// Reactive authentication state.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// State container for sign-in, registration, and profile management.
pub struct AuthStore {
    client: Arc<ApiClient>,
    state: watch::Sender<AuthState>,
}

impl AuthStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self { client, state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Hydrate from a persisted session, verifying the token with the
    /// server first. A stale or missing session resolves to `None`
    /// without recording an error -- the user is simply signed out.
    pub async fn restore(&self) -> Option<User> {
        self.begin();

        if self.client.session().load().is_none() {
            self.state.send_modify(|s| s.loading = false);
            return None;
        }

        match self.client.verify_session().await {
            Ok(user) => {
                self.state.send_modify(|s| {
                    s.user = Some(user.clone());
                    s.loading = false;
                });
                Some(user)
            }
            Err(e) => {
                debug!("session restore failed: {e}");
                self.state.send_modify(|s| s.loading = false);
                None
            }
        }
    }

    /// Register a new account and sign in as it.
    pub async fn register(&self, new_user: &NewUser) -> Result<User, CoreError> {
        self.begin();
        match self.client.register(new_user).await {
            Ok(auth) => {
                self.state.send_modify(|s| {
                    s.user = Some(auth.user.clone());
                    s.loading = false;
                });
                Ok(auth.user)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Sign in.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, CoreError> {
        self.begin();
        match self.client.login(credentials).await {
            Ok(auth) => {
                self.state.send_modify(|s| {
                    s.user = Some(auth.user.clone());
                    s.loading = false;
                });
                Ok(auth.user)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Sign out. Local-only: clears the persisted session and the state.
    pub fn logout(&self) {
        self.client.logout();
        self.state.send_modify(|s| s.user = None);
    }

    /// Update profile fields; the state user is replaced with the
    /// server's updated record.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, CoreError> {
        self.begin();
        match self.client.update_profile(update).await {
            Ok(user) => {
                self.state.send_modify(|s| {
                    s.user = Some(user.clone());
                    s.loading = false;
                });
                Ok(user)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Change the account password. No state beyond the flags changes.
    pub async fn change_password(
        &self,
        current: &SecretString,
        new: &SecretString,
    ) -> Result<(), CoreError> {
        self.begin();
        match self.client.change_password(current, new).await {
            Ok(()) => {
                self.state.send_modify(|s| s.loading = false);
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn begin(&self) {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn fail(&self, err: ApiError) -> CoreError {
        let err = CoreError::from(err);
        self.state.send_modify(|s| {
            s.loading = false;
            s.error = Some(err.message());
        });
        err
    }
}
