// Authentication endpoints
//
// Login/register persist the returned session; logout and verify-failure
// clear it. Field checks run before any network call so a bad form never
// leaves the process.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::model::{AuthSession, Credentials, NewUser, ProfileUpdate, User};
use crate::session::Session;

impl ApiClient {
    /// Register a new account.
    ///
    /// `POST auth/register`. On success the returned session is persisted.
    pub async fn register(&self, new_user: &NewUser) -> Result<AuthSession, Error> {
        validate_email(&new_user.email)?;
        validate_password(&new_user.password)?;
        if new_user.first_name.trim().is_empty() {
            return Err(Error::Validation {
                message: "first name is required".into(),
            });
        }

        debug!(email = %new_user.email, "registering account");

        let body = json!({
            "firstName": new_user.first_name,
            "lastName": new_user.last_name,
            "email": new_user.email,
            "password": new_user.password.expose_secret(),
        });

        let auth: AuthSession = self
            .post("auth/register", &body)
            .await
            .map_err(|e| self.reject(e))?;
        self.persist(&auth);
        Ok(auth)
    }

    /// Sign in with email and password.
    ///
    /// `POST auth/login`. On success the returned session is persisted.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession, Error> {
        validate_email(&credentials.email)?;
        validate_password(&credentials.password)?;

        debug!(email = %credentials.email, "logging in");

        let body = json!({
            "email": credentials.email,
            "password": credentials.password.expose_secret(),
        });

        let auth: AuthSession = self
            .post("auth/login", &body)
            .await
            .map_err(|e| self.reject(e))?;
        self.persist(&auth);
        Ok(auth)
    }

    /// Sign out. Local-only: the backend holds no session state to
    /// invalidate, so this just drops the persisted session.
    pub fn logout(&self) {
        debug!("logging out");
        self.session().clear();
    }

    /// Check the persisted token against the server.
    ///
    /// `GET auth/verify`. Any failure tears down the persisted session
    /// before the error is rethrown.
    pub async fn verify_session(&self) -> Result<User, Error> {
        if self.session().load().is_none() {
            return Err(Error::SessionExpired);
        }

        match self.get("auth/verify").await {
            Ok(user) => Ok(user),
            Err(e) => {
                self.session().clear();
                Err(e)
            }
        }
    }

    /// Fetch the signed-in user's full profile.
    ///
    /// `GET auth/me`
    pub async fn profile(&self) -> Result<User, Error> {
        self.get("auth/me").await
    }

    /// Update profile fields.
    ///
    /// `PUT users/profile`. On success the persisted user record is
    /// refreshed with the server's response.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, Error> {
        if let Some(ref email) = update.email {
            validate_email(email)?;
        }

        debug!("updating profile");
        let user: User = self.put("users/profile", update).await?;

        if let Some(mut session) = self.session().load() {
            session.user = user.clone();
            self.session().store(&session);
        }
        Ok(user)
    }

    /// Change the account password.
    ///
    /// `PUT users/change-password`
    pub async fn change_password(
        &self,
        current: &SecretString,
        new: &SecretString,
    ) -> Result<(), Error> {
        validate_password(new)?;

        debug!("changing password");
        let body = json!({
            "currentPassword": current.expose_secret(),
            "newPassword": new.expose_secret(),
        });

        let _: serde_json::Value = self.put("users/change-password", &body).await?;
        Ok(())
    }

    fn persist(&self, auth: &AuthSession) {
        self.session().store(&Session {
            token: auth.token.clone(),
            user: auth.user.clone(),
        });
    }

    /// Login/register rejection: any stored session is dropped and a
    /// server-reported failure becomes an authentication error.
    fn reject(&self, err: Error) -> Error {
        self.session().clear();
        match err {
            Error::Api { message, .. } => Error::Authentication { message },
            other => other,
        }
    }
}

// ── Local field checks ──────────────────────────────────────────────

fn validate_email(email: &str) -> Result<(), Error> {
    let email = email.trim();
    if email.is_empty() {
        return Err(Error::Validation {
            message: "email is required".into(),
        });
    }
    // Deliberately loose: the server owns real address validation.
    if !email.contains('@') {
        return Err(Error::Validation {
            message: format!("'{email}' is not a valid email address"),
        });
    }
    Ok(())
}

fn validate_password(password: &SecretString) -> Result<(), Error> {
    if password.expose_secret().is_empty() {
        return Err(Error::Validation {
            message: "password is required".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn email_check_rejects_missing_at_sign() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(matches!(
            validate_email("not-an-address"),
            Err(Error::Validation { .. })
        ));
        assert!(matches!(validate_email("  "), Err(Error::Validation { .. })));
    }

    #[test]
    fn password_check_rejects_empty() {
        assert!(validate_password(&SecretString::from("x".to_owned())).is_ok());
        assert!(matches!(
            validate_password(&SecretString::from(String::new())),
            Err(Error::Validation { .. })
        ));
    }
}
