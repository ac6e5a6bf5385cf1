use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::auth::{password, token};
use crate::email::{Notifier, templates};
use crate::error::AuthError;
use crate::models::User;
use crate::store::CredentialStore;

/// A successfully issued reset request: the token that went out in the
/// email, the address it was sent to, and when it stops being valid.
#[derive(Debug, Clone)]
pub struct ResetIssued {
    pub token: String,
    pub recipient: String,
    pub expires_at: DateTime<Utc>,
}

/// Orchestrates registration, login verification, and the reset-token
/// lifecycle. All durable state lives behind the store; the service holds
/// no mutable state of its own, so each request runs independently.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    notifier: Arc<dyn Notifier>,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    pub async fn register(&self, email: &str, password_plain: &str) -> Result<(), AuthError> {
        if self.store.find_by_email(email).await?.is_some() {
            return Err(AuthError::AlreadyExists);
        }

        let password_hash = password::hash(password_plain).map_err(AuthError::Internal)?;
        let user = User {
            email: email.to_string(),
            password_hash,
            reset_token: None,
            reset_expires_at: None,
        };

        // A concurrent insert of the same email loses at the store's unique
        // constraint and also maps to AlreadyExists.
        self.store.insert(&user).await?;
        Ok(())
    }

    pub async fn login(&self, email: &str, password_plain: &str) -> Result<(), AuthError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::NotFound)?;

        let valid =
            password::verify(password_plain, &user.password_hash).map_err(AuthError::Internal)?;
        if !valid {
            return Err(AuthError::Credentials);
        }
        Ok(())
    }

    /// Issue a fresh reset token, overwriting any outstanding one, then
    /// email the reset link. Delivery failure is reported to the caller,
    /// but the issued token stays persisted.
    pub async fn request_reset(
        &self,
        email: &str,
        base_url: &str,
    ) -> Result<ResetIssued, AuthError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::NotFound)?;

        let (reset_token, expires_at) = token::generate();
        self.store
            .update_reset_fields(&user.email, &reset_token, expires_at)
            .await?;

        let reset_url = format!("{base_url}/reset/{reset_token}");
        let body = templates::render_password_reset(&reset_url);
        self.notifier
            .send(&user.email, "Password Reset", &body)
            .await?;

        Ok(ResetIssued {
            token: reset_token,
            recipient: user.email,
            expires_at,
        })
    }

    /// Email of the account holding an unexpired `reset_token`. Unknown,
    /// expired, and already-consumed tokens are indistinguishable.
    pub async fn validate_reset_token(&self, reset_token: &str) -> Result<String, AuthError> {
        let user = self
            .store
            .find_by_valid_reset_token(reset_token, Utc::now())
            .await?
            .ok_or(AuthError::InvalidOrExpired)?;
        Ok(user.email)
    }

    pub async fn complete_reset(
        &self,
        reset_token: &str,
        password_plain: &str,
        confirm_plain: &str,
    ) -> Result<(), AuthError> {
        // Checked before any store access.
        if password_plain != confirm_plain {
            return Err(AuthError::PasswordMismatch);
        }

        let password_hash = password::hash(password_plain).map_err(AuthError::Internal)?;

        // The token is consumed the instant the row is cleared; a racing
        // call matches zero rows and observes InvalidOrExpired.
        self.store
            .update_password_and_clear_reset(reset_token, Utc::now(), &password_hash)
            .await?
            .ok_or(AuthError::InvalidOrExpired)?;
        Ok(())
    }
}
