pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::User;

#[derive(Debug)]
pub enum StoreError {
    DuplicateEmail,
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::DuplicateEmail => write!(f, "email already registered"),
            StoreError::Backend(msg) => write!(f, "store backend error: {msg}"),
        }
    }
}

/// Persistence contract for user records. Every operation is atomic with
/// respect to the record it touches; expiry comparisons take `now` from the
/// caller so token validity stays under the service's control.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// The record whose unexpired reset token equals `token`, if any.
    /// Overwrite semantics on issuance guarantee at most one match.
    async fn find_by_valid_reset_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, StoreError>;

    /// Fails with `DuplicateEmail` if the email is already taken, including
    /// by a concurrent insert.
    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    /// Overwrites any outstanding reset token in a single write, so the
    /// token/expiry pair can never end up mismatched.
    async fn update_reset_fields(
        &self,
        email: &str,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Atomic consume: set the new password hash and clear both reset
    /// fields on the record whose unexpired token equals `token`. Returns
    /// `None` when no such record exists (unknown, expired, or already
    /// consumed) — of two racing calls, exactly one gets the record.
    async fn update_password_and_clear_reset(
        &self,
        token: &str,
        now: DateTime<Utc>,
        new_hash: &str,
    ) -> Result<Option<User>, StoreError>;
}
