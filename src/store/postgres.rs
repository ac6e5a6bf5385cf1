use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::{CredentialStore, StoreError};
use crate::models::User;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            if db.is_unique_violation() {
                return StoreError::DuplicateEmail;
            }
        }
        StoreError::Backend(err.to_string())
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_valid_reset_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE reset_token = $1 AND reset_expires_at > $2",
        )
        .bind(token)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO users (email, password_hash, reset_token, reset_expires_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.reset_token)
        .bind(user.reset_expires_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_reset_fields(
        &self,
        email: &str,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        sqlx::query("UPDATE users SET reset_token = $2, reset_expires_at = $3 WHERE email = $1")
            .bind(email)
            .bind(token)
            .bind(expires_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_password_and_clear_reset(
        &self,
        token: &str,
        now: DateTime<Utc>,
        new_hash: &str,
    ) -> Result<Option<User>, StoreError> {
        // Single conditional statement, so a concurrent consume of the same
        // token matches zero rows.
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET password_hash = $3, reset_token = NULL, reset_expires_at = NULL
             WHERE reset_token = $1 AND reset_expires_at > $2 RETURNING *",
        )
        .bind(token)
        .bind(now)
        .bind(new_hash)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
