use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One registered identity, keyed by email. The reset fields are set
/// together while a reset request is outstanding and cleared together when
/// the token is consumed.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub reset_token: Option<String>,
    pub reset_expires_at: Option<DateTime<Utc>>,
}
