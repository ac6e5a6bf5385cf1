use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::email::NotifyError;
use crate::store::StoreError;

#[derive(Debug)]
pub enum AuthError {
    AlreadyExists,
    NotFound,
    Credentials,
    PasswordMismatch,
    InvalidOrExpired,
    BadRequest(String),
    Notify(NotifyError),
    Store(StoreError),
    Internal(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::AlreadyExists => write!(f, "Email already exists. Try logging in."),
            AuthError::NotFound => write!(f, "No account with that email address exists."),
            AuthError::Credentials => write!(f, "Incorrect information."),
            AuthError::PasswordMismatch => write!(f, "Passwords do not match."),
            AuthError::InvalidOrExpired => {
                write!(f, "Password reset token is invalid or has expired.")
            }
            AuthError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AuthError::Notify(err) => write!(f, "Notify Error: {err}"),
            AuthError::Store(err) => write!(f, "Store Error: {err}"),
            AuthError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::AlreadyExists => (StatusCode::CONFLICT, self.to_string()),
            AuthError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AuthError::Credentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AuthError::PasswordMismatch | AuthError::InvalidOrExpired => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AuthError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AuthError::Notify(err) => {
                tracing::error!("Notify error: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to send the reset e-mail.".to_string(),
                )
            }
            AuthError::Store(err) => {
                tracing::error!("Store error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AuthError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => AuthError::AlreadyExists,
            other => AuthError::Store(other),
        }
    }
}

impl From<NotifyError> for AuthError {
    fn from(err: NotifyError) -> Self {
        AuthError::Notify(err)
    }
}
