use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ResetTokenResponse {
    pub email: String,
}

pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AuthError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    state.auth.register(&req.email, &req.password).await?;

    Ok(Json(MessageResponse {
        message: "Account created. You can now log in.".to_string(),
    }))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    state.auth.login(&req.email, &req.password).await?;

    Ok(Json(MessageResponse {
        message: "Logged in successfully.".to_string(),
    }))
}

pub async fn forgot_password(
    State(state): State<SharedState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    let issued = state
        .auth
        .request_reset(&req.email, &state.config.base_url)
        .await?;

    Ok(Json(MessageResponse {
        message: format!(
            "An e-mail has been sent to {} with further instructions.",
            issued.recipient
        ),
    }))
}

/// Decides whether a reset form should be presented for this token.
pub async fn validate_reset_token(
    State(state): State<SharedState>,
    Path(token): Path<String>,
) -> Result<Json<ResetTokenResponse>, AuthError> {
    let email = state.auth.validate_reset_token(&token).await?;
    Ok(Json(ResetTokenResponse { email }))
}

pub async fn reset_password(
    State(state): State<SharedState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    state
        .auth
        .complete_reset(&req.token, &req.password, &req.confirm_password)
        .await?;

    Ok(Json(MessageResponse {
        message: "Your password has been updated.".to_string(),
    }))
}
