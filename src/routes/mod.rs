pub mod auth;

use axum::Router;
use axum::routing::{get, post};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/forgot-password", post(auth::forgot_password))
        .route(
            "/api/v1/auth/reset-password/{token}",
            get(auth::validate_reset_token),
        )
        .route("/api/v1/auth/reset-password", post(auth::reset_password))
}
