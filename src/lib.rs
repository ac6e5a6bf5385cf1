pub mod auth;
pub mod config;
pub mod email;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use sqlx::PgPool;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::auth::AuthService;
use crate::config::Config;
use crate::email::{LogNotifier, Notifier, SmtpNotifier};
use crate::state::{AppState, SharedState};
use crate::store::postgres::PgStore;

pub fn build_app(pool: PgPool, config: Config) -> Router {
    let notifier: Arc<dyn Notifier> = match config.smtp.as_ref().map(SmtpNotifier::new) {
        Some(Ok(mailer)) => {
            tracing::info!("SMTP configured");
            Arc::new(mailer)
        }
        Some(Err(e)) => {
            tracing::warn!("SMTP not available, falling back to log delivery: {e}");
            Arc::new(LogNotifier)
        }
        None => Arc::new(LogNotifier),
    };

    let auth = AuthService::new(Arc::new(PgStore::new(pool)), notifier);

    let state: SharedState = Arc::new(AppState { auth, config });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
