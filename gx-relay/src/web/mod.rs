//! Web server module.
//!
//! Routes:
//! - `GET /health`: liveness
//! - `GET /debug/env`: configuration summary (bearer secret required)
//! - `POST /gx/webhook`: GX webhook receiver (bearer secret required)
//! - `GET /gx/ping`: personal token check against the GX API

pub mod auth;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use auth::{bearer_token, verify_bearer};
pub use handlers::{
    debug_env, event_type, gx_ping, gx_webhook, health, AppState, DebugEnvResponse,
    HealthResponse, WebhookResponse,
};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/debug/env", get(debug_env))
        .route("/gx/webhook", post(gx_webhook))
        .route("/gx/ping", get(gx_ping))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
