//! Route handlers.
//!
//! Webhooks are acknowledged and logged only; nothing is stored or
//! forwarded. The diagnostic routes read from the GX API with the
//! operator's personal token.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::error::AppError;
use crate::gx::{GxClient, PingReport};
use crate::web::auth::verify_bearer;
use crate::Config;

/// Number of personal token characters disclosed by `/debug/env`.
const TOKEN_PREFIX_CHARS: usize = 6;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gx: GxClient,
}

impl AppState {
    pub fn new(config: Config) -> reqwest::Result<Self> {
        let gx = GxClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            gx,
        })
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

// =============================================================================
// Debug Env
// =============================================================================

/// Configuration summary; never carries more than a short token prefix.
#[derive(Debug, Serialize)]
pub struct DebugEnvResponse {
    #[serde(rename = "GX_API_BASE")]
    pub api_base: String,
    #[serde(rename = "GX_PERSONAL_TOKEN_set")]
    pub personal_token_set: bool,
    #[serde(rename = "GX_PERSONAL_TOKEN_len")]
    pub personal_token_len: usize,
    #[serde(rename = "GX_PERSONAL_TOKEN_prefix")]
    pub personal_token_prefix: String,
    #[serde(rename = "GX_WEBHOOK_SECRET_set")]
    pub webhook_secret_set: bool,
}

impl DebugEnvResponse {
    pub fn from_config(config: &Config) -> Self {
        let token = config.personal_token.as_deref().unwrap_or("");

        Self {
            api_base: config.api_base.clone(),
            personal_token_set: config.personal_token.is_some(),
            personal_token_len: token.chars().count(),
            personal_token_prefix: token.chars().take(TOKEN_PREFIX_CHARS).collect(),
            webhook_secret_set: config.webhook_secret.is_some(),
        }
    }
}

/// Configuration debug endpoint, behind the webhook bearer check.
pub async fn debug_env(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DebugEnvResponse>, AppError> {
    verify_bearer(&headers, state.config.webhook_secret.as_deref())?;

    Ok(Json(DebugEnvResponse::from_config(&state.config)))
}

// =============================================================================
// GX Webhook
// =============================================================================

/// Webhook acknowledgement.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub received: bool,
    pub event_type: String,
}

/// GX webhook endpoint.
///
/// This endpoint:
/// 1. Verifies the bearer secret
/// 2. Parses the body as a JSON object
/// 3. Acknowledges with the event type
///
/// The body is taken as raw bytes so authentication runs before parsing.
pub async fn gx_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookResponse>, AppError> {
    verify_bearer(&headers, state.config.webhook_secret.as_deref())?;

    let payload: Map<String, Value> = serde_json::from_slice(&body)?;
    let event_type = event_type(&payload);

    info!(
        event_type = %event_type,
        body_length = body.len(),
        "gx_webhook_received"
    );

    Ok(Json(WebhookResponse {
        received: true,
        event_type,
    }))
}

/// Pick `event_type`, then `type`, then `"unknown"`.
///
/// Empty, null, false and zero values are skipped. Non-string values are
/// rendered as JSON text.
pub fn event_type(payload: &Map<String, Value>) -> String {
    ["event_type", "type"]
        .iter()
        .filter_map(|key| payload.get(*key))
        .find(|value| is_truthy(value))
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| "unknown".to_string())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

// =============================================================================
// GX Ping
// =============================================================================

/// Token sanity check against the GX API; read-only.
pub async fn gx_ping(State(state): State<AppState>) -> Result<Json<PingReport>, AppError> {
    let token = state
        .config
        .personal_token
        .as_deref()
        .ok_or(AppError::MissingToken)?;

    let report = state.gx.ping(token).await?;

    info!(
        user_status = report.user_status,
        listings_status = report.listings_status,
        "gx_ping_complete"
    );

    Ok(Json(report))
}
