//! Handler error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is not configured.
    #[error("Server not configured (missing {0})")]
    MissingConfig(&'static str),

    /// No personal token, so outbound GX API calls cannot be made.
    #[error("Missing GX_PERSONAL_TOKEN")]
    MissingToken,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Transport-level failure talking to the GX API (timeout, connect, ...).
    #[error("Upstream request failed")]
    Upstream(#[from] reqwest::Error),
}

/// Error envelope returned by every failing route.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingConfig(_) | AppError::MissingToken | AppError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::MissingConfig(var) => error!(env_var = *var, "server_not_configured"),
            AppError::MissingToken => error!(env_var = "GX_PERSONAL_TOKEN", "server_not_configured"),
            AppError::Unauthorized => warn!("request_unauthorized"),
            AppError::MalformedBody(e) => warn!(error = %e, "request_body_invalid"),
            AppError::Upstream(e) => error!(
                error = %e,
                is_timeout = e.is_timeout(),
                is_connect = e.is_connect(),
                "upstream_request_failed"
            ),
        }

        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
