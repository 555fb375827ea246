//! Static bearer-token authentication for GX webhooks.
//!
//! GX is configured with a shared secret and sends it back on every webhook
//! as `Authorization: Bearer <secret>`. There is no per-request signature.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use tracing::warn;

use crate::error::AppError;

const BEARER_PREFIX: &str = "bearer ";

/// Extract the presented bearer credential from the request headers.
///
/// Returns an empty string when the header is missing, is not valid text,
/// or does not start with `Bearer ` (any case).
pub fn bearer_token(headers: &HeaderMap) -> &str {
    let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) else {
        return "";
    };

    match value.get(..BEARER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => {
            value[BEARER_PREFIX.len()..].trim()
        }
        _ => "",
    }
}

/// Check the request against the configured webhook secret.
///
/// Fails closed: with no secret configured every request is rejected as a
/// server misconfiguration, whatever it presents.
pub fn verify_bearer(headers: &HeaderMap, secret: Option<&str>) -> Result<(), AppError> {
    let Some(secret) = secret else {
        return Err(AppError::MissingConfig("GX_WEBHOOK_SECRET"));
    };

    let presented = bearer_token(headers);

    if !constant_time_compare(presented, secret) {
        warn!(
            has_authorization = headers.contains_key(AUTHORIZATION),
            presented_length = presented.len(),
            "bearer_token_mismatch"
        );
        return Err(AppError::Unauthorized);
    }

    Ok(())
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
