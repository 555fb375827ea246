//! Configuration module for environment variable parsing.
//!
//! All configuration is read once at startup and never mutated afterwards.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Marketplace API base used when `GX_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "https://www.sweetwater.com";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// GX marketplace API base URL, without a trailing slash
    pub api_base: String,

    /// Personal token used for outbound GX API calls
    pub personal_token: Option<String>,

    /// Shared secret GX sends back as a bearer token on webhooks
    pub webhook_secret: Option<String>,

    /// Port for the web server to listen on
    pub port: u16,

    /// Outbound HTTP request timeout in milliseconds
    pub request_timeout_ms: u64,

    /// User-Agent sent on outbound GX API calls
    pub user_agent: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("GX_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Config {
            api_base: api_base.trim_end_matches('/').to_string(),

            personal_token: non_empty(lookup("GX_PERSONAL_TOKEN")),

            webhook_secret: non_empty(lookup("GX_WEBHOOK_SECRET")),

            port: parse_or("PORT", lookup("PORT"), 8080),

            request_timeout_ms: parse_or(
                "GX_REQUEST_TIMEOUT_MS",
                lookup("GX_REQUEST_TIMEOUT_MS"),
                20_000,
            ),

            user_agent: non_empty(lookup("GX_USER_AGENT"))
                .unwrap_or_else(|| format!("gx-relay/{}", env!("CARGO_PKG_VERSION"))),
        }
    }

    /// Timeout applied to each outbound GX API call.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Treat empty values the same as unset ones.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse a positive number, falling back to `default` when unset, invalid or zero.
fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Default + PartialEq,
{
    match raw {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(v) if v != T::default() => v,
            _ => {
                warn!(env_var = name, value = %raw, "Invalid numeric value, using default");
                default
            }
        },
    }
}
