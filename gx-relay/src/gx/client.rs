//! GX public API client used by the diagnostic probe.

use std::time::Duration;

use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client,
};
use serde::Serialize;
use tracing::info;

use crate::Config;

/// Authenticated user endpoint, relative to the API base.
pub const USER_PATH: &str = "/used/public-api/v1/user";

/// Listings endpoint, relative to the API base.
pub const LISTINGS_PATH: &str = "/used/public-api/v1/listings";

/// Number of body characters echoed back per probe.
pub const PREVIEW_CHARS: usize = 200;

/// Summary of a single outbound GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub status: u16,
    pub preview: String,
}

/// Combined result of probing both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingReport {
    pub user_status: u16,
    pub user_preview: String,
    pub listings_status: u16,
    pub listings_preview: String,
}

/// Thin wrapper over a pooled `reqwest::Client` bound to one API base.
#[derive(Debug, Clone)]
pub struct GxClient {
    http: Client,
    api_base: String,
    user_agent: String,
    timeout: Duration,
}

impl GxClient {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.request_timeout(),
        })
    }

    /// Full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Issue one authenticated GET and summarise the response.
    ///
    /// Any HTTP status counts as success here; only transport failures
    /// (timeout, connect, body read) are errors.
    pub async fn probe(&self, path: &str, token: &str) -> reqwest::Result<ProbeResult> {
        let url = self.url(path);

        info!(
            url = %url,
            timeout_seconds = self.timeout.as_secs_f64(),
            "gx_probe_starting"
        );

        let response = self
            .http
            .get(&url)
            .timeout(self.timeout)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.user_agent.as_str())
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        info!(
            url = %url,
            status_code = status,
            body_length = body.len(),
            "gx_probe_complete"
        );

        Ok(ProbeResult {
            status,
            preview: preview(&body),
        })
    }

    /// Probe the user and listings endpoints concurrently.
    ///
    /// Fails as a whole if either call fails.
    pub async fn ping(&self, token: &str) -> reqwest::Result<PingReport> {
        let (user, listings) = tokio::try_join!(
            self.probe(USER_PATH, token),
            self.probe(LISTINGS_PATH, token),
        )?;

        Ok(PingReport {
            user_status: user.status,
            user_preview: user.preview,
            listings_status: listings.status,
            listings_preview: listings.preview,
        })
    }
}

/// First `PREVIEW_CHARS` characters of a response body.
pub fn preview(body: &str) -> String {
    body.chars().take(PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_body_unchanged() {
        assert_eq!(preview(r#"{"ok":true}"#), r#"{"ok":true}"#);
        assert_eq!(preview(""), "");
    }

    #[test]
    fn test_preview_truncates_by_chars() {
        let body = "é".repeat(300);
        let p = preview(&body);
        assert_eq!(p.chars().count(), PREVIEW_CHARS);
        assert!(body.starts_with(&p));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let config = Config::from_lookup(|name| match name {
            "GX_API_BASE" => Some("http://127.0.0.1:9999/".to_string()),
            _ => None,
        });
        let client = GxClient::new(&config).unwrap();
        assert_eq!(
            client.url(LISTINGS_PATH),
            "http://127.0.0.1:9999/used/public-api/v1/listings"
        );
    }
}
