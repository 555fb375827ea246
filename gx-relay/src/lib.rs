//! GX Relay - webhook receiver and API diagnostics for the GX marketplace.
//!
//! ## Architecture
//!
//! ```text
//! GX webhooks → /gx/webhook → bearer check → acknowledge
//! Operator    → /gx/ping    → GX API (/user, /listings) → status + preview
//! ```

pub mod config;
pub mod error;
pub mod gx;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
pub use gx::{GxClient, PingReport};
pub use web::{router, AppState};
