//! Outbound GX marketplace API access.
//!
//! The relay only ever reads from the API, using the operator's personal
//! token, to confirm the token works:
//!
//! ```text
//! GET /gx/ping → GxClient::ping() → { /user, /listings } in parallel
//! ```

pub mod client;

pub use client::{
    preview, GxClient, PingReport, ProbeResult, LISTINGS_PATH, PREVIEW_CHARS, USER_PATH,
};
