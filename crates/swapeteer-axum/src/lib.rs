//! Swapeteer axum adapter.
//!
//! Writes a [`HeaderCollection`](swapeteer_core::HeaderCollection) into the
//! `X-Swapeteer` response header as an `IntoResponseParts`, so handlers can
//! return `(Swapeteer::new(envelopes), html)`. Header name and size limit
//! come from a strictly parsed YAML config.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod response;

pub use config::SwapeteerConfig;
pub use response::{Swapeteer, SwapeteerRejection};
