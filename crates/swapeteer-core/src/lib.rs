//! Swapeteer core: response directives for htmx-driven pages.
//!
//! This crate builds the envelopes a server attaches to a response so the
//! client loader can splice markup (`swap`) and raise notifications
//! (`alert`). It only constructs and serializes data; writing the header is
//! left to a transport adapter such as `swapeteer-axum`.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Builders and
//! constructors are total; the only fallible path is encoding, which surfaces
//! as `SwapeteerError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod alert;
pub mod envelope;
pub mod error;
pub mod header;
pub mod swap;

pub use alert::{danger, dark, info, new_alert, success, warning, Alert, Level};
pub use envelope::{Envelope, Payload};
/// Shared result type.
pub use error::{Result, SwapeteerError};
pub use header::{build_header_collection, HeaderCollection, HEADER_NAME};
pub use swap::{new_swap, Scroll, Swap, SwapDirective, SwapOptions, SwapSpec, SwapStyle};
