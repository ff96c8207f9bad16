//! Top-level facade crate for swapeteer.
//!
//! Re-exports the envelope builders and the axum adapter so users can depend on a single crate.

pub mod core {
    pub use swapeteer_core::*;
}

pub mod adapter {
    pub use swapeteer_axum::*;
}

pub use swapeteer_core::{
    build_header_collection, danger, dark, info, new_alert, new_swap, success, warning, Envelope,
    HeaderCollection, Swap, SwapStyle, HEADER_NAME,
};
