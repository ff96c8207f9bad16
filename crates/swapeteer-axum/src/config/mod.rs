//! Adapter config loader (strict parsing).

pub mod schema;

use std::fs;

use swapeteer_core::error::{Result, SwapeteerError};

pub use schema::{HeaderSection, SwapeteerConfig};

pub fn load_from_file(path: &str) -> Result<SwapeteerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SwapeteerError::BadConfig(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<SwapeteerConfig> {
    let cfg: SwapeteerConfig = serde_yaml::from_str(s)
        .map_err(|e| SwapeteerError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    tracing::debug!(header = %cfg.header.name, max_bytes = cfg.header.max_bytes, "swapeteer config loaded");
    Ok(cfg)
}
