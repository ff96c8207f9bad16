use axum::http::HeaderName;
use serde::Deserialize;
use swapeteer_core::error::{Result, SwapeteerError};
use swapeteer_core::HEADER_NAME;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwapeteerConfig {
    pub version: u32,

    #[serde(default)]
    pub header: HeaderSection,
}

impl Default for SwapeteerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            header: HeaderSection::default(),
        }
    }
}

impl SwapeteerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SwapeteerError::BadConfig(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.header.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderSection {
    #[serde(default = "default_header_name")]
    pub name: String,

    /// Upper bound on the encoded header value.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

impl Default for HeaderSection {
    fn default() -> Self {
        Self {
            name: default_header_name(),
            max_bytes: default_max_bytes(),
        }
    }
}

impl HeaderSection {
    pub fn validate(&self) -> Result<()> {
        self.header_name()?;
        if !(256..=65536).contains(&self.max_bytes) {
            return Err(SwapeteerError::BadConfig(
                "header.max_bytes must be between 256 and 65536".into(),
            ));
        }
        Ok(())
    }

    /// Parsed header name (lowercased by `http`).
    pub fn header_name(&self) -> Result<HeaderName> {
        HeaderName::from_bytes(self.name.as_bytes())
            .map_err(|e| SwapeteerError::BadConfig(format!("header.name {:?}: {e}", self.name)))
    }
}

fn default_header_name() -> String {
    HEADER_NAME.into()
}
fn default_max_bytes() -> usize {
    8192
}
