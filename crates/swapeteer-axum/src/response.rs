//! `IntoResponseParts` for envelope collections.
//!
//! An empty collection writes no header. Encoding failures and oversized
//! values turn the whole response into a 500 rather than shipping a
//! truncated header the client cannot parse.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, IntoResponseParts, Response, ResponseParts};
use swapeteer_core::error::{Result, SwapeteerError};
use swapeteer_core::HeaderCollection;

use crate::config::{HeaderSection, SwapeteerConfig};

/// Response part carrying the envelopes for one response.
#[derive(Debug, Clone)]
pub struct Swapeteer {
    envelopes: HeaderCollection,
    header: HeaderSection,
}

impl Swapeteer {
    /// Use the default header name and size limit.
    pub fn new(envelopes: impl Into<HeaderCollection>) -> Self {
        Self {
            envelopes: envelopes.into(),
            header: HeaderSection::default(),
        }
    }

    pub fn with_config(envelopes: impl Into<HeaderCollection>, cfg: &SwapeteerConfig) -> Self {
        Self {
            envelopes: envelopes.into(),
            header: cfg.header.clone(),
        }
    }

    pub fn envelopes(&self) -> &HeaderCollection {
        &self.envelopes
    }

    /// Encode into a header pair, or `None` when there is nothing to send.
    pub fn encode(&self) -> Result<Option<(HeaderName, HeaderValue)>> {
        if self.envelopes.is_empty() {
            return Ok(None);
        }

        let name = self
            .header
            .header_name()
            .map_err(|e| SwapeteerError::InvalidHeader(e.to_string()))?;
        let bytes = self.envelopes.to_header_bytes()?;
        if bytes.len() > self.header.max_bytes {
            return Err(SwapeteerError::HeaderTooLarge {
                len: bytes.len(),
                max: self.header.max_bytes,
            });
        }
        let value = HeaderValue::from_maybe_shared(bytes)
            .map_err(|e| SwapeteerError::InvalidHeader(e.to_string()))?;

        Ok(Some((name, value)))
    }
}

impl From<HeaderCollection> for Swapeteer {
    fn from(envelopes: HeaderCollection) -> Self {
        Self::new(envelopes)
    }
}

impl IntoResponseParts for Swapeteer {
    type Error = SwapeteerRejection;

    fn into_response_parts(self, mut res: ResponseParts) -> std::result::Result<ResponseParts, Self::Error> {
        match self.encode() {
            Ok(Some((name, value))) => {
                res.headers_mut().insert(name, value);
                Ok(res)
            }
            Ok(None) => Ok(res),
            Err(e) => {
                tracing::warn!(code = e.code().as_str(), error = %e, "swapeteer header rejected");
                Err(SwapeteerRejection(e))
            }
        }
    }
}

/// Error response produced when the header cannot be written.
#[derive(Debug)]
pub struct SwapeteerRejection(pub SwapeteerError);

impl IntoResponse for SwapeteerRejection {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.code().as_str()).into_response()
    }
}
