//! Shared error type across swapeteer crates.

use thiserror::Error;

/// Stable error codes, suitable for logs and error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Payload could not be serialized.
    Encode,
    /// Encoded header exceeds the configured limit.
    HeaderTooLarge,
    /// Header name or value rejected by the HTTP layer.
    InvalidHeader,
    /// Configuration failed parsing or validation.
    BadConfig,
}

impl ErrorCode {
    /// String representation used in logs and responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Encode => "ENCODE",
            ErrorCode::HeaderTooLarge => "HEADER_TOO_LARGE",
            ErrorCode::InvalidHeader => "INVALID_HEADER",
            ErrorCode::BadConfig => "BAD_CONFIG",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SwapeteerError>;

/// Unified error type used by core and adapters.
#[derive(Debug, Error)]
pub enum SwapeteerError {
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("header too large: {len} bytes (max {max})")]
    HeaderTooLarge { len: usize, max: usize },
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    #[error("bad config: {0}")]
    BadConfig(String),
}

impl SwapeteerError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SwapeteerError::Encode(_) => ErrorCode::Encode,
            SwapeteerError::HeaderTooLarge { .. } => ErrorCode::HeaderTooLarge,
            SwapeteerError::InvalidHeader(_) => ErrorCode::InvalidHeader,
            SwapeteerError::BadConfig(_) => ErrorCode::BadConfig,
        }
    }
}

impl From<serde_json::Error> for SwapeteerError {
    fn from(e: serde_json::Error) -> Self {
        SwapeteerError::Encode(e.to_string())
    }
}
