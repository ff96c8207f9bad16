//! Envelope: one `{type, data}` entry of the `X-Swapeteer` header.
//!
//! `type` is an open string. The known kinds have typed payloads; anything
//! else travels as plain JSON through [`Payload::Custom`].

use serde::Serialize;

use crate::alert::Alert;
use crate::error::Result;
use crate::swap::SwapDirective;

/// Envelope kind for swap directives.
pub const KIND_SWAP: &str = "swap";
/// Envelope kind for alert directives.
pub const KIND_ALERT: &str = "alert";

/// Tagged directive (`{"type": ..., "data": ...}` on the wire).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// Payload kind (field name is `type` in JSON).
    #[serde(rename = "type")]
    kind: String,
    data: Payload,
}

/// Kind-specific payload. Serialized without a variant tag; the envelope's
/// `type` carries that information.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Swap(SwapDirective),
    Alert(Alert),
    Custom(serde_json::Value),
}

impl Envelope {
    /// Wrap `data` under an arbitrary kind. The kind is not checked against
    /// the payload.
    pub fn new(kind: impl Into<String>, data: impl Into<Payload>) -> Self {
        let kind = kind.into();
        tracing::debug!(kind = %kind, "envelope built");
        Self {
            kind,
            data: data.into(),
        }
    }

    /// Wrap any serializable value as a custom payload.
    pub fn custom<T: Serialize + ?Sized>(kind: impl Into<String>, data: &T) -> Result<Self> {
        let value = serde_json::to_value(data)?;
        Ok(Self::new(kind, Payload::Custom(value)))
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn data(&self) -> &Payload {
        &self.data
    }

    pub fn into_data(self) -> Payload {
        self.data
    }
}

impl From<SwapDirective> for Payload {
    fn from(v: SwapDirective) -> Self {
        Payload::Swap(v)
    }
}

impl From<Alert> for Payload {
    fn from(v: Alert) -> Self {
        Payload::Alert(v)
    }
}

impl From<serde_json::Value> for Payload {
    fn from(v: serde_json::Value) -> Self {
        Payload::Custom(v)
    }
}
