//! Header collection: the ordered envelopes carried by one response.
//!
//! The client loader parses the `X-Swapeteer` header as a JSON array and
//! applies each entry in order, so the collection never reorders, dedups or
//! filters what the caller hands it.
//!
//! Header values are read by browsers as Latin-1, so the encoded JSON is
//! kept pure ASCII: every non-ASCII char goes out as a `\uXXXX` escape.

use std::io;

use bytes::Bytes;
use serde::Serialize;
use serde_json::ser::Formatter;

use crate::envelope::Envelope;
use crate::error::{Result, SwapeteerError};

/// Response header read by the client loader.
pub const HEADER_NAME: &str = "X-Swapeteer";

/// Ordered envelopes for one response (serialized as a JSON array).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HeaderCollection(Vec<Envelope>);

/// Collect envelopes into one header value, keeping their order.
pub fn build_header_collection<I>(envelopes: I) -> HeaderCollection
where
    I: IntoIterator<Item = Envelope>,
{
    envelopes.into_iter().collect()
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an envelope after the existing ones.
    pub fn push(&mut self, envelope: impl Into<Envelope>) {
        self.0.push(envelope.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Envelope> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Envelope] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Envelope> {
        self.0
    }

    /// Compact, ASCII-only JSON for the header value.
    pub fn to_header_value(&self) -> Result<String> {
        let mut buf = Vec::with_capacity(128);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
        self.serialize(&mut ser)?;
        let s = String::from_utf8(buf).map_err(|e| SwapeteerError::Encode(e.to_string()))?;
        tracing::debug!(count = self.0.len(), bytes = s.len(), "header collection encoded");
        Ok(s)
    }

    /// Same as [`to_header_value`](Self::to_header_value), as shared bytes.
    pub fn to_header_bytes(&self) -> Result<Bytes> {
        Ok(Bytes::from(self.to_header_value()?))
    }
}

impl FromIterator<Envelope> for HeaderCollection {
    fn from_iter<T: IntoIterator<Item = Envelope>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Envelope>> for HeaderCollection {
    fn from(v: Vec<Envelope>) -> Self {
        Self(v)
    }
}

impl IntoIterator for HeaderCollection {
    type Item = Envelope;
    type IntoIter = std::vec::IntoIter<Envelope>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HeaderCollection {
    type Item = &'a Envelope;
    type IntoIter = std::slice::Iter<'a, Envelope>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Extend<Envelope> for HeaderCollection {
    fn extend<T: IntoIterator<Item = Envelope>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

/// Compact JSON formatter that escapes non-ASCII chars as UTF-16 `\uXXXX`.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}
