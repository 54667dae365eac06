//! Error types for extended data extraction.

use etw_guid::GuidError;
use thiserror::Error;

use crate::ExtendedDataType;

/// Upper bound on how much of a bad payload is kept for diagnostics.
pub const MAX_RAW_CAPTURE: usize = 128;

/// An extended data item was present but could not be decoded.
///
/// Carries the item tag and a printable copy of the offending payload so the
/// caller can log it without holding on to the event buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to decode {ext_type} extended data: {source} (data: \"{raw}\")")]
pub struct ExtractionError {
    /// Tag of the item that failed to decode.
    pub ext_type: ExtendedDataType,

    /// The payload with non-printable bytes escaped (`\xff`), at most
    /// [`MAX_RAW_CAPTURE`] bytes long.
    pub raw: String,

    /// The underlying decode failure.
    pub source: GuidError,
}

impl ExtractionError {
    /// Builds an error for a payload that is expected to be ASCII text.
    pub(crate) fn text(ext_type: ExtendedDataType, data: &[u8], source: GuidError) -> Self {
        Self {
            ext_type,
            raw: escape_bounded(data),
            source,
        }
    }

    /// Builds an error for a binary payload, captured as hex.
    pub(crate) fn binary(ext_type: ExtendedDataType, data: &[u8], source: GuidError) -> Self {
        let captured = &data[..data.len().min(MAX_RAW_CAPTURE / 2)];
        Self {
            ext_type,
            raw: hex::encode(captured),
            source,
        }
    }

    /// Returns true if the payload had the wrong length.
    pub fn is_length_error(&self) -> bool {
        self.source.is_length_error()
    }

    /// Returns true if the payload was the right length but malformed.
    pub fn is_format_error(&self) -> bool {
        self.source.is_format_error()
    }
}

/// Escapes `data` byte by byte, stopping before an escape would overflow
/// [`MAX_RAW_CAPTURE`].
fn escape_bounded(data: &[u8]) -> String {
    let mut raw = String::with_capacity(MAX_RAW_CAPTURE);
    for byte in data {
        let escaped = byte.escape_ascii();
        if raw.len() + escaped.len() > MAX_RAW_CAPTURE {
            break;
        }
        raw.extend(escaped.map(char::from));
    }
    raw
}
