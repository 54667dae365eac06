//! Error types for GUID parsing.

use thiserror::Error;

/// The kind of defect found in otherwise correctly sized GUID text.
///
/// Deliberately coarse: a failure never says which field was bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatReason {
    /// A hyphen was missing at one of the four delimiter offsets.
    MissingDelimiter,
    /// A character outside `[0-9A-Fa-f]` appeared where a hex digit belongs.
    NonHexDigit,
}

impl std::fmt::Display for FormatReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatReason::MissingDelimiter => write!(f, "missing a hyphen where one was expected"),
            FormatReason::NonHexDigit => {
                write!(f, "non-hex digit where a hex digit was expected")
            }
        }
    }
}

/// Errors that can occur when decoding GUID text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuidError {
    /// The input has the wrong number of bytes.
    #[error("input data has incorrect length: expected {expected}, got {actual}")]
    Length { expected: usize, actual: usize },

    /// The input is the right length but is not well formed.
    #[error("invalid GUID format: {reason}")]
    Format { reason: FormatReason },
}

impl GuidError {
    pub(crate) const fn length(expected: usize, actual: usize) -> Self {
        GuidError::Length { expected, actual }
    }

    pub(crate) const fn non_hex() -> Self {
        GuidError::Format {
            reason: FormatReason::NonHexDigit,
        }
    }

    pub(crate) const fn missing_delimiter() -> Self {
        GuidError::Format {
            reason: FormatReason::MissingDelimiter,
        }
    }

    /// Returns true if this error indicates a length mismatch.
    pub fn is_length_error(&self) -> bool {
        matches!(self, GuidError::Length { .. })
    }

    /// Returns true if this error indicates malformed content.
    pub fn is_format_error(&self) -> bool {
        matches!(self, GuidError::Format { .. })
    }
}
