//! # etw-events
//!
//! A borrowed view of ETW event records and decoding of their extended data.
//!
//! ## Design Principles
//!
//! - Records borrow the delivered buffers; nothing is copied unless asked for
//! - Extended data is untrusted: every declared length is re-checked before
//!   a payload is decoded
//! - A missing item is `Ok(None)`; only a present but malformed item is an error
//! - Decoding is synchronous, bounded, and allocation-free on success
//!
//! ## Extended Data
//!
//! Each record carries zero or more tagged items (`ext_type`, payload). This
//! crate decodes the two that hold GUIDs:
//! - Container id (`0x0010`): 36 bytes of unterminated GUID text
//! - Related activity id (`0x0001`): 16 bytes of binary GUID

mod error;
pub mod extract;
mod record;
mod types;

pub use error::{ExtractionError, MAX_RAW_CAPTURE};
pub use extract::{extract_container_id, extract_related_activity_id, find_extended_data};
pub use record::*;
pub use types::*;
