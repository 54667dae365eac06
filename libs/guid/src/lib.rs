//! # etw-guid
//!
//! GUID value type and an allocation-free parser for its canonical text form.
//!
//! ## Design Principles
//!
//! - A GUID is a 16-byte `Copy` value; equality and ordering are byte-wise
//! - The byte layout is the Windows `GUID` structure, so values can be
//!   exchanged with anything that expects that layout
//! - Parsing is strict, single pass, and never allocates
//! - Text output is the lowercase canonical form and round-trips exactly
//!
//! ## Text Format
//!
//! `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`: exactly 36 ASCII bytes, hex digits
//! in either case, hyphens at offsets 8, 13, 18 and 23.
//!
//! ## Binary Layout
//!
//! | Bytes | Field | Encoding |
//! |-------|-------|----------|
//! | 0..4  | data1 | little-endian `u32` |
//! | 4..6  | data2 | little-endian `u16` |
//! | 6..8  | data3 | little-endian `u16` |
//! | 8..16 | data4 | bytes in text order |

mod error;
mod guid;
mod macros;
pub mod parser;
mod types;

pub use error::{FormatReason, GuidError};
pub use guid::Guid;
pub use types::*;

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;
