//! JSON description of a captured event record.
//!
//! ```json
//! {
//!   "header": { "process_id": 4, "provider_id": "22fb2cd6-0e7b-422b-a0c7-2fad1fd0e716" },
//!   "user_data": "hex:0a0b",
//!   "extended_data": [
//!     { "ext_type": 16, "data": "00000000-0000-0000-0000-000000000001" }
//!   ]
//! }
//! ```
//!
//! Payloads are ASCII text, or raw bytes when prefixed with `hex:`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use etw_events::{EventHeader, EventRecord, ExtendedDataItem};
use serde::Deserialize;

const HEX_PREFIX: &str = "hex:";

/// Payload bytes decoded from their JSON string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Payload(Vec<u8>);

impl Payload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<String> for Payload {
    type Error = hex::FromHexError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.strip_prefix(HEX_PREFIX) {
            Some(digits) => hex::decode(digits).map(Payload),
            None => Ok(Payload(s.into_bytes())),
        }
    }
}

/// One extended data item as written in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtendedDataEntry {
    pub ext_type: u16,
    #[serde(default)]
    pub data: Payload,
}

/// An event record as written in the file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecordFile {
    pub header: EventHeader,
    pub user_data: Payload,
    pub extended_data: Vec<ExtendedDataEntry>,
}

impl RecordFile {
    /// Read and parse a record file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read record from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse record from {:?}", path))
    }

    /// Borrowed item views over the decoded payloads.
    pub fn items(&self) -> Vec<ExtendedDataItem<'_>> {
        self.extended_data
            .iter()
            .map(|entry| ExtendedDataItem::from_raw(entry.ext_type, entry.data.as_bytes()))
            .collect()
    }

    /// A record view over this file's buffers and the given items.
    pub fn record<'a>(&'a self, items: &'a [ExtendedDataItem<'a>]) -> EventRecord<'a> {
        EventRecord::builder()
            .header(self.header)
            .user_data(self.user_data.as_bytes())
            .extended_data(items)
            .build()
    }
}
