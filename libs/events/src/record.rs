//! Event record view - header metadata plus borrowed payload regions.

use chrono::{DateTime, Utc};
use etw_guid::{ActivityId, ContainerId, ProviderId};
use serde::{Deserialize, Serialize};

use crate::types::{event_property, header_flags};
use crate::{extract, ExtendedDataType, ExtractionError};

/// Number of 100ns FILETIME ticks between 1601-01-01 and 1970-01-01.
const FILETIME_UNIX_EPOCH: i64 = 116_444_736_000_000_000;

/// FILETIME ticks per second.
const FILETIME_TICKS_PER_SECOND: i64 = 10_000_000;

/// One tagged region of a record's extended data.
///
/// Borrows the payload from the caller's buffer; nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedDataItem<'a> {
    kind: ExtendedDataType,
    data: &'a [u8],
}

impl<'a> ExtendedDataItem<'a> {
    /// Creates an item from a tag and its payload.
    pub const fn new(kind: ExtendedDataType, data: &'a [u8]) -> Self {
        Self { kind, data }
    }

    /// Creates an item from a raw wire tag and its payload.
    pub fn from_raw(ext_type: u16, data: &'a [u8]) -> Self {
        Self::new(ExtendedDataType::from(ext_type), data)
    }

    /// The item's tag.
    pub const fn kind(&self) -> ExtendedDataType {
        self.kind
    }

    /// The raw wire tag.
    pub const fn ext_type(&self) -> u16 {
        self.kind.as_u16()
    }

    /// The payload, exactly as long as its declared size.
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The declared payload size.
    pub const fn data_size(&self) -> usize {
        self.data.len()
    }
}

/// Event descriptor fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDescriptor {
    pub id: u16,
    pub version: u8,
    pub channel: u8,
    pub level: u8,
    pub opcode: u8,
    pub task: u16,
    pub keyword: u64,
}

/// Fixed header of an event record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventHeader {
    /// `EVENT_HEADER_FLAG_*` bits.
    pub flags: u16,

    /// `EVENT_HEADER_PROPERTY_*` bits.
    pub event_property: u16,

    /// Thread that raised the event.
    pub thread_id: u32,

    /// Process that raised the event.
    pub process_id: u32,

    /// Raw timestamp in FILETIME ticks (100ns since 1601-01-01 UTC).
    pub timestamp: i64,

    /// Provider that raised the event.
    pub provider_id: ProviderId,

    /// Event descriptor.
    pub descriptor: EventDescriptor,

    /// Activity the event belongs to.
    pub activity_id: ActivityId,
}

impl EventHeader {
    /// Converts the FILETIME timestamp to UTC.
    ///
    /// Returns `None` if the value is outside the representable range.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let ticks = self.timestamp.checked_sub(FILETIME_UNIX_EPOCH)?;
        let secs = ticks.div_euclid(FILETIME_TICKS_PER_SECOND);
        let nanos = ticks.rem_euclid(FILETIME_TICKS_PER_SECOND) * 100;
        DateTime::from_timestamp(secs, u32::try_from(nanos).ok()?)
    }

    /// Returns true if the producer flagged the record as carrying extended data.
    pub fn has_extended_info(&self) -> bool {
        self.flags & header_flags::EXTENDED_INFO != 0
    }

    /// Returns true if the user data is a single null-terminated string.
    pub fn is_string_only(&self) -> bool {
        self.flags & header_flags::STRING_ONLY != 0
    }

    /// Returns true if the event data is XML.
    pub fn is_xml(&self) -> bool {
        self.event_property & event_property::XML != 0
    }

    /// Returns true if the event data is forwarded XML.
    pub fn is_forwarded_xml(&self) -> bool {
        self.event_property & event_property::FORWARDED_XML != 0
    }

    /// Returns true if the event was logged by a legacy event log provider.
    pub fn is_legacy_eventlog(&self) -> bool {
        self.event_property & event_property::LEGACY_EVENTLOG != 0
    }

    /// Returns true if the event can be relogged.
    pub fn is_reloggable(&self) -> bool {
        self.event_property & event_property::RELOGGABLE != 0
    }
}

/// A borrowed view of a delivered event record.
///
/// The record never outlives the buffer it was built over; owned values are
/// only produced on request.
#[derive(Debug, Clone, Copy)]
pub struct EventRecord<'a> {
    header: EventHeader,
    user_data: &'a [u8],
    extended_data: &'a [ExtendedDataItem<'a>],
}

impl<'a> EventRecord<'a> {
    /// Creates a new event record builder.
    pub fn builder() -> EventRecordBuilder<'a> {
        EventRecordBuilder::new()
    }

    /// The fixed header.
    pub fn header(&self) -> &EventHeader {
        &self.header
    }

    /// The user data region.
    pub fn user_data(&self) -> &'a [u8] {
        self.user_data
    }

    /// Size of the user data region in bytes.
    pub fn user_data_len(&self) -> usize {
        self.user_data.len()
    }

    /// Copies the user data into an owned buffer.
    pub fn copy_user_data(&self) -> Vec<u8> {
        self.user_data.to_vec()
    }

    /// The extended data items, in delivery order.
    pub fn extended_data(&self) -> &'a [ExtendedDataItem<'a>] {
        self.extended_data
    }

    /// The container the event was raised from, if the record says.
    ///
    /// Decodes on every call; call once per event.
    pub fn container_id(&self) -> Result<Option<ContainerId>, ExtractionError> {
        extract::extract_container_id(self.extended_data)
            .map(|guid| guid.map(ContainerId::from_guid))
    }

    /// The related activity, if the record carries one.
    pub fn related_activity_id(&self) -> Result<Option<ActivityId>, ExtractionError> {
        extract::extract_related_activity_id(self.extended_data)
            .map(|guid| guid.map(ActivityId::from_guid))
    }
}

/// Builder for constructing event records over caller-owned buffers.
#[derive(Debug, Default)]
pub struct EventRecordBuilder<'a> {
    header: EventHeader,
    user_data: &'a [u8],
    extended_data: &'a [ExtendedDataItem<'a>],
}

impl<'a> EventRecordBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: EventHeader) -> Self {
        self.header = header;
        self
    }

    pub fn user_data(mut self, user_data: &'a [u8]) -> Self {
        self.user_data = user_data;
        self
    }

    /// Sets the extended data items.
    ///
    /// Also sets `EVENT_HEADER_FLAG_EXTENDED_INFO` when the slice is non-empty.
    pub fn extended_data(mut self, items: &'a [ExtendedDataItem<'a>]) -> Self {
        self.extended_data = items;
        self
    }

    /// Builds the event record.
    pub fn build(self) -> EventRecord<'a> {
        let mut header = self.header;
        if !self.extended_data.is_empty() {
            header.flags |= header_flags::EXTENDED_INFO;
        }

        EventRecord {
            header,
            user_data: self.user_data,
            extended_data: self.extended_data,
        }
    }
}
