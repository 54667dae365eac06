//! Extended data item tags and event header flag values.
//!
//! Values mirror the `EVENT_HEADER_EXT_TYPE_*`, `EVENT_HEADER_FLAG_*` and
//! `EVENT_HEADER_PROPERTY_*` constants delivered with ETW event records.

use serde::{Deserialize, Serialize};

// =============================================================================
// Extended Data Types
// =============================================================================

/// Tag identifying the payload of an extended data item.
///
/// Unknown tags are preserved so that a newer producer never causes a
/// record to be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum ExtendedDataType {
    /// Related activity GUID (16 binary bytes).
    RelatedActivityId,
    /// Security identifier of the user.
    Sid,
    /// Terminal session identifier.
    TsId,
    /// Instance information for instance-aware events.
    InstanceInfo,
    /// Call stack, 32-bit addresses.
    StackTrace32,
    /// Call stack, 64-bit addresses.
    StackTrace64,
    /// PEBS index.
    PebsIndex,
    /// PMC counter values.
    PmcCounters,
    /// PSM key.
    PsmKey,
    /// Event key.
    EventKey,
    /// TraceLogging event schema.
    EventSchemaTl,
    /// Provider traits.
    ProvTraits,
    /// Process start key.
    ProcessStartKey,
    /// Control GUID.
    ControlGuid,
    /// QPC delta.
    QpcDelta,
    /// Container (server silo) identifier as 36 ASCII bytes of GUID text.
    ContainerId,
    /// Stack key, 32-bit.
    StackKey32,
    /// Stack key, 64-bit.
    StackKey64,
    /// A tag this crate does not know about.
    Unknown(u16),
}

impl ExtendedDataType {
    /// Returns the raw wire tag.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            ExtendedDataType::RelatedActivityId => 0x0001,
            ExtendedDataType::Sid => 0x0002,
            ExtendedDataType::TsId => 0x0003,
            ExtendedDataType::InstanceInfo => 0x0004,
            ExtendedDataType::StackTrace32 => 0x0005,
            ExtendedDataType::StackTrace64 => 0x0006,
            ExtendedDataType::PebsIndex => 0x0007,
            ExtendedDataType::PmcCounters => 0x0008,
            ExtendedDataType::PsmKey => 0x0009,
            ExtendedDataType::EventKey => 0x000A,
            ExtendedDataType::EventSchemaTl => 0x000B,
            ExtendedDataType::ProvTraits => 0x000C,
            ExtendedDataType::ProcessStartKey => 0x000D,
            ExtendedDataType::ControlGuid => 0x000E,
            ExtendedDataType::QpcDelta => 0x000F,
            ExtendedDataType::ContainerId => 0x0010,
            ExtendedDataType::StackKey32 => 0x0011,
            ExtendedDataType::StackKey64 => 0x0012,
            ExtendedDataType::Unknown(tag) => tag,
        }
    }
}

impl From<u16> for ExtendedDataType {
    fn from(tag: u16) -> Self {
        match tag {
            0x0001 => ExtendedDataType::RelatedActivityId,
            0x0002 => ExtendedDataType::Sid,
            0x0003 => ExtendedDataType::TsId,
            0x0004 => ExtendedDataType::InstanceInfo,
            0x0005 => ExtendedDataType::StackTrace32,
            0x0006 => ExtendedDataType::StackTrace64,
            0x0007 => ExtendedDataType::PebsIndex,
            0x0008 => ExtendedDataType::PmcCounters,
            0x0009 => ExtendedDataType::PsmKey,
            0x000A => ExtendedDataType::EventKey,
            0x000B => ExtendedDataType::EventSchemaTl,
            0x000C => ExtendedDataType::ProvTraits,
            0x000D => ExtendedDataType::ProcessStartKey,
            0x000E => ExtendedDataType::ControlGuid,
            0x000F => ExtendedDataType::QpcDelta,
            0x0010 => ExtendedDataType::ContainerId,
            0x0011 => ExtendedDataType::StackKey32,
            0x0012 => ExtendedDataType::StackKey64,
            other => ExtendedDataType::Unknown(other),
        }
    }
}

impl From<ExtendedDataType> for u16 {
    fn from(kind: ExtendedDataType) -> Self {
        kind.as_u16()
    }
}

impl std::fmt::Display for ExtendedDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExtendedDataType::RelatedActivityId => "related_activity_id",
            ExtendedDataType::Sid => "sid",
            ExtendedDataType::TsId => "ts_id",
            ExtendedDataType::InstanceInfo => "instance_info",
            ExtendedDataType::StackTrace32 => "stack_trace32",
            ExtendedDataType::StackTrace64 => "stack_trace64",
            ExtendedDataType::PebsIndex => "pebs_index",
            ExtendedDataType::PmcCounters => "pmc_counters",
            ExtendedDataType::PsmKey => "psm_key",
            ExtendedDataType::EventKey => "event_key",
            ExtendedDataType::EventSchemaTl => "event_schema_tl",
            ExtendedDataType::ProvTraits => "prov_traits",
            ExtendedDataType::ProcessStartKey => "process_start_key",
            ExtendedDataType::ControlGuid => "control_guid",
            ExtendedDataType::QpcDelta => "qpc_delta",
            ExtendedDataType::ContainerId => "container_id",
            ExtendedDataType::StackKey32 => "stack_key32",
            ExtendedDataType::StackKey64 => "stack_key64",
            ExtendedDataType::Unknown(tag) => return write!(f, "unknown(0x{tag:04x})"),
        };
        write!(f, "{}", s)
    }
}

// =============================================================================
// Header Flags
// =============================================================================

/// `EVENT_HEADER_FLAG_*` bits.
pub mod header_flags {
    pub const EXTENDED_INFO: u16 = 0x0001;
    pub const PRIVATE_SESSION: u16 = 0x0002;
    pub const STRING_ONLY: u16 = 0x0004;
    pub const TRACE_MESSAGE: u16 = 0x0008;
    pub const NO_CPUTIME: u16 = 0x0010;
    pub const HEADER_32_BIT: u16 = 0x0020;
    pub const HEADER_64_BIT: u16 = 0x0040;
    pub const DECODE_GUID: u16 = 0x0080;
    pub const CLASSIC_HEADER: u16 = 0x0100;
    pub const PROCESSOR_INDEX: u16 = 0x0200;
}

/// `EVENT_HEADER_PROPERTY_*` bits.
pub mod event_property {
    pub const XML: u16 = 0x0001;
    pub const FORWARDED_XML: u16 = 0x0002;
    pub const LEGACY_EVENTLOG: u16 = 0x0004;
    pub const RELOGGABLE: u16 = 0x0008;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_roundtrip() {
        for tag in 0x0001..=0x0012u16 {
            let kind = ExtendedDataType::from(tag);
            assert!(!matches!(kind, ExtendedDataType::Unknown(_)), "tag {tag}");
            assert_eq!(u16::from(kind), tag);
        }
    }

    #[test]
    fn test_container_id_tag() {
        assert_eq!(ExtendedDataType::from(16), ExtendedDataType::ContainerId);
        assert_eq!(ExtendedDataType::ContainerId.as_u16(), 16);
    }

    #[test]
    fn test_unknown_tag_preserved() {
        let kind = ExtendedDataType::from(0x0040);
        assert_eq!(kind, ExtendedDataType::Unknown(0x0040));
        assert_eq!(kind.as_u16(), 0x0040);
        assert_eq!(kind.to_string(), "unknown(0x0040)");
        assert_eq!(ExtendedDataType::from(0), ExtendedDataType::Unknown(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(ExtendedDataType::ContainerId.to_string(), "container_id");
        assert_eq!(
            ExtendedDataType::RelatedActivityId.to_string(),
            "related_activity_id"
        );
    }

    #[test]
    fn test_serializes_as_tag() {
        assert_eq!(
            serde_json::to_string(&ExtendedDataType::ContainerId).unwrap(),
            "16"
        );
        let parsed: ExtendedDataType = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, ExtendedDataType::RelatedActivityId);
    }
}
