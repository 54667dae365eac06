//! Decoding of GUID-valued extended data items.
//!
//! The container id item carries GUID text with no terminator and no braces:
//!
//! ```text
//! ext_type = 0x0010, data_size = 36
//! 00000000-0000-0000-0000-000000000000
//! ```
//!
//! The related activity id item carries the 16-byte binary GUID.
//!
//! Both are copied into a fixed-size stack buffer after their declared length
//! is checked, so decoding never allocates unless it fails.

use etw_guid::{parser, Guid, GuidError};
use tracing::{debug, trace};

use crate::{ExtendedDataItem, ExtendedDataType, ExtractionError};

/// Size of a container id payload: 32 hex digits and 4 hyphens.
pub const CONTAINER_ID_DATA_LENGTH: usize = parser::CANONICAL_LENGTH;

/// Size of a related activity id payload.
pub const RELATED_ACTIVITY_ID_DATA_LENGTH: usize = 16;

/// Returns the first item with the given tag, along with its index.
pub fn find_extended_data<'a, 'b>(
    items: &'b [ExtendedDataItem<'a>],
    kind: ExtendedDataType,
) -> Option<(usize, &'b ExtendedDataItem<'a>)> {
    items
        .iter()
        .enumerate()
        .find(|(_, item)| item.kind() == kind)
}

/// Extracts the container id from a record's extended data.
///
/// Returns `Ok(None)` when no item is tagged as a container id. Only the
/// first such item is consulted. A present item with the wrong length or
/// malformed text is an error.
pub fn extract_container_id(
    items: &[ExtendedDataItem<'_>],
) -> Result<Option<Guid>, ExtractionError> {
    let Some((index, item)) = find_extended_data(items, ExtendedDataType::ContainerId) else {
        trace!(count = items.len(), "no container id in extended data");
        return Ok(None);
    };

    let data = item.data();
    debug!(index, ext_type = %item.kind(), len = data.len(), "decoding container id");

    let buffer: [u8; CONTAINER_ID_DATA_LENGTH] = data.try_into().map_err(|_| {
        ExtractionError::text(
            item.kind(),
            data,
            GuidError::Length {
                expected: CONTAINER_ID_DATA_LENGTH,
                actual: data.len(),
            },
        )
    })?;

    parser::parse_canonical(&buffer)
        .map(Some)
        .map_err(|source| ExtractionError::text(item.kind(), &buffer, source))
}

/// Extracts the related activity id from a record's extended data.
///
/// Same contract as [`extract_container_id`], for the 16-byte binary payload.
pub fn extract_related_activity_id(
    items: &[ExtendedDataItem<'_>],
) -> Result<Option<Guid>, ExtractionError> {
    let Some((index, item)) = find_extended_data(items, ExtendedDataType::RelatedActivityId)
    else {
        return Ok(None);
    };

    let data = item.data();
    debug!(
        index,
        ext_type = %item.kind(),
        len = data.len(),
        "decoding related activity id"
    );

    let bytes: [u8; RELATED_ACTIVITY_ID_DATA_LENGTH] = data.try_into().map_err(|_| {
        ExtractionError::binary(
            item.kind(),
            data,
            GuidError::Length {
                expected: RELATED_ACTIVITY_ID_DATA_LENGTH,
                actual: data.len(),
            },
        )
    })?;

    Ok(Some(Guid::from_bytes(bytes)))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use etw_guid::FormatReason;
    use proptest::prelude::*;

    const CONTAINER: &[u8] = b"00000000-0000-0000-0000-000000000001";

    fn container_item(data: &[u8]) -> ExtendedDataItem<'_> {
        ExtendedDataItem::new(ExtendedDataType::ContainerId, data)
    }

    #[test]
    fn test_no_items() {
        assert_eq!(extract_container_id(&[]), Ok(None));
    }

    #[test]
    fn test_no_container_item() {
        let sid = [1u8, 1, 0, 0, 0, 0, 0, 5, 18, 0, 0, 0];
        let items = [
            ExtendedDataItem::new(ExtendedDataType::Sid, &sid),
            ExtendedDataItem::new(ExtendedDataType::Unknown(0x40), CONTAINER),
        ];
        assert_eq!(extract_container_id(&items), Ok(None));
    }

    #[test]
    fn test_container_found() {
        let items = [container_item(CONTAINER)];
        let guid = extract_container_id(&items).unwrap().unwrap();

        let bytes = guid.into_bytes();
        assert_eq!(bytes[15], 0x01);
        assert!(bytes[..15].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_container_found_after_other_items() {
        let ts_id = 7u32.to_le_bytes();
        let text = b"2C6B0A5E-1F5B-4F4E-9B4B-3D3F6E1A2B3C";
        let items = [
            ExtendedDataItem::new(ExtendedDataType::TsId, &ts_id),
            container_item(text),
        ];
        let guid = extract_container_id(&items).unwrap().unwrap();
        assert_eq!(guid.to_string(), "2c6b0a5e-1f5b-4f4e-9b4b-3d3f6e1a2b3c");
    }

    #[test]
    fn test_first_match_wins() {
        let second = b"ffffffff-ffff-ffff-ffff-ffffffffffff";
        let items = [container_item(CONTAINER), container_item(second)];
        let guid = extract_container_id(&items).unwrap().unwrap();
        assert_eq!(guid.to_string(), "00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn test_first_match_wins_even_if_malformed() {
        let bad = b"00000000-0000-0000-0000-00000000000g";
        let items = [container_item(bad), container_item(CONTAINER)];
        assert!(extract_container_id(&items).unwrap_err().is_format_error());
    }

    #[test]
    fn test_non_hex_is_format_error() {
        let bad = b"00000000-0000-0000-0000-00000000z001";
        let items = [container_item(bad)];
        let err = extract_container_id(&items).unwrap_err();

        assert_eq!(err.ext_type, ExtendedDataType::ContainerId);
        assert_eq!(err.raw, "00000000-0000-0000-0000-00000000z001");
        assert_eq!(
            err.source,
            GuidError::Format {
                reason: FormatReason::NonHexDigit
            }
        );
    }

    #[test]
    fn test_braced_payload_is_length_error() {
        let braced = b"{00000000-0000-0000-0000-000000000001}";
        let items = [container_item(braced)];
        let err = extract_container_id(&items).unwrap_err();

        assert!(err.is_length_error());
        assert_eq!(
            err.source,
            GuidError::Length {
                expected: 36,
                actual: 38
            }
        );
    }

    #[test]
    fn test_does_not_read_past_declared_length() {
        // The declared region stops one byte short; the byte after it is valid.
        let backing = b"00000000-0000-0000-0000-000000000001";
        let items = [container_item(&backing[..35])];
        assert!(extract_container_id(&items).unwrap_err().is_length_error());
    }

    #[test]
    fn test_raw_capture_is_bounded() {
        let huge = vec![b'a'; 4096];
        let items = [container_item(&huge)];
        let err = extract_container_id(&items).unwrap_err();
        assert_eq!(err.raw.len(), crate::MAX_RAW_CAPTURE);
    }

    #[test]
    fn test_error_message_mentions_data() {
        let bad = b"00000000x0000-0000-0000-000000000001";
        let items = [container_item(bad)];
        let message = extract_container_id(&items).unwrap_err().to_string();
        assert!(message.contains("container_id"));
        assert!(message.contains("00000000x0000"));
    }

    #[test]
    fn test_related_activity_id() {
        let guid: Guid = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        let bytes = guid.into_bytes();
        let items = [ExtendedDataItem::new(
            ExtendedDataType::RelatedActivityId,
            &bytes,
        )];
        assert_eq!(extract_related_activity_id(&items), Ok(Some(guid)));
        assert_eq!(extract_related_activity_id(&[]), Ok(None));
    }

    #[test]
    fn test_related_activity_id_wrong_length() {
        let short = [0xabu8; 12];
        let items = [ExtendedDataItem::new(
            ExtendedDataType::RelatedActivityId,
            &short,
        )];
        let err = extract_related_activity_id(&items).unwrap_err();
        assert!(err.is_length_error());
        assert_eq!(err.raw, "abababababababababababab");
    }

    proptest! {
        #[test]
        fn prop_canonical_payload_roundtrip(bytes in any::<[u8; 16]>()) {
            let guid = Guid::from_bytes(bytes);
            let text = guid.to_canonical_string();
            let items = [container_item(text.as_bytes())];
            prop_assert_eq!(extract_container_id(&items), Ok(Some(guid)));
        }

        #[test]
        fn prop_arbitrary_payload_never_panics(data in proptest::collection::vec(any::<u8>(), 0..64)) {
            let items = [container_item(&data)];
            match extract_container_id(&items) {
                Ok(Some(guid)) => {
                    prop_assert_eq!(data.len(), CONTAINER_ID_DATA_LENGTH);
                    prop_assert_eq!(
                        guid.to_canonical_string(),
                        String::from_utf8_lossy(&data).to_ascii_lowercase()
                    );
                }
                Ok(None) => prop_assert!(false, "container item was present"),
                Err(err) => prop_assert!(err.is_length_error() || err.is_format_error()),
            }
        }
    }
}
