//! The 128-bit GUID value type.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::{parser, GuidError};

/// A 128-bit globally unique identifier.
///
/// Stored as the 16-byte layout of the Windows `GUID` structure: `data1`,
/// `data2` and `data3` little-endian, followed by the eight `data4` bytes in
/// the order they appear in the text. Equality and ordering compare those 16
/// bytes lexicographically.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Guid([u8; 16]);

impl Guid {
    /// The all-zero GUID.
    pub const NIL: Self = Self([0; 16]);

    /// Creates a GUID from its 16-byte memory layout.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a GUID from its four fields.
    #[must_use]
    pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        let d1 = data1.to_le_bytes();
        let d2 = data2.to_le_bytes();
        let d3 = data3.to_le_bytes();

        Self([
            d1[0], d1[1], d1[2], d1[3], d2[0], d2[1], d3[0], d3[1], data4[0], data4[1], data4[2],
            data4[3], data4[4], data4[5], data4[6], data4[7],
        ])
    }

    /// Parses the canonical `8-4-4-4-12` text form.
    ///
    /// Hex digits may be in either case. Braces are not accepted.
    pub fn from_canonical_string(text: &str) -> Result<Self, GuidError> {
        parser::parse(text.as_bytes())
    }

    /// Generates a new random GUID from the platform's secure random source.
    ///
    /// # Panics
    ///
    /// Panics if the platform entropy source is unavailable.
    #[must_use]
    pub fn random() -> Self {
        Self::from(Uuid::new_v4())
    }

    /// Returns the first field.
    #[must_use]
    pub const fn data1(&self) -> u32 {
        let b = &self.0;
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
    }

    /// Returns the second field.
    #[must_use]
    pub const fn data2(&self) -> u16 {
        u16::from_le_bytes([self.0[4], self.0[5]])
    }

    /// Returns the third field.
    #[must_use]
    pub const fn data3(&self) -> u16 {
        u16::from_le_bytes([self.0[6], self.0[7]])
    }

    /// Returns the trailing eight bytes.
    #[must_use]
    pub const fn data4(&self) -> [u8; 8] {
        let b = &self.0;
        [b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]]
    }

    /// Returns the 16-byte memory layout.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the GUID, returning its 16-byte memory layout.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns true if every byte is zero.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0 == [0; 16]
    }

    /// Formats the GUID as lowercase `8-4-4-4-12` text.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Formats the GUID as uppercase text wrapped in braces, the form used by
    /// the registry and COM.
    #[must_use]
    pub fn to_braced_string(&self) -> String {
        format!("{{{self:X}}}")
    }

    fn write_canonical(&self, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
        write_field(f, self.data1(), 8, upper)?;
        f.write_str("-")?;
        write_field(f, self.data2().into(), 4, upper)?;
        f.write_str("-")?;
        write_field(f, self.data3().into(), 4, upper)?;
        f.write_str("-")?;
        for (i, &byte) in self.data4().iter().enumerate() {
            if i == 2 {
                f.write_str("-")?;
            }
            write_field(f, byte.into(), 2, upper)?;
        }
        Ok(())
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, value: u32, width: usize, upper: bool) -> fmt::Result {
    if upper {
        write!(f, "{value:0width$X}")
    } else {
        write!(f, "{value:0width$x}")
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_canonical(f, false)
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guid").field(&format_args!("{self}")).finish()
    }
}

impl fmt::LowerHex for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_canonical(f, false)
    }
}

impl fmt::UpperHex for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_canonical(f, true)
    }
}

impl FromStr for Guid {
    type Err = GuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical_string(s)
    }
}

impl TryFrom<&str> for Guid {
    type Error = GuidError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_canonical_string(s)
    }
}

impl From<[u8; 16]> for Guid {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Guid> for [u8; 16] {
    fn from(guid: Guid) -> Self {
        guid.0
    }
}

impl AsRef<[u8]> for Guid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// `uuid` keeps its fields big-endian, so the conversion swaps the three
/// leading fields; both types then print the same text.
impl From<Uuid> for Guid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_bytes_le())
    }
}

impl From<Guid> for Uuid {
    fn from(guid: Guid) -> Self {
        Uuid::from_bytes_le(guid.0)
    }
}

impl serde::Serialize for Guid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_canonical_string())
    }
}

impl<'de> serde::Deserialize<'de> for Guid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_canonical_string(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_fields_roundtrip() {
        let guid = Guid::from_fields(
            0x550e_8400,
            0xe29b,
            0x41d4,
            [0xa7, 0x16, 0x44, 0x66, 0x55, 0x44, 0x00, 0x00],
        );
        assert_eq!(guid.to_string(), SAMPLE);
        assert_eq!(guid, SAMPLE.parse().unwrap());
    }

    #[test]
    fn test_from_bytes_is_layout() {
        let bytes = [
            0x00, 0x84, 0x0e, 0x55, 0x9b, 0xe2, 0xd4, 0x41, 0xa7, 0x16, 0x44, 0x66, 0x55, 0x44,
            0x00, 0x00,
        ];
        let guid = Guid::from_bytes(bytes);
        assert_eq!(guid.as_bytes(), &bytes);
        assert_eq!(guid.to_canonical_string(), SAMPLE);
    }

    #[test]
    fn test_uppercase_input_prints_lowercase() {
        let guid: Guid = SAMPLE.to_ascii_uppercase().parse().unwrap();
        assert_eq!(guid.to_string(), SAMPLE);
        assert_eq!(format!("{guid:X}"), SAMPLE.to_ascii_uppercase());
    }

    #[test]
    fn test_fields_are_zero_padded_in_both_cases() {
        let guid = Guid::from_fields(0x0000_00ab, 0x000c, 0x0d0e, [0, 0xf1, 2, 3, 4, 5, 6, 0x7a]);
        assert_eq!(guid.to_string(), "000000ab-000c-0d0e-00f1-02030405067a");
        assert_eq!(format!("{guid:X}"), "000000AB-000C-0D0E-00F1-02030405067A");
    }

    #[test]
    fn test_braced_string() {
        let guid: Guid = SAMPLE.parse().unwrap();
        assert_eq!(
            guid.to_braced_string(),
            "{550E8400-E29B-41D4-A716-446655440000}"
        );
    }

    #[test]
    fn test_nil() {
        assert!(Guid::NIL.is_nil());
        assert_eq!(Guid::default(), Guid::NIL);
        assert_eq!(
            Guid::NIL.to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_ordering_is_bytewise() {
        // data1 is little-endian, so its low byte sorts first.
        let a: Guid = "00000001-0000-0000-0000-000000000000".parse().unwrap();
        let b: Guid = "00000100-0000-0000-0000-000000000000".parse().unwrap();
        assert!(a.as_bytes() > b.as_bytes());
        assert!(a > b);

        let c: Guid = "00000000-0000-0000-0000-000000000001".parse().unwrap();
        assert!(Guid::NIL < c);
        assert!(c < b);
    }

    #[test]
    fn test_random_is_not_nil() {
        let a = Guid::random();
        let b = Guid::random();
        assert!(!a.is_nil());
        assert_ne!(a, b);
    }

    #[test]
    fn test_uuid_interop_text_matches() {
        let uuid = Uuid::parse_str(SAMPLE).unwrap();
        let guid = Guid::from(uuid);
        assert_eq!(guid.to_string(), uuid.to_string());
        assert_eq!(Uuid::from(guid), uuid);
    }

    #[test]
    fn test_json_roundtrip() {
        let guid: Guid = SAMPLE.parse().unwrap();
        let json = serde_json::to_string(&guid).unwrap();
        assert_eq!(json, format!("\"{SAMPLE}\""));
        let parsed: Guid = serde_json::from_str(&json).unwrap();
        assert_eq!(guid, parsed);
    }

    #[test]
    fn test_json_rejects_malformed() {
        let result: Result<Guid, _> = serde_json::from_str("\"not-a-guid\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = std::collections::HashSet::new();
        set.insert(SAMPLE.parse::<Guid>().unwrap());
        set.insert(SAMPLE.to_ascii_uppercase().parse::<Guid>().unwrap());
        assert_eq!(set.len(), 1);
    }
}
