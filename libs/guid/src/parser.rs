//! Allocation-free parser for the canonical `8-4-4-4-12` GUID text form.
//!
//! The input is treated as a fixed-size byte region, never as a terminated
//! string: every access is justified by the exact length check up front, so
//! callers may hand in a view over a buffer with no trailing NUL.
//!
//! ```text
//! 00000000-0000-0000-0000-000000000000
//! ^        ^    ^    ^    ^
//! data1    data2     data4[0..2]
//!               data3     data4[2..8]
//! ```
//!
//! The three leading runs are decoded as numbers (big-endian in the text) and
//! stored little-endian; the trailing run is decoded byte for byte.

use crate::{Guid, GuidError};

/// Number of bytes in the canonical text form.
pub const CANONICAL_LENGTH: usize = 36;

/// The delimiter between hex runs.
pub const DELIMITER: u8 = b'-';

// Start offsets of each hex run, named after the GUID struct members.
const POSITION_DATA1: usize = 0;
const POSITION_DATA2: usize = 8 + 1;
const POSITION_DATA3: usize = POSITION_DATA2 + 4 + 1;
const POSITION_DATA4_PART1: usize = POSITION_DATA3 + 4 + 1;
const POSITION_DATA4_PART2: usize = POSITION_DATA4_PART1 + 4 + 1;

/// Offsets that must hold [`DELIMITER`].
pub const DELIMITER_POSITIONS: [usize; 4] = [
    POSITION_DATA2 - 1,
    POSITION_DATA3 - 1,
    POSITION_DATA4_PART1 - 1,
    POSITION_DATA4_PART2 - 1,
];

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integers that can be decoded from a hex run.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`.
pub trait HexInteger: sealed::Sealed + Copy {
    /// Width of the integer in bytes; the hex run is twice this long.
    const BYTES: usize;

    #[doc(hidden)]
    fn from_accumulator(value: u64) -> Self;
}

macro_rules! impl_hex_integer {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl HexInteger for $t {
                const BYTES: usize = std::mem::size_of::<$t>();

                #[inline]
                fn from_accumulator(value: u64) -> Self {
                    // The accumulator only ever holds BYTES octets.
                    value as $t
                }
            }
        )*
    };
}

impl_hex_integer!(u8, u16, u32, u64);

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Decodes exactly two ASCII hex characters into one byte.
///
/// Accepts `0-9`, `A-F` and `a-f`; anything else is a format error.
#[inline]
pub fn hex_octet_to_byte(octet: &[u8; 2]) -> Result<u8, GuidError> {
    let [msd, lsd] = *octet;
    match (hex_digit(msd), hex_digit(lsd)) {
        (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
        _ => Err(GuidError::non_hex()),
    }
}

/// Decodes a run of `2 * N` hex characters into `N` bytes, in order.
///
/// Fails as a whole: no partially decoded output is ever returned.
pub fn hex_run_to_bytes<const N: usize>(run: &[u8]) -> Result<[u8; N], GuidError> {
    if run.len() != N * 2 {
        return Err(GuidError::length(N * 2, run.len()));
    }

    let mut bytes = [0u8; N];
    for (byte, octet) in bytes.iter_mut().zip(run.chunks_exact(2)) {
        *byte = hex_octet_to_byte(&[octet[0], octet[1]])?;
    }

    Ok(bytes)
}

/// Decodes a run of hex characters as a single unsigned integer.
///
/// The text is read most significant octet first, so `"1234"` decodes to
/// `0x1234u16`. The run must be exactly `2 * size_of::<T>()` bytes long.
pub fn hex_run_to_native_integer<T: HexInteger>(run: &[u8]) -> Result<T, GuidError> {
    if run.len() != T::BYTES * 2 {
        return Err(GuidError::length(T::BYTES * 2, run.len()));
    }

    let mut value: u64 = 0;
    for octet in run.chunks_exact(2) {
        value = (value << 8) | u64::from(hex_octet_to_byte(&[octet[0], octet[1]])?);
    }

    Ok(T::from_accumulator(value))
}

/// Parses GUID text of the form `00000000-0000-0000-0000-000000000000`.
///
/// The slice length is the declared length of the input; the only valid
/// value is [`CANONICAL_LENGTH`]. Nothing past the slice is read and NUL
/// bytes get no special treatment.
pub fn parse(text: &[u8]) -> Result<Guid, GuidError> {
    let text: &[u8; CANONICAL_LENGTH] = text
        .try_into()
        .map_err(|_| GuidError::length(CANONICAL_LENGTH, text.len()))?;

    parse_canonical(text)
}

/// Parses a buffer already known to be [`CANONICAL_LENGTH`] bytes long.
pub fn parse_canonical(text: &[u8; CANONICAL_LENGTH]) -> Result<Guid, GuidError> {
    if DELIMITER_POSITIONS
        .iter()
        .any(|&position| text[position] != DELIMITER)
    {
        return Err(GuidError::missing_delimiter());
    }

    // Which run failed is intentionally not reported.
    decode_runs(text).map_err(|_| GuidError::non_hex())
}

fn decode_runs(text: &[u8; CANONICAL_LENGTH]) -> Result<Guid, GuidError> {
    let data1: u32 = hex_run_to_native_integer(&text[POSITION_DATA1..POSITION_DATA2 - 1])?;
    let data2: u16 = hex_run_to_native_integer(&text[POSITION_DATA2..POSITION_DATA3 - 1])?;
    let data3: u16 =
        hex_run_to_native_integer(&text[POSITION_DATA3..POSITION_DATA4_PART1 - 1])?;
    let head: [u8; 2] =
        hex_run_to_bytes(&text[POSITION_DATA4_PART1..POSITION_DATA4_PART2 - 1])?;
    let tail: [u8; 6] = hex_run_to_bytes(&text[POSITION_DATA4_PART2..])?;

    let mut data4 = [0u8; 8];
    data4[..2].copy_from_slice(&head);
    data4[2..].copy_from_slice(&tail);

    Ok(Guid::from_fields(data1, data2, data3, data4))
}

// =============================================================================
// Tests
// =============================================================================
