//! Width-tagged lengths.
//!
//! A 2-bit selector picks 1, 2, 4 or 8 little-endian bytes, always the
//! smallest width holding the value. Used for text lengths and sequence
//! counts only.

use crate::bit::{BitReader, BitWriter};
use crate::errors::{DecodeError, EncodeError};

pub const SELECTOR_BITS: u8 = 2;

/// Smallest selector whose width holds `value`.
#[inline]
pub fn selector(value: u64) -> u8 {
    if value <= u64::from(u8::MAX) {
        0
    } else if value <= u64::from(u16::MAX) {
        1
    } else if value <= u64::from(u32::MAX) {
        2
    } else {
        3
    }
}

#[inline]
pub fn bit_length(value: usize) -> usize {
    usize::from(SELECTOR_BITS) + 8 * (1usize << selector(value as u64))
}

pub fn pack(writer: &mut BitWriter, value: usize) -> Result<(), EncodeError> {
    let value = value as u64;
    let selector = selector(value);
    writer.write_bits(u32::from(selector), SELECTOR_BITS)?;

    // `selector` guarantees each narrowing below is lossless.
    match selector {
        0 => writer.write_bytes(&(value as u8).to_le_bytes()),
        1 => writer.write_bytes(&(value as u16).to_le_bytes()),
        2 => writer.write_bytes(&(value as u32).to_le_bytes()),
        _ => writer.write_bytes(&value.to_le_bytes()),
    }

    Ok(())
}

pub fn unpack(reader: &mut BitReader<'_>) -> Result<usize, DecodeError> {
    let value = match reader.read_bits(SELECTOR_BITS)? {
        0 => u64::from(u8::from_le_bytes(reader.read_array()?)),
        1 => u64::from(u16::from_le_bytes(reader.read_array()?)),
        2 => u64::from(u32::from_le_bytes(reader.read_array()?)),
        _ => u64::from_le_bytes(reader.read_array()?),
    };

    usize::try_from(value).map_err(|_| DecodeError::LengthOverflow(value))
}
