//! Tagged unions: a `bits_for(ALTERNATIVES)`-bit selector followed directly
//! by the active alternative's payload.
//!
//! The payload side is generated per type by `#[derive(Union)]`; this module
//! owns the selector.

use crate::bit::{BitReader, BitWriter};
use crate::errors::{DecodeError, EncodeError};
use crate::traits::{Pack, Union};

#[inline]
pub fn tag_bit_length<T: Union + ?Sized>() -> usize {
    usize::from(T::TAG_BITS)
}

pub fn pack_tag<T: Union + ?Sized>(value: &T, writer: &mut BitWriter) -> Result<(), EncodeError> {
    let tag = value.tag();
    if tag >= T::ALTERNATIVES {
        return Err(EncodeError::TagOutOfRange {
            tag,
            alternatives: T::ALTERNATIVES,
        });
    }

    writer.write_bits(tag, T::TAG_BITS)?;
    Ok(())
}

/// Reads the selector; a tag naming no alternative is corrupt input.
pub fn unpack_tag<T: Union + ?Sized>(reader: &mut BitReader<'_>) -> Result<u32, DecodeError> {
    let tag = reader.read_bits(T::TAG_BITS)?;
    if tag >= T::ALTERNATIVES {
        return Err(DecodeError::CorruptTag {
            tag,
            alternatives: T::ALTERNATIVES,
        });
    }

    Ok(tag)
}

/// Renders `tag:payload`.
pub fn write_text<T: Union + ?Sized, P: Pack + ?Sized>(value: &T, payload: &P, out: &mut String) {
    out.push_str(&value.tag().to_string());
    out.push(':');
    payload.write_text(out);
}
