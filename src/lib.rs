//! Compact bit-level binary serialization.
//!
//! Values map to a minimal-width wire format without a separate schema
//! language: a `bool` costs one bit, an enumeration of `N` values costs
//! `ceil(log2(N))` bits, a tagged union costs a minimal selector plus its
//! payload, and lengths use a 2-bit width-tagged integer.
//!
//! ```
//! #[derive(Debug, Default, PartialEq, bitweave::Enumeration)]
//! enum Role { #[default] Player, Leader, Moderator }
//!
//! #[derive(Debug, Default, PartialEq, bitweave::Record)]
//! struct Member {
//!     name: String,
//!     role: Role,
//!     muted: bool,
//!     score: Option<u16>,
//! }
//!
//! let member = Member { name: "ada".into(), role: Role::Leader, muted: false, score: Some(7) };
//! let bytes = bitweave::pack(&member)?;
//! assert_eq!(bytes.len(), bitweave::byte_length(&member));
//! assert_eq!(bitweave::unpack::<Member>(&bytes)?, member);
//! assert_eq!(bitweave::to_string(&member), "( 'ada' 1 - 7 )");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Allow derive macros to reference this crate as `bitweave` internally
extern crate self as bitweave;

pub mod bit;
pub mod container;
pub mod enumeration;
mod errors;
mod primitive;
pub mod record;
pub mod scaled;
pub mod traits;
pub mod union;
pub mod varint;

pub use bit::{BitReader, BitWriter};
#[cfg(feature = "derive")]
pub use bitweave_derive::{Enumeration, Record, Union};
pub use errors::{DecodeError, EncodeError, QuantizeError};
pub use scaled::Scaled;
pub use traits::{bits_for, Enumeration, Fields, Pack, Union, Unpack};

/// Number of bits `value` occupies on the wire.
#[inline]
pub fn bit_length<T: Pack + ?Sized>(value: &T) -> usize {
    value.bit_length()
}

/// Number of bytes [`pack`] produces for `value`.
#[inline]
pub fn byte_length<T: Pack + ?Sized>(value: &T) -> usize {
    value.bit_length().div_ceil(8)
}

pub fn pack<T: Pack + ?Sized>(value: &T) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Vec::with_capacity(byte_length(value));
    pack_into(&mut buffer, value)?;
    Ok(buffer)
}

/// Appends the encoding of `value` to `buffer`.
///
/// On error `buffer` is truncated back to its original content.
pub fn pack_into<T: Pack + ?Sized>(buffer: &mut Vec<u8>, value: &T) -> Result<(), EncodeError> {
    let start = buffer.len();
    let mut writer = BitWriter::from_vec(std::mem::take(buffer));

    let result = value.pack(&mut writer);
    let bits = writer.bits_written();
    *buffer = writer.into_bytes();

    if let Err(error) = result {
        buffer.truncate(start);
        tracing::debug!(%error, "pack failed");
        return Err(error);
    }

    debug_assert_eq!(bits, value.bit_length(), "packed bits disagree with bit_length");
    tracing::trace!(bits, bytes = buffer.len() - start, "packed value");

    Ok(())
}

pub fn unpack<T: Unpack + Default>(bytes: &[u8]) -> Result<T, DecodeError> {
    let mut reader = BitReader::new(bytes);
    let mut value = T::default();

    if let Err(error) = value.unpack_in_place(&mut reader) {
        tracing::debug!(%error, len = bytes.len(), "unpack failed");
        return Err(error);
    }

    tracing::trace!(len = bytes.len(), trailing = reader.remaining(), "unpacked value");
    Ok(value)
}

/// Decodes `bytes` into `target`.
///
/// The value is decoded into a fresh default first, so `target` is left
/// untouched when decoding fails.
pub fn unpack_from<T: Unpack + Default>(bytes: &[u8], target: &mut T) -> Result<(), DecodeError> {
    *target = unpack(bytes)?;
    Ok(())
}

/// Debug rendering: tuples and records as `( a b )`, sequences as `[ a b ]`,
/// absent optionals as `?`, booleans as `+` / `-`, text single-quoted.
pub fn to_string<T: Pack + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    value.write_text(&mut out);
    out
}
