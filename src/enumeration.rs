//! Enumerations store their ordinal in `bits_for(COUNT)` bits.

use crate::bit::{BitReader, BitWriter};
use crate::errors::{DecodeError, EncodeError};
use crate::traits::Enumeration;

#[inline]
pub fn bit_length<T: Enumeration>(_value: &T) -> usize {
    usize::from(T::BITS)
}

pub fn pack<T: Enumeration>(value: &T, writer: &mut BitWriter) -> Result<(), EncodeError> {
    let ordinal = value.ordinal();
    if ordinal >= T::COUNT {
        return Err(EncodeError::InvalidOrdinal {
            ordinal,
            count: T::COUNT,
        });
    }

    writer.write_bits(ordinal, T::BITS)?;
    Ok(())
}

pub fn unpack<T: Enumeration>(reader: &mut BitReader<'_>) -> Result<T, DecodeError> {
    let ordinal = reader.read_bits(T::BITS)?;

    T::from_ordinal(ordinal).ok_or(DecodeError::InvalidOrdinal {
        ordinal,
        count: T::COUNT,
    })
}

pub fn write_text<T: Enumeration>(value: &T, out: &mut String) {
    out.push_str(&value.ordinal().to_string());
}

/// Implements [`Pack`](crate::Pack) and [`Unpack`](crate::Unpack) for a
/// type with a hand-written [`Enumeration`] impl.
#[macro_export]
macro_rules! enumeration_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Pack for $ty {
                #[inline]
                fn bit_length(&self) -> usize {
                    $crate::enumeration::bit_length(self)
                }

                #[inline]
                fn pack(&self, writer: &mut $crate::BitWriter) -> ::core::result::Result<(), $crate::EncodeError> {
                    $crate::enumeration::pack(self, writer)
                }

                fn write_text(&self, out: &mut ::std::string::String) {
                    $crate::enumeration::write_text(self, out);
                }
            }

            impl $crate::Unpack for $ty {
                #[inline]
                fn unpack_in_place(&mut self, reader: &mut $crate::BitReader<'_>) -> ::core::result::Result<(), $crate::DecodeError> {
                    *self = $crate::enumeration::unpack(reader)?;
                    ::core::result::Result::Ok(())
                }
            }
        )+
    };
}
