//! Records are encoded as the tuple their [`Fields`] view returns: members
//! concatenated in declared order, with no tag, padding or length.

use crate::bit::{BitReader, BitWriter};
use crate::errors::{DecodeError, EncodeError};
use crate::traits::{Fields, Pack, Unpack};

#[inline]
pub fn bit_length<T: Fields + ?Sized>(record: &T) -> usize {
    record.field_view().bit_length()
}

#[inline]
pub fn pack<T: Fields + ?Sized>(record: &T, writer: &mut BitWriter) -> Result<(), EncodeError> {
    record.field_view().pack(writer)
}

#[inline]
pub fn unpack_in_place<T: Fields + ?Sized>(
    record: &mut T,
    reader: &mut BitReader<'_>,
) -> Result<(), DecodeError> {
    record.field_view_mut().unpack_in_place(reader)
}

#[inline]
pub fn write_text<T: Fields + ?Sized>(record: &T, out: &mut String) {
    record.field_view().write_text(out);
}

/// Implements [`Pack`] and [`Unpack`] for a type with a hand-written
/// [`Fields`] impl. `#[derive(Record)]` generates both at once.
#[macro_export]
macro_rules! record_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Pack for $ty {
                #[inline]
                fn bit_length(&self) -> usize {
                    $crate::record::bit_length(self)
                }

                #[inline]
                fn pack(&self, writer: &mut $crate::BitWriter) -> ::core::result::Result<(), $crate::EncodeError> {
                    $crate::record::pack(self, writer)
                }

                fn write_text(&self, out: &mut ::std::string::String) {
                    $crate::record::write_text(self, out);
                }
            }

            impl $crate::Unpack for $ty {
                #[inline]
                fn unpack_in_place(&mut self, reader: &mut $crate::BitReader<'_>) -> ::core::result::Result<(), $crate::DecodeError> {
                    $crate::record::unpack_in_place(self, reader)
                }
            }
        )+
    };
}
