use crate::bit::{BitReader, BitWriter};
use crate::errors::{DecodeError, EncodeError};
use crate::traits::{Pack, Unpack};
use crate::varint;

/// Largest tuple arity with a codec, and so the largest record view.
pub const MAX_TUPLE_ARITY: usize = 16;

/// Largest decoded count for a sequence whose elements consume no input.
pub const MAX_ZERO_WIDTH_LEN: usize = u16::MAX as usize;

impl<T: Pack + ?Sized> Pack for &T {
    #[inline]
    fn bit_length(&self) -> usize {
        (**self).bit_length()
    }

    #[inline]
    fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        (**self).pack(writer)
    }

    fn write_text(&self, out: &mut String) {
        (**self).write_text(out);
    }
}

impl<T: Pack + ?Sized> Pack for &mut T {
    #[inline]
    fn bit_length(&self) -> usize {
        (**self).bit_length()
    }

    #[inline]
    fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        (**self).pack(writer)
    }

    fn write_text(&self, out: &mut String) {
        (**self).write_text(out);
    }
}

impl<T: Unpack + ?Sized> Unpack for &mut T {
    #[inline]
    fn unpack_in_place(&mut self, reader: &mut BitReader<'_>) -> Result<(), DecodeError> {
        (**self).unpack_in_place(reader)
    }
}

impl<T: Pack + ?Sized> Pack for Box<T> {
    #[inline]
    fn bit_length(&self) -> usize {
        (**self).bit_length()
    }

    #[inline]
    fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        (**self).pack(writer)
    }

    fn write_text(&self, out: &mut String) {
        (**self).write_text(out);
    }
}

impl<T: Unpack + ?Sized> Unpack for Box<T> {
    #[inline]
    fn unpack_in_place(&mut self, reader: &mut BitReader<'_>) -> Result<(), DecodeError> {
        (**self).unpack_in_place(reader)
    }
}

impl<T: Pack> Pack for Option<T> {
    fn bit_length(&self) -> usize {
        1 + self.as_ref().map_or(0, Pack::bit_length)
    }

    fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.write_bits(u32::from(self.is_some()), 1)?;
        match self {
            Some(value) => value.pack(writer),
            None => Ok(()),
        }
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Some(value) => value.write_text(out),
            None => out.push('?'),
        }
    }
}

impl<T: Unpack + Default> Unpack for Option<T> {
    fn unpack_in_place(&mut self, reader: &mut BitReader<'_>) -> Result<(), DecodeError> {
        if reader.read_bits(1)? == 0 {
            *self = None;
            return Ok(());
        }

        let mut value = T::default();
        value.unpack_in_place(reader)?;
        *self = Some(value);
        Ok(())
    }
}

impl<T: Pack> Pack for [T] {
    fn bit_length(&self) -> usize {
        varint::bit_length(self.len()) + self.iter().map(Pack::bit_length).sum::<usize>()
    }

    fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        varint::pack(writer, self.len())?;
        self.iter().try_for_each(|item| item.pack(writer))
    }

    fn write_text(&self, out: &mut String) {
        out.push_str("[ ");
        for item in self {
            item.write_text(out);
            out.push(' ');
        }
        out.push(']');
    }
}

impl<T: Pack> Pack for Vec<T> {
    #[inline]
    fn bit_length(&self) -> usize {
        self.as_slice().bit_length()
    }

    #[inline]
    fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        self.as_slice().pack(writer)
    }

    fn write_text(&self, out: &mut String) {
        self.as_slice().write_text(out);
    }
}

impl<T: Unpack + Default> Unpack for Vec<T> {
    fn unpack_in_place(&mut self, reader: &mut BitReader<'_>) -> Result<(), DecodeError> {
        let count = varint::unpack(reader)?;

        self.clear();
        // a corrupt count must not reserve more than the input could hold
        self.reserve(count.min(reader.remaining()));

        for index in 0..count {
            let before = reader.remaining_bits();
            let mut item = T::default();
            item.unpack_in_place(reader)?;

            // every element decodes the same way from no input, so the count
            // is the only thing bounding the loop
            if index == 0 && count > MAX_ZERO_WIDTH_LEN && reader.remaining_bits() == before {
                return Err(DecodeError::ZeroWidthLimit {
                    count,
                    limit: MAX_ZERO_WIDTH_LEN,
                });
            }

            self.push(item);
        }

        Ok(())
    }
}

/// Fixed arrays have a known length and encode like a tuple.
impl<T: Pack, const N: usize> Pack for [T; N] {
    fn bit_length(&self) -> usize {
        self.iter().map(Pack::bit_length).sum()
    }

    fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        self.iter().try_for_each(|item| item.pack(writer))
    }

    fn write_text(&self, out: &mut String) {
        out.push_str("( ");
        for item in self {
            item.write_text(out);
            out.push(' ');
        }
        out.push(')');
    }
}

impl<T: Unpack, const N: usize> Unpack for [T; N] {
    fn unpack_in_place(&mut self, reader: &mut BitReader<'_>) -> Result<(), DecodeError> {
        self.iter_mut().try_for_each(|item| item.unpack_in_place(reader))
    }
}

macro_rules! tuple {
    ($($name:ident $index:tt),*) => {
        impl<$($name: Pack),*> Pack for ($($name,)*) {
            #[allow(unused_mut)]
            fn bit_length(&self) -> usize {
                let mut bits = 0;
                $(bits += self.$index.bit_length();)*
                bits
            }

            #[allow(unused_variables)]
            fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
                $(self.$index.pack(writer)?;)*
                Ok(())
            }

            fn write_text(&self, out: &mut String) {
                out.push_str("( ");
                $(
                    self.$index.write_text(out);
                    out.push(' ');
                )*
                out.push(')');
            }
        }

        impl<$($name: Unpack),*> Unpack for ($($name,)*) {
            #[allow(unused_variables)]
            fn unpack_in_place(&mut self, reader: &mut BitReader<'_>) -> Result<(), DecodeError> {
                $(self.$index.unpack_in_place(reader)?;)*
                Ok(())
            }
        }
    };
}

tuple!();
tuple!(A 0);
tuple!(A 0, B 1);
tuple!(A 0, B 1, C 2);
tuple!(A 0, B 1, C 2, D 3);
tuple!(A 0, B 1, C 2, D 3, E 4);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11, M 12);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11, M 12, N 13);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11, M 12, N 13, O 14);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11, M 12, N 13, O 14, P 15);
