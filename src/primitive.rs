use crate::bit::{BitReader, BitWriter};
use crate::errors::{DecodeError, EncodeError};
use crate::traits::{Pack, Unpack};
use crate::varint;

impl Pack for bool {
    #[inline]
    fn bit_length(&self) -> usize {
        1
    }

    #[inline]
    fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.write_bits(u32::from(*self), 1)?;
        Ok(())
    }

    fn write_text(&self, out: &mut String) {
        out.push(if *self { '+' } else { '-' });
    }
}

impl Unpack for bool {
    #[inline]
    fn unpack_in_place(&mut self, reader: &mut BitReader<'_>) -> Result<(), DecodeError> {
        *self = reader.read_bits(1)? != 0;
        Ok(())
    }
}

// Fixed-width numbers are dumped as little-endian bytes, independent of any
// bit-field byte still pending in the writer.
macro_rules! fixed_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Pack for $ty {
                #[inline]
                fn bit_length(&self) -> usize {
                    8 * std::mem::size_of::<$ty>()
                }

                #[inline]
                fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
                    writer.write_bytes(&self.to_le_bytes());
                    Ok(())
                }

                fn write_text(&self, out: &mut String) {
                    out.push_str(&self.to_string());
                }
            }

            impl Unpack for $ty {
                #[inline]
                fn unpack_in_place(&mut self, reader: &mut BitReader<'_>) -> Result<(), DecodeError> {
                    *self = <$ty>::from_le_bytes(reader.read_array()?);
                    Ok(())
                }
            }
        )*
    };
}

fixed_number!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! fixed_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Pack for $ty {
                #[inline]
                fn bit_length(&self) -> usize {
                    8 * std::mem::size_of::<$ty>()
                }

                #[inline]
                fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
                    writer.write_bytes(&self.to_le_bytes());
                    Ok(())
                }

                fn write_text(&self, out: &mut String) {
                    write_float(f64::from(*self), out);
                }
            }

            impl Unpack for $ty {
                #[inline]
                fn unpack_in_place(&mut self, reader: &mut BitReader<'_>) -> Result<(), DecodeError> {
                    *self = <$ty>::from_le_bytes(reader.read_array()?);
                    Ok(())
                }
            }
        )*
    };
}

fixed_float!(f32, f64);

/// Floats render with six fractional digits.
fn write_float(value: f64, out: &mut String) {
    out.push_str(&format!("{value:.6}"));
}

impl Pack for str {
    fn bit_length(&self) -> usize {
        varint::bit_length(self.len()) + 8 * self.len()
    }

    fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        varint::pack(writer, self.len())?;
        writer.write_bytes(self.as_bytes());
        Ok(())
    }

    fn write_text(&self, out: &mut String) {
        out.push('\'');
        out.push_str(self);
        out.push('\'');
    }
}

impl Pack for String {
    #[inline]
    fn bit_length(&self) -> usize {
        self.as_str().bit_length()
    }

    #[inline]
    fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        self.as_str().pack(writer)
    }

    fn write_text(&self, out: &mut String) {
        self.as_str().write_text(out);
    }
}

impl Unpack for String {
    fn unpack_in_place(&mut self, reader: &mut BitReader<'_>) -> Result<(), DecodeError> {
        let len = varint::unpack(reader)?;
        let bytes = reader.read_bytes(len)?;
        *self = String::from_utf8(bytes.to_vec())?;
        Ok(())
    }
}
