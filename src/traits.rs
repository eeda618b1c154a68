//! The codec contract shared by every wire shape.
//!
//! A value is serializable when it implements [`Pack`] (size, encode, debug
//! text) and [`Unpack`] (decode in place). Each Rust type maps to exactly one
//! wire shape, so rule resolution happens at compile time:
//!
//! 1. primitives (`bool`, fixed-width integers and floats)
//! 2. quantized values ([`Scaled`](crate::Scaled))
//! 3. enumerations ([`Enumeration`])
//! 4. tagged unions ([`Union`])
//! 5. `Option<T>`
//! 6. sequences (`Vec<T>`, slices, `String`)
//! 7. tuples and fixed arrays
//! 8. records, through their [`Fields`] view

use crate::bit::{BitReader, BitWriter};
use crate::errors::{DecodeError, EncodeError};

/// Read path of a codec.
///
/// `pack` must emit exactly `bit_length` bits.
pub trait Pack {
    /// Number of bits [`Pack::pack`] will write for this value.
    fn bit_length(&self) -> usize;

    fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError>;

    /// Appends the debug rendering of this value to `out`.
    fn write_text(&self, out: &mut String);
}

/// Write path of a codec: reconstructs a value over an existing one.
///
/// Implementations may leave `self` partially overwritten when they fail;
/// the top-level [`unpack_from`](crate::unpack_from) never exposes such a
/// value.
pub trait Unpack {
    fn unpack_in_place(&mut self, reader: &mut BitReader<'_>) -> Result<(), DecodeError>;
}

/// Reflection hook for records.
///
/// A record exposes its serialized fields, in declaration order, as a tuple
/// of references. The engine encodes that tuple as the record.
///
/// ```
/// use bitweave::Fields;
///
/// struct Point { x: i32, y: i32 }
///
/// impl Fields for Point {
///     type View<'a> = (&'a i32, &'a i32);
///     type ViewMut<'a> = (&'a mut i32, &'a mut i32);
///
///     fn field_view(&self) -> Self::View<'_> { (&self.x, &self.y) }
///     fn field_view_mut(&mut self) -> Self::ViewMut<'_> { (&mut self.x, &mut self.y) }
/// }
///
/// bitweave::record_codec!(Point);
///
/// assert_eq!(bitweave::to_string(&Point { x: 1, y: -2 }), "( 1 -2 )");
/// assert_eq!(bitweave::pack(&Point { x: 1, y: 0 }).unwrap(), [1, 0, 0, 0, 0, 0, 0, 0]);
/// ```
pub trait Fields {
    type View<'a>: Pack
    where
        Self: 'a;

    type ViewMut<'a>: Unpack
    where
        Self: 'a;

    fn field_view(&self) -> Self::View<'_>;

    fn field_view_mut(&mut self) -> Self::ViewMut<'_>;
}

/// A closed set of `COUNT` values numbered `0..COUNT`.
pub trait Enumeration: Sized {
    const COUNT: u32;

    /// Width of the stored ordinal.
    const BITS: u8 = bits_for(Self::COUNT);

    fn ordinal(&self) -> u32;

    fn from_ordinal(ordinal: u32) -> Option<Self>;
}

/// A closed, ordered set of `ALTERNATIVES` payload-carrying variants.
pub trait Union {
    const ALTERNATIVES: u32;

    /// Width of the selector written before the payload.
    const TAG_BITS: u8 = bits_for(Self::ALTERNATIVES);

    /// Index of the active alternative.
    fn tag(&self) -> u32;
}

/// Minimal number of bits able to distinguish `count` values,
/// i.e. `ceil(log2(count))`. One (or zero) values need no bits at all.
pub const fn bits_for(count: u32) -> u8 {
    if count <= 1 {
        0
    } else {
        (u32::BITS - (count - 1).leading_zeros()) as u8
    }
}
