//! Quantized real numbers.
//!
//! A [`Scaled`] stores a bounded `f32` as an unsigned integer of a fixed
//! width, mapping `[min, max]` affinely onto `[0, 2^W - 1]`. The bounds are
//! const generic parameters holding the IEEE-754 bit pattern of each `f32`
//! (`f32::to_bits`), since `f32` cannot be a const generic itself.
//!
//! ```
//! use bitweave::Scaled;
//!
//! // 0.0 ..= 1.0 in 8 bits, precision 1/255
//! type Ratio = Scaled<u8, 0x0000_0000, 0x3F80_0000>;
//!
//! let ratio = Ratio::new(0.6)?;
//! assert_eq!(ratio.raw(), 153);
//! assert_eq!(bitweave::to_string(&ratio), "153");
//! # Ok::<(), bitweave::QuantizeError>(())
//! ```

use std::fmt::Debug;

use crate::bit::{BitReader, BitWriter};
use crate::errors::{DecodeError, EncodeError, QuantizeError};
use crate::traits::{Pack, Unpack};

/// Unsigned integer types usable as the storage of a [`Scaled`].
pub trait Quantum: Copy + Default + Debug + PartialEq + Pack + Unpack {
    /// `2^W - 1` as a float.
    const STEPS: f64;

    fn to_steps(self) -> f64;

    /// Converts an already rounded, in-range step count.
    fn from_steps(steps: f64) -> Self;
}

macro_rules! quantum {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Quantum for $ty {
                const STEPS: f64 = <$ty>::MAX as f64;

                #[inline]
                fn to_steps(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_steps(steps: f64) -> Self {
                    // float to int casts saturate, which covers `u64::MAX as f64`
                    // rounding up to 2^64
                    steps as $ty
                }
            }
        )*
    };
}

quantum!(u8, u16, u32, u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scaled<U, const MIN: u32, const MAX: u32> {
    raw: U,
}

impl<U: Quantum, const MIN: u32, const MAX: u32> Scaled<U, MIN, MAX> {
    #[inline]
    pub fn min() -> f32 {
        f32::from_bits(MIN)
    }

    #[inline]
    pub fn max() -> f32 {
        f32::from_bits(MAX)
    }

    /// Smallest representable difference between two decoded values.
    pub fn precision() -> f32 {
        ((f64::from(Self::max()) - f64::from(Self::min())) / U::STEPS) as f32
    }

    #[inline]
    pub const fn from_raw(raw: U) -> Self {
        Scaled { raw }
    }

    #[inline]
    pub fn raw(&self) -> U {
        self.raw
    }

    /// Quantizes `value`, rounding to the nearest step.
    ///
    /// Values outside `[min, max]` (and NaN) are rejected rather than
    /// clamped or wrapped.
    pub fn new(value: f32) -> Result<Self, QuantizeError> {
        let (min, max) = (Self::min(), Self::max());

        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(QuantizeError::InvalidBounds { min, max });
        }
        if !(min..=max).contains(&value) {
            return Err(QuantizeError::OutOfRange { value, min, max });
        }

        let (min, max) = (f64::from(min), f64::from(max));
        let t = (f64::from(value) - min) / (max - min);

        Ok(Scaled {
            raw: U::from_steps((t * U::STEPS).round()),
        })
    }

    /// Decodes the stored integer back to a real number.
    ///
    /// The endpoints map back exactly: raw `0` is `min` and raw `2^W - 1`
    /// is `max`.
    pub fn get(&self) -> f32 {
        let t = self.raw.to_steps() / U::STEPS;
        let (min, max) = (f64::from(Self::min()), f64::from(Self::max()));

        (min * (1.0 - t) + max * t) as f32
    }
}

impl<U: Quantum, const MIN: u32, const MAX: u32> TryFrom<f32> for Scaled<U, MIN, MAX> {
    type Error = QuantizeError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<U: Quantum, const MIN: u32, const MAX: u32> From<Scaled<U, MIN, MAX>> for f32 {
    fn from(value: Scaled<U, MIN, MAX>) -> Self {
        value.get()
    }
}

impl<U: Quantum, const MIN: u32, const MAX: u32> Pack for Scaled<U, MIN, MAX> {
    #[inline]
    fn bit_length(&self) -> usize {
        self.raw.bit_length()
    }

    #[inline]
    fn pack(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        self.raw.pack(writer)
    }

    /// Renders the stored integer, not the decoded float.
    fn write_text(&self, out: &mut String) {
        self.raw.write_text(out);
    }
}

impl<U: Quantum, const MIN: u32, const MAX: u32> Unpack for Scaled<U, MIN, MAX> {
    #[inline]
    fn unpack_in_place(&mut self, reader: &mut BitReader<'_>) -> Result<(), DecodeError> {
        self.raw.unpack_in_place(reader)
    }
}

#[cfg(test)]
mod test;
