use std::string::FromUtf8Error;

use thiserror::Error;

use crate::bit::{ReadError, WriteError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("encoding error: value {value} does not fit in {bits} bits")]
    ValueTooLarge { value: u32, bits: u8 },
    #[error("encoding error: cannot write {0} bits at once")]
    InvalidBitCount(u8),
    #[error("encoding error: ordinal {ordinal} is out of range for an enumeration of {count} values")]
    InvalidOrdinal { ordinal: u32, count: u32 },
    #[error("encoding error: tag {tag} is out of range for a union of {alternatives} alternatives")]
    TagOutOfRange { tag: u32, alternatives: u32 },
}

impl From<WriteError> for EncodeError {
    fn from(error: WriteError) -> Self {
        match error {
            WriteError::ValueTooLarge { value, bits } => EncodeError::ValueTooLarge { value, bits },
            WriteError::InvalidBitCount(count) => EncodeError::InvalidBitCount(count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer ended before the value was complete.
    #[error("decoding error: insufficient data, requested {requested} bytes but only {remaining} remain")]
    InsufficientData { requested: usize, remaining: usize },
    #[error("decoding error: cannot read {0} bits at once")]
    InvalidBitCount(u8),
    /// A tagged union selector named an alternative that does not exist.
    #[error("decoding error: corrupt tag {tag} for a union of {alternatives} alternatives")]
    CorruptTag { tag: u32, alternatives: u32 },
    #[error("decoding error: ordinal {ordinal} is out of range for an enumeration of {count} values")]
    InvalidOrdinal { ordinal: u32, count: u32 },
    #[error("decoding error: text is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
    #[error("decoding error: length {0} does not fit in memory on this platform")]
    LengthOverflow(u64),
    /// A sequence of zero-width elements claimed more items than allowed.
    #[error("decoding error: {count} zero-width elements exceed the limit of {limit}")]
    ZeroWidthLimit { count: usize, limit: usize },
}

impl From<ReadError> for DecodeError {
    fn from(error: ReadError) -> Self {
        match error {
            ReadError::InsufficientData {
                requested,
                remaining,
            } => DecodeError::InsufficientData {
                requested,
                remaining,
            },
            ReadError::InvalidBitCount(count) => DecodeError::InvalidBitCount(count),
        }
    }
}

/// Rejection of a real number by [`Scaled::new`](crate::Scaled::new).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuantizeError {
    #[error("{value} is outside the quantized range [{min}, {max}]")]
    OutOfRange { value: f32, min: f32, max: f32 },
    #[error("invalid quantized bounds [{min}, {max}]")]
    InvalidBounds { min: f32, max: f32 },
}
