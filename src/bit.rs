//! Bit-granular cursors over a byte buffer.
//!
//! Two streams share one buffer. Whole bytes (`write_bytes` / `read_bytes`)
//! are appended at the end, while bit-fields (`write_bits` / `read_bits`)
//! fill a pending byte from its least-significant bit upwards. A new pending
//! byte is only allocated (or consumed, when reading) once the previous one
//! is exhausted, so a fixed-width number written after a `bool` lands in the
//! byte *after* the pending bit byte, and later bits keep filling that
//! earlier byte.

use std::fmt::{Debug, Formatter};

use thiserror::Error;

/// Largest bit count accepted by [`BitWriter::write_bits`] and
/// [`BitReader::read_bits`].
pub const MAX_BIT_COUNT: u8 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WriteError {
    #[error("value {value} does not fit in {bits} bits")]
    ValueTooLarge { value: u32, bits: u8 },
    #[error("cannot write {0} bits at once, the maximum is 32")]
    InvalidBitCount(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("insufficient data: requested {requested} bytes but only {remaining} remain")]
    InsufficientData { requested: usize, remaining: usize },
    #[error("cannot read {0} bits at once, the maximum is 32")]
    InvalidBitCount(u8),
}

pub struct BitWriter {
    bytes: Vec<u8>,
    bits_pos: usize,
    bits_left: u8,
    bits_written: usize,
}

impl BitWriter {
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Continues writing at the end of `bytes`. Existing content is kept
    /// untouched.
    #[inline(always)]
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        BitWriter {
            bytes,
            bits_pos: 0,
            bits_left: 0,
            bits_written: 0,
        }
    }

    /// Appends `src` as whole bytes.
    #[inline(always)]
    pub fn write_bytes(&mut self, src: &[u8]) {
        self.bytes.extend_from_slice(src);
        self.bits_written += src.len() * 8;
    }

    /// Writes the low `count` bits of `value`, low bits first.
    pub fn write_bits(&mut self, mut value: u32, mut count: u8) -> Result<(), WriteError> {
        if count > MAX_BIT_COUNT {
            return Err(WriteError::InvalidBitCount(count));
        }
        if count < MAX_BIT_COUNT && value >> count != 0 {
            return Err(WriteError::ValueTooLarge { value, bits: count });
        }

        self.bits_written += usize::from(count);

        while count > 0 {
            if self.bits_left == 0 {
                self.bits_pos = self.bytes.len();
                self.bytes.push(0);
                self.bits_left = 8;
            }

            let chunk = self.bits_left.min(count);
            let mask = (1u32 << chunk) - 1;
            // `chunk <= 8` and `mask` keeps only those bits, so the cast is lossless.
            self.bytes[self.bits_pos] |= ((value & mask) as u8) << (8 - self.bits_left);

            self.bits_left -= chunk;
            count -= chunk;
            value >>= chunk;
        }

        Ok(())
    }

    /// Total number of bits written through this writer so far.
    #[inline(always)]
    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    #[inline(always)]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Debug for BitWriter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BitWriter {{\n\tbytes: {:?},\n\tbits: [{}],\n\tbits_left: {}\n}}",
            self.bytes,
            binary_string(&self.bytes),
            self.bits_left
        )
    }
}

pub struct BitReader<'a> {
    bytes: &'a [u8],
    position: usize,
    bits: u8,
    bits_left: u8,
}

impl<'a> BitReader<'a> {
    #[inline(always)]
    pub fn new(bytes: &'a [u8]) -> Self {
        BitReader {
            bytes,
            position: 0,
            bits: 0,
            bits_left: 0,
        }
    }

    /// Number of whole bytes not yet consumed by either stream.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Bits still readable, counting the unread part of the pending bit byte.
    #[inline(always)]
    pub fn remaining_bits(&self) -> usize {
        self.remaining() * 8 + usize::from(self.bits_left)
    }

    /// Consumes exactly `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], ReadError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(ReadError::InsufficientData {
                requested: len,
                remaining,
            });
        }

        let bytes = &self.bytes[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    /// Reads `count` bits, low bits first.
    pub fn read_bits(&mut self, mut count: u8) -> Result<u32, ReadError> {
        if count > MAX_BIT_COUNT {
            return Err(ReadError::InvalidBitCount(count));
        }

        let mut result = 0u32;
        let mut shift = 0u8;

        while count > 0 {
            if self.bits_left == 0 {
                self.bits = self.read_bytes(1)?[0];
                self.bits_left = 8;
            }

            let chunk = self.bits_left.min(count);
            let mask = (1u16 << chunk) - 1;
            result |= u32::from(u16::from(self.bits) & mask) << shift;

            shift += chunk;
            count -= chunk;
            self.bits_left -= chunk;
            self.bits = self.bits.checked_shr(u32::from(chunk)).unwrap_or(0);
        }

        Ok(result)
    }
}

impl Debug for BitReader<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BitReader {{\n\tbytes: {:?},\n\tbits: [{}],\n\tposition: {},\n\tbits_left: {}\n}}",
            self.bytes,
            binary_string(self.bytes),
            self.position,
            self.bits_left
        )
    }
}

fn binary_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:08b}"))
        .collect::<Vec<_>>()
        .join(", ")
}
