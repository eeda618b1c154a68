#![allow(clippy::float_cmp)]

use super::*;

const ZERO: u32 = 0x0000_0000;
const ONE: u32 = 0x3F80_0000;
const MINUS_TEN: u32 = 0xC120_0000;
const TEN: u32 = 0x4120_0000;

type Unit8 = Scaled<u8, ZERO, ONE>;
type Unit16 = Scaled<u16, ZERO, ONE>;
type Signed32 = Scaled<u32, MINUS_TEN, TEN>;
type Signed64 = Scaled<u64, MINUS_TEN, TEN>;
type Inverted = Scaled<u8, ONE, ZERO>;

#[test]
fn bounds_from_bit_patterns() {
    assert_eq!(Unit8::min(), 0.0);
    assert_eq!(Unit8::max(), 1.0);
    assert_eq!(Signed32::min(), -10.0);
    assert_eq!(Signed32::max(), 10.0);
}

#[test]
fn rounds_to_nearest_step() {
    assert_eq!(Unit8::new(0.6).unwrap().raw(), 153);
    assert_eq!(Unit8::new(0.5).unwrap().raw(), 128);
    assert_eq!(Unit16::new(0.319_996_95).unwrap().raw(), 20971);
}

#[test]
fn endpoints_are_exact() {
    assert_eq!(Unit8::new(0.0).unwrap().get(), 0.0);
    assert_eq!(Unit8::new(1.0).unwrap().get(), 1.0);
    assert_eq!(Signed32::new(-10.0).unwrap().get(), -10.0);
    assert_eq!(Signed32::new(10.0).unwrap().get(), 10.0);
    assert_eq!(Signed64::new(-10.0).unwrap().get(), -10.0);
    assert_eq!(Signed64::new(10.0).unwrap().raw(), u64::MAX);
    assert_eq!(Signed64::new(10.0).unwrap().get(), 10.0);
}

#[test]
fn decode_within_precision() {
    let precision = Unit16::precision();
    for value in [0.1f32, 0.25, 0.333, 0.9] {
        let decoded = Unit16::new(value).unwrap().get();
        assert!((decoded - value).abs() <= precision / 2.0 + f32::EPSILON);
    }
}

#[test]
fn out_of_range_is_rejected() {
    assert_eq!(
        Unit8::new(1.5),
        Err(QuantizeError::OutOfRange {
            value: 1.5,
            min: 0.0,
            max: 1.0
        })
    );
    assert!(Unit8::new(-0.01).is_err());
    assert!(Unit8::new(f32::NAN).is_err());
    assert!(Unit8::try_from(f32::INFINITY).is_err());
}

#[test]
fn inverted_bounds_are_rejected() {
    assert_eq!(
        Inverted::new(0.5),
        Err(QuantizeError::InvalidBounds { min: 1.0, max: 0.0 })
    );
}

#[test]
fn packs_as_plain_integer() {
    let value = Unit16::from_raw(0x51EB);
    assert_eq!(value.bit_length(), 16);

    let mut writer = BitWriter::with_capacity(2);
    value.pack(&mut writer).unwrap();
    let bytes = writer.into_bytes();
    assert_eq!(bytes, vec![0xEB, 0x51]);

    let mut decoded = Unit16::default();
    decoded.unpack_in_place(&mut BitReader::new(&bytes)).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn text_is_stored_integer() {
    let mut out = String::new();
    Unit8::new(0.6).unwrap().write_text(&mut out);
    assert_eq!(out, "153");

    out.clear();
    Unit16::new(1.0).unwrap().write_text(&mut out);
    assert_eq!(out, "65535");

    assert_eq!(f32::from(Unit8::from_raw(0)), 0.0);
}
