//! Byte-exact wire fixtures. Bit-fields and whole bytes interleave as
//! described in `bitweave::bit`, so these pin the layout down completely.

use bitweave::{DecodeError, Enumeration, Record, Scaled};

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Nested {
    name: String,
    count: u8,
    alias: Option<String>,
    first: bool,
    second: bool,
    third: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Enumeration)]
enum Grade {
    #[default]
    A,
    B,
    C,
    D,
    E,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Complex {
    nested: Vec<Nested>,
    flag: bool,
    small: Option<i8>,
    label: String,
    note: Option<String>,
    active: bool,
    level: u8,
    grade: Option<Grade>,
    offset: i8,
    hidden: bool,
    tags: Option<Vec<String>>,
    ratio: f32,
    extra: Option<Nested>,
}

fn nested(name: &str, count: u8, alias: Option<&str>, flags: [bool; 3]) -> Nested {
    Nested {
        name: name.to_string(),
        count,
        alias: alias.map(str::to_string),
        first: flags[0],
        second: flags[1],
        third: flags[2],
    }
}

fn complex() -> Complex {
    Complex {
        nested: vec![
            nested("a", 5, None, [true, false, true]),
            nested("", 0, Some(""), [false, false, false]),
            nested("xxx", 8, Some("yyy"), [false, true, true]),
        ],
        flag: false,
        small: Some(1),
        label: "str s".to_string(),
        note: Some("o str".to_string()),
        active: true,
        level: 255,
        grade: Some(Grade::E),
        offset: -10,
        hidden: false,
        tags: Some(vec!["s1".to_string(), "s2".to_string(), "s3".to_string()]),
        ratio: 1.5,
        extra: Some(nested("a", 5, Some(""), [true, false, true])),
    }
}

const EMPTY_TEXT: &str = "( [ ] - ? '' ? - 0 ? 0 - ? 0.000000 ? )";
const EMPTY_BYTES: [u8; 10] = [0; 10];

const COMPLEX_TEXT: &str = "( [ ( 'a' 5 ? + - + ) ( '' 0 '' - - - ) ( 'xxx' 8 'yyy' - + + ) ] - 1 'str s' 'o str' + 255 4 -10 - [ 's1' 's2' 's3' ] 1.500000 ( 'a' 5 '' + - + ) )";
const COMPLEX_BYTES: [u8; 56] = [
    160, 3, 1, 97, 5, 4, 0, 0, 0, 196, 3, 120, 120, 120, 8, 3, 121, 121, 121, 146, 1, 5, 115, 116,
    114, 32, 115, 5, 111, 32, 115, 116, 114, 255, 41, 246, 3, 64, 2, 115, 49, 2, 115, 50, 2, 115,
    51, 0, 0, 192, 63, 82, 1, 97, 5, 0,
];

#[test]
fn empty_record() {
    let value = Complex::default();

    assert_eq!(bitweave::to_string(&value), EMPTY_TEXT);
    assert_eq!(bitweave::byte_length(&value), EMPTY_BYTES.len());
    assert_eq!(bitweave::pack(&value).unwrap(), EMPTY_BYTES);
    assert_eq!(bitweave::unpack::<Complex>(&EMPTY_BYTES).unwrap(), value);
}

#[test]
fn complex_record() {
    let value = complex();

    assert_eq!(bitweave::to_string(&value), COMPLEX_TEXT);
    assert_eq!(bitweave::byte_length(&value), COMPLEX_BYTES.len());
    assert_eq!(bitweave::pack(&value).unwrap(), COMPLEX_BYTES);
    assert_eq!(bitweave::unpack::<Complex>(&COMPLEX_BYTES).unwrap(), value);
}

#[test]
fn unpack_over_existing_value() {
    let mut value = complex();
    bitweave::unpack_from(&bitweave::pack(&Complex::default()).unwrap(), &mut value).unwrap();
    assert_eq!(value, Complex::default());

    bitweave::unpack_from(&bitweave::pack(&complex()).unwrap(), &mut value).unwrap();
    assert_eq!(value, complex());
}

#[test]
fn truncated_buffer_leaves_target_untouched() {
    let mut value = complex();
    let shortened = &EMPTY_BYTES[..EMPTY_BYTES.len() - 1];

    let error = bitweave::unpack_from(shortened, &mut value).unwrap_err();
    assert!(matches!(error, DecodeError::InsufficientData { .. }));
    assert_eq!(value, complex());

    let shortened = &COMPLEX_BYTES[..COMPLEX_BYTES.len() - 1];
    assert!(matches!(
        bitweave::unpack::<Complex>(shortened),
        Err(DecodeError::InsufficientData { .. })
    ));
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Enumeration)]
enum Answer {
    #[default]
    No,
    Yes,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Enumeration)]
enum Three {
    #[default]
    A,
    B,
    C,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Enumeration)]
enum Six {
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Enumeration)]
enum Nine {
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Choices {
    answer: Answer,
    three: Three,
    six: Six,
    nine: Nine,
}

const CHOICES_BYTES: [u8; 5] = [116, 3, 7, 64, 139];

fn choices() -> Vec<Choices> {
    vec![
        Choices {
            answer: Answer::Yes,
            three: Three::C,
            six: Six::D,
            nine: Nine::H,
        },
        Choices {
            answer: Answer::No,
            three: Three::A,
            six: Six::A,
            nine: Nine::A,
        },
        Choices {
            answer: Answer::Yes,
            three: Three::C,
            six: Six::F,
            nine: Nine::I,
        },
    ]
}

#[test]
fn enum_sequence() {
    let value = choices();

    // 1 + 2 + 3 + 4 bits per record, after a 10-bit count
    assert_eq!(bitweave::bit_length(&value), 10 + 3 * 10);
    assert_eq!(bitweave::byte_length(&value), CHOICES_BYTES.len());
    assert_eq!(bitweave::pack(&value).unwrap(), CHOICES_BYTES);
    assert_eq!(bitweave::unpack::<Vec<Choices>>(&CHOICES_BYTES).unwrap(), value);
}

type Unit8 = Scaled<u8, 0x0000_0000, 0x3F80_0000>;
type Unit16 = Scaled<u16, 0x0000_0000, 0x3F80_0000>;

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Numbers {
    short: i16,
    unsigned_short: u16,
    int: i32,
    unsigned_int: u32,
    coarse: Unit8,
    fine: Unit16,
}

const NUMBERS_BYTES: [u8; 15] = [
    144, 207, 160, 192, 118, 127, 170, 182, 96, 43, 39, 239, 153, 235, 81,
];

fn numbers() -> Numbers {
    Numbers {
        short: -12400,
        unsigned_short: 49312,
        int: -1_230_340_234,
        unsigned_int: 4_012_321_632,
        coarse: Unit8::new(0.6).unwrap(),
        fine: Unit16::new(0.319_996_95).unwrap(),
    }
}

#[test]
fn numbers_record() {
    let value = numbers();

    assert_eq!(bitweave::byte_length(&value), NUMBERS_BYTES.len());
    assert_eq!(bitweave::pack(&value).unwrap(), NUMBERS_BYTES);
    assert_eq!(bitweave::unpack::<Numbers>(&NUMBERS_BYTES).unwrap(), value);
}
