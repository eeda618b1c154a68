use bitweave::{DecodeError, EncodeError, Enumeration, Union};

#[derive(Debug, Default, Clone, Copy, PartialEq, Enumeration)]
enum Grade {
    #[default]
    A,
    B,
    C,
    D,
    E,
}

#[derive(Debug, Clone, PartialEq, Union)]
enum Message {
    Ping,
    Text(String),
    Move { x: i8, y: i8 },
    Ack(u16),
    Close(bool),
}

impl Default for Message {
    fn default() -> Self {
        Message::Ping
    }
}

#[test]
fn corrupt_union_tag() {
    // 3-bit tag of 7 with only 5 alternatives
    let error = bitweave::unpack::<Message>(&[0b111]).unwrap_err();
    assert_eq!(
        error,
        DecodeError::CorruptTag {
            tag: 7,
            alternatives: 5
        }
    );
}

#[test]
fn corrupt_tag_leaves_target_untouched() {
    let mut message = Message::Text("keep".to_string());
    assert!(bitweave::unpack_from(&[0b101], &mut message).is_err());
    assert_eq!(message, Message::Text("keep".to_string()));
}

#[test]
fn invalid_enumeration_ordinal() {
    let error = bitweave::unpack::<Grade>(&[0b110]).unwrap_err();
    assert_eq!(error, DecodeError::InvalidOrdinal { ordinal: 6, count: 5 });
}

#[test]
fn truncated_union_payload() {
    let bytes = bitweave::pack(&Message::Ack(513)).unwrap();
    assert_eq!(bytes, vec![3, 1, 2]);

    assert_eq!(
        bitweave::unpack::<Message>(&bytes[..2]),
        Err(DecodeError::InsufficientData {
            requested: 2,
            remaining: 1
        })
    );
}

#[test]
fn truncated_text() {
    let bytes = bitweave::pack("hello").unwrap();
    assert_eq!(
        bitweave::unpack::<String>(&bytes[..bytes.len() - 1]),
        Err(DecodeError::InsufficientData {
            requested: 5,
            remaining: 4
        })
    );
}

#[test]
fn empty_input() {
    assert!(matches!(
        bitweave::unpack::<bool>(&[]),
        Err(DecodeError::InsufficientData { .. })
    ));
    assert!(matches!(
        bitweave::unpack::<Vec<u8>>(&[]),
        Err(DecodeError::InsufficientData { .. })
    ));
}

#[test]
fn invalid_utf8() {
    assert!(matches!(
        bitweave::unpack::<String>(&[0, 1, 0xFF]),
        Err(DecodeError::InvalidUtf8(_))
    ));
}

#[derive(Debug, Default)]
struct Broken;

impl bitweave::Enumeration for Broken {
    const COUNT: u32 = 2;

    fn ordinal(&self) -> u32 {
        5
    }

    fn from_ordinal(_ordinal: u32) -> Option<Self> {
        Some(Broken)
    }
}

bitweave::enumeration_codec!(Broken);

#[test]
fn ordinal_outside_declared_count() {
    assert_eq!(
        bitweave::pack(&Broken),
        Err(EncodeError::InvalidOrdinal { ordinal: 5, count: 2 })
    );
}

#[test]
fn failed_pack_into_restores_buffer() {
    let mut buffer = vec![0xAA];
    let result = bitweave::pack_into(&mut buffer, &(7u8, "abc".to_string(), Broken));

    assert_eq!(result, Err(EncodeError::InvalidOrdinal { ordinal: 5, count: 2 }));
    assert_eq!(buffer, vec![0xAA]);
}

#[test]
fn zero_width_sequence_count_is_capped() {
    // 4-byte count of 2^31 followed by no element data
    let bytes = [0b10, 0, 0, 0, 0x80];
    assert_eq!(
        bitweave::unpack::<Vec<()>>(&bytes),
        Err(DecodeError::ZeroWidthLimit {
            count: 1 << 31,
            limit: bitweave::container::MAX_ZERO_WIDTH_LEN,
        })
    );

    // small counts of zero-width elements still decode
    assert_eq!(bitweave::unpack::<Vec<()>>(&[0, 3]).unwrap(), vec![(); 3]);
}

#[test]
fn large_count_of_sized_elements_runs_out_of_data() {
    let bytes = [0b10, 0, 0, 0, 0x80, 1];
    assert!(matches!(
        bitweave::unpack::<Vec<u8>>(&bytes),
        Err(DecodeError::InsufficientData { .. })
    ));
}

#[test]
fn error_messages() {
    let error = DecodeError::CorruptTag {
        tag: 7,
        alternatives: 5,
    };
    assert_eq!(
        error.to_string(),
        "decoding error: corrupt tag 7 for a union of 5 alternatives"
    );
}
