use clvalue::{decode_with_type, encode_with_type, CLType, CLValue, CodecError, MAX_TYPE_DEPTH};

#[test]
fn roundtrips_with_trailing_data() {
    let values = [
        CLValue::bool(true),
        CLValue::i32(-555),
        CLValue::u512(u128::MAX),
        CLValue::string("self-describing"),
        CLValue::option_some(CLValue::string("x")),
        CLValue::option_none(CLType::U64),
        CLValue::list(CLType::U32, vec![CLValue::u32(1), CLValue::u32(2)]).unwrap(),
        CLValue::list(CLType::ByteArray(3), vec![]).unwrap(),
        CLValue::map_from_entries(
            CLType::String,
            CLType::option(CLType::U8),
            [(CLValue::string("k"), CLValue::option_none(CLType::U8))],
        )
        .unwrap(),
        CLValue::result_err(CLType::U8, CLValue::string("boom")),
        CLValue::tuple3(CLValue::u8(1), CLValue::unit(), CLValue::byte_array([5u8; 4])),
        CLValue::any([1u8, 2, 3]),
    ];
    for value in values {
        let mut bytes = encode_with_type(&value);
        bytes.extend([0xde, 0xad]);
        let (decoded, rest) = decode_with_type(&bytes).unwrap();
        // Pending byte arrays that no value bytes cover fall back to size 0.
        if value == CLValue::list(CLType::ByteArray(3), vec![]).unwrap() {
            assert_eq!(decoded, CLValue::list(CLType::ByteArray(0), vec![]).unwrap());
        } else {
            assert_eq!(decoded, value);
        }
        assert_eq!(rest, &[0xde, 0xad]);
    }
}

#[test]
fn map_entry_sizes_come_from_first_entry() {
    let value = CLValue::map_from_entries(
        CLType::U8,
        CLType::ByteArray(2),
        [(CLValue::u8(1), CLValue::byte_array([9u8, 9]))],
    )
    .unwrap();
    let (decoded, _) = decode_with_type(&encode_with_type(&value)).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(decoded.cl_type(), CLType::map(CLType::U8, CLType::ByteArray(2)));
}

#[test]
fn malformed_buffers() {
    assert!(matches!(
        decode_with_type(&[]),
        Err(CodecError::MalformedSelfDescribingBuffer(_))
    ));
    assert!(matches!(
        decode_with_type(&[0, 0, 0, 0, 9]),
        Err(CodecError::MalformedSelfDescribingBuffer(_))
    ));
    // Value region longer than the buffer.
    assert!(matches!(
        decode_with_type(&[8, 0, 0, 0, 1]),
        Err(CodecError::BufferUnderrun { .. })
    ));
    // Missing type bytes.
    assert!(matches!(
        decode_with_type(&[1, 0, 0, 0, 1]),
        Err(CodecError::BufferUnderrun { .. })
    ));
    // Unknown type tag.
    assert!(matches!(
        decode_with_type(&[1, 0, 0, 0, 1, 99]),
        Err(CodecError::UnsupportedType(_))
    ));
}

#[test]
fn pending_sizes_settle_on_any_item() {
    let values = [
        CLValue::list(
            CLType::option(CLType::ByteArray(2)),
            vec![
                CLValue::option_none(CLType::ByteArray(2)),
                CLValue::option_none(CLType::ByteArray(2)),
                CLValue::option_some(CLValue::byte_array([1u8, 2])),
            ],
        )
        .unwrap(),
        CLValue::tuple2(
            CLValue::u8(5),
            CLValue::list(
                CLType::result(CLType::U8, CLType::ByteArray(1)),
                vec![
                    CLValue::result_ok(CLValue::u8(3), CLType::ByteArray(1)),
                    CLValue::result_err(CLType::U8, CLValue::byte_array([9u8])),
                ],
            )
            .unwrap(),
        ),
    ];
    for value in values {
        let encoded = encode_with_type(&value);
        let (decoded, rest) = decode_with_type(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(decoded.cl_type(), value.cl_type());
        assert!(rest.is_empty());
    }
}

#[test]
fn nesting_limit() {
    // One-byte value region followed by deeply nested Option type bytes.
    let mut bytes = vec![1, 0, 0, 0, 0];
    bytes.extend(vec![13u8; 50_000]);
    bytes.push(0);
    assert_eq!(
        decode_with_type(&bytes),
        Err(CodecError::NestingTooDeep { max: MAX_TYPE_DEPTH })
    );

    let mut value = CLValue::bool(true);
    for _ in 0..MAX_TYPE_DEPTH {
        value = CLValue::option_some(value);
    }
    assert_eq!(decode_with_type(&encode_with_type(&value)).unwrap().0, value);
}
