use clvalue::{
    decode_by_type, encode, from_json, from_json_str, to_json, CLType, CLValue, CodecError,
    ListValue,
};
use serde_json::json;

fn roundtrip(value: &CLValue) {
    let bytes = encode(value);
    let (decoded, rest) = decode_by_type(&bytes, &value.cl_type()).unwrap();
    assert_eq!(&decoded, value, "bytes {bytes:?}");
    assert!(rest.is_empty());
    assert_eq!(&from_json(&to_json(value)).unwrap(), value);
}

#[test]
fn nested_composites_roundtrip() {
    roundtrip(&CLValue::tuple2(CLValue::bool(true), CLValue::string("x")));
    roundtrip(&CLValue::option_some(
        CLValue::list(CLType::U32, vec![CLValue::u32(1), CLValue::u32(u32::MAX)]).unwrap(),
    ));
    roundtrip(&CLValue::option_none(CLType::list(CLType::U32)));
    roundtrip(&CLValue::result_ok(
        CLValue::tuple3(CLValue::u8(1), CLValue::i64(-9), CLValue::unit()),
        CLType::String,
    ));
    roundtrip(&CLValue::result_err(
        CLType::Unit,
        CLValue::map_from_entries(
            CLType::U64,
            CLType::ByteArray(3),
            [
                (CLValue::u64(2), CLValue::byte_array([1u8, 2, 3])),
                (CLValue::u64(1), CLValue::byte_array([4u8, 5, 6])),
            ],
        )
        .unwrap(),
    ));
    let anys = CLValue::list(CLType::Any, vec![CLValue::any([7u8])]).unwrap();
    roundtrip(&CLValue::tuple1(anys));
    roundtrip(&CLValue::list(
        CLType::list(CLType::String),
        vec![
            CLValue::list(CLType::String, vec![]).unwrap(),
            CLValue::list(CLType::String, vec![CLValue::string("a")]).unwrap(),
        ],
    )
    .unwrap());
}

#[test]
fn list_mutators_preserve_element_type() {
    let mut list = ListValue::new(CLType::U8);
    list.push(CLValue::u8(1)).unwrap();
    list.push(CLValue::u8(2)).unwrap();
    list.push(CLValue::u8(3)).unwrap();
    assert!(matches!(
        list.push(CLValue::u32(4)),
        Err(CodecError::TypeMismatch { .. })
    ));
    assert_eq!(list.set(1, CLValue::u8(20)).unwrap(), CLValue::u8(2));
    assert!(list.set(1, CLValue::bool(true)).is_err());
    assert_eq!(
        list.get(3),
        Err(CodecError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        list.set(5, CLValue::u8(0)),
        Err(CodecError::IndexOutOfRange { index: 5, len: 3 })
    );
    assert_eq!(list.remove(0).unwrap(), CLValue::u8(1));
    assert_eq!(list.pop(), Some(CLValue::u8(3)));
    assert_eq!(list.as_slice(), &[CLValue::u8(20)]);

    let mut value = CLValue::List(list);
    value.as_list_mut().unwrap().push(CLValue::u8(9)).unwrap();
    assert_eq!(encode(&value), vec![2, 0, 0, 0, 20, 9]);
}

#[test]
fn map_is_insertion_ordered_and_keyed_by_text() {
    let mut value = CLValue::map(CLType::String, CLType::I32);
    let map = value.as_map_mut().unwrap();
    map.append(CLValue::string("b"), CLValue::i32(2)).unwrap();
    map.append(CLValue::string("a"), CLValue::i32(1)).unwrap();
    assert_eq!(
        map.append(CLValue::string("b"), CLValue::i32(3)),
        Err(CodecError::DuplicateKey("b".into()))
    );
    assert!(matches!(
        map.append(CLValue::u8(1), CLValue::i32(3)),
        Err(CodecError::TypeMismatch { .. })
    ));
    assert_eq!(map.get_by_str("a"), Some(&CLValue::i32(1)));
    assert!(map.contains_key(&CLValue::string("b")));

    let bytes = encode(&value);
    assert_eq!(
        bytes,
        vec![2, 0, 0, 0, 1, 0, 0, 0, b'b', 2, 0, 0, 0, 1, 0, 0, 0, b'a', 1, 0, 0, 0]
    );
    let map = value.as_map().unwrap();
    let expected: usize = 4 + map
        .iter()
        .map(|(k, v)| encode(k).len() + encode(v).len())
        .sum::<usize>();
    assert_eq!(bytes.len(), expected);
}

#[test]
fn map_equality_sees_entry_order() {
    let entries = [(1u8, 1u8), (2, 2)];
    let forward = CLValue::map_from_entries(
        CLType::U8,
        CLType::U8,
        entries.map(|(k, v)| (CLValue::u8(k), CLValue::u8(v))),
    )
    .unwrap();
    let backward = CLValue::map_from_entries(
        CLType::U8,
        CLType::U8,
        entries.iter().rev().map(|&(k, v)| (CLValue::u8(k), CLValue::u8(v))),
    )
    .unwrap();
    assert_ne!(forward, backward);
    assert_ne!(encode(&forward), encode(&backward));
    let (decoded, _) = decode_by_type(&encode(&backward), &backward.cl_type()).unwrap();
    assert_eq!(decoded, backward);
    assert_ne!(decoded, forward);
}

#[test]
fn display_matrix() {
    let cases = [
        (CLValue::bool(true), "true"),
        (CLValue::i64(-42), "-42"),
        (CLValue::u512(1_000u64), "1000"),
        (CLValue::unit(), "()"),
        (CLValue::string("hi"), "hi"),
        (CLValue::byte_array([0xcau8, 0xfe]), "cafe"),
        (CLValue::option_some(CLValue::u8(1)), "Some(1)"),
        (CLValue::tuple1(CLValue::u8(1)), "(1)"),
        (CLValue::result_ok(CLValue::unit(), CLType::U8), "Ok(())"),
    ];
    for (value, text) in cases {
        assert_eq!(value.to_string(), text);
    }
}

#[test]
fn json_envelope_matrix() {
    assert_eq!(
        to_json(&CLValue::byte_array([1u8, 2])),
        json!({"bytes": "0102", "cl_type": {"ByteArray": 2}})
    );
    assert_eq!(
        to_json(&CLValue::map(CLType::String, CLType::Bool)),
        json!({"bytes": "00000000", "cl_type": {"Map": ["String", "Bool"]}})
    );
    assert_eq!(
        from_json_str(r#"{"bytes":"0102","cl_type":{"Result":{"ok":"U8","err":"String"}}}"#)
            .unwrap(),
        CLValue::result_ok(CLValue::u8(2), CLType::String)
    );
    assert_eq!(
        from_json(&json!({"bytes": "01", "cl_type": {"Tuple1": ["Bool"]}})).unwrap(),
        CLValue::tuple1(CLValue::bool(true))
    );
    assert!(matches!(
        from_json(&json!({"bytes": "00", "cl_type": "Nope"})),
        Err(CodecError::UnsupportedType(_))
    ));
}

#[test]
fn accessors() {
    assert_eq!(CLValue::bool(true).as_bool(), Some(true));
    assert_eq!(CLValue::string("s").as_str(), Some("s"));
    assert_eq!(CLValue::u8(1).as_str(), None);
    assert_eq!(CLValue::any([1u8]).as_bytes(), Some(&[1u8][..]));
    assert_eq!(
        CLValue::u256(7u64).as_big_num().map(|n| n.to_string()),
        Some("7".to_string())
    );
    let option = CLValue::option_none(CLType::U8);
    assert!(!option.as_option().unwrap().is_some());
    assert_eq!(option.as_option().unwrap().inner_type(), &CLType::U8);
}
