//! Self-describing buffers: `[len: u32][value bytes][type bytes]`.
//!
//! The value region comes first but can only be read once the type region
//! after it has been matched. The tail handed back to the caller is what
//! follows the type bytes, so a buffer is consumed as a whole or not at all.
//! Type bytes do not carry `ByteArray` sizes; a `ByteArray` is sized by the
//! value bytes it covers, which is the rest of its enclosing region. List
//! items and map entries read before every pending size has been witnessed
//! are decoded again once the element type settles.

use clvalue_buffers::{preview, Reader, Writer};

use crate::cl_type::{check_depth, CLType, CLTypeTag, TypePattern};
use crate::codec::U32_SERIALIZED_LENGTH;
use crate::value::{CLValue, ListValue, MapValue, OptionValue, ResultValue};
use crate::CodecError;

use super::{decode_value, read_flag};

/// Wraps `value` as `[len][value bytes][type bytes]`.
///
/// Zero-length values (`Unit`, empty byte arrays) produce a buffer with a
/// zero length prefix, which [`decode_with_type`] rejects.
pub fn encode_with_type(value: &CLValue) -> Vec<u8> {
    let bytes = value.to_bytes();
    let ty = value.cl_type();
    let mut writer = Writer::with_capacity(U32_SERIALIZED_LENGTH + bytes.len() + 1);
    writer.u32(bytes.len() as u32);
    writer.buf(&bytes);
    ty.write_bytes(&mut writer);
    writer.flush()
}

/// Decodes a buffer produced by [`encode_with_type`].
///
/// The returned tail is whatever follows the type bytes. The value bytes
/// must be consumed exactly by the matched type.
pub fn decode_with_type(bytes: &[u8]) -> Result<(CLValue, &[u8]), CodecError> {
    let mut reader = Reader::new(bytes);
    let len = reader
        .u32()
        .map_err(|_| CodecError::MalformedSelfDescribingBuffer("missing length prefix"))?;
    if len == 0 {
        return Err(CodecError::MalformedSelfDescribingBuffer("zero length prefix"));
    }
    let value_bytes = reader.buf(len as usize)?;
    let (pattern, tail) = TypePattern::match_bytes(reader.rest())?;
    tracing::trace!(len, pattern = ?pattern, "self-describing decode");
    let (value, leftover) = decode_pattern(value_bytes, &pattern, 0).inspect_err(|err| {
        tracing::debug!(
            value_bytes = %preview(value_bytes),
            error = %err,
            "self-describing decode failed"
        );
    })?;
    if !leftover.is_empty() {
        return Err(CodecError::MalformedSelfDescribingBuffer(
            "value bytes not fully consumed by their type",
        ));
    }
    Ok((value, tail))
}

fn decode_pattern<'a>(
    bytes: &'a [u8],
    pattern: &TypePattern,
    depth: usize,
) -> Result<(CLValue, &'a [u8]), CodecError> {
    check_depth(depth)?;
    let shape = match pattern {
        TypePattern::Resolved(ty) => return decode_value(bytes, ty, depth),
        TypePattern::ByteArray => {
            let end = &bytes[bytes.len()..];
            return Ok((CLValue::ByteArray(bytes.to_vec()), end));
        }
        TypePattern::Composite(tag, parts) => (*tag, parts.as_slice()),
    };
    let mut reader = Reader::new(bytes);
    let next = depth + 1;
    match shape {
        (CLTypeTag::Option, [inner]) => {
            if !read_flag(&mut reader, "option")? {
                let none = OptionValue::none(inner.fallback()?);
                return Ok((CLValue::Option(none), reader.rest()));
            }
            let (value, rest) = decode_pattern(reader.rest(), inner, next)?;
            Ok((CLValue::Option(OptionValue::some(value)), rest))
        }
        (CLTypeTag::Result, [ok, err]) => {
            if read_flag(&mut reader, "result")? {
                let (value, rest) = decode_pattern(reader.rest(), ok, next)?;
                Ok((CLValue::Result(ResultValue::ok(value, err.fallback()?)), rest))
            } else {
                let (value, rest) = decode_pattern(reader.rest(), err, next)?;
                Ok((CLValue::Result(ResultValue::err(ok.fallback()?, value)), rest))
            }
        }
        (CLTypeTag::List, [element]) => {
            let count = reader.u32()? as usize;
            let mut element = element.clone();
            let mut rest = reader.rest();
            // Items read while the element type is still pending are kept as
            // bytes and decoded again once every pending size is witnessed.
            let mut early: Vec<&[u8]> = Vec::new();
            let mut items = Vec::with_capacity(count.min(rest.len()));
            for _ in 0..count {
                if let TypePattern::Resolved(ty) = &element {
                    let (item, tail) = decode_value(rest, ty, next)?;
                    items.push(item);
                    rest = tail;
                    continue;
                }
                let (item, tail) = decode_pattern(rest, &element, next)?;
                early.push(consumed(rest, tail));
                element = element.witness(&item)?;
                rest = tail;
            }
            let element = element.fallback()?;
            let mut list = ListValue::with_capacity(element.clone(), early.len() + items.len());
            for item in early {
                list.push_unchecked(settle(item, &element, next)?);
            }
            for item in items {
                list.push_unchecked(item);
            }
            Ok((CLValue::List(list), rest))
        }
        (CLTypeTag::Map, [key, value]) => {
            let count = reader.u32()?;
            let (mut key, mut value) = (key.clone(), value.clone());
            let mut rest = reader.rest();
            let mut early: Vec<(&[u8], &[u8])> = Vec::new();
            let mut entries = Vec::new();
            for _ in 0..count {
                if let (TypePattern::Resolved(kt), TypePattern::Resolved(vt)) = (&key, &value) {
                    let (k, tail) = decode_value(rest, kt, next)?;
                    let (v, tail) = decode_value(tail, vt, next)?;
                    entries.push((k, v));
                    rest = tail;
                    continue;
                }
                let (k, after_key) = decode_pattern(rest, &key, next)?;
                let (v, tail) = decode_pattern(after_key, &value, next)?;
                early.push((consumed(rest, after_key), consumed(after_key, tail)));
                key = key.witness(&k)?;
                value = value.witness(&v)?;
                rest = tail;
            }
            let (key, value) = (key.fallback()?, value.fallback()?);
            let mut map = MapValue::new(key.clone(), value.clone());
            for (k, v) in early {
                map.insert_new(settle(k, &key, next)?, settle(v, &value, next)?)?;
            }
            for (k, v) in entries {
                map.insert_new(k, v)?;
            }
            Ok((CLValue::Map(map), rest))
        }
        (CLTypeTag::Tuple1, [t0]) => {
            let (v0, rest) = decode_pattern(bytes, t0, next)?;
            Ok((CLValue::tuple1(v0), rest))
        }
        (CLTypeTag::Tuple2, [t0, t1]) => {
            let (v0, rest) = decode_pattern(bytes, t0, next)?;
            let (v1, rest) = decode_pattern(rest, t1, next)?;
            Ok((CLValue::tuple2(v0, v1), rest))
        }
        (CLTypeTag::Tuple3, [t0, t1, t2]) => {
            let (v0, rest) = decode_pattern(bytes, t0, next)?;
            let (v1, rest) = decode_pattern(rest, t1, next)?;
            let (v2, rest) = decode_pattern(rest, t2, next)?;
            Ok((CLValue::tuple3(v0, v1, v2), rest))
        }
        (tag, _) => Err(CodecError::UnsupportedType(tag.name().to_string())),
    }
}

/// The front of `bytes` that a decode consumed before leaving `tail`.
fn consumed<'a>(bytes: &'a [u8], tail: &[u8]) -> &'a [u8] {
    &bytes[..bytes.len() - tail.len()]
}

/// Decodes an item's bytes again under its settled type.
fn settle(bytes: &[u8], ty: &CLType, depth: usize) -> Result<CLValue, CodecError> {
    let (value, rest) = decode_value(bytes, ty, depth)?;
    if !rest.is_empty() {
        return Err(CodecError::MalformedSelfDescribingBuffer(
            "item bytes not consumed by the settled type",
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cl_type::MAX_TYPE_DEPTH;

    #[test]
    fn layout_is_len_value_type() {
        let value = CLValue::string("ABC");
        assert_eq!(
            encode_with_type(&value),
            vec![7, 0, 0, 0, 3, 0, 0, 0, 0x41, 0x42, 0x43, 10]
        );
    }

    #[test]
    fn tail_follows_type_bytes() {
        let mut bytes = encode_with_type(&CLValue::option_some(CLValue::u32(9)));
        bytes.extend([0xfe, 0xed]);
        let (value, rest) = decode_with_type(&bytes).unwrap();
        assert_eq!(value, CLValue::option_some(CLValue::u32(9)));
        assert_eq!(rest, &[0xfe, 0xed]);
    }

    #[test]
    fn byte_array_size_comes_from_value_region() {
        let value = CLValue::tuple2(CLValue::u8(1), CLValue::byte_array([9u8; 5]));
        let encoded = encode_with_type(&value);
        let (decoded, rest) = decode_with_type(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(decoded.cl_type(), CLType::tuple2(CLType::U8, CLType::ByteArray(5)));
        assert!(rest.is_empty());
    }

    #[test]
    fn pending_byte_array_swallows_list_region() {
        let value = CLValue::list(
            CLType::ByteArray(2),
            vec![CLValue::byte_array([1u8, 2]), CLValue::byte_array([3u8, 4])],
        )
        .unwrap();
        // A pending ByteArray swallows its whole region, so only one item fits.
        let bytes = encode_with_type(&value);
        assert!(decode_with_type(&bytes).is_err());
        let single =
            CLValue::list(CLType::ByteArray(2), vec![CLValue::byte_array([1u8, 2])]).unwrap();
        assert_eq!(decode_with_type(&encode_with_type(&single)).unwrap().0, single);
    }

    #[test]
    fn malformed_prefixes() {
        assert_eq!(
            decode_with_type(&[1, 0]),
            Err(CodecError::MalformedSelfDescribingBuffer("missing length prefix"))
        );
        assert_eq!(
            decode_with_type(&encode_with_type(&CLValue::unit())),
            Err(CodecError::MalformedSelfDescribingBuffer("zero length prefix"))
        );
    }

    #[test]
    fn value_region_must_be_consumed() {
        // len 2, value [1, 1], type Bool
        assert!(matches!(
            decode_with_type(&[2, 0, 0, 0, 1, 1, 0]),
            Err(CodecError::MalformedSelfDescribingBuffer(_))
        ));
    }

    #[test]
    fn later_list_item_witnesses_pending_size() {
        let element = CLType::option(CLType::ByteArray(2));
        let value = CLValue::list(
            element.clone(),
            vec![
                CLValue::option_none(CLType::ByteArray(2)),
                CLValue::option_some(CLValue::byte_array([1u8, 2])),
            ],
        )
        .unwrap();
        let encoded = encode_with_type(&value);
        let (decoded, rest) = decode_with_type(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(decoded.cl_type(), CLType::list(element));
        assert!(rest.is_empty());
    }

    #[test]
    fn later_map_entry_witnesses_pending_size() {
        let value_type = CLType::result(CLType::ByteArray(3), CLType::U8);
        let value = CLValue::map_from_entries(
            CLType::U8,
            value_type.clone(),
            vec![
                (CLValue::u8(1), CLValue::result_err(CLType::ByteArray(3), CLValue::u8(9))),
                (
                    CLValue::u8(2),
                    CLValue::result_ok(CLValue::byte_array([4u8, 5, 6]), CLType::U8),
                ),
            ],
        )
        .unwrap();
        let (decoded, _) = decode_with_type(&encode_with_type(&value)).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(decoded.cl_type(), CLType::map(CLType::U8, value_type));
    }

    #[test]
    fn unwitnessed_list_items_fall_back_to_empty_arrays() {
        let value = CLValue::list(
            CLType::option(CLType::ByteArray(4)),
            vec![CLValue::option_none(CLType::ByteArray(4)); 3],
        )
        .unwrap();
        let (decoded, _) = decode_with_type(&encode_with_type(&value)).unwrap();
        assert_eq!(decoded.cl_type(), CLType::list(CLType::option(CLType::ByteArray(0))));
        assert_eq!(decoded.as_list().map(|list| list.len()), Some(3));
    }

    #[test]
    fn deep_type_bytes_fail_without_recursing() {
        let mut bytes = vec![1, 0, 0, 0, 0];
        bytes.extend(std::iter::repeat(13u8).take(50_000));
        bytes.push(0);
        assert_eq!(
            decode_with_type(&bytes),
            Err(CodecError::NestingTooDeep { max: MAX_TYPE_DEPTH })
        );
    }
}
