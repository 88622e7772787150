//! Type-directed encode and decode.
//!
//! Every decode step takes the bytes still unread and hands back the value
//! together with the tail it did not consume. The tail is a sub-slice of the
//! input; nothing is copied.

mod json;
mod self_describing;

use clvalue_buffers::{preview, Reader};

use crate::bignum::{U128, U256, U512};
use crate::cl_type::{check_depth, CLType};
use crate::codec::{decode_int, decode_string};
use crate::keys::{Key, OpaqueKey, PublicKey, URef};
use crate::value::{CLValue, ListValue, MapValue, OptionValue, ResultValue};
use crate::CodecError;

pub use json::{from_json, from_json_str, to_json};
pub use self_describing::{decode_with_type, encode_with_type};

/// Value bytes of `value`, without any type information.
pub fn encode(value: &CLValue) -> Vec<u8> {
    value.to_bytes()
}

/// Decodes one value of type `ty` from the front of `bytes`.
///
/// Types nested deeper than [`MAX_TYPE_DEPTH`](crate::MAX_TYPE_DEPTH) are refused with
/// [`CodecError::NestingTooDeep`].
///
/// ```
/// use clvalue::{decode_by_type, CLType, CLValue};
///
/// let ty = CLType::tuple2(CLType::Bool, CLType::I32);
/// let (value, rest) = decode_by_type(&[0x00, 0x2b, 0x02, 0x00, 0x00], &ty).unwrap();
/// assert_eq!(value, CLValue::tuple2(CLValue::bool(false), CLValue::i32(555)));
/// assert!(rest.is_empty());
/// ```
pub fn decode_by_type<'a>(
    bytes: &'a [u8],
    ty: &CLType,
) -> Result<(CLValue, &'a [u8]), CodecError> {
    decode_value(bytes, ty, 0).inspect_err(|err| {
        tracing::debug!(
            cl_type = %ty,
            len = bytes.len(),
            bytes = %preview(bytes),
            error = %err,
            "decode failed"
        );
    })
}

pub(crate) fn read_flag(reader: &mut Reader<'_>, what: &'static str) -> Result<bool, CodecError> {
    match reader.u8()? {
        0 => Ok(false),
        1 => Ok(true),
        value => Err(CodecError::InvalidDiscriminant { what, value }),
    }
}

pub(crate) fn decode_value<'a>(
    bytes: &'a [u8],
    ty: &CLType,
    depth: usize,
) -> Result<(CLValue, &'a [u8]), CodecError> {
    check_depth(depth)?;
    tracing::trace!(cl_type = %ty, depth, remaining = bytes.len(), "decode");
    let mut reader = Reader::new(bytes);
    let value = match ty {
        CLType::Bool => CLValue::Bool(read_flag(&mut reader, "bool")?),
        CLType::I32 => CLValue::I32(reader.i32()?),
        CLType::I64 => CLValue::I64(reader.i64()?),
        CLType::U8 => CLValue::U8(reader.u8()?),
        CLType::U32 => CLValue::U32(reader.u32()?),
        CLType::U64 => CLValue::U64(reader.u64()?),
        CLType::U128 => {
            let (n, rest) = decode_int(bytes, U128::BITS, false)?;
            return Ok((CLValue::U128(U128::new(n)?), rest));
        }
        CLType::U256 => {
            let (n, rest) = decode_int(bytes, U256::BITS, false)?;
            return Ok((CLValue::U256(U256::new(n)?), rest));
        }
        CLType::U512 => {
            let (n, rest) = decode_int(bytes, U512::BITS, false)?;
            return Ok((CLValue::U512(U512::new(n)?), rest));
        }
        CLType::Unit => CLValue::Unit,
        CLType::String => {
            let (s, rest) = decode_string(bytes)?;
            return Ok((CLValue::String(s.to_owned()), rest));
        }
        CLType::Key => {
            let (key, rest) = Key::from_bytes(bytes)?;
            return Ok((CLValue::Key(key), rest));
        }
        CLType::URef => {
            let (uref, rest) = URef::from_bytes(bytes)?;
            return Ok((CLValue::URef(uref), rest));
        }
        CLType::PublicKey => {
            let (key, rest) = PublicKey::from_bytes(bytes)?;
            return Ok((CLValue::PublicKey(key), rest));
        }
        CLType::ByteArray(size) => CLValue::ByteArray(reader.buf(*size as usize)?.to_vec()),
        CLType::Any => CLValue::Any(reader.buf(reader.size())?.to_vec()),
        CLType::Option(inner) => {
            if !read_flag(&mut reader, "option")? {
                CLValue::Option(OptionValue::none((**inner).clone()))
            } else {
                let (value, rest) = decode_value(reader.rest(), inner, depth + 1)?;
                return Ok((CLValue::Option(OptionValue::some(value)), rest));
            }
        }
        CLType::Result { ok, err } => {
            let is_ok = read_flag(&mut reader, "result")?;
            let branch = if is_ok { ok } else { err };
            let (value, rest) = decode_value(reader.rest(), branch, depth + 1)?;
            let result = if is_ok {
                ResultValue::ok(value, (**err).clone())
            } else {
                ResultValue::err((**ok).clone(), value)
            };
            return Ok((CLValue::Result(result), rest));
        }
        CLType::List(element) => {
            let count = reader.u32()? as usize;
            // Cap the reservation by the bytes left; a bogus count must not allocate.
            let mut list = ListValue::with_capacity((**element).clone(), count.min(reader.size()));
            let mut rest = reader.rest();
            for _ in 0..count {
                let (item, tail) = decode_value(rest, element, depth + 1)?;
                list.push_unchecked(item);
                rest = tail;
            }
            return Ok((CLValue::List(list), rest));
        }
        CLType::Map { key, value } => {
            let count = reader.u32()?;
            let mut map = MapValue::new((**key).clone(), (**value).clone());
            let mut rest = reader.rest();
            for _ in 0..count {
                let (k, tail) = decode_value(rest, key, depth + 1)?;
                let (v, tail) = decode_value(tail, value, depth + 1)?;
                map.insert_new(k, v)?;
                rest = tail;
            }
            return Ok((CLValue::Map(map), rest));
        }
        CLType::Tuple1([t0]) => {
            let (v0, rest) = decode_value(bytes, t0, depth + 1)?;
            return Ok((CLValue::tuple1(v0), rest));
        }
        CLType::Tuple2([t0, t1]) => {
            let (v0, rest) = decode_value(bytes, t0, depth + 1)?;
            let (v1, rest) = decode_value(rest, t1, depth + 1)?;
            return Ok((CLValue::tuple2(v0, v1), rest));
        }
        CLType::Tuple3([t0, t1, t2]) => {
            let (v0, rest) = decode_value(bytes, t0, depth + 1)?;
            let (v1, rest) = decode_value(rest, t1, depth + 1)?;
            let (v2, rest) = decode_value(rest, t2, depth + 1)?;
            return Ok((CLValue::tuple3(v0, v1, v2), rest));
        }
    };
    Ok((value, reader.rest()))
}
