//! Runtime values.
//!
//! [`CLValue`] is a closed sum type with one variant per type kind, so a
//! value can only ever hold the payload its type calls for. Its [`CLType`]
//! is derived from the payload; containers carry their declared parameter
//! types so that empty containers still know what they hold.

mod bytes;
mod display;
mod json;
mod list;
mod map;
mod option;
mod result;

use crate::bignum::{BigNum, U128, U256, U512};
use crate::cl_type::CLType;
use crate::keys::{Key, PublicKey, URef};
use crate::CodecError;

pub use list::ListValue;
pub use map::MapValue;
pub use option::OptionValue;
pub use result::ResultValue;

/// A value tagged with its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CLValue {
    Bool(bool),
    I32(i32),
    I64(i64),
    U8(u8),
    U32(u32),
    U64(u64),
    U128(U128),
    U256(U256),
    U512(U512),
    Unit,
    String(String),
    Key(Key),
    URef(URef),
    PublicKey(PublicKey),
    /// Fixed-length bytes. Lengths travel as `u32`, so byte arrays, strings,
    /// lists and maps longer than `u32::MAX` cannot be encoded.
    ByteArray(Vec<u8>),
    Option(OptionValue),
    List(ListValue),
    Result(ResultValue),
    Map(MapValue),
    Tuple1(Box<CLValue>),
    Tuple2(Box<CLValue>, Box<CLValue>),
    Tuple3(Box<CLValue>, Box<CLValue>, Box<CLValue>),
    /// Raw bytes with no further structure.
    Any(Vec<u8>),
}

impl CLValue {
    pub fn bool(value: bool) -> Self {
        CLValue::Bool(value)
    }

    pub fn i32(value: i32) -> Self {
        CLValue::I32(value)
    }

    pub fn i64(value: i64) -> Self {
        CLValue::I64(value)
    }

    pub fn u8(value: u8) -> Self {
        CLValue::U8(value)
    }

    pub fn u32(value: u32) -> Self {
        CLValue::U32(value)
    }

    pub fn u64(value: u64) -> Self {
        CLValue::U64(value)
    }

    pub fn u128(value: impl Into<U128>) -> Self {
        CLValue::U128(value.into())
    }

    pub fn u256(value: impl Into<U256>) -> Self {
        CLValue::U256(value.into())
    }

    pub fn u512(value: impl Into<U512>) -> Self {
        CLValue::U512(value.into())
    }

    /// Builds a numeric value of type `ty`, enforcing its `(bit_size, signed)`
    /// contract.
    pub fn from_big_num(ty: &CLType, value: BigNum) -> Result<Self, CodecError> {
        let (bit_size, signed) = ty
            .int_contract()
            .ok_or_else(|| CodecError::UnsupportedType(format!("{ty} is not numeric")))?;
        let out_of_bounds = || CodecError::OutOfBounds {
            value: value.to_string(),
            bit_size,
            signed,
        };
        if !value.fits(bit_size, signed) {
            return Err(out_of_bounds());
        }
        Ok(match ty {
            CLType::I32 => CLValue::I32(
                value
                    .to_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .ok_or_else(out_of_bounds)?,
            ),
            CLType::I64 => CLValue::I64(value.to_i64().ok_or_else(out_of_bounds)?),
            CLType::U8 => CLValue::U8(
                value
                    .to_u64()
                    .and_then(|v| u8::try_from(v).ok())
                    .ok_or_else(out_of_bounds)?,
            ),
            CLType::U32 => CLValue::U32(
                value
                    .to_u64()
                    .and_then(|v| u32::try_from(v).ok())
                    .ok_or_else(out_of_bounds)?,
            ),
            CLType::U64 => CLValue::U64(value.to_u64().ok_or_else(out_of_bounds)?),
            CLType::U128 => CLValue::U128(U128::new(value)?),
            CLType::U256 => CLValue::U256(U256::new(value)?),
            CLType::U512 => CLValue::U512(U512::new(value)?),
            _ => return Err(CodecError::UnsupportedType(ty.to_string())),
        })
    }

    pub fn unit() -> Self {
        CLValue::Unit
    }

    pub fn string(value: impl Into<String>) -> Self {
        CLValue::String(value.into())
    }

    pub fn key(value: Key) -> Self {
        CLValue::Key(value)
    }

    pub fn uref(value: URef) -> Self {
        CLValue::URef(value)
    }

    pub fn public_key(value: PublicKey) -> Self {
        CLValue::PublicKey(value)
    }

    pub fn byte_array(bytes: impl Into<Vec<u8>>) -> Self {
        CLValue::ByteArray(bytes.into())
    }

    pub fn any(bytes: impl Into<Vec<u8>>) -> Self {
        CLValue::Any(bytes.into())
    }

    pub fn option_some(value: CLValue) -> Self {
        CLValue::Option(OptionValue::some(value))
    }

    pub fn option_none(inner: CLType) -> Self {
        CLValue::Option(OptionValue::none(inner))
    }

    /// A list of `element`-typed items; every item is checked.
    pub fn list(element: CLType, items: Vec<CLValue>) -> Result<Self, CodecError> {
        Ok(CLValue::List(ListValue::from_items(element, items)?))
    }

    /// An empty map, to be filled through [`MapValue::append`].
    pub fn map(key: CLType, value: CLType) -> Self {
        CLValue::Map(MapValue::new(key, value))
    }

    /// A map built from pairs in order; duplicate keys are rejected.
    pub fn map_from_entries(
        key: CLType,
        value: CLType,
        entries: impl IntoIterator<Item = (CLValue, CLValue)>,
    ) -> Result<Self, CodecError> {
        let mut map = MapValue::new(key, value);
        for (k, v) in entries {
            map.append(k, v)?;
        }
        Ok(CLValue::Map(map))
    }

    pub fn result_ok(value: CLValue, err: CLType) -> Self {
        CLValue::Result(ResultValue::ok(value, err))
    }

    pub fn result_err(ok: CLType, value: CLValue) -> Self {
        CLValue::Result(ResultValue::err(ok, value))
    }

    pub fn tuple1(v0: CLValue) -> Self {
        CLValue::Tuple1(Box::new(v0))
    }

    pub fn tuple2(v0: CLValue, v1: CLValue) -> Self {
        CLValue::Tuple2(Box::new(v0), Box::new(v1))
    }

    pub fn tuple3(v0: CLValue, v1: CLValue, v2: CLValue) -> Self {
        CLValue::Tuple3(Box::new(v0), Box::new(v1), Box::new(v2))
    }

    /// The value's type, derived from its payload.
    pub fn cl_type(&self) -> CLType {
        match self {
            CLValue::Bool(_) => CLType::Bool,
            CLValue::I32(_) => CLType::I32,
            CLValue::I64(_) => CLType::I64,
            CLValue::U8(_) => CLType::U8,
            CLValue::U32(_) => CLType::U32,
            CLValue::U64(_) => CLType::U64,
            CLValue::U128(_) => CLType::U128,
            CLValue::U256(_) => CLType::U256,
            CLValue::U512(_) => CLType::U512,
            CLValue::Unit => CLType::Unit,
            CLValue::String(_) => CLType::String,
            CLValue::Key(_) => CLType::Key,
            CLValue::URef(_) => CLType::URef,
            CLValue::PublicKey(_) => CLType::PublicKey,
            // Lengths past u32::MAX have no encoding; see the variant docs.
            CLValue::ByteArray(bytes) => CLType::ByteArray(bytes.len() as u32),
            CLValue::Option(option) => CLType::option(option.inner_type().clone()),
            CLValue::List(list) => CLType::list(list.element_type().clone()),
            CLValue::Result(result) => {
                CLType::result(result.ok_type().clone(), result.err_type().clone())
            }
            CLValue::Map(map) => CLType::map(map.key_type().clone(), map.value_type().clone()),
            CLValue::Tuple1(v0) => CLType::tuple1(v0.cl_type()),
            CLValue::Tuple2(v0, v1) => CLType::tuple2(v0.cl_type(), v1.cl_type()),
            CLValue::Tuple3(v0, v1, v2) => {
                CLType::tuple3(v0.cl_type(), v1.cl_type(), v2.cl_type())
            }
            CLValue::Any(_) => CLType::Any,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CLValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric payload of any integer variant.
    pub fn as_big_num(&self) -> Option<BigNum> {
        Some(match self {
            CLValue::I32(v) => BigNum::from(*v),
            CLValue::I64(v) => BigNum::from(*v),
            CLValue::U8(v) => BigNum::from(*v),
            CLValue::U32(v) => BigNum::from(*v),
            CLValue::U64(v) => BigNum::from(*v),
            CLValue::U128(v) => *v.as_big_num(),
            CLValue::U256(v) => *v.as_big_num(),
            CLValue::U512(v) => *v.as_big_num(),
            _ => return None,
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CLValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Raw payload of `ByteArray` and `Any` values.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            CLValue::ByteArray(bytes) | CLValue::Any(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_key(&self) -> Option<&Key> {
        match self {
            CLValue::Key(key) => Some(key),
            _ => None,
        }
    }

    pub fn as_uref(&self) -> Option<&URef> {
        match self {
            CLValue::URef(uref) => Some(uref),
            _ => None,
        }
    }

    pub fn as_public_key(&self) -> Option<&PublicKey> {
        match self {
            CLValue::PublicKey(key) => Some(key),
            _ => None,
        }
    }

    pub fn as_option(&self) -> Option<&OptionValue> {
        match self {
            CLValue::Option(option) => Some(option),
            _ => None,
        }
    }

    pub fn as_result(&self) -> Option<&ResultValue> {
        match self {
            CLValue::Result(result) => Some(result),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListValue> {
        match self {
            CLValue::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut ListValue> {
        match self {
            CLValue::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            CLValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut MapValue> {
        match self {
            CLValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for CLValue {
    fn from(value: bool) -> Self {
        CLValue::Bool(value)
    }
}

impl From<&str> for CLValue {
    fn from(value: &str) -> Self {
        CLValue::String(value.to_string())
    }
}

impl From<String> for CLValue {
    fn from(value: String) -> Self {
        CLValue::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_derive_from_payload() {
        let v = CLValue::tuple2(CLValue::bool(false), CLValue::i32(555));
        assert_eq!(v.cl_type(), CLType::tuple2(CLType::Bool, CLType::I32));
        let list = CLValue::list(CLType::U32, vec![CLValue::u32(1)]).unwrap();
        let v = CLValue::option_some(list);
        assert_eq!(v.cl_type(), CLType::option(CLType::list(CLType::U32)));
        assert_eq!(CLValue::byte_array([0u8; 32]).cl_type(), CLType::ByteArray(32));
        assert_eq!(
            CLValue::result_err(CLType::U8, CLValue::string("bad")).cl_type(),
            CLType::result(CLType::U8, CLType::String)
        );
    }

    #[test]
    fn from_big_num_enforces_contract() {
        let two_pow_31 = BigNum::power_of_two(31).unwrap();
        assert!(matches!(
            CLValue::from_big_num(&CLType::I32, two_pow_31),
            Err(CodecError::OutOfBounds { bit_size: 32, signed: true, .. })
        ));
        assert_eq!(
            CLValue::from_big_num(&CLType::I32, two_pow_31.negate()).unwrap(),
            CLValue::i32(i32::MIN)
        );
        assert_eq!(
            CLValue::from_big_num(&CLType::U8, BigNum::from(255u8)).unwrap(),
            CLValue::u8(255)
        );
        assert!(CLValue::from_big_num(&CLType::U8, BigNum::from(256u32)).is_err());
        assert!(CLValue::from_big_num(&CLType::U64, BigNum::from(-1)).is_err());
        assert!(matches!(
            CLValue::from_big_num(&CLType::String, BigNum::ZERO),
            Err(CodecError::UnsupportedType(_))
        ));
    }

    #[test]
    fn list_constructor_rejects_mixed_items() {
        assert!(matches!(
            CLValue::list(CLType::Bool, vec![CLValue::bool(true), CLValue::u8(1)]),
            Err(CodecError::TypeMismatch { .. })
        ));
    }
}
