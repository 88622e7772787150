//! Type descriptors.
//!
//! A [`CLType`] is either simple (one tag byte, JSON is its name) or
//! composite (tag byte followed by its parameters, JSON is a single-key
//! object). Equality is structural.

mod json;
mod pattern;
mod tag;

use std::fmt;
use std::str::FromStr;

use clvalue_buffers::Writer;

use crate::CodecError;

pub(crate) use pattern::TypePattern;
pub use tag::CLTypeTag;

/// Descriptor of a value's shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CLType {
    Bool,
    I32,
    I64,
    U8,
    U32,
    U64,
    U128,
    U256,
    U512,
    Unit,
    String,
    Key,
    URef,
    Any,
    PublicKey,
    /// Fixed-length byte array; the length is only present in the value bytes.
    ByteArray(u32),
    Option(Box<CLType>),
    List(Box<CLType>),
    Result {
        ok: Box<CLType>,
        err: Box<CLType>,
    },
    Map {
        key: Box<CLType>,
        value: Box<CLType>,
    },
    Tuple1([Box<CLType>; 1]),
    Tuple2([Box<CLType>; 2]),
    Tuple3([Box<CLType>; 3]),
}

/// Every simple type, in tag order.
pub const SIMPLE_TYPES: [CLType; 15] = [
    CLType::Bool,
    CLType::I32,
    CLType::I64,
    CLType::U8,
    CLType::U32,
    CLType::U64,
    CLType::U128,
    CLType::U256,
    CLType::U512,
    CLType::Unit,
    CLType::String,
    CLType::Key,
    CLType::URef,
    CLType::Any,
    CLType::PublicKey,
];

/// Deepest composite nesting accepted from type bytes, type JSON, or a type
/// driving a decode. A bare simple type has depth 0.
pub const MAX_TYPE_DEPTH: usize = 64;

pub(crate) fn check_depth(depth: usize) -> Result<(), CodecError> {
    if depth > MAX_TYPE_DEPTH {
        return Err(CodecError::NestingTooDeep { max: MAX_TYPE_DEPTH });
    }
    Ok(())
}

impl CLType {
    pub fn option(inner: CLType) -> Self {
        CLType::Option(Box::new(inner))
    }

    pub fn list(element: CLType) -> Self {
        CLType::List(Box::new(element))
    }

    pub fn result(ok: CLType, err: CLType) -> Self {
        CLType::Result {
            ok: Box::new(ok),
            err: Box::new(err),
        }
    }

    pub fn map(key: CLType, value: CLType) -> Self {
        CLType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn tuple1(t0: CLType) -> Self {
        CLType::Tuple1([Box::new(t0)])
    }

    pub fn tuple2(t0: CLType, t1: CLType) -> Self {
        CLType::Tuple2([Box::new(t0), Box::new(t1)])
    }

    pub fn tuple3(t0: CLType, t1: CLType, t2: CLType) -> Self {
        CLType::Tuple3([Box::new(t0), Box::new(t1), Box::new(t2)])
    }

    pub fn tag(&self) -> CLTypeTag {
        match self {
            CLType::Bool => CLTypeTag::Bool,
            CLType::I32 => CLTypeTag::I32,
            CLType::I64 => CLTypeTag::I64,
            CLType::U8 => CLTypeTag::U8,
            CLType::U32 => CLTypeTag::U32,
            CLType::U64 => CLTypeTag::U64,
            CLType::U128 => CLTypeTag::U128,
            CLType::U256 => CLTypeTag::U256,
            CLType::U512 => CLTypeTag::U512,
            CLType::Unit => CLTypeTag::Unit,
            CLType::String => CLTypeTag::String,
            CLType::Key => CLTypeTag::Key,
            CLType::URef => CLTypeTag::URef,
            CLType::Any => CLTypeTag::Any,
            CLType::PublicKey => CLTypeTag::PublicKey,
            CLType::ByteArray(_) => CLTypeTag::ByteArray,
            CLType::Option(_) => CLTypeTag::Option,
            CLType::List(_) => CLTypeTag::List,
            CLType::Result { .. } => CLTypeTag::Result,
            CLType::Map { .. } => CLTypeTag::Map,
            CLType::Tuple1(_) => CLTypeTag::Tuple1,
            CLType::Tuple2(_) => CLTypeTag::Tuple2,
            CLType::Tuple3(_) => CLTypeTag::Tuple3,
        }
    }

    /// Top-level type name, e.g. `"Option"` for `Option(U8)`.
    pub fn name(&self) -> &'static str {
        self.tag().name()
    }

    pub fn is_simple(&self) -> bool {
        SIMPLE_TYPES.contains(self)
    }

    /// `(bit_size, signed)` for numeric types.
    pub fn int_contract(&self) -> Option<(u32, bool)> {
        match self {
            CLType::I32 => Some((32, true)),
            CLType::I64 => Some((64, true)),
            CLType::U8 => Some((8, false)),
            CLType::U32 => Some((32, false)),
            CLType::U64 => Some((64, false)),
            CLType::U128 => Some((128, false)),
            CLType::U256 => Some((256, false)),
            CLType::U512 => Some((512, false)),
            _ => None,
        }
    }

    /// Type parameters in declared order.
    pub fn params(&self) -> Vec<&CLType> {
        match self {
            CLType::Option(inner) | CLType::List(inner) => vec![&**inner],
            CLType::Result { ok, err } => vec![&**ok, &**err],
            CLType::Map { key, value } => vec![&**key, &**value],
            CLType::Tuple1(ts) => ts.iter().map(|t| &**t).collect(),
            CLType::Tuple2(ts) => ts.iter().map(|t| &**t).collect(),
            CLType::Tuple3(ts) => ts.iter().map(|t| &**t).collect(),
            _ => Vec::new(),
        }
    }

    /// Tag byte followed by each parameter's bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        self.write_bytes(&mut writer);
        writer.flush()
    }

    pub fn write_bytes(&self, writer: &mut Writer) {
        writer.u8(self.tag() as u8);
        for param in self.params() {
            param.write_bytes(writer);
        }
    }
}

impl fmt::Display for CLType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CLType::ByteArray(size) => write!(f, "ByteArray({size})"),
            _ if self.is_simple() => f.write_str(self.name()),
            _ => {
                write!(f, "{}(", self.name())?;
                for (i, param) in self.params().into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl FromStr for CLType {
    type Err = CodecError;

    /// Parses a simple type name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SIMPLE_TYPES
            .iter()
            .find(|t| t.name() == s)
            .cloned()
            .ok_or_else(|| CodecError::UnsupportedType(s.to_string()))
    }
}
