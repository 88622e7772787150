//! Type reconstruction from type bytes.
//!
//! Type bytes carry no `ByteArray` length, so a type matched from bytes may
//! be only partly known. [`TypePattern`] is that partial form; it never
//! leaves the crate. The self-describing decode path resolves it into a
//! [`CLType`] by decoding the value it describes.

use clvalue_buffers::Reader;

use super::{check_depth, CLType, CLTypeTag, SIMPLE_TYPES};
use crate::value::CLValue;
use crate::CodecError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TypePattern {
    /// Fully known; contains no pending `ByteArray`.
    Resolved(CLType),
    /// A `ByteArray` whose length comes from the bytes it consumes.
    ByteArray,
    Composite(CLTypeTag, Vec<TypePattern>),
}

impl CLType {
    pub(crate) fn simple_from_tag(tag: CLTypeTag) -> Option<CLType> {
        SIMPLE_TYPES.iter().find(|t| t.tag() == tag).cloned()
    }

    /// Rebuilds a composite type from its tag and parameters.
    pub(crate) fn compose(tag: CLTypeTag, params: Vec<CLType>) -> Option<CLType> {
        let mut it = params.into_iter();
        let t = match tag {
            CLTypeTag::Option => CLType::option(it.next()?),
            CLTypeTag::List => CLType::list(it.next()?),
            CLTypeTag::Tuple1 => CLType::tuple1(it.next()?),
            CLTypeTag::Tuple2 => CLType::tuple2(it.next()?, it.next()?),
            CLTypeTag::Tuple3 => CLType::tuple3(it.next()?, it.next()?, it.next()?),
            CLTypeTag::Map => CLType::map(it.next()?, it.next()?),
            CLTypeTag::Result => CLType::result(it.next()?, it.next()?),
            _ => return None,
        };
        if it.next().is_some() {
            return None;
        }
        Some(t)
    }
}

fn arity(tag: CLTypeTag) -> usize {
    match tag {
        CLTypeTag::Option | CLTypeTag::List | CLTypeTag::Tuple1 => 1,
        CLTypeTag::Tuple2 | CLTypeTag::Map | CLTypeTag::Result => 2,
        CLTypeTag::Tuple3 => 3,
        _ => 0,
    }
}

impl TypePattern {
    /// Matches the leading type bytes, returning the pattern and the tail.
    pub(crate) fn match_bytes(bytes: &[u8]) -> Result<(TypePattern, &[u8]), CodecError> {
        Self::match_nested(bytes, 0)
    }

    fn match_nested(bytes: &[u8], depth: usize) -> Result<(TypePattern, &[u8]), CodecError> {
        check_depth(depth)?;
        let mut reader = Reader::new(bytes);
        let byte = reader.u8()?;
        let tag = CLTypeTag::from_u8(byte)
            .ok_or_else(|| CodecError::UnsupportedType(format!("type tag {byte}")))?;
        let mut rest = reader.rest();
        if tag == CLTypeTag::ByteArray {
            return Ok((TypePattern::ByteArray, rest));
        }
        if let Some(simple) = CLType::simple_from_tag(tag) {
            return Ok((TypePattern::Resolved(simple), rest));
        }
        let mut parts = Vec::with_capacity(arity(tag));
        for _ in 0..arity(tag) {
            let (part, tail) = Self::match_nested(rest, depth + 1)?;
            parts.push(part);
            rest = tail;
        }
        Ok((Self::composite(tag, parts)?, rest))
    }

    /// Collapses to `Resolved` when every part is already resolved.
    pub(crate) fn composite(tag: CLTypeTag, parts: Vec<TypePattern>) -> Result<Self, CodecError> {
        if parts.iter().all(|p| matches!(p, TypePattern::Resolved(_))) {
            let params = parts
                .into_iter()
                .filter_map(|p| match p {
                    TypePattern::Resolved(t) => Some(t),
                    _ => None,
                })
                .collect();
            return CLType::compose(tag, params)
                .map(TypePattern::Resolved)
                .ok_or_else(|| CodecError::UnsupportedType(tag.name().to_string()));
        }
        Ok(TypePattern::Composite(tag, parts))
    }

    /// The type this pattern stands for when no value bytes witness its
    /// pending parts; those resolve to `ByteArray(0)`.
    pub(crate) fn fallback(&self) -> Result<CLType, CodecError> {
        match self {
            TypePattern::Resolved(t) => Ok(t.clone()),
            TypePattern::ByteArray => Ok(CLType::ByteArray(0)),
            TypePattern::Composite(tag, parts) => {
                let params = parts
                    .iter()
                    .map(TypePattern::fallback)
                    .collect::<Result<Vec<_>, _>>()?;
                CLType::compose(*tag, params)
                    .ok_or_else(|| CodecError::UnsupportedType(tag.name().to_string()))
            }
        }
    }

    /// Narrows pending parts to the sizes `value` carries. Parts the value
    /// never reaches (a `None`, the untaken `Result` branch, an empty list)
    /// stay pending.
    pub(crate) fn witness(self, value: &CLValue) -> Result<Self, CodecError> {
        let (tag, mut parts) = match self {
            TypePattern::Resolved(ty) => return Ok(TypePattern::Resolved(ty)),
            TypePattern::ByteArray => {
                return Ok(match value {
                    CLValue::ByteArray(_) => TypePattern::Resolved(value.cl_type()),
                    _ => TypePattern::ByteArray,
                });
            }
            TypePattern::Composite(tag, parts) => (tag, parts),
        };
        let mut seen: Vec<(usize, &CLValue)> = Vec::new();
        match (tag, value) {
            (CLTypeTag::Option, CLValue::Option(option)) => {
                seen.extend(option.value().map(|v| (0, v)));
            }
            (CLTypeTag::Result, CLValue::Result(result)) => match result.value() {
                Ok(v) => seen.push((0, v)),
                Err(v) => seen.push((1, v)),
            },
            (CLTypeTag::List, CLValue::List(list)) => {
                seen.extend(list.iter().map(|v| (0, v)));
            }
            (CLTypeTag::Map, CLValue::Map(map)) => {
                for (k, v) in map.iter() {
                    seen.push((0, k));
                    seen.push((1, v));
                }
            }
            (CLTypeTag::Tuple1, CLValue::Tuple1(v0)) => seen.push((0, &**v0)),
            (CLTypeTag::Tuple2, CLValue::Tuple2(v0, v1)) => {
                seen.extend([(0, &**v0), (1, &**v1)]);
            }
            (CLTypeTag::Tuple3, CLValue::Tuple3(v0, v1, v2)) => {
                seen.extend([(0, &**v0), (1, &**v1), (2, &**v2)]);
            }
            _ => return Ok(TypePattern::Composite(tag, parts)),
        }
        for (slot, v) in seen {
            if let Some(part) = parts.get_mut(slot) {
                let pending = std::mem::replace(part, TypePattern::ByteArray);
                *part = pending.witness(v)?;
            }
        }
        Self::composite(tag, parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cl_type::MAX_TYPE_DEPTH;

    #[test]
    fn matches_resolved_tree() {
        let t = CLType::map(CLType::String, CLType::list(CLType::option(CLType::U8)));
        let mut bytes = t.to_bytes();
        bytes.push(0xee);
        let (pattern, rest) = TypePattern::match_bytes(&bytes).unwrap();
        assert_eq!(pattern, TypePattern::Resolved(t));
        assert_eq!(rest, &[0xee]);
    }

    #[test]
    fn byte_array_stays_pending() {
        let (pattern, rest) = TypePattern::match_bytes(&[19, 0, 15]).unwrap();
        assert_eq!(
            pattern,
            TypePattern::Composite(
                CLTypeTag::Tuple2,
                vec![TypePattern::Resolved(CLType::Bool), TypePattern::ByteArray]
            )
        );
        assert!(rest.is_empty());
    }

    #[test]
    fn fallback_fills_pending_byte_arrays() {
        let (pattern, _) = TypePattern::match_bytes(&[17, 10, 14, 15]).unwrap();
        assert_eq!(
            pattern.fallback().unwrap(),
            CLType::map(CLType::String, CLType::list(CLType::ByteArray(0)))
        );
    }

    #[test]
    fn unknown_tag_and_truncation() {
        assert!(matches!(
            TypePattern::match_bytes(&[23]),
            Err(CodecError::UnsupportedType(_))
        ));
        assert!(matches!(
            TypePattern::match_bytes(&[17, 10]),
            Err(CodecError::BufferUnderrun { .. })
        ));
    }

    #[test]
    fn deep_type_bytes_are_rejected() {
        let mut bytes = vec![13u8; 50_000];
        bytes.push(0);
        assert_eq!(
            TypePattern::match_bytes(&bytes),
            Err(CodecError::NestingTooDeep { max: MAX_TYPE_DEPTH })
        );
        let mut limit = vec![13u8; MAX_TYPE_DEPTH];
        limit.push(0);
        assert!(TypePattern::match_bytes(&limit).is_ok());
    }

    #[test]
    fn witness_keeps_unreached_parts_pending() {
        let (pattern, _) = TypePattern::match_bytes(&[13, 15]).unwrap();
        let none = CLValue::option_none(CLType::ByteArray(0));
        let pattern = pattern.witness(&none).unwrap();
        assert_eq!(
            pattern,
            TypePattern::Composite(CLTypeTag::Option, vec![TypePattern::ByteArray])
        );
        let some = CLValue::option_some(CLValue::byte_array([1u8, 2]));
        assert_eq!(
            pattern.witness(&some).unwrap(),
            TypePattern::Resolved(CLType::option(CLType::ByteArray(2)))
        );
    }

    #[test]
    fn witness_resolves_result_branch_by_branch() {
        let (pattern, _) = TypePattern::match_bytes(&[16, 15, 15]).unwrap();
        let ok = CLValue::result_ok(CLValue::byte_array([7u8]), CLType::ByteArray(0));
        let pattern = pattern.witness(&ok).unwrap();
        assert_eq!(
            pattern,
            TypePattern::Composite(
                CLTypeTag::Result,
                vec![
                    TypePattern::Resolved(CLType::ByteArray(1)),
                    TypePattern::ByteArray
                ]
            )
        );
        let empty = CLValue::byte_array(Vec::new());
        let err = CLValue::result_err(CLType::ByteArray(1), empty);
        let settled = CLType::result(CLType::ByteArray(1), CLType::ByteArray(0));
        assert_eq!(
            pattern.witness(&err).unwrap(),
            TypePattern::Resolved(settled)
        );
    }
}
