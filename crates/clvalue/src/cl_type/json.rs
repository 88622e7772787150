//! Type JSON projection.
//!
//! Simple types map to their name. Composite types map to a single-key
//! object: one nested type for `Option`, `List`, `Tuple1` and the size for
//! `ByteArray`; an array of nested types for `Tuple2`, `Tuple3`, `Map`
//! (key, value) and `Result` (ok, err).

use serde_json::{json, Value};

use super::{check_depth, CLType};
use crate::CodecError;

fn invalid(what: impl Into<String>) -> CodecError {
    CodecError::InvalidJson(what.into())
}

fn param_array<const N: usize>(
    name: &str,
    json: &Value,
    depth: usize,
) -> Result<[CLType; N], CodecError> {
    let items = json
        .as_array()
        .filter(|items| items.len() == N)
        .ok_or_else(|| invalid(format!("{name} expects an array of {N} types")))?;
    let mut out: [CLType; N] = std::array::from_fn(|_| CLType::Unit);
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = CLType::from_json_nested(item, depth)?;
    }
    Ok(out)
}

/// `[a, b]`, or the object form `{first: a, second: b}` used by node JSON.
fn param_pair(
    name: &str,
    json: &Value,
    first: &str,
    second: &str,
    depth: usize,
) -> Result<(CLType, CLType), CodecError> {
    if let Some(obj) = json.as_object() {
        let a = obj
            .get(first)
            .ok_or_else(|| invalid(format!("{name} is missing {first:?}")))?;
        let b = obj
            .get(second)
            .ok_or_else(|| invalid(format!("{name} is missing {second:?}")))?;
        let a = CLType::from_json_nested(a, depth)?;
        return Ok((a, CLType::from_json_nested(b, depth)?));
    }
    let [a, b] = param_array::<2>(name, json, depth)?;
    Ok((a, b))
}

impl CLType {
    pub fn to_json(&self) -> Value {
        match self {
            CLType::ByteArray(size) => json!({ "ByteArray": size }),
            CLType::Option(inner) => json!({ "Option": inner.to_json() }),
            CLType::List(inner) => json!({ "List": inner.to_json() }),
            CLType::Tuple1([t0]) => json!({ "Tuple1": t0.to_json() }),
            CLType::Tuple2([t0, t1]) => json!({ "Tuple2": [t0.to_json(), t1.to_json()] }),
            CLType::Tuple3([t0, t1, t2]) => {
                json!({ "Tuple3": [t0.to_json(), t1.to_json(), t2.to_json()] })
            }
            CLType::Map { key, value } => json!({ "Map": [key.to_json(), value.to_json()] }),
            CLType::Result { ok, err } => json!({ "Result": [ok.to_json(), err.to_json()] }),
            _ => Value::String(self.name().to_string()),
        }
    }

    /// Parses a type from its JSON form. Nesting deeper than
    /// [`MAX_TYPE_DEPTH`](super::MAX_TYPE_DEPTH) is refused.
    pub fn from_json(json: &Value) -> Result<Self, CodecError> {
        Self::from_json_nested(json, 0)
    }

    fn from_json_nested(json: &Value, depth: usize) -> Result<Self, CodecError> {
        check_depth(depth)?;
        let obj = match json {
            Value::String(name) => return name.parse(),
            Value::Object(obj) if obj.len() == 1 => obj,
            other => return Err(invalid(format!("not a type: {other}"))),
        };
        let Some((name, param)) = obj.iter().next() else {
            return Err(invalid("empty type object"));
        };
        let next = depth + 1;
        Ok(match name.as_str() {
            "ByteArray" => {
                let size = param
                    .as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| invalid(format!("bad ByteArray size {param}")))?;
                CLType::ByteArray(size)
            }
            "Option" => CLType::option(Self::from_json_nested(param, next)?),
            "List" => CLType::list(Self::from_json_nested(param, next)?),
            "Tuple1" => match param {
                Value::Array(_) => {
                    let [t0] = param_array::<1>(name, param, next)?;
                    CLType::tuple1(t0)
                }
                _ => CLType::tuple1(Self::from_json_nested(param, next)?),
            },
            "Tuple2" => {
                let [t0, t1] = param_array::<2>(name, param, next)?;
                CLType::tuple2(t0, t1)
            }
            "Tuple3" => {
                let [t0, t1, t2] = param_array::<3>(name, param, next)?;
                CLType::tuple3(t0, t1, t2)
            }
            "Map" => {
                let (key, value) = param_pair(name, param, "key", "value", next)?;
                CLType::map(key, value)
            }
            "Result" => {
                let (ok, err) = param_pair(name, param, "ok", "err", next)?;
                CLType::result(ok, err)
            }
            other => return Err(CodecError::UnsupportedType(other.to_string())),
        })
    }
}
