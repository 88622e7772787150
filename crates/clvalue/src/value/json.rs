//! Per-variant JSON projection ("parsed" form).
//!
//! Emit-only: reading JSON back goes through the `{bytes, cl_type}`
//! envelope, which carries the type this projection drops.

use clvalue_base16::to_base16;
use serde_json::{json, Value};

use crate::keys::OpaqueKey;

use super::CLValue;

impl CLValue {
    /// Human-readable JSON rendering of the payload.
    ///
    /// Integers wider than 32 bits are rendered as decimal strings so that
    /// JSON consumers with double-precision numbers do not lose digits.
    pub fn to_parsed_json(&self) -> Value {
        match self {
            CLValue::Bool(v) => Value::Bool(*v),
            CLValue::I32(v) => json!(v),
            CLValue::U8(v) => json!(v),
            CLValue::U32(v) => json!(v),
            CLValue::I64(v) => Value::String(v.to_string()),
            CLValue::U64(v) => Value::String(v.to_string()),
            CLValue::U128(v) => Value::String(v.to_string()),
            CLValue::U256(v) => Value::String(v.to_string()),
            CLValue::U512(v) => Value::String(v.to_string()),
            CLValue::Unit => Value::Null,
            CLValue::String(s) => Value::String(s.clone()),
            CLValue::Key(key) => key.to_json(),
            CLValue::URef(uref) => uref.to_json(),
            CLValue::PublicKey(key) => key.to_json(),
            CLValue::ByteArray(bytes) | CLValue::Any(bytes) => Value::String(to_base16(bytes)),
            CLValue::Option(option) => option
                .value()
                .map_or(Value::Null, CLValue::to_parsed_json),
            CLValue::List(list) => list.iter().map(CLValue::to_parsed_json).collect(),
            CLValue::Result(result) => match result.value() {
                Ok(ok) => json!({ "Ok": ok.to_parsed_json() }),
                Err(err) => json!({ "Err": err.to_parsed_json() }),
            },
            CLValue::Map(map) => map
                .iter()
                .map(|(k, v)| {
                    json!({ "key": k.to_parsed_json(), "value": v.to_parsed_json() })
                })
                .collect(),
            CLValue::Tuple1(v0) => json!([v0.to_parsed_json()]),
            CLValue::Tuple2(v0, v1) => json!([v0.to_parsed_json(), v1.to_parsed_json()]),
            CLValue::Tuple3(v0, v1, v2) => json!([
                v0.to_parsed_json(),
                v1.to_parsed_json(),
                v2.to_parsed_json()
            ]),
        }
    }
}
