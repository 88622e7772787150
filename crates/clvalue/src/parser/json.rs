//! JSON envelope: `{"bytes": <hex value bytes>, "cl_type": <type JSON>}`.

use clvalue_base16::{from_base16, to_base16};
use serde_json::{json, Value};

use crate::cl_type::CLType;
use crate::value::CLValue;
use crate::CodecError;

use super::decode_by_type;

/// ```
/// use clvalue::{to_json, CLValue};
///
/// assert_eq!(
///     to_json(&CLValue::string("ABC-DEF")).to_string(),
///     r#"{"bytes":"070000004142432d444546","cl_type":"String"}"#
/// );
/// ```
pub fn to_json(value: &CLValue) -> Value {
    json!({
        "bytes": to_base16(&value.to_bytes()),
        "cl_type": value.cl_type().to_json(),
    })
}

/// Rebuilds a value from its envelope. The hex bytes must decode to exactly
/// one value of the declared type.
pub fn from_json(json: &Value) -> Result<CLValue, CodecError> {
    let object = json
        .as_object()
        .ok_or_else(|| CodecError::InvalidJson("expected an object".into()))?;
    let hex = object
        .get("bytes")
        .and_then(Value::as_str)
        .ok_or_else(|| CodecError::InvalidJson("missing string field \"bytes\"".into()))?;
    let ty = object
        .get("cl_type")
        .ok_or_else(|| CodecError::InvalidJson("missing field \"cl_type\"".into()))
        .and_then(CLType::from_json)?;
    let bytes = from_base16(hex)?;
    let (value, rest) = decode_by_type(&bytes, &ty)?;
    if !rest.is_empty() {
        return Err(CodecError::InvalidJson(format!(
            "{} trailing bytes after {ty} value",
            rest.len()
        )));
    }
    Ok(value)
}

pub fn from_json_str(text: &str) -> Result<CLValue, CodecError> {
    let json: Value =
        serde_json::from_str(text).map_err(|err| CodecError::InvalidJson(err.to_string()))?;
    from_json(&json)
}
