//! CLType/CLValue codec for smart-contract arguments.
//!
//! A [`CLType`] describes a value's shape; a [`CLValue`] is a value of one of
//! those shapes. Values encode to a compact little-endian byte form that
//! carries no type information, and decode back given the expected type.
//! Two wrappers add the type: the self-describing buffer
//! ([`encode_with_type`]/[`decode_with_type`]) and the JSON envelope
//! ([`to_json`]/[`from_json`]).
//!
//! # Example
//!
//! ```
//! use clvalue::{decode_by_type, encode, from_json, to_json, CLValue};
//!
//! let value = CLValue::tuple2(CLValue::bool(false), CLValue::string("hi"));
//! let bytes = encode(&value);
//! let (decoded, rest) = decode_by_type(&bytes, &value.cl_type()).unwrap();
//! assert_eq!(decoded, value);
//! assert!(rest.is_empty());
//!
//! let json = to_json(&value);
//! assert_eq!(json["cl_type"], serde_json::json!({"Tuple2": ["Bool", "String"]}));
//! assert_eq!(from_json(&json).unwrap(), value);
//! ```

mod bignum;
mod error;

pub mod call_table;
pub mod cl_type;
pub mod codec;
pub mod keys;
pub mod parser;
pub mod value;

pub use bignum::{BigNum, BIG_NUM_CAPACITY, U128, U256, U512};
pub use call_table::{CallTable, CallTableBuilder};
pub use cl_type::{CLType, CLTypeTag, MAX_TYPE_DEPTH, SIMPLE_TYPES};
pub use error::CodecError;
pub use keys::{AccessRights, Key, OpaqueKey, PublicKey, URef};
pub use parser::{
    decode_by_type, decode_with_type, encode, encode_with_type, from_json, from_json_str, to_json,
};
pub use value::{CLValue, ListValue, MapValue, OptionValue, ResultValue};
