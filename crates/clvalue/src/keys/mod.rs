//! Opaque identifier types carried by `Key`, `URef` and `PublicKey` values.
//!
//! The codec never looks inside these; it only needs the [`OpaqueKey`]
//! operations.

mod key;
mod public_key;
mod uref;

use std::fmt;

use clvalue_buffers::Writer;
use serde_json::Value;

use crate::CodecError;

pub use key::{Key, KEY_HASH_LENGTH};
pub use public_key::PublicKey;
pub use uref::{AccessRights, URef, UREF_ADDR_LENGTH, UREF_SERIALIZED_LENGTH};

/// Byte and text forms every opaque identifier provides.
pub trait OpaqueKey: Sized + fmt::Display {
    fn write_bytes(&self, writer: &mut Writer);

    /// Decodes from the front of `bytes`, returning the unconsumed tail.
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), CodecError>;

    fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        self.write_bytes(&mut writer);
        writer.flush()
    }

    fn to_json(&self) -> Value {
        Value::String(self.to_string())
    }
}

/// Parses exactly `N` bytes of hex, reporting `text` on failure.
pub(crate) fn parse_hex_array<const N: usize>(
    hex: &str,
    text: &str,
) -> Result<[u8; N], CodecError> {
    let bytes =
        clvalue_base16::from_base16(hex).map_err(|_| CodecError::InvalidKey(text.into()))?;
    bytes
        .try_into()
        .map_err(|_| CodecError::InvalidKey(text.into()))
}
