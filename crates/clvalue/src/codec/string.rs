//! Length-prefixed UTF-8 strings.

use clvalue_buffers::{Reader, Writer};

use crate::CodecError;

/// Encodes `s` as a `u32` little-endian byte length followed by its UTF-8 bytes.
///
/// ```
/// use clvalue::codec::encode_string;
///
/// assert_eq!(encode_string("ABC"), vec![3, 0, 0, 0, 0x41, 0x42, 0x43]);
/// ```
pub fn encode_string(s: &str) -> Vec<u8> {
    let mut writer = Writer::with_capacity(4 + s.len());
    writer.str_with_len(s);
    writer.flush()
}

/// Decodes a length-prefixed string, borrowing from `bytes`.
pub fn decode_string(bytes: &[u8]) -> Result<(&str, &[u8]), CodecError> {
    let mut reader = Reader::new(bytes);
    let s = reader.str_with_len()?;
    Ok((s, reader.rest()))
}
