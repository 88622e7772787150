//! Base16 encoding.

use crate::constants::ALPHABET;

/// Encodes bytes as a lowercase hex string.
///
/// # Example
///
/// ```
/// use clvalue_base16::to_base16;
///
/// assert_eq!(to_base16(&[0x07, 0x41, 0xff]), "0741ff");
/// assert_eq!(to_base16(&[]), "");
/// ```
pub fn to_base16(uint8: &[u8]) -> String {
    let mut out = String::with_capacity(uint8.len() * 2);
    for &byte in uint8 {
        out.push(ALPHABET[(byte >> 4) as usize] as char);
        out.push(ALPHABET[(byte & 0x0f) as usize] as char);
    }
    out
}
