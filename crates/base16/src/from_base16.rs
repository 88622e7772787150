//! Base16 decoding.

use crate::Base16Error;

#[inline]
fn nibble(c: u8, position: usize) -> Result<u8, Base16Error> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Base16Error::InvalidCharacter {
            character: c as char,
            position,
        }),
    }
}

/// Decodes a hex string to bytes. Both letter cases are accepted.
///
/// # Example
///
/// ```
/// use clvalue_base16::from_base16;
///
/// assert_eq!(from_base16("0741FF").unwrap(), vec![0x07, 0x41, 0xff]);
/// assert!(from_base16("abc").is_err());
/// ```
pub fn from_base16(encoded: &str) -> Result<Vec<u8>, Base16Error> {
    let bytes = encoded.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(Base16Error::OddLength(bytes.len()));
    }
    let mut out = Vec::with_capacity(bytes.len() / 2);
    for (i, pair) in bytes.chunks_exact(2).enumerate() {
        let hi = nibble(pair[0], i * 2)?;
        let lo = nibble(pair[1], i * 2 + 1)?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}
