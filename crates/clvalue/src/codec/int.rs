//! Integer converters enforcing the `(bit_size, signed)` contract.

use clvalue_buffers::{Reader, Writer};

use crate::bignum::BigNum;
use crate::CodecError;

fn check_width(bit_size: u32) -> Result<(), CodecError> {
    match bit_size {
        8 | 32 | 64 | 128 | 256 | 512 => Ok(()),
        _ => Err(CodecError::UnsupportedType(format!(
            "{bit_size}-bit integer"
        ))),
    }
}

fn out_of_bounds(value: &BigNum, bit_size: u32, signed: bool) -> CodecError {
    CodecError::OutOfBounds {
        value: value.to_string(),
        bit_size,
        signed,
    }
}

/// Encodes `value` as a little-endian integer of the given width.
///
/// Widths up to 64 bits are fixed-size two's complement. Wider values are
/// written as one length byte followed by the minimal little-endian
/// magnitude; zero is the single byte `0`. Negative wide values have no
/// encoding.
///
/// ```
/// use clvalue::codec::encode_int;
/// use clvalue::BigNum;
///
/// assert_eq!(encode_int(&BigNum::from(-1), 32, true).unwrap(), vec![0xff; 4]);
/// assert_eq!(encode_int(&BigNum::from(256u32), 128, false).unwrap(), vec![2, 0, 1]);
/// assert!(encode_int(&BigNum::from(256u32), 8, false).is_err());
/// ```
pub fn encode_int(value: &BigNum, bit_size: u32, signed: bool) -> Result<Vec<u8>, CodecError> {
    check_width(bit_size)?;
    if !value.fits(bit_size, signed) {
        return Err(out_of_bounds(value, bit_size, signed));
    }
    if bit_size <= 64 {
        let v = value
            .to_i128()
            .ok_or_else(|| out_of_bounds(value, bit_size, signed))?;
        let n = (bit_size / 8) as usize;
        return Ok(v.to_le_bytes()[..n].to_vec());
    }
    if value.is_negative() {
        return Err(out_of_bounds(value, bit_size, signed));
    }
    let mut writer = Writer::with_capacity(value.magnitude().len() + 1);
    write_big_uint(&mut writer, value);
    Ok(writer.flush())
}

/// Writes the length-prefixed magnitude of a non-negative wide integer.
pub fn write_big_uint(writer: &mut Writer, value: &BigNum) {
    let magnitude = value.magnitude();
    writer.u8(magnitude.len() as u8);
    writer.buf(magnitude);
}

/// Decodes an integer of the given width from the front of `bytes`.
///
/// For widths above 64 bits the length byte must not exceed `bit_size / 8`.
pub fn decode_int(
    bytes: &[u8],
    bit_size: u32,
    signed: bool,
) -> Result<(BigNum, &[u8]), CodecError> {
    check_width(bit_size)?;
    let mut reader = Reader::new(bytes);
    let max = (bit_size / 8) as usize;
    if bit_size <= 64 {
        let raw = reader.buf(max)?;
        let fill = if signed && raw[max - 1] & 0x80 != 0 {
            0xff
        } else {
            0x00
        };
        let mut wide = [fill; 16];
        wide[..max].copy_from_slice(raw);
        let value = if signed {
            BigNum::from(i128::from_le_bytes(wide))
        } else {
            BigNum::from(u128::from_le_bytes(wide))
        };
        return Ok((value, reader.rest()));
    }
    let len = reader.u8()?;
    if len as usize > max {
        return Err(CodecError::InvalidLengthPrefix { len, max });
    }
    let magnitude = reader.buf(len as usize)?;
    Ok((BigNum::from_le_bytes(magnitude)?, reader.rest()))
}
