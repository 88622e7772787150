//! Fixed-capacity arbitrary-precision integers.
//!
//! [`BigNum`] holds a sign and a little-endian magnitude of at most
//! [`BIG_NUM_CAPACITY`] bytes, which is enough for every width the codec
//! knows about (the widest is 512 bits). Nothing here allocates.
//!
//! [`U128`], [`U256`] and [`U512`] are the payloads of the wide unsigned
//! value variants; their constructors enforce the width, so a value held in
//! one of them is always encodable.

use std::fmt;
use std::str::FromStr;

use crate::CodecError;

/// Maximum magnitude length in bytes.
pub const BIG_NUM_CAPACITY: usize = 64;

/// Sign-magnitude integer with a fixed 64-byte magnitude buffer.
///
/// Canonical form: the magnitude has no high zero bytes and zero is never
/// negative, so the derived equality is numeric equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BigNum {
    negative: bool,
    len: u8,
    mag: [u8; BIG_NUM_CAPACITY],
}

impl Default for BigNum {
    fn default() -> Self {
        Self::ZERO
    }
}

impl BigNum {
    pub const ZERO: BigNum = BigNum {
        negative: false,
        len: 0,
        mag: [0; BIG_NUM_CAPACITY],
    };

    fn from_u128_parts(magnitude: u128, negative: bool) -> Self {
        let mut mag = [0u8; BIG_NUM_CAPACITY];
        mag[..16].copy_from_slice(&magnitude.to_le_bytes());
        let len = (128 - magnitude.leading_zeros()).div_ceil(8) as u8;
        Self {
            negative: negative && magnitude != 0,
            len,
            mag,
        }
    }

    /// Builds a non-negative number from little-endian magnitude bytes.
    ///
    /// High zero bytes are ignored; anything still longer than
    /// [`BIG_NUM_CAPACITY`] is out of bounds.
    pub fn from_le_bytes(le: &[u8]) -> Result<Self, CodecError> {
        let mut n = le.len();
        while n > 0 && le[n - 1] == 0 {
            n -= 1;
        }
        if n > BIG_NUM_CAPACITY {
            return Err(CodecError::OutOfBounds {
                value: format!("{n}-byte magnitude"),
                bit_size: (BIG_NUM_CAPACITY * 8) as u32,
                signed: false,
            });
        }
        let mut mag = [0u8; BIG_NUM_CAPACITY];
        mag[..n].copy_from_slice(&le[..n]);
        Ok(Self {
            negative: false,
            len: n as u8,
            mag,
        })
    }

    /// `2^exp`, or `None` when it does not fit the capacity.
    pub fn power_of_two(exp: u32) -> Option<Self> {
        let byte = (exp / 8) as usize;
        if byte >= BIG_NUM_CAPACITY {
            return None;
        }
        let mut mag = [0u8; BIG_NUM_CAPACITY];
        mag[byte] = 1 << (exp % 8);
        Some(Self {
            negative: false,
            len: byte as u8 + 1,
            mag,
        })
    }

    /// Returns the same magnitude with the sign flipped (zero stays zero).
    pub fn negate(mut self) -> Self {
        self.negative = !self.negative && self.len > 0;
        self
    }

    /// Minimal little-endian magnitude; empty for zero.
    pub fn magnitude(&self) -> &[u8] {
        &self.mag[..self.len as usize]
    }

    pub fn is_zero(&self) -> bool {
        self.len == 0
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of significant bits in the magnitude.
    pub fn bit_len(&self) -> u32 {
        match self.len {
            0 => 0,
            len => {
                let top = self.mag[len as usize - 1];
                (len as u32 - 1) * 8 + (8 - top.leading_zeros())
            }
        }
    }

    fn is_power_of_two(&self) -> bool {
        self.magnitude()
            .iter()
            .map(|b| b.count_ones())
            .sum::<u32>()
            == 1
    }

    /// Whether the value lies inside the `(bit_size, signed)` contract.
    ///
    /// Unsigned: `[0, 2^bit_size - 1]`.
    /// Signed: `[-2^(bit_size-1), 2^(bit_size-1) - 1]`.
    pub fn fits(&self, bit_size: u32, signed: bool) -> bool {
        let bits = self.bit_len();
        if !signed {
            return !self.negative && bits <= bit_size;
        }
        if bit_size == 0 {
            return self.is_zero();
        }
        if self.negative {
            bits < bit_size || (bits == bit_size && self.is_power_of_two())
        } else {
            bits < bit_size
        }
    }

    fn magnitude_u128(&self) -> Option<u128> {
        if self.len > 16 {
            return None;
        }
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&self.mag[..16]);
        Some(u128::from_le_bytes(bytes))
    }

    pub fn to_i128(&self) -> Option<i128> {
        let m = self.magnitude_u128()?;
        if self.negative {
            if m > i128::MAX as u128 + 1 {
                return None;
            }
            Some((m as i128).wrapping_neg())
        } else {
            i128::try_from(m).ok()
        }
    }

    pub fn to_u128(&self) -> Option<u128> {
        if self.negative {
            return None;
        }
        self.magnitude_u128()
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigNum {
            fn from(value: $t) -> Self {
                Self::from_u128_parts(value as u128, false)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigNum {
            fn from(value: $t) -> Self {
                let value = value as i128;
                Self::from_u128_parts(value.unsigned_abs(), value < 0)
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128);
impl_from_signed!(i8, i16, i32, i64, i128);

impl FromStr for BigNum {
    type Err = CodecError;

    /// Parses an optionally `-`-prefixed decimal string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::InvalidNumber(s.to_string()));
        }
        let mut mag = [0u8; BIG_NUM_CAPACITY];
        let mut len = 0usize;
        for d in digits.bytes() {
            let mut carry = (d - b'0') as u32;
            for byte in mag[..len].iter_mut() {
                let acc = *byte as u32 * 10 + carry;
                *byte = acc as u8;
                carry = acc >> 8;
            }
            if carry > 0 {
                if len == BIG_NUM_CAPACITY {
                    return Err(CodecError::OutOfBounds {
                        value: s.to_string(),
                        bit_size: (BIG_NUM_CAPACITY * 8) as u32,
                        signed: negative,
                    });
                }
                mag[len] = carry as u8;
                len += 1;
            }
        }
        Ok(Self {
            negative: negative && len > 0,
            len: len as u8,
            mag,
        })
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut work = self.mag;
        let mut n = self.len as usize;
        let mut digits: Vec<u8> = Vec::with_capacity(n * 3);
        while n > 0 {
            let mut rem = 0u32;
            for i in (0..n).rev() {
                let acc = (rem << 8) | work[i] as u32;
                work[i] = (acc / 10) as u8;
                rem = acc % 10;
            }
            digits.push(b'0' + rem as u8);
            while n > 0 && work[n - 1] == 0 {
                n -= 1;
            }
        }
        if self.negative {
            digits.push(b'-');
        }
        digits.reverse();
        // Only ASCII digits and '-' were pushed.
        f.write_str(std::str::from_utf8(&digits).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNum({self})")
    }
}

macro_rules! bounded_uint {
    ($(#[$doc:meta])* $name:ident, $bits:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(BigNum);

        impl $name {
            pub const BITS: u32 = $bits;

            /// Wraps `value`, failing with `OutOfBounds` outside `[0, 2^BITS - 1]`.
            pub fn new(value: BigNum) -> Result<Self, CodecError> {
                if value.fits(Self::BITS, false) {
                    Ok(Self(value))
                } else {
                    Err(CodecError::OutOfBounds {
                        value: value.to_string(),
                        bit_size: Self::BITS,
                        signed: false,
                    })
                }
            }

            pub fn as_big_num(&self) -> &BigNum {
                &self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(BigNum::from(value))
            }
        }

        impl From<u128> for $name {
            fn from(value: u128) -> Self {
                Self(BigNum::from(value))
            }
        }

        impl TryFrom<BigNum> for $name {
            type Error = CodecError;

            fn try_from(value: BigNum) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl FromStr for $name {
            type Err = CodecError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s.parse()?)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

bounded_uint!(
    /// Unsigned 128-bit payload.
    U128,
    128
);
bounded_uint!(
    /// Unsigned 256-bit payload.
    U256,
    256
);
bounded_uint!(
    /// Unsigned 512-bit payload.
    U512,
    512
);
