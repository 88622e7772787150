//! Hex previews of byte slices for log fields.

use std::fmt;

/// Default number of bytes shown by [`preview`].
pub const PREVIEW_LEN: usize = 16;

/// Lazily formatted hex view of at most `max` leading bytes.
///
/// Nothing is rendered until the value is displayed, so it can be passed as
/// a log field at no cost when the level is disabled.
///
/// ```
/// use clvalue_buffers::Octets;
///
/// assert_eq!(Octets::new(&[0x01, 0x02, 0x0a, 0xff], 16).to_string(), "01 02 0a ff");
/// assert_eq!(Octets::new(&[1, 2, 3], 2).to_string(), "01 02 (+1)");
/// assert_eq!(Octets::new(&[], 16).to_string(), "");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Octets<'a> {
    bytes: &'a [u8],
    max: usize,
}

impl<'a> Octets<'a> {
    pub fn new(bytes: &'a [u8], max: usize) -> Self {
        Self { bytes, max }
    }
}

/// [`Octets`] with the default length.
pub fn preview(bytes: &[u8]) -> Octets<'_> {
    Octets::new(bytes, PREVIEW_LEN)
}

impl fmt::Display for Octets<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().take(self.max).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        if self.bytes.len() > self.max {
            if self.max > 0 {
                f.write_str(" ")?;
            }
            write!(f, "(+{})", self.bytes.len() - self.max)?;
        }
        Ok(())
    }
}
