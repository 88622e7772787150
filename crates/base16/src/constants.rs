/// Lowercase base16 alphabet.
pub const ALPHABET: &[u8; 16] = b"0123456789abcdef";
