//! Base16 (hex) encoding and decoding.
//!
//! The CLValue JSON envelope carries value bytes as a lowercase hex string;
//! this crate is the only place that text form is produced or parsed.

mod constants;
mod from_base16;
mod to_base16;

pub use constants::ALPHABET;
pub use from_base16::from_base16;
pub use to_base16::to_base16;

/// Error type for base16 decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base16Error {
    /// The input has an odd number of characters.
    OddLength(usize),
    /// A character outside `[0-9a-fA-F]`.
    InvalidCharacter { character: char, position: usize },
}

impl std::fmt::Display for Base16Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Base16Error::OddLength(len) => write!(f, "odd base16 length {len}"),
            Base16Error::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "invalid base16 character {character:?} at position {position}"
            ),
        }
    }
}

impl std::error::Error for Base16Error {}
