//! Byte-level primitives shared by the type and value models.
//!
//! Every decode function takes the input slice and returns the decoded item
//! together with the unconsumed tail of that same slice.

mod hash;
mod int;
mod string;

pub use hash::{content_hash, HASH_LENGTH};
pub use int::{decode_int, encode_int, write_big_uint};
pub use string::{decode_string, encode_string};

/// Size of every `u32` length or count prefix.
pub const U32_SERIALIZED_LENGTH: usize = 4;
