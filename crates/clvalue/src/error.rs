//! Codec error type.

use clvalue_base16::Base16Error;
use clvalue_buffers::BufferError;
use thiserror::Error;

use crate::cl_type::CLType;

/// Error type for every encode, decode and value-construction operation.
///
/// Errors are never wrapped on their way up: a failure deep inside a nested
/// decode reaches the caller exactly as it was raised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("value {value} is out of bounds for a {bit_size}-bit integer (signed: {signed})")]
    OutOfBounds {
        value: String,
        bit_size: u32,
        signed: bool,
    },
    #[error("buffer underrun: needed {needed} bytes, {available} available")]
    BufferUnderrun { needed: usize, available: usize },
    #[error("invalid {what} discriminant {value}")]
    InvalidDiscriminant { what: &'static str, value: u8 },
    #[error("unsupported type: {0}")]
    UnsupportedType(String),
    #[error("duplicate map key: {0}")]
    DuplicateKey(String),
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("malformed self-describing buffer: {0}")]
    MalformedSelfDescribingBuffer(&'static str),
    #[error("length prefix {len} exceeds {max} bytes")]
    InvalidLengthPrefix { len: u8, max: usize },
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("type nesting exceeds {max} levels")]
    NestingTooDeep { max: usize },
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: CLType, found: CLType },
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    #[error("invalid base16: {0}")]
    InvalidBase16(#[from] Base16Error),
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("invalid key: {0:?}")]
    InvalidKey(String),
    #[error("call table field {index} added after field {previous}")]
    CallTableOrder { previous: u16, index: u16 },
    #[error("call table field {index} has invalid offset {offset}")]
    CallTableOffset { index: u16, offset: u32 },
}

impl From<BufferError> for CodecError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer { needed, available } => {
                CodecError::BufferUnderrun { needed, available }
            }
            BufferError::InvalidUtf8 => CodecError::InvalidUtf8,
        }
    }
}
