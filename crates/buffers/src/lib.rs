//! Binary buffer utilities for the CLValue codec.
//!
//! All multi-byte quantities on the CLValue wire are little-endian, and every
//! read is bounds-checked: a short buffer is reported as
//! [`BufferError::EndOfBuffer`] rather than a panic.
//!
//! # Overview
//!
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`Octets`] - Hex preview of a byte slice for log output
//!
//! # Example
//!
//! ```
//! use clvalue_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u32(0x0203);
//! writer.str_with_len("hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.u32().unwrap(), 0x0203);
//! assert_eq!(reader.str_with_len().unwrap(), "hello");
//! assert!(reader.is_empty());
//! ```

mod octets;
mod reader;
mod writer;

pub use octets::{preview, Octets, PREVIEW_LEN};
pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer { needed: usize, available: usize },
    /// Invalid UTF-8 sequence.
    InvalidUtf8,
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer { needed, available } => write!(
                f,
                "end of buffer: needed {needed} bytes, {available} available"
            ),
            BufferError::InvalidUtf8 => write!(f, "invalid UTF-8 sequence"),
        }
    }
}

impl std::error::Error for BufferError {}
