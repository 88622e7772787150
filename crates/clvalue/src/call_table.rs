//! Call-table framing for contract-call arguments.
//!
//! ```text
//! [count: u32][(index: u16, offset: u32) * count][payload_size: u32][payloads]
//! ```
//!
//! Offsets are relative to the start of the payload region. Fields appear
//! in strictly increasing index order and their payloads are laid out in
//! the same order, so a field runs from its offset to the next one.

use clvalue_buffers::{Reader, Writer};

use crate::cl_type::CLType;
use crate::parser::decode_by_type;
use crate::value::CLValue;
use crate::CodecError;

/// Size of one `(index, offset)` table entry.
pub const CALL_TABLE_ENTRY_LENGTH: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallTableBuilder {
    /// `(index, offset, payload)` in index order.
    fields: Vec<(u16, u32, Vec<u8>)>,
    payload_size: u32,
}

/// The offset following `len` payload bytes placed at `offset`. The whole
/// payload region is addressed by `u32` offsets.
fn advance(offset: u32, len: usize, index: u16) -> Result<u32, CodecError> {
    u32::try_from(len)
        .ok()
        .and_then(|len| offset.checked_add(len))
        .ok_or(CodecError::CallTableOffset { index, offset })
}

impl CallTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field. `index` must be greater than every index added so far,
    /// and the payloads together must stay addressable by a `u32` offset.
    pub fn add_field(
        &mut self,
        index: u16,
        payload: impl Into<Vec<u8>>,
    ) -> Result<&mut Self, CodecError> {
        if let Some(&(previous, _, _)) = self.fields.last() {
            if index <= previous {
                return Err(CodecError::CallTableOrder { previous, index });
            }
        }
        let payload = payload.into();
        let offset = self.payload_size;
        self.payload_size = advance(offset, payload.len(), index)?;
        self.fields.push((index, offset, payload));
        Ok(self)
    }

    /// Appends a field holding the bytes of `value`.
    pub fn add_value(&mut self, index: u16, value: &CLValue) -> Result<&mut Self, CodecError> {
        self.add_field(index, value.to_bytes())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(
            8 + self.fields.len() * CALL_TABLE_ENTRY_LENGTH + self.payload_size as usize,
        );
        // Strictly increasing u16 indices cap the count at 65536.
        writer.u32(self.fields.len() as u32);
        for &(index, offset, _) in &self.fields {
            writer.u16(index);
            writer.u32(offset);
        }
        writer.u32(self.payload_size);
        for (_, _, payload) in &self.fields {
            writer.buf(payload);
        }
        writer.flush()
    }
}

/// A parsed call table borrowing its payloads from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallTable<'a> {
    fields: Vec<(u16, &'a [u8])>,
}

impl<'a> CallTable<'a> {
    /// Parses a table from the front of `bytes`, returning the unread tail.
    pub fn parse(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), CodecError> {
        let mut reader = Reader::new(bytes);
        let count = reader.u32()? as usize;
        let mut entries: Vec<(u16, u32)> =
            Vec::with_capacity(count.min(reader.size() / CALL_TABLE_ENTRY_LENGTH));
        for _ in 0..count {
            let index = reader.u16()?;
            let offset = reader.u32()?;
            if let Some(&(previous, previous_offset)) = entries.last() {
                if index <= previous {
                    return Err(CodecError::CallTableOrder { previous, index });
                }
                if offset < previous_offset {
                    return Err(CodecError::CallTableOffset { index, offset });
                }
            }
            entries.push((index, offset));
        }
        let payload_size = reader.u32()?;
        let payloads = reader.buf(payload_size as usize)?;
        let mut fields = Vec::with_capacity(entries.len());
        for (i, &(index, offset)) in entries.iter().enumerate() {
            let end = entries.get(i + 1).map_or(payload_size, |&(_, next)| next);
            if offset > payload_size || end > payload_size {
                return Err(CodecError::CallTableOffset { index, offset });
            }
            fields.push((index, &payloads[offset as usize..end as usize]));
        }
        tracing::trace!(fields = fields.len(), payload_size, "parsed call table");
        Ok((Self { fields }, reader.rest()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Payload of field `index`, if present.
    pub fn get(&self, index: u16) -> Option<&'a [u8]> {
        self.fields
            .binary_search_by_key(&index, |&(i, _)| i)
            .ok()
            .map(|pos| self.fields[pos].1)
    }

    /// Decodes field `index` as a `ty` value that fills the whole payload.
    pub fn decode_field(&self, index: u16, ty: &CLType) -> Result<Option<CLValue>, CodecError> {
        let Some(payload) = self.get(index) else {
            return Ok(None);
        };
        let (value, rest) = decode_by_type(payload, ty)?;
        if !rest.is_empty() {
            return Err(CodecError::CallTableOffset {
                index,
                offset: (payload.len() - rest.len()) as u32,
            });
        }
        Ok(Some(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &'a [u8])> + '_ {
        self.fields.iter().copied()
    }
}
