use std::fmt;
use std::str::FromStr;

use clvalue_base16::to_base16;
use clvalue_buffers::{Reader, Writer};

use super::{parse_hex_array, OpaqueKey};
use crate::CodecError;

pub const UREF_ADDR_LENGTH: usize = 32;
/// Address plus one access-rights byte.
pub const UREF_SERIALIZED_LENGTH: usize = UREF_ADDR_LENGTH + 1;

const UREF_PREFIX: &str = "uref-";

/// Access-rights bit set attached to a [`URef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AccessRights(u8);

impl AccessRights {
    pub const NONE: AccessRights = AccessRights(0);
    pub const READ: AccessRights = AccessRights(0b001);
    pub const WRITE: AccessRights = AccessRights(0b010);
    pub const ADD: AccessRights = AccessRights(0b100);
    pub const READ_ADD_WRITE: AccessRights = AccessRights(0b111);

    pub fn from_bits(bits: u8) -> Option<Self> {
        (bits <= Self::READ_ADD_WRITE.0).then_some(AccessRights(bits))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: AccessRights) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for AccessRights {
    type Output = AccessRights;

    fn bitor(self, rhs: Self) -> Self::Output {
        AccessRights(self.0 | rhs.0)
    }
}

/// Unforgeable reference: a 32-byte address with access rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct URef {
    addr: [u8; UREF_ADDR_LENGTH],
    rights: AccessRights,
}

impl URef {
    pub fn new(addr: [u8; UREF_ADDR_LENGTH], rights: AccessRights) -> Self {
        Self { addr, rights }
    }

    pub fn addr(&self) -> &[u8; UREF_ADDR_LENGTH] {
        &self.addr
    }

    pub fn rights(&self) -> AccessRights {
        self.rights
    }

    pub fn with_rights(self, rights: AccessRights) -> Self {
        Self { rights, ..self }
    }
}

impl OpaqueKey for URef {
    fn write_bytes(&self, writer: &mut Writer) {
        writer.buf(&self.addr);
        writer.u8(self.rights.bits());
    }

    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), CodecError> {
        let mut reader = Reader::new(bytes);
        let addr = reader.array::<UREF_ADDR_LENGTH>()?;
        let bits = reader.u8()?;
        let rights = AccessRights::from_bits(bits).ok_or(CodecError::InvalidDiscriminant {
            what: "access rights",
            value: bits,
        })?;
        Ok((URef { addr, rights }, reader.rest()))
    }
}

impl fmt::Display for URef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{UREF_PREFIX}{}-{:03o}",
            to_base16(&self.addr),
            self.rights.bits()
        )
    }
}

impl FromStr for URef {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CodecError::InvalidKey(s.to_string());
        let body = s.strip_prefix(UREF_PREFIX).ok_or_else(invalid)?;
        let (hex, rights) = body.rsplit_once('-').ok_or_else(invalid)?;
        if rights.len() != 3 {
            return Err(invalid());
        }
        let bits = u8::from_str_radix(rights, 8).map_err(|_| invalid())?;
        let rights = AccessRights::from_bits(bits).ok_or_else(invalid)?;
        Ok(URef::new(parse_hex_array(hex, s)?, rights))
    }
}
