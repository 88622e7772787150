use std::fmt;
use std::str::FromStr;

use clvalue_base16::{from_base16, to_base16};
use clvalue_buffers::{Reader, Writer};

use super::{Key, OpaqueKey};
use crate::codec::{content_hash, HASH_LENGTH};
use crate::CodecError;

const ED25519_TAG: u8 = 1;
const SECP256K1_TAG: u8 = 2;

pub const ED25519_LENGTH: usize = 32;
pub const SECP256K1_LENGTH: usize = 33;

/// Account public key, tagged by signature algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKey {
    Ed25519([u8; ED25519_LENGTH]),
    Secp256k1([u8; SECP256K1_LENGTH]),
}

impl PublicKey {
    pub fn tag(&self) -> u8 {
        match self {
            PublicKey::Ed25519(_) => ED25519_TAG,
            PublicKey::Secp256k1(_) => SECP256K1_TAG,
        }
    }

    pub fn algorithm(&self) -> &'static str {
        match self {
            PublicKey::Ed25519(_) => "ed25519",
            PublicKey::Secp256k1(_) => "secp256k1",
        }
    }

    pub fn raw_bytes(&self) -> &[u8] {
        match self {
            PublicKey::Ed25519(raw) => raw,
            PublicKey::Secp256k1(raw) => raw,
        }
    }

    /// Content hash of `algorithm ‖ 0x00 ‖ raw key bytes`.
    pub fn account_hash(&self) -> [u8; HASH_LENGTH] {
        let mut preimage = Vec::with_capacity(self.algorithm().len() + 1 + SECP256K1_LENGTH);
        preimage.extend_from_slice(self.algorithm().as_bytes());
        preimage.push(0);
        preimage.extend_from_slice(self.raw_bytes());
        content_hash(&preimage)
    }

    pub fn to_account_key(&self) -> Key {
        Key::Account(self.account_hash())
    }
}

impl OpaqueKey for PublicKey {
    fn write_bytes(&self, writer: &mut Writer) {
        writer.u8(self.tag());
        writer.buf(self.raw_bytes());
    }

    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), CodecError> {
        let mut reader = Reader::new(bytes);
        let key = match reader.u8()? {
            ED25519_TAG => PublicKey::Ed25519(reader.array()?),
            SECP256K1_TAG => PublicKey::Secp256k1(reader.array()?),
            other => {
                return Err(CodecError::InvalidDiscriminant {
                    what: "public key",
                    value: other,
                })
            }
        };
        Ok((key, reader.rest()))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{}", self.tag(), to_base16(self.raw_bytes()))
    }
}

impl FromStr for PublicKey {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = from_base16(s).map_err(|_| CodecError::InvalidKey(s.to_string()))?;
        match PublicKey::from_bytes(&bytes) {
            Ok((key, [])) => Ok(key),
            _ => Err(CodecError::InvalidKey(s.to_string())),
        }
    }
}
