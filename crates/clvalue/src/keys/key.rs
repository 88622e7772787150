use std::fmt;
use std::str::FromStr;

use clvalue_base16::to_base16;
use clvalue_buffers::{Reader, Writer};

use super::{parse_hex_array, OpaqueKey, URef};
use crate::CodecError;

pub const KEY_HASH_LENGTH: usize = 32;

const ACCOUNT_TAG: u8 = 0;
const HASH_TAG: u8 = 1;
const UREF_TAG: u8 = 2;
const TRANSFER_TAG: u8 = 3;
const DEPLOY_INFO_TAG: u8 = 4;
const ERA_INFO_TAG: u8 = 5;
const BALANCE_TAG: u8 = 6;
const DICTIONARY_TAG: u8 = 9;

const ACCOUNT_PREFIX: &str = "account-hash-";
const HASH_PREFIX: &str = "hash-";
const TRANSFER_PREFIX: &str = "transfer-";
const DEPLOY_INFO_PREFIX: &str = "deploy-";
const ERA_INFO_PREFIX: &str = "era-";
const BALANCE_PREFIX: &str = "balance-";
const DICTIONARY_PREFIX: &str = "dictionary-";

type Hash = [u8; KEY_HASH_LENGTH];

/// Global-state address: a tag byte followed by the variant payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Account(Hash),
    Hash(Hash),
    URef(URef),
    Transfer(Hash),
    DeployInfo(Hash),
    EraInfo(u64),
    Balance(Hash),
    Dictionary(Hash),
}

impl Key {
    pub fn tag(&self) -> u8 {
        match self {
            Key::Account(_) => ACCOUNT_TAG,
            Key::Hash(_) => HASH_TAG,
            Key::URef(_) => UREF_TAG,
            Key::Transfer(_) => TRANSFER_TAG,
            Key::DeployInfo(_) => DEPLOY_INFO_TAG,
            Key::EraInfo(_) => ERA_INFO_TAG,
            Key::Balance(_) => BALANCE_TAG,
            Key::Dictionary(_) => DICTIONARY_TAG,
        }
    }
}

impl OpaqueKey for Key {
    fn write_bytes(&self, writer: &mut Writer) {
        writer.u8(self.tag());
        match self {
            Key::Account(hash)
            | Key::Hash(hash)
            | Key::Transfer(hash)
            | Key::DeployInfo(hash)
            | Key::Balance(hash)
            | Key::Dictionary(hash) => writer.buf(hash),
            Key::URef(uref) => uref.write_bytes(writer),
            Key::EraInfo(era) => writer.u64(*era),
        }
    }

    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), CodecError> {
        let mut reader = Reader::new(bytes);
        let tag = reader.u8()?;
        let key = match tag {
            UREF_TAG => {
                let (uref, rest) = URef::from_bytes(reader.rest())?;
                return Ok((Key::URef(uref), rest));
            }
            ERA_INFO_TAG => Key::EraInfo(reader.u64()?),
            ACCOUNT_TAG => Key::Account(reader.array()?),
            HASH_TAG => Key::Hash(reader.array()?),
            TRANSFER_TAG => Key::Transfer(reader.array()?),
            DEPLOY_INFO_TAG => Key::DeployInfo(reader.array()?),
            BALANCE_TAG => Key::Balance(reader.array()?),
            DICTIONARY_TAG => Key::Dictionary(reader.array()?),
            other => {
                return Err(CodecError::InvalidDiscriminant {
                    what: "key",
                    value: other,
                })
            }
        };
        Ok((key, reader.rest()))
    }
}

impl From<URef> for Key {
    fn from(uref: URef) -> Self {
        Key::URef(uref)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Account(hash) => write!(f, "{ACCOUNT_PREFIX}{}", to_base16(hash)),
            Key::Hash(hash) => write!(f, "{HASH_PREFIX}{}", to_base16(hash)),
            Key::URef(uref) => write!(f, "{uref}"),
            Key::Transfer(hash) => write!(f, "{TRANSFER_PREFIX}{}", to_base16(hash)),
            Key::DeployInfo(hash) => write!(f, "{DEPLOY_INFO_PREFIX}{}", to_base16(hash)),
            Key::EraInfo(era) => write!(f, "{ERA_INFO_PREFIX}{era}"),
            Key::Balance(hash) => write!(f, "{BALANCE_PREFIX}{}", to_base16(hash)),
            Key::Dictionary(hash) => write!(f, "{DICTIONARY_PREFIX}{}", to_base16(hash)),
        }
    }
}

impl FromStr for Key {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("uref-") {
            return Ok(Key::URef(s.parse()?));
        }
        if let Some(era) = s.strip_prefix(ERA_INFO_PREFIX) {
            let era = era
                .parse()
                .map_err(|_| CodecError::InvalidKey(s.to_string()))?;
            return Ok(Key::EraInfo(era));
        }
        let hashed: [(&str, fn(Hash) -> Key); 6] = [
            (ACCOUNT_PREFIX, Key::Account),
            (HASH_PREFIX, Key::Hash),
            (TRANSFER_PREFIX, Key::Transfer),
            (DEPLOY_INFO_PREFIX, Key::DeployInfo),
            (BALANCE_PREFIX, Key::Balance),
            (DICTIONARY_PREFIX, Key::Dictionary),
        ];
        for (prefix, make) in hashed {
            if let Some(hex) = s.strip_prefix(prefix) {
                return Ok(make(parse_hex_array(hex, s)?));
            }
        }
        Err(CodecError::InvalidKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::AccessRights;

    #[test]
    fn text_roundtrip_matrix() {
        let keys = [
            Key::Account([1; 32]),
            Key::Hash([2; 32]),
            Key::URef(URef::new([3; 32], AccessRights::READ)),
            Key::Transfer([4; 32]),
            Key::DeployInfo([5; 32]),
            Key::EraInfo(42),
            Key::Balance([6; 32]),
            Key::Dictionary([7; 32]),
        ];
        for key in keys {
            let text = key.to_string();
            assert_eq!(text.parse::<Key>().unwrap(), key, "{text}");
            let bytes = key.to_bytes();
            assert_eq!(bytes[0], key.tag());
            assert_eq!(Key::from_bytes(&bytes).unwrap(), (key, &[][..]));
        }
    }

    #[test]
    fn era_info_is_u64_le() {
        assert_eq!(
            Key::EraInfo(258).to_bytes(),
            vec![5, 2, 1, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn unknown_tag() {
        assert_eq!(
            Key::from_bytes(&[0x7f]),
            Err(CodecError::InvalidDiscriminant {
                what: "key",
                value: 0x7f
            })
        );
        assert!("account-hash-zz".parse::<Key>().is_err());
        assert!("nonsense".parse::<Key>().is_err());
    }
}
