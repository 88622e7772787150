//! Wire tag table.

/// Leading byte identifying a type's top-level kind on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CLTypeTag {
    Bool = 0,
    I32 = 1,
    I64 = 2,
    U8 = 3,
    U32 = 4,
    U64 = 5,
    U128 = 6,
    U256 = 7,
    U512 = 8,
    Unit = 9,
    String = 10,
    Key = 11,
    URef = 12,
    Option = 13,
    List = 14,
    ByteArray = 15,
    Result = 16,
    Map = 17,
    Tuple1 = 18,
    Tuple2 = 19,
    Tuple3 = 20,
    Any = 21,
    PublicKey = 22,
}

impl CLTypeTag {
    pub fn from_u8(byte: u8) -> Option<Self> {
        Some(match byte {
            0 => Self::Bool,
            1 => Self::I32,
            2 => Self::I64,
            3 => Self::U8,
            4 => Self::U32,
            5 => Self::U64,
            6 => Self::U128,
            7 => Self::U256,
            8 => Self::U512,
            9 => Self::Unit,
            10 => Self::String,
            11 => Self::Key,
            12 => Self::URef,
            13 => Self::Option,
            14 => Self::List,
            15 => Self::ByteArray,
            16 => Self::Result,
            17 => Self::Map,
            18 => Self::Tuple1,
            19 => Self::Tuple2,
            20 => Self::Tuple3,
            21 => Self::Any,
            22 => Self::PublicKey,
            _ => return None,
        })
    }

    /// Type name as it appears in type JSON.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::U8 => "U8",
            Self::U32 => "U32",
            Self::U64 => "U64",
            Self::U128 => "U128",
            Self::U256 => "U256",
            Self::U512 => "U512",
            Self::Unit => "Unit",
            Self::String => "String",
            Self::Key => "Key",
            Self::URef => "URef",
            Self::Option => "Option",
            Self::List => "List",
            Self::ByteArray => "ByteArray",
            Self::Result => "Result",
            Self::Map => "Map",
            Self::Tuple1 => "Tuple1",
            Self::Tuple2 => "Tuple2",
            Self::Tuple3 => "Tuple3",
            Self::Any => "Any",
            Self::PublicKey => "PublicKey",
        }
    }
}
