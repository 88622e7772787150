//! Value byte form.

use clvalue_buffers::Writer;

use crate::codec::write_big_uint;
use crate::keys::OpaqueKey;

use super::CLValue;

impl CLValue {
    /// Encodes the value alone, without its type.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        self.write_bytes(&mut writer);
        writer.flush()
    }

    pub fn write_bytes(&self, writer: &mut Writer) {
        match self {
            CLValue::Bool(v) => writer.u8(*v as u8),
            CLValue::I32(v) => writer.i32(*v),
            CLValue::I64(v) => writer.i64(*v),
            CLValue::U8(v) => writer.u8(*v),
            CLValue::U32(v) => writer.u32(*v),
            CLValue::U64(v) => writer.u64(*v),
            CLValue::U128(v) => write_big_uint(writer, v.as_big_num()),
            CLValue::U256(v) => write_big_uint(writer, v.as_big_num()),
            CLValue::U512(v) => write_big_uint(writer, v.as_big_num()),
            CLValue::Unit => {}
            CLValue::String(s) => writer.str_with_len(s),
            CLValue::Key(key) => key.write_bytes(writer),
            CLValue::URef(uref) => uref.write_bytes(writer),
            CLValue::PublicKey(key) => key.write_bytes(writer),
            CLValue::ByteArray(bytes) | CLValue::Any(bytes) => writer.buf(bytes),
            CLValue::Option(option) => match option.value() {
                None => writer.u8(0),
                Some(inner) => {
                    writer.u8(1);
                    inner.write_bytes(writer);
                }
            },
            CLValue::List(list) => {
                writer.u32(list.len() as u32);
                for item in list {
                    item.write_bytes(writer);
                }
            }
            CLValue::Result(result) => match result.value() {
                Ok(ok) => {
                    writer.u8(1);
                    ok.write_bytes(writer);
                }
                Err(err) => {
                    writer.u8(0);
                    err.write_bytes(writer);
                }
            },
            CLValue::Map(map) => {
                writer.u32(map.len() as u32);
                for (key, value) in map.iter() {
                    key.write_bytes(writer);
                    value.write_bytes(writer);
                }
            }
            CLValue::Tuple1(v0) => v0.write_bytes(writer),
            CLValue::Tuple2(v0, v1) => {
                v0.write_bytes(writer);
                v1.write_bytes(writer);
            }
            CLValue::Tuple3(v0, v1, v2) => {
                v0.write_bytes(writer);
                v1.write_bytes(writer);
                v2.write_bytes(writer);
            }
        }
    }
}
