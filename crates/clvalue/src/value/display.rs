use std::fmt;

use clvalue_base16::to_base16;

use super::CLValue;

fn write_seq<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a CLValue>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for CLValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CLValue::Bool(v) => write!(f, "{v}"),
            CLValue::I32(v) => write!(f, "{v}"),
            CLValue::I64(v) => write!(f, "{v}"),
            CLValue::U8(v) => write!(f, "{v}"),
            CLValue::U32(v) => write!(f, "{v}"),
            CLValue::U64(v) => write!(f, "{v}"),
            CLValue::U128(v) => write!(f, "{v}"),
            CLValue::U256(v) => write!(f, "{v}"),
            CLValue::U512(v) => write!(f, "{v}"),
            CLValue::Unit => f.write_str("()"),
            CLValue::String(s) => f.write_str(s),
            CLValue::Key(key) => write!(f, "{key}"),
            CLValue::URef(uref) => write!(f, "{uref}"),
            CLValue::PublicKey(key) => write!(f, "{key}"),
            CLValue::ByteArray(bytes) | CLValue::Any(bytes) => f.write_str(&to_base16(bytes)),
            CLValue::Option(option) => match option.value() {
                Some(inner) => write!(f, "Some({inner})"),
                None => f.write_str("None"),
            },
            CLValue::List(list) => {
                f.write_str("[")?;
                write_seq(f, list)?;
                f.write_str("]")
            }
            CLValue::Result(result) => match result.value() {
                Ok(ok) => write!(f, "Ok({ok})"),
                Err(err) => write!(f, "Err({err})"),
            },
            CLValue::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            CLValue::Tuple1(v0) => write!(f, "({v0})"),
            CLValue::Tuple2(v0, v1) => write!(f, "({v0}, {v1})"),
            CLValue::Tuple3(v0, v1, v2) => {
                f.write_str("(")?;
                write_seq(f, [&**v0, &**v1, &**v2])?;
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cl_type::CLType;
    use crate::value::CLValue;

    #[test]
    fn renders_nested_values() {
        let items = vec![CLValue::i32(-1), CLValue::i32(2)];
        let list = CLValue::list(CLType::I32, items).unwrap();
        assert_eq!(list.to_string(), "[-1, 2]");
        assert_eq!(
            CLValue::option_some(CLValue::string("x")).to_string(),
            "Some(x)"
        );
        assert_eq!(CLValue::option_none(CLType::U8).to_string(), "None");
        let bytes = CLValue::byte_array([0xabu8, 1]);
        let tuple = CLValue::tuple3(CLValue::bool(true), CLValue::unit(), bytes);
        assert_eq!(tuple.to_string(), "(true, (), ab01)");
        assert_eq!(
            CLValue::result_err(CLType::U8, CLValue::string("no")).to_string(),
            "Err(no)"
        );
        let map = CLValue::map_from_entries(
            CLType::String,
            CLType::U8,
            [
                (CLValue::string("a"), CLValue::u8(1)),
                (CLValue::string("b"), CLValue::u8(2)),
            ],
        )
        .unwrap();
        assert_eq!(map.to_string(), "{a: 1, b: 2}");
    }
}
