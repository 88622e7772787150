//! Insertion-ordered map payload.

use indexmap::IndexMap;

use crate::cl_type::CLType;
use crate::CodecError;

use super::CLValue;

/// Key/value pairs with unique keys, kept in insertion order.
///
/// Keys are looked up by their text rendering, so two keys are the same key
/// exactly when they display the same. Equality includes entry order, as
/// the byte encoding does.
#[derive(Debug, Clone, Eq)]
pub struct MapValue {
    key: CLType,
    value: CLType,
    entries: IndexMap<String, (CLValue, CLValue)>,
}

impl PartialEq for MapValue {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.value == other.value
            && self.entries.iter().eq(other.entries.iter())
    }
}

impl MapValue {
    pub fn new(key: CLType, value: CLType) -> Self {
        Self {
            key,
            value,
            entries: IndexMap::new(),
        }
    }

    pub fn key_type(&self) -> &CLType {
        &self.key
    }

    pub fn value_type(&self) -> &CLType {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a new entry. Fails on a type mismatch or an existing key.
    pub fn append(&mut self, key: CLValue, value: CLValue) -> Result<(), CodecError> {
        for (expected, candidate) in [(&self.key, &key), (&self.value, &value)] {
            let found = candidate.cl_type();
            if &found != expected {
                return Err(CodecError::TypeMismatch {
                    expected: expected.clone(),
                    found,
                });
            }
        }
        self.insert_new(key, value)
    }

    /// Inserts an entry whose types are already known to match.
    pub(crate) fn insert_new(&mut self, key: CLValue, value: CLValue) -> Result<(), CodecError> {
        let rendered = key.to_string();
        if self.entries.contains_key(&rendered) {
            return Err(CodecError::DuplicateKey(rendered));
        }
        self.entries.insert(rendered, (key, value));
        Ok(())
    }

    pub fn get(&self, key: &CLValue) -> Option<&CLValue> {
        self.get_by_str(&key.to_string())
    }

    pub fn get_by_str(&self, rendered: &str) -> Option<&CLValue> {
        self.entries.get(rendered).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &CLValue) -> bool {
        self.entries.contains_key(&key.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CLValue, &CLValue)> {
        self.entries.values().map(|(k, v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_string_is_rejected() {
        let mut map = MapValue::new(CLType::String, CLType::U8);
        map.append(CLValue::string("a"), CLValue::u8(1)).unwrap();
        assert_eq!(
            map.append(CLValue::string("a"), CLValue::u8(2)),
            Err(CodecError::DuplicateKey("a".into()))
        );
        assert_eq!(map.get(&CLValue::string("a")), Some(&CLValue::u8(1)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut map = MapValue::new(CLType::U32, CLType::Bool);
        for k in [3u32, 1, 2] {
            map.append(CLValue::u32(k), CLValue::bool(k % 2 == 1)).unwrap();
        }
        let keys: Vec<String> = map.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["3", "1", "2"]);
        assert_eq!(map.get_by_str("2"), Some(&CLValue::bool(false)));
    }

    #[test]
    fn append_checks_types() {
        let mut map = MapValue::new(CLType::String, CLType::U8);
        assert!(matches!(
            map.append(CLValue::u8(1), CLValue::u8(1)),
            Err(CodecError::TypeMismatch { .. })
        ));
        assert!(matches!(
            map.append(CLValue::string("k"), CLValue::string("v")),
            Err(CodecError::TypeMismatch { .. })
        ));
        assert!(map.is_empty());
    }

    #[test]
    fn equality_follows_insertion_order() {
        let mut a = MapValue::new(CLType::U8, CLType::U8);
        a.append(CLValue::u8(1), CLValue::u8(1)).unwrap();
        a.append(CLValue::u8(2), CLValue::u8(2)).unwrap();
        let mut b = MapValue::new(CLType::U8, CLType::U8);
        b.append(CLValue::u8(2), CLValue::u8(2)).unwrap();
        b.append(CLValue::u8(1), CLValue::u8(1)).unwrap();
        assert_ne!(a, b);
        assert_ne!(CLValue::Map(a.clone()).to_bytes(), CLValue::Map(b).to_bytes());
        assert_eq!(a, a.clone());
    }
}
