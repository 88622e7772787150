//! Homogeneous, mutable list payload.

use crate::cl_type::CLType;
use crate::CodecError;

use super::CLValue;

/// Ordered sequence of values that all have the declared element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListValue {
    element: CLType,
    items: Vec<CLValue>,
}

impl ListValue {
    pub fn new(element: CLType) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// Builds a list, checking every item against `element`.
    pub fn from_items(element: CLType, items: Vec<CLValue>) -> Result<Self, CodecError> {
        let mut list = Self::new(element);
        list.items.reserve(items.len());
        for item in items {
            list.push(item)?;
        }
        Ok(list)
    }

    pub(crate) fn with_capacity(element: CLType, capacity: usize) -> Self {
        Self {
            element,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Appends a value already known to have the element type.
    pub(crate) fn push_unchecked(&mut self, value: CLValue) {
        self.items.push(value);
    }

    fn check(&self, value: &CLValue) -> Result<(), CodecError> {
        let found = value.cl_type();
        if found != self.element {
            return Err(CodecError::TypeMismatch {
                expected: self.element.clone(),
                found,
            });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), CodecError> {
        if index >= self.items.len() {
            return Err(CodecError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    pub fn element_type(&self) -> &CLType {
        &self.element
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&CLValue, CodecError> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    /// Replaces the item at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: CLValue) -> Result<CLValue, CodecError> {
        self.check_index(index)?;
        self.check(&value)?;
        Ok(std::mem::replace(&mut self.items[index], value))
    }

    pub fn push(&mut self, value: CLValue) -> Result<(), CodecError> {
        self.check(&value)?;
        self.items.push(value);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<CLValue, CodecError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    pub fn pop(&mut self) -> Option<CLValue> {
        self.items.pop()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CLValue> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[CLValue] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a ListValue {
    type Item = &'a CLValue;
    type IntoIter = std::slice::Iter<'a, CLValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
