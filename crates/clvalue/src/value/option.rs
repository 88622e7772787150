use crate::cl_type::CLType;

use super::CLValue;

/// Zero-or-one value of a declared inner type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionValue {
    inner: CLType,
    value: Option<Box<CLValue>>,
}

impl OptionValue {
    /// `Some(value)`; the inner type is taken from the value.
    pub fn some(value: CLValue) -> Self {
        Self {
            inner: value.cl_type(),
            value: Some(Box::new(value)),
        }
    }

    pub fn none(inner: CLType) -> Self {
        Self { inner, value: None }
    }

    pub fn inner_type(&self) -> &CLType {
        &self.inner
    }

    pub fn value(&self) -> Option<&CLValue> {
        self.value.as_deref()
    }

    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    pub fn into_inner(self) -> Option<CLValue> {
        self.value.map(|v| *v)
    }
}
