use crate::cl_type::CLType;

use super::CLValue;

/// Exactly one value, tagged success or failure; each case has its own type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultValue {
    ok: CLType,
    err: CLType,
    value: Result<Box<CLValue>, Box<CLValue>>,
}

impl ResultValue {
    pub fn ok(value: CLValue, err: CLType) -> Self {
        Self {
            ok: value.cl_type(),
            err,
            value: Ok(Box::new(value)),
        }
    }

    pub fn err(ok: CLType, value: CLValue) -> Self {
        Self {
            ok,
            err: value.cl_type(),
            value: Err(Box::new(value)),
        }
    }

    pub fn ok_type(&self) -> &CLType {
        &self.ok
    }

    pub fn err_type(&self) -> &CLType {
        &self.err
    }

    pub fn is_ok(&self) -> bool {
        self.value.is_ok()
    }

    pub fn value(&self) -> Result<&CLValue, &CLValue> {
        match &self.value {
            Ok(v) => Ok(&**v),
            Err(e) => Err(&**e),
        }
    }
}
