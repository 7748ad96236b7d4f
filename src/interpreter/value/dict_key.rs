use std::fmt::Display;

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Enum representing values allowed as dict keys.
///
/// Only hashable scalars qualify; an integer key and a decimal key of the
/// same magnitude remain distinct keys. The derived ordering (variant first,
/// payload second) drives the sorted rendering of dicts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DictKey {
    /// A boolean such as `true`.
    Bool(bool),
    /// An integer such as `-4` or `42`.
    Integer(i64),
    /// A decimal such as `3.141592653589793`.
    Decimal(OrderedFloat<f64>),
    /// A string such as `'width'`.
    Str(String),
    /// The `null` literal.
    Null,
}

impl DictKey {
    /// Projects a runtime value into a dict key.
    ///
    /// ## Errors
    /// Returns `Err(RuntimeError::TypeError)` for unhashable values (lists,
    /// dicts, functions, objects, instances, `undefined`).
    pub fn from_value(value: &Value, line: usize) -> EvalResult<Self> {
        match value {
            Value::Str(s) => Ok(Self::Str(s.clone())),
            Value::Integer(n) => Ok(Self::Integer(*n)),
            Value::Decimal(d) => Ok(Self::Decimal(OrderedFloat(*d))),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Null => Ok(Self::Null),
            Value::Returned(inner) => Self::from_value(inner, line),
            other => {
                Err(RuntimeError::TypeError { details: format!("A {} cannot be used as a dict key",
                                                               other.type_name()),
                                              line })
            },
        }
    }
}

impl From<DictKey> for Value {
    fn from(key: DictKey) -> Self {
        match key {
            DictKey::Str(s) => Self::Str(s),
            DictKey::Integer(n) => Self::Integer(n),
            DictKey::Decimal(d) => Self::Decimal(d.into_inner()),
            DictKey::Bool(b) => Self::Bool(b),
            DictKey::Null => Self::Null,
        }
    }
}

impl Display for DictKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value: Value = self.clone().into();
        write!(f, "{value}")
    }
}
