use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{FunctionDecl, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            dict_key::DictKey,
            object::{InstanceData, StructData},
        },
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations.
#[derive(Debug, Clone)]
pub enum Value {
    /// A string value.
    Str(String),
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A decimal value (double precision floating-point).
    Decimal(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by boolean literals and by the comparison operators
    /// (`==`, `!=`). Conditions in `if`/`while` must evaluate to `Bool`.
    Bool(bool),
    /// The `null` literal value. Distinct from [`Value::Undefined`].
    Null,
    /// An ordered list of `Value` elements.
    List(Rc<Vec<Self>>),
    /// A key→value mapping. Keys are restricted to hashable scalars.
    Dict(Rc<HashMap<DictKey, Self>>),
    /// A user-defined function.
    Function(Rc<FunctionDecl>),
    /// An `object` declaration, waiting to be instantiated.
    StructDef(Rc<StructData>),
    /// An instance of a user-defined object: a copied member scope under a
    /// unique identifier.
    Instance(Rc<InstanceData>),
    /// A builtin object singleton such as `env` or `time`, identified by its
    /// registry tag.
    BuiltinObject(&'static str),
    /// The sentinel for "no value": recoverable failures and valueless
    /// statements produce it. Distinct from [`Value::Null`].
    Undefined,
    /// A value produced by a `return` statement. Interpreter-internal: it is
    /// unwrapped at every binding and invocation boundary and never escapes
    /// to the globals snapshot.
    Returned(Box<Self>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Decimal(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<HashMap<DictKey, Self>> for Value {
    fn from(v: HashMap<DictKey, Self>) -> Self {
        Self::Dict(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Str(s) => s.as_str().into(),
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Decimal(d) => (*d).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Null => Self::Null,
        }
    }
}

// 2^63 as f64, exactly representable. Integral doubles in
// [i64::MIN as f64, I64_RANGE) convert to i64 without loss.
const I64_RANGE: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_truncation)]
fn integer_eq_decimal(n: i64, d: f64) -> bool {
    d.is_finite() && d.fract() == 0.0 && d >= i64::MIN as f64 && d < I64_RANGE && d as i64 == n
}

/// Structural equality, with two twists: comparing an integer to a decimal
/// promotes numerically (`10 == 10.0`), and instances compare by identity
/// (the unique instance id), never by member contents.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Returned(a), b) => a.as_ref() == b,
            (a, Self::Returned(b)) => a == b.as_ref(),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a == b,
            (Self::Integer(n), Self::Decimal(d)) | (Self::Decimal(d), Self::Integer(n)) => {
                integer_eq_decimal(*n, *d)
            },
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Null, Self::Null) | (Self::Undefined, Self::Undefined) => true,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Dict(a), Self::Dict(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a == b,
            (Self::StructDef(a), Self::StructDef(b)) => a == b,
            (Self::Instance(a), Self::Instance(b)) => a.id == b.id,
            (Self::BuiltinObject(a), Self::BuiltinObject(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions in `if`/`while` statements.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::ExpectedBoolean)`: If not boolean.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }

    /// Converts the value to `i64`, or returns an error if not an integer.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value.
    /// - `Err(RuntimeError::TypeError)`: If not an integer.
    pub fn as_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(RuntimeError::TypeError { details: format!("Expected an integer, found a {}",
                                                                self.type_name()),
                                               line }),
        }
    }

    /// Borrows the value as a string slice, or returns an error if not a
    /// string.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(&str)`: The string content.
    /// - `Err(RuntimeError::TypeError)`: If not a string.
    pub fn as_str(&self, line: usize) -> EvalResult<&str> {
        match self {
            Self::Str(s) => Ok(s),
            _ => Err(RuntimeError::TypeError { details: format!("Expected a string, found a {}",
                                                                self.type_name()),
                                               line }),
        }
    }

    /// The runtime type name, as reported by `typeof` and compared against
    /// declared type hints.
    ///
    /// Instances report their object's name, so `let p: Point = Point();`
    /// hint-checks cleanly.
    ///
    /// # Example
    /// ```
    /// use ladle::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(3).type_name(), "integer");
    /// assert_eq!(Value::Null.type_name(), "null");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Str(_) => "string",
            Self::Integer(_) => "integer",
            Self::Decimal(_) => "decimal",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
            Self::List(_) => "list",
            Self::Dict(_) => "dict",
            Self::Function(_) => "function",
            Self::StructDef(_) => "object",
            Self::Instance(data) => &data.name,
            Self::BuiltinObject(tag) => tag,
            Self::Undefined => "undefined",
            Self::Returned(inner) => inner.type_name(),
        }
    }

    /// Strips the interpreter-internal return wrapper, if present.
    #[must_use]
    pub fn unwrap_returned(self) -> Self {
        match self {
            Self::Returned(inner) => *inner,
            other => other,
        }
    }

    /// Returns `true` if the value is [`Undefined`](Self::Undefined).
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` if the value carries a member scope that access chains
    /// can step into (an instance or a builtin object).
    #[must_use]
    pub const fn is_scope_bearing(&self) -> bool {
        matches!(self, Self::Instance(..) | Self::BuiltinObject(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::List(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            // HashMap iteration order is arbitrary; render entries sorted by
            // key so the output is stable.
            Self::Dict(entries) => {
                let mut sorted: Vec<(&DictKey, &Self)> = entries.iter().collect();
                sorted.sort_by(|(a, _), (b, _)| a.cmp(b));

                write!(f, "{{")?;
                for (index, (key, value)) in sorted.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Function(decl) => write!(f, "<fn {}>", decl.name),
            Self::StructDef(data) => write!(f, "<object {}>", data.name),
            Self::Instance(data) => write!(f, "<instance {}>", data.name),
            Self::BuiltinObject(tag) => write!(f, "<builtin {tag}>"),
            Self::Undefined => write!(f, "undefined"),
            Self::Returned(inner) => write!(f, "{inner}"),
        }
    }
}
