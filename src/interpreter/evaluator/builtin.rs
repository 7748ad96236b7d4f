//! The builtin registry: native callables reachable from any scope, plus the
//! member tables of the builtin objects `env` and `time`.
//!
//! Every table is static, so the registry is immutable after construction.
//! A script binding that shares a builtin's name simply shadows it — name
//! resolution consults the scopes first and falls back here last.

/// Process-control builtins: `quit`, `panic`, `enable`, `disable`, and the
/// introspection pair `len`/`typeof`.
pub mod control;
/// Host-environment builtins: the `env` and `time` member functions and
/// `sleep`.
pub mod host;
/// I/O builtins: `print`, `println`, `input`, `read_file`, and `assert`.
pub mod io;

use std::fmt;

use tracing::debug;

use crate::{
    ast::Statement,
    error::DiagnosticCode,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Type alias for builtin handlers.
///
/// A builtin receives the live interpreter, the *unevaluated* argument
/// statements, and the call's line number. It evaluates what it needs
/// itself, left to right, after the arity check has already passed.
pub(crate) type BuiltinFn = fn(&mut Interpreter, &[Statement], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Variadic` accepts any count, including zero.
#[derive(Clone, Copy)]
pub(crate) enum Arity {
    Exact(usize),
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this constraint.
    pub(crate) fn check(self, count: usize) -> bool {
        match self {
            Self::Exact(expected) => count == expected,
            Self::Variadic => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(1) => write!(f, "exactly 1 argument"),
            Self::Exact(n) => write!(f, "exactly {n} arguments"),
            Self::Variadic => write!(f, "any number of arguments"),
        }
    }
}

/// Metadata for one registered builtin.
pub(crate) struct BuiltinDef {
    pub(crate) name:  &'static str,
    pub(crate) arity: Arity,
    pub(crate) func:  BuiltinFn,
}

/// Defines a builtin lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The same shape serves the flat registry and the per-object member tables.
macro_rules! builtin_table {
    (
        $table:ident: $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub(crate) static $table: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_table! {
    BUILTIN_TABLE:
    "print"     => { arity: Arity::Variadic, func: io::print },
    "println"   => { arity: Arity::Variadic, func: io::println },
    "input"     => { arity: Arity::Exact(0), func: io::input },
    "read_file" => { arity: Arity::Exact(1), func: io::read_file },
    "assert"    => { arity: Arity::Exact(2), func: io::assert_fn },
    "len"       => { arity: Arity::Exact(1), func: control::len },
    "typeof"    => { arity: Arity::Exact(1), func: control::type_of },
    "sleep"     => { arity: Arity::Exact(1), func: host::sleep },
    "quit"      => { arity: Arity::Variadic, func: control::quit },
    "panic"     => { arity: Arity::Exact(1), func: control::panic },
    "enable"    => { arity: Arity::Exact(1), func: |interpreter, args, line| control::toggle_flag(interpreter, args, line, true) },
    "disable"   => { arity: Arity::Exact(1), func: |interpreter, args, line| control::toggle_flag(interpreter, args, line, false) },
}

builtin_table! {
    ENV_MEMBERS:
    "get" => { arity: Arity::Exact(1), func: host::env_get },
    "set" => { arity: Arity::Exact(2), func: host::env_set },
}

builtin_table! {
    TIME_MEMBERS:
    "hour"   => { arity: Arity::Exact(0), func: |i, a, l| host::time_component(i, a, l, host::TimeField::Hour) },
    "minute" => { arity: Arity::Exact(0), func: |i, a, l| host::time_component(i, a, l, host::TimeField::Minute) },
    "second" => { arity: Arity::Exact(0), func: |i, a, l| host::time_component(i, a, l, host::TimeField::Second) },
    "year"   => { arity: Arity::Exact(0), func: |i, a, l| host::time_component(i, a, l, host::TimeField::Year) },
    "month"  => { arity: Arity::Exact(0), func: |i, a, l| host::time_component(i, a, l, host::TimeField::Month) },
    "day"    => { arity: Arity::Exact(0), func: |i, a, l| host::time_component(i, a, l, host::TimeField::Day) },
}

/// The builtin objects bound into every global scope at construction.
pub(crate) const BUILTIN_OBJECTS: &[&str] = &["env", "time"];

/// Looks up a flat builtin by name.
pub(crate) fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// Looks up a member of a builtin object by its tag and member name.
pub(crate) fn lookup_member(tag: &str, member: &str) -> Option<&'static BuiltinDef> {
    let table = match tag {
        "env" => ENV_MEMBERS,
        "time" => TIME_MEMBERS,
        _ => return None,
    };
    table.iter().find(|builtin| builtin.name == member)
}

impl Interpreter {
    /// Dispatches a member access on a builtin object. A bare member name
    /// invokes the member with no arguments.
    ///
    /// An unknown member or a wrong argument count is recoverable: it is
    /// reported and the access yields `Undefined`.
    pub(crate) fn call_builtin_member(&mut self,
                                      tag: &str,
                                      member: &str,
                                      args: &[Statement],
                                      line: usize)
                                      -> EvalResult<Value> {
        let Some(builtin) = lookup_member(tag, member) else {
            self.report_diagnostic(DiagnosticCode::UnknownMember,
                                   line,
                                   format!("'{tag}' has no member '{member}'"));
            return Ok(Value::Undefined);
        };

        if !builtin.arity.check(args.len()) {
            self.report_diagnostic(DiagnosticCode::WrongBuiltinArity,
                                   line,
                                   format!("'{tag}::{member}' takes {}, found {}",
                                           builtin.arity,
                                           args.len()));
            return Ok(Value::Undefined);
        }

        debug!("calling builtin member '{tag}::{member}'");
        (builtin.func)(self, args, line)
    }
}
