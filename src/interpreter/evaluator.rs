/// Member-access chain evaluation.
///
/// Walks `a::b::c()` chains through instance scopes and builtin objects.
pub mod access;

/// Builtin registry and the native callables behind it.
///
/// Holds the static lookup tables for flat builtins and for the members of
/// the `env` and `time` builtin objects.
pub mod builtin;

/// Function calls, member invocation, and object instantiation.
pub mod call;

/// Core evaluation logic and interpreter state.
///
/// Contains the statement dispatcher, the embedding surface, and the
/// runtime diagnostics plumbing.
pub mod core;

/// Arithmetic evaluation.
///
/// Implements the four checked binary operations and integer-to-decimal
/// promotion.
pub mod math;

/// Scope frames and name binding.
///
/// Provides the scope type itself plus the interpreter's frame-stack
/// operations: push/pop, lookup, and the binding rules.
pub mod scope;
