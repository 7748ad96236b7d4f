/// Parser state, the public entry point, and statement dispatch.
///
/// Holds the token cursor, the diagnostics sink, and the advisory name→hint
/// table, and routes each statement head to the production that parses it.
pub mod core;
/// Declarations: `let`, `fn`, and `object`, with their parameter lists and
/// type-hint bookkeeping.
pub mod decl;
/// Control flow: `if`, `while`, `return`, and `{ .. }` bodies.
pub mod flow;
/// Token-cursor helpers shared by every production: peeking, expectation
/// checks, and comma-separated list parsing.
pub mod utils;
/// Value statements: literals, lists, dicts, calls, accessor chains, the
/// shared math-chain routine, and grouping.
pub mod value;
