//! # ladle
//!
//! ladle is a small embeddable scripting and configuration language.
//! Source text is lexed into an Eof-terminated token stream, parsed by
//! recursive descent into a statement-oriented tree, and executed by a
//! tree-walking interpreter with a scope-frame stack, a minimal object
//! model, and an arity-checked builtin registry.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{Diagnostics, Error, ParseError, Severity},
    interpreter::{evaluator::core::Interpreter, lexer, parser, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` enum and related types that represent
/// the syntactic structure of source code as a tree. The tree is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement variants for all language constructs.
/// - Attaches source lines to every node for error reporting.
/// - Carries the advisory type hints recorded at declaration sites.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code, plus the severity-thresholded diagnostics sink for the
/// findings that never halt a run. It standardizes error reporting and
/// carries detailed information about failures, including error kinds,
/// descriptions, and source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Provides the diagnostic codes, severities, and retention rules.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code execution. It exposes the
/// public API for interpreting programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers and conversion routines that are
/// used throughout the parser and evaluator, chiefly safe conversions between
/// integer and floating-point types.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
pub mod util;

/// Lexes and parses `source` and wires the statements into a fresh
/// [`Interpreter`], without running it.
///
/// This is the embedding entry point for hosts that want to preset module
/// flags, inspect parse diagnostics, or drive the interpreter themselves.
/// The returned sink holds the parse-time diagnostics retained under
/// `threshold`; the interpreter carries its own sink for runtime findings.
///
/// # Errors
/// Returns the [`ParseError`] when lexing or parsing fails; no interpreter
/// is constructed in that case.
///
/// # Examples
/// ```
/// use ladle::{error::Severity, prepare};
///
/// let (mut interpreter, diagnostics) =
///     prepare("let greeting: string = 'hello';", Severity::All).unwrap();
///
/// // The script annotates its declaration, so nothing was reported.
/// assert!(diagnostics.is_empty());
///
/// interpreter.set_flag("stdout", false);
/// interpreter.interpret().unwrap();
/// assert_eq!(interpreter.globals().len(), 3); // greeting + env + time
/// ```
pub fn prepare(source: &str,
               threshold: Severity)
               -> Result<(Interpreter, Diagnostics), ParseError> {
    let tokens = lexer::lex(source)?;
    let (statements, diagnostics) = parser::core::parse(&tokens, threshold);

    Ok((Interpreter::with_threshold(statements?, threshold), diagnostics))
}

/// Runs `source` through the whole pipeline and returns the sentinel: the
/// value of the last statement that produced one, or the payload of a
/// top-level `return`.
///
/// # Errors
/// Returns an error if parsing fails or a fatal runtime error occurs.
/// Recoverable runtime failures degrade to diagnostics and `undefined`
/// values instead.
///
/// # Examples
/// ```
/// use ladle::{error::Severity, interpreter::value::core::Value, run_source};
///
/// // Assignments yield their value, so the last one is the sentinel.
/// let sentinel = run_source("let answer = 42;", Severity::Many).unwrap();
/// assert_eq!(sentinel, Value::Integer(42));
///
/// // Reading an unknown variable is fatal ('x' is not defined).
/// assert!(run_source("let y = x;", Severity::Many).is_err());
/// ```
pub fn run_source(source: &str, threshold: Severity) -> Result<Value, Error> {
    let (mut interpreter, _diagnostics) = prepare(source, threshold)?;
    let sentinel = interpreter.interpret()?;
    Ok(sentinel)
}

/// Runs `source` like [`run_source`] and, in pipe mode, prints the sentinel
/// when it is printable (anything but `undefined`).
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
pub fn run(source: &str, pipe_mode: bool, threshold: Severity) -> Result<(), Error> {
    let sentinel = run_source(source, threshold)?;

    if pipe_mode && !sentinel.is_undefined() {
        println!("{sentinel}");
    }
    Ok(())
}
