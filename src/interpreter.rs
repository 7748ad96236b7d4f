/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the statement tree, manages the scope-frame
/// stack, dispatches calls through the struct model and the builtin
/// registry, and produces the program sentinel. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates statements, assignments, arithmetic, and control flow.
/// - Manages scope frames, instances, and module flags.
/// - Reports fatal runtime errors and records recoverable diagnostics.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to meaningful language elements such as literals,
/// identifiers, operators, delimiters, and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme,
///   optional literal payload, and source line.
/// - Handles string and numeric literals, identifiers, and keywords.
/// - Reports lexical errors for unterminated strings and malformed numbers.
pub mod lexer;
/// The parser module builds the statement tree from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs the tree that represents the syntactic structure of
/// declarations and statements, collecting non-fatal findings in a
/// diagnostics sink as it goes.
///
/// # Responsibilities
/// - Converts tokens into structured statement nodes.
/// - Validates grammar and syntax, reporting errors with line info.
/// - Records type-hint bookkeeping and other advisory diagnostics.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation,
/// such as integers, decimals, booleans, strings, lists, dicts, functions,
/// and the struct model's definitions and instances. It also provides
/// methods for type naming, coercion, and comparison.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements coercion helpers and the numeric equality rules.
/// - Provides the hashable dict-key projection of literal values.
pub mod value;
