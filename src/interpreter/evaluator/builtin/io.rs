use std::io::Write;

use crate::{
    ast::Statement,
    error::{DiagnosticCode, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Prints every argument to standard output, space-separated, without a
/// trailing newline.
///
/// Arguments always evaluate, in order; only the write itself is gated on
/// the `stdout` flag. Yields `Undefined` so printing never disturbs the
/// program sentinel.
///
/// # Parameters
/// - `args`: Any number of unevaluated argument statements.
pub fn print(interpreter: &mut Interpreter,
             args: &[Statement],
             _line: usize)
             -> EvalResult<Value> {
    let values = interpreter.eval_call_args(args)?;

    if interpreter.stdout_enabled {
        print!("{}", render(&values));
        let _ = std::io::stdout().flush();
    }
    Ok(Value::Undefined)
}

/// Like [`print`], with a trailing newline. With no arguments it prints a
/// bare newline.
pub fn println(interpreter: &mut Interpreter,
               args: &[Statement],
               _line: usize)
               -> EvalResult<Value> {
    let values = interpreter.eval_call_args(args)?;

    if interpreter.stdout_enabled {
        println!("{}", render(&values));
    }
    Ok(Value::Undefined)
}

fn render(values: &[Value]) -> String {
    values.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}

/// Reads one line from standard input, without the line terminator.
///
/// Requires the `stdin` flag: while it is off, the read is reported as a
/// recoverable diagnostic and yields `Undefined`. End-of-input and read
/// failures also yield `Undefined`.
pub fn input(interpreter: &mut Interpreter,
             _args: &[Statement],
             line: usize)
             -> EvalResult<Value> {
    if !interpreter.stdin_enabled {
        interpreter.report_diagnostic(DiagnosticCode::InputDisabled,
                                      line,
                                      "'input' requires the 'stdin' flag".to_owned());
        return Ok(Value::Undefined);
    }

    let mut buffer = String::new();
    match std::io::stdin().read_line(&mut buffer) {
        Ok(0) | Err(_) => Ok(Value::Undefined),
        Ok(_) => {
            if buffer.ends_with('\n') {
                buffer.pop();
                if buffer.ends_with('\r') {
                    buffer.pop();
                }
            }
            Ok(Value::Str(buffer))
        },
    }
}

/// Reads a whole file as text.
///
/// A file that cannot be read — missing, unreadable, not valid UTF-8 —
/// yields `Undefined` rather than an error, so scripts can probe for
/// optional files.
///
/// # Parameters
/// - `args`: Slice containing the path statement.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Str` with the file contents, or `Value::Undefined`.
pub fn read_file(interpreter: &mut Interpreter,
                 args: &[Statement],
                 line: usize)
                 -> EvalResult<Value> {
    let path = interpreter.eval_statement(&args[0])?.unwrap_returned();
    let path = path.as_str(line)?;

    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Value::Str(contents)),
        Err(_) => Ok(Value::Undefined),
    }
}

/// Compares two values and fails hard when they differ.
///
/// The language's call arguments carry no comparison grammar, hence the
/// two-value form: `assert(actual, expected);`.
///
/// # Parameters
/// - `args`: Slice containing `[actual, expected]`.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Undefined`, or `RuntimeError::AssertionFailed` on mismatch.
pub fn assert_fn(interpreter: &mut Interpreter,
                 args: &[Statement],
                 line: usize)
                 -> EvalResult<Value> {
    let actual = interpreter.eval_statement(&args[0])?.unwrap_returned();
    let expected = interpreter.eval_statement(&args[1])?.unwrap_returned();

    if actual != expected {
        return Err(RuntimeError::AssertionFailed { actual: actual.to_string(),
                                                   expected: expected.to_string(),
                                                   line });
    }
    Ok(Value::Undefined)
}
