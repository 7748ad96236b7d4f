use crate::{
    ast::Statement,
    error::{DiagnosticCode, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::usize_to_i64_checked,
};

/// Measures a string, list, or dict.
///
/// Strings count Unicode characters, not bytes. Any other value is a fatal
/// type error.
///
/// # Example
/// ```
/// use ladle::{
///     ast::Statement,
///     interpreter::{
///         evaluator::{builtin::control::len, core::Interpreter},
///         value::core::Value,
///     },
/// };
///
/// let mut interpreter = Interpreter::new(Vec::new());
/// let args = [Statement::Literal { value: "héllo".into(),
///                                  line:  1, }];
///
/// assert_eq!(len(&mut interpreter, &args, 1).unwrap(), Value::Integer(5));
/// ```
pub fn len(interpreter: &mut Interpreter, args: &[Statement], line: usize) -> EvalResult<Value> {
    let value = interpreter.eval_statement(&args[0])?.unwrap_returned();

    let count = match &value {
        Value::Str(s) => s.chars().count(),
        Value::List(elements) => elements.len(),
        Value::Dict(map) => map.len(),
        other => {
            return Err(RuntimeError::TypeError { details: format!("'len' takes a string, list, or dict, found a {}",
                                                                  other.type_name()),
                                                 line })
        },
    };

    Ok(Value::Integer(usize_to_i64_checked(count, line)?))
}

/// Names a value's runtime type.
///
/// Instances report their object's name, so the result doubles as a cheap
/// instance check.
///
/// # Example
/// ```
/// use ladle::{
///     ast::Statement,
///     interpreter::{
///         evaluator::{builtin::control::type_of, core::Interpreter},
///         value::core::Value,
///     },
/// };
///
/// let mut interpreter = Interpreter::new(Vec::new());
/// let args = [Statement::Literal { value: 3.into(),
///                                  line:  1, }];
///
/// assert_eq!(type_of(&mut interpreter, &args, 1).unwrap(),
///            Value::Str("integer".to_owned()));
/// ```
pub fn type_of(interpreter: &mut Interpreter,
               args: &[Statement],
               _line: usize)
               -> EvalResult<Value> {
    let value = interpreter.eval_statement(&args[0])?.unwrap_returned();
    Ok(Value::Str(value.type_name().to_owned()))
}

/// Requests program termination.
///
/// An optional first argument gives the exit code; without one the code is
/// zero. Surfaces as `RuntimeError::Quit`, which a host can catch — only
/// the command-line frontend turns it into a process exit.
pub fn quit(interpreter: &mut Interpreter, args: &[Statement], line: usize) -> EvalResult<Value> {
    let code = match args.first() {
        Some(statement) => {
            let value = interpreter.eval_statement(statement)?.unwrap_returned();
            i32::try_from(value.as_integer(line)?).map_err(|_| RuntimeError::Overflow { line })?
        },
        None => 0,
    };

    Err(RuntimeError::Quit { code, line })
}

/// Aborts evaluation with a message.
///
/// The argument may be any value; it is rendered with its display form.
pub fn panic(interpreter: &mut Interpreter, args: &[Statement], line: usize) -> EvalResult<Value> {
    let message = interpreter.eval_statement(&args[0])?
                             .unwrap_returned()
                             .to_string();

    Err(RuntimeError::UserPanic { message, line })
}

/// Turns a module flag on or off; backs the `enable` and `disable`
/// builtins.
///
/// An unknown flag name is recoverable: reported, nothing toggled.
pub fn toggle_flag(interpreter: &mut Interpreter,
                   args: &[Statement],
                   line: usize,
                   value: bool)
                   -> EvalResult<Value> {
    let flag = interpreter.eval_statement(&args[0])?.unwrap_returned();
    let name = flag.as_str(line)?.to_owned();

    if !interpreter.set_flag(&name, value) {
        interpreter.report_diagnostic(DiagnosticCode::UnknownFlag,
                                      line,
                                      format!("'{name}' is not a module flag"));
    }
    Ok(Value::Undefined)
}
