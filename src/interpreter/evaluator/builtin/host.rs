use std::{thread, time::Duration};

use chrono::{Datelike, Local, Timelike};

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Reads an environment variable; backs `env::get`.
///
/// A variable that is unset (or not valid Unicode) yields `null` rather
/// than an error, so scripts can test for it with the `null` literal.
pub fn env_get(interpreter: &mut Interpreter,
               args: &[Statement],
               line: usize)
               -> EvalResult<Value> {
    let name = interpreter.eval_statement(&args[0])?.unwrap_returned();
    let name = name.as_str(line)?;

    match std::env::var(name) {
        Ok(value) => Ok(Value::Str(value)),
        Err(_) => Ok(Value::Null),
    }
}

/// Writes an environment variable for this process; backs `env::set`.
///
/// The name must be a string; the value may be anything and is stored in
/// its display form. Yields the stored string.
pub fn env_set(interpreter: &mut Interpreter,
               args: &[Statement],
               line: usize)
               -> EvalResult<Value> {
    let name = interpreter.eval_statement(&args[0])?.unwrap_returned();
    let name = name.as_str(line)?.to_owned();
    let value = interpreter.eval_statement(&args[1])?
                           .unwrap_returned()
                           .to_string();

    std::env::set_var(name, &value);
    Ok(Value::Str(value))
}

/// Blocks the calling thread; backs `sleep`.
///
/// Takes a duration in milliseconds. The language has no concurrency, so
/// this stalls the whole interpreter.
pub fn sleep(interpreter: &mut Interpreter, args: &[Statement], line: usize) -> EvalResult<Value> {
    let millis = interpreter.eval_statement(&args[0])?.unwrap_returned();
    let millis = u64::try_from(millis.as_integer(line)?).map_err(|_| {
                     RuntimeError::TypeError { details: "'sleep' takes a non-negative number of milliseconds".to_owned(),
                                               line }
                 })?;

    thread::sleep(Duration::from_millis(millis));
    Ok(Value::Undefined)
}

/// A wall-clock component readable through the `time` builtin object.
#[derive(Clone, Copy)]
pub enum TimeField {
    Hour,
    Minute,
    Second,
    Year,
    Month,
    Day,
}

/// Reads one component of the local wall-clock time; backs every `time`
/// member.
pub fn time_component(_interpreter: &mut Interpreter,
                      _args: &[Statement],
                      _line: usize,
                      field: TimeField)
                      -> EvalResult<Value> {
    let now = Local::now();

    let component = match field {
        TimeField::Hour => i64::from(now.hour()),
        TimeField::Minute => i64::from(now.minute()),
        TimeField::Second => i64::from(now.second()),
        TimeField::Year => i64::from(now.year()),
        TimeField::Month => i64::from(now.month()),
        TimeField::Day => i64::from(now.day()),
    };

    Ok(Value::Integer(component))
}
