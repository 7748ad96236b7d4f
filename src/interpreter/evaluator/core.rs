use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::{CompareOp, Condition, FunctionDecl, Statement, TypeHint},
    error::{DiagnosticCode, Diagnostics, RuntimeError, Severity},
    interpreter::{
        evaluator::{builtin, scope::Binding, scope::Scope},
        value::{core::Value, dict_key::DictKey, object::StructData},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A `from 'path' import { .. };` request, recorded for the host to act on.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRecord {
    /// The import path string as written.
    pub path:     String,
    /// The requested names; empty for a wildcard import.
    pub names:    Vec<String>,
    /// Whether `{ * }` was written.
    pub wildcard: bool,
}

/// Executes a parsed statement sequence.
///
/// This struct holds the whole runtime state: the scope-frame stack whose
/// first frame is the permanent global scope, the module identity and
/// recorded imports, the I/O-gating module flags, the runtime diagnostics
/// sink, and the instance-id counter.
///
/// ## Usage
///
/// An `Interpreter` is created once per program and driven by
/// [`interpret`](Self::interpret). Afterwards the host inspects the outcome
/// through [`globals`](Self::globals), [`identity`](Self::identity),
/// [`imports`](Self::imports), and [`diagnostics`](Self::diagnostics).
/// Single-threaded by design; sharing one instance across threads is
/// unsupported.
pub struct Interpreter {
    /// The scope-frame stack. `frames[0]` is the global scope and is never
    /// popped; each call pushes one frame and pops it on every exit path.
    pub(crate) frames:           Vec<Scope>,
    program:                     Rc<Vec<Statement>>,
    identity:                    Option<String>,
    imports:                     Vec<ImportRecord>,
    pub(crate) stdout_enabled:   bool,
    pub(crate) stdin_enabled:    bool,
    diagnostics:                 Diagnostics,
    pub(crate) instance_counter: u64,
}

impl Interpreter {
    /// Creates an interpreter for the given program with the default
    /// diagnostic threshold ([`Severity::Many`]).
    ///
    /// The global scope is pre-populated with every builtin object, and the
    /// module flags take their defaults: `stdout` on, `stdin` off.
    ///
    /// ## Example
    /// ```
    /// use ladle::{
    ///     ast::{Statement, TypeHint},
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let program = vec![Statement::Assignment { name:     "greeting".to_owned(),
    ///                                            hint:     TypeHint::any(),
    ///                                            value:    Box::new(Statement::Literal { value: "hi".into(),
    ///                                                                                    line:  1, }),
    ///                                            declared: true,
    ///                                            line:     1, }];
    /// let mut interpreter = Interpreter::new(program);
    /// interpreter.interpret().unwrap();
    ///
    /// let globals = interpreter.globals();
    /// assert!(globals.contains(&("greeting".to_owned(), Value::Str("hi".to_owned()))));
    /// ```
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self::with_threshold(statements, Severity::Many)
    }

    /// Creates an interpreter with an explicit diagnostic retention
    /// threshold.
    #[must_use]
    pub fn with_threshold(statements: Vec<Statement>, threshold: Severity) -> Self {
        let mut interpreter = Self { frames:           vec![Scope::new()],
                                     program:          Rc::new(statements),
                                     identity:         None,
                                     imports:          Vec::new(),
                                     stdout_enabled:   true,
                                     stdin_enabled:    false,
                                     diagnostics:      Diagnostics::new(threshold),
                                     instance_counter: 0, };
        for &tag in builtin::BUILTIN_OBJECTS {
            interpreter.bind_global(tag, Value::BuiltinObject(tag));
        }
        interpreter
    }

    /// Runs the whole program and returns the sentinel: the value of the
    /// last statement that produced one (`Undefined` when none did), or the
    /// payload of a top-level `return`.
    ///
    /// ## Errors
    /// Returns the first fatal [`RuntimeError`]; evaluation stops there.
    /// Recoverable failures never surface here — they land in
    /// [`diagnostics`](Self::diagnostics) and evaluation continues.
    pub fn interpret(&mut self) -> EvalResult<Value> {
        let program = Rc::clone(&self.program);
        debug!("interpreting {} top-level statements", program.len());

        let mut sentinel = Value::Undefined;
        for statement in program.iter() {
            match self.eval_statement(statement)? {
                Value::Returned(payload) => return Ok(*payload),
                Value::Undefined => {},
                value => sentinel = value,
            }
        }
        Ok(sentinel)
    }

    /// Evaluates a single statement.
    ///
    /// This is the main dispatch point: every construct of the language
    /// routes through here, including the statements a builtin evaluates
    /// lazily out of its argument list.
    pub(crate) fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        trace!("eval statement at line {}", statement.line_number());

        match statement {
            Statement::Literal { value, .. } => Ok(Value::from(value)),
            Statement::Variable { name, line } => {
                self.lookup(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })
            },
            Statement::Assignment { name,
                                    hint,
                                    value,
                                    declared,
                                    line, } => {
                self.eval_assignment(name, hint, value, *declared, *line)
            },
            Statement::List { elements, .. } => self.eval_list(elements),
            Statement::Dict { entries, .. } => self.eval_dict(entries),
            Statement::DictAssignment { line, .. } => {
                Err(RuntimeError::MalformedNode { details:
                                                      "A dict entry outside a dict literal".to_owned(),
                                                  line:    *line, })
            },
            Statement::FunctionCall { name, args, line } => {
                self.eval_function_call(name, args, *line)
            },
            Statement::FunctionDeclaration(decl) => self.eval_function_declaration(decl),
            Statement::StructDeclaration { name, members, .. } => {
                self.eval_struct_declaration(name, members)
            },
            Statement::Block { statements, .. } => self.eval_block(statements),
            Statement::Conditional { condition,
                                     then_branch,
                                     else_branch,
                                     .. } => {
                self.eval_conditional(condition, then_branch, else_branch.as_deref())
            },
            Statement::WhileLoop { condition, body, .. } => self.eval_while(condition, body),
            Statement::VariableAccess { accessors, line } => {
                self.eval_variable_access(accessors, *line)
            },
            Statement::Math { op, left, right, line } => self.eval_math(*op, left, right, *line),
            Statement::Grouping { statements, .. } => self.eval_grouping(statements),
            Statement::Return { value, .. } => self.eval_return(value.as_deref()),
            Statement::ModuleIdentity { name, .. } => {
                self.identity = Some(name.clone());
                Ok(Value::Undefined)
            },
            Statement::ModuleImport { path,
                                      names,
                                      wildcard,
                                      .. } => {
                self.imports.push(ImportRecord { path:     path.clone(),
                                                 names:    names.clone(),
                                                 wildcard: *wildcard, });
                Ok(Value::Undefined)
            },
            Statement::ExplicitBreakpoint { line } => {
                self.report_diagnostic(DiagnosticCode::Breakpoint,
                                       *line,
                                       "explicit breakpoint".to_owned());
                Ok(Value::Undefined)
            },
        }
    }

    /// Evaluates an assignment: right-hand side first, then hint check,
    /// then the binding itself (see [`bind`](Self::bind) for the target
    /// selection and shadowing rules). Yields the assigned value.
    fn eval_assignment(&mut self,
                       name: &str,
                       hint: &TypeHint,
                       value: &Statement,
                       declared: bool,
                       line: usize)
                       -> EvalResult<Value> {
        let value = self.eval_statement(value)?.unwrap_returned();

        // An Undefined right-hand side already reported its own diagnostic.
        if !value.is_undefined() && !hint.matches(value.type_name()) {
            self.report_diagnostic(DiagnosticCode::HintMismatch,
                                   line,
                                   format!("'{name}' is hinted '{hint}' but was assigned a {}",
                                           value.type_name()));
        }

        self.bind(name, value.clone(), declared, line)?;
        Ok(value)
    }

    fn eval_list(&mut self, elements: &[Statement]) -> EvalResult<Value> {
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(self.eval_statement(element)?.unwrap_returned());
        }
        Ok(values.into())
    }

    fn eval_dict(&mut self, entries: &[Statement]) -> EvalResult<Value> {
        let mut map = std::collections::HashMap::with_capacity(entries.len());
        for entry in entries {
            let Statement::DictAssignment { key, value, line } = entry else {
                return Err(RuntimeError::MalformedNode { details:
                                                             "A dict literal with a non-entry member".to_owned(),
                                                         line:    entry.line_number(), });
            };

            let key = self.eval_statement(key)?.unwrap_returned();
            let key = DictKey::from_value(&key, *line)?;
            let value = self.eval_statement(value)?.unwrap_returned();
            map.insert(key, value);
        }
        Ok(map.into())
    }

    fn eval_function_declaration(&mut self, decl: &FunctionDecl) -> EvalResult<Value> {
        let function = Value::Function(Rc::new(decl.clone()));
        self.bind_unchecked(&decl.name, Binding::new(function));
        Ok(Value::Undefined)
    }

    fn eval_struct_declaration(&mut self, name: &str, members: &[FunctionDecl]) -> EvalResult<Value> {
        let members = members.iter()
                             .map(|member| Rc::new(member.clone()))
                             .collect();
        let definition = Value::StructDef(Rc::new(StructData { name: name.to_owned(),
                                                               members }));
        self.bind_unchecked(name, Binding::new(definition));
        Ok(Value::Undefined)
    }

    /// Runs a block's statements in order. A `return` wrapper produced by
    /// any statement stops the block and propagates outward.
    pub(crate) fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<Value> {
        for statement in statements {
            let value = self.eval_statement(statement)?;
            if matches!(value, Value::Returned(_)) {
                return Ok(value);
            }
        }
        Ok(Value::Undefined)
    }

    fn eval_conditional(&mut self,
                        condition: &Condition,
                        then_branch: &Statement,
                        else_branch: Option<&Statement>)
                        -> EvalResult<Value> {
        if self.eval_condition(condition)? {
            self.eval_statement(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.eval_statement(else_branch)
        } else {
            Ok(Value::Undefined)
        }
    }

    /// Evaluates the condition before every iteration, including the first:
    /// a condition that is false on the first check runs the body zero
    /// times.
    fn eval_while(&mut self, condition: &Condition, body: &Statement) -> EvalResult<Value> {
        loop {
            if !self.eval_condition(condition)? {
                return Ok(Value::Undefined);
            }
            let value = self.eval_statement(body)?;
            if matches!(value, Value::Returned(_)) {
                return Ok(value);
            }
        }
    }

    /// Evaluates a comparison. The restricted condition grammar means the
    /// result is always a boolean; integer/decimal operands compare
    /// numerically.
    fn eval_condition(&mut self, condition: &Condition) -> EvalResult<bool> {
        let left = self.eval_statement(&condition.left)?.unwrap_returned();
        let right = self.eval_statement(&condition.right)?.unwrap_returned();

        Ok(match condition.op {
            CompareOp::Equal => left == right,
            CompareOp::NotEqual => left != right,
        })
    }

    /// Evaluates grouped arithmetic sub-statements left to right and yields
    /// the last value.
    fn eval_grouping(&mut self, statements: &[Statement]) -> EvalResult<Value> {
        let mut last = Value::Undefined;
        for statement in statements {
            last = self.eval_statement(statement)?.unwrap_returned();
        }
        Ok(last)
    }

    fn eval_return(&mut self, value: Option<&Statement>) -> EvalResult<Value> {
        let payload = match value {
            Some(statement) => self.eval_statement(statement)?.unwrap_returned(),
            None => Value::Undefined,
        };
        Ok(Value::Returned(Box::new(payload)))
    }

    /// Records a recoverable failure in the runtime sink and, when retained
    /// and `stdout` is on, echoes it to stderr. Evaluation continues.
    pub(crate) fn report_diagnostic(&mut self, code: DiagnosticCode, line: usize, message: String) {
        if self.diagnostics.report(code, line, message) && self.stdout_enabled {
            if let Some(entry) = self.diagnostics.entries().last() {
                eprintln!("{entry}");
            }
        }
    }

    pub(crate) fn next_instance_id(&mut self) -> u64 {
        self.instance_counter += 1;
        self.instance_counter
    }

    /// The resulting global scope as name-sorted name→value pairs. Includes
    /// the pre-populated builtin objects.
    #[must_use]
    pub fn globals(&self) -> Vec<(String, Value)> {
        self.global_frame().snapshot()
    }

    /// Reads a module flag. The flag set is closed: `stdout` gates output
    /// (including diagnostic echoes), `stdin` gates the `input` builtin.
    ///
    /// ## Example
    /// ```
    /// use ladle::interpreter::evaluator::core::Interpreter;
    ///
    /// let interpreter = Interpreter::new(Vec::new());
    /// assert_eq!(interpreter.flag("stdout"), Some(true));
    /// assert_eq!(interpreter.flag("stdin"), Some(false));
    /// assert_eq!(interpreter.flag("telemetry"), None);
    /// ```
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        match name {
            "stdout" => Some(self.stdout_enabled),
            "stdin" => Some(self.stdin_enabled),
            _ => None,
        }
    }

    /// Sets a module flag, before or after a run.
    ///
    /// ## Returns
    /// - `true` if the flag exists and was set.
    /// - `false` for an unknown flag name.
    pub fn set_flag(&mut self, name: &str, value: bool) -> bool {
        match name {
            "stdout" => {
                self.stdout_enabled = value;
                true
            },
            "stdin" => {
                self.stdin_enabled = value;
                true
            },
            _ => false,
        }
    }

    /// The module identity declared by `mod 'name';`, if any.
    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Every `from .. import ..` request the program recorded, in order.
    #[must_use]
    pub fn imports(&self) -> &[ImportRecord] {
        &self.imports
    }

    /// The runtime diagnostics sink: every retained recoverable failure.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}
