use tracing::trace;

use crate::{
    ast::Accessor,
    error::{DiagnosticCode, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Walks a variable-access chain such as `point::x()` or `env::get('HOME')`.
    ///
    /// The head resolves in the current scope; every later accessor resolves
    /// inside the value the previous one produced. Only instances and builtin
    /// objects bear members, so a chain that continues past a plain value is
    /// a fatal error. A missing member on a scope-bearing value is recoverable
    /// and short-circuits the rest of the chain to `Undefined`.
    pub(crate) fn eval_variable_access(&mut self,
                                       accessors: &[Accessor],
                                       line: usize)
                                       -> EvalResult<Value> {
        let Some((head, rest)) = accessors.split_first() else {
            return Err(RuntimeError::MalformedNode { details: "An empty access chain".to_owned(),
                                                     line });
        };

        let mut current = match head {
            Accessor::Name { name, line } => match self.lookup(name) {
                Some(value) => value.clone(),
                None => {
                    return Err(RuntimeError::UnknownVariable { name: name.clone(),
                                                               line: *line })
                },
            },
            Accessor::Call { name, args, line } => self.eval_function_call(name, args, *line)?,
        };

        let mut produced_by = head.name();
        for accessor in rest {
            trace!("access chain hop: '{produced_by}' -> '{}'", accessor.name());
            current = match self.step_into(&current, produced_by, accessor)? {
                Some(value) => value,
                None => return Ok(Value::Undefined),
            };
            produced_by = accessor.name();
        }

        Ok(current)
    }

    /// Resolves one accessor inside `current`.
    ///
    /// `Ok(None)` means a recoverable miss was already reported and the
    /// whole chain collapses to `Undefined`.
    fn step_into(&mut self,
                 current: &Value,
                 produced_by: &str,
                 accessor: &Accessor)
                 -> EvalResult<Option<Value>> {
        match current {
            Value::Instance(instance) => match accessor {
                Accessor::Name { name, line } => {
                    let Some(binding) = instance.scope.get(name) else {
                        self.report_missing_member(&instance.name, name, *line);
                        return Ok(None);
                    };
                    Ok(Some(binding.value.clone()))
                },

                Accessor::Call { name, args, line } => {
                    let Some(binding) = instance.scope.get(name) else {
                        self.report_missing_member(&instance.name, name, *line);
                        return Ok(None);
                    };
                    let Value::Function(decl) = binding.value.clone() else {
                        return Err(RuntimeError::TypeError { details: format!("'{name}' is not a member function"),
                                                             line:    *line, });
                    };
                    let values = self.eval_call_args(args)?;
                    self.invoke(&decl, values, Some(current.clone()), *line)
                        .map(Some)
                },
            },

            // Builtin-object members are host functions; a bare name invokes
            // the member with no arguments.
            Value::BuiltinObject(tag) => match accessor {
                Accessor::Name { name, line } => {
                    self.call_builtin_member(tag, name, &[], *line).map(Some)
                },
                Accessor::Call { name, args, line } => {
                    self.call_builtin_member(tag, name, args, *line).map(Some)
                },
            },

            _ => Err(RuntimeError::NotAccessible { name: produced_by.to_owned(),
                                                   line: accessor.line_number() }),
        }
    }

    fn report_missing_member(&mut self, owner: &str, member: &str, line: usize) {
        self.report_diagnostic(DiagnosticCode::UnknownMember,
                               line,
                               format!("'{owner}' has no member '{member}'"));
    }
}
