use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{FunctionDecl, Statement},
    error::{DiagnosticCode, RuntimeError},
    interpreter::{
        evaluator::{
            builtin,
            core::{EvalResult, Interpreter},
            scope::{Binding, Scope},
        },
        value::{
            core::Value,
            object::{InstanceData, StructData},
        },
    },
};

impl Interpreter {
    /// Evaluates a call statement.
    ///
    /// The name resolves like a plain read (active frame, then global). A
    /// user-defined function is invoked; an object definition is
    /// instantiated; anything else falls back to the builtin registry,
    /// where an unknown name or a wrong fixed arity is recoverable.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     args: &[Statement],
                                     line: usize)
                                     -> EvalResult<Value> {
        match self.lookup(name).cloned() {
            Some(Value::Function(decl)) => {
                let values = self.eval_call_args(args)?;
                self.invoke(&decl, values, None, line)
            },
            Some(Value::StructDef(definition)) => self.instantiate(&definition, args, line),
            _ => self.call_builtin(name, args, line),
        }
    }

    fn call_builtin(&mut self, name: &str, args: &[Statement], line: usize) -> EvalResult<Value> {
        let Some(builtin) = builtin::lookup(name) else {
            self.report_diagnostic(DiagnosticCode::UnknownCallable,
                                   line,
                                   format!("'{name}' is not a function, object, or builtin"));
            return Ok(Value::Undefined);
        };

        if !builtin.arity.check(args.len()) {
            self.report_diagnostic(DiagnosticCode::WrongBuiltinArity,
                                   line,
                                   format!("'{name}' takes {}, found {}",
                                           builtin.arity,
                                           args.len()));
            return Ok(Value::Undefined);
        }

        debug!("calling builtin '{name}'");
        (builtin.func)(self, args, line)
    }

    /// Evaluates call arguments left to right, in the caller's scope.
    pub(crate) fn eval_call_args(&mut self, args: &[Statement]) -> EvalResult<Vec<Value>> {
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_statement(arg)?.unwrap_returned());
        }
        Ok(values)
    }

    /// Invokes a user-defined function or member with already-evaluated
    /// arguments.
    ///
    /// When `self_value` is given and the declaration's first parameter is
    /// literally named `self`, this is instance dispatch: `self` is bound
    /// first (const when so declared) and the caller supplies one argument
    /// fewer than the declared count. A member without a leading `self` is
    /// static and ignores `self_value`.
    ///
    /// A fresh frame is pushed for the body and popped on every exit path.
    /// A body that never returns yields `Undefined`.
    ///
    /// ## Errors
    /// - `RuntimeError::ArgumentCountMismatch`: Wrong argument count.
    /// - Whatever the body raises.
    pub(crate) fn invoke(&mut self,
                         decl: &Rc<FunctionDecl>,
                         args: Vec<Value>,
                         self_value: Option<Value>,
                         line: usize)
                         -> EvalResult<Value> {
        let instance_call = self_value.is_some() && decl.is_instance_method();
        let expected = if instance_call {
            decl.params.len() - 1
        } else {
            decl.params.len()
        };

        if args.len() != expected {
            return Err(RuntimeError::ArgumentCountMismatch { name: decl.name.clone(),
                                                             expected,
                                                             found: args.len(),
                                                             line });
        }

        debug!("invoking '{}' with {} argument(s)", decl.name, args.len());

        self.push_frame();
        let mut params = decl.params.iter();
        if instance_call {
            if let (Some(self_param), Some(value)) = (params.next(), self_value) {
                self.bind_param(self_param.constant, &self_param.name, value);
            }
        }
        for (param, value) in params.zip(args) {
            self.bind_param(param.constant, &param.name, value);
        }

        let outcome = self.eval_block(&decl.body);
        self.pop_frame();

        Ok(outcome?.unwrap_returned())
    }

    fn bind_param(&mut self, constant: bool, name: &str, value: Value) {
        let binding = if constant {
            Binding::constant(value)
        } else {
            Binding::new(value)
        };
        self.bind_unchecked(name, binding);
    }

    /// Instantiates an object definition.
    ///
    /// The definition's members are copied into a fresh scope under a newly
    /// generated unique identifier. If a member named `construct` exists it
    /// is invoked exactly once with the call's arguments; without one, no
    /// member runs. Call arguments evaluate left to right either way.
    pub(crate) fn instantiate(&mut self,
                              definition: &Rc<StructData>,
                              args: &[Statement],
                              line: usize)
                              -> EvalResult<Value> {
        let values = self.eval_call_args(args)?;

        let id = self.next_instance_id();
        debug!("instantiating '{}' as instance {id}", definition.name);

        let mut scope = Scope::new();
        for member in &definition.members {
            scope.insert(&member.name, Binding::new(Value::Function(Rc::clone(member))));
        }
        let instance = Value::Instance(Rc::new(InstanceData { id,
                                                              name: definition.name.clone(),
                                                              scope }));

        if let Some(construct) = definition.member("construct") {
            let construct = Rc::clone(construct);
            self.invoke(&construct, values, Some(instance.clone()), line)?;
        }

        Ok(instance)
    }
}
