use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// One name→value entry of a [`Scope`].
#[derive(Debug, Clone)]
pub struct Binding {
    /// The bound value.
    pub value:    Value,
    /// Whether rebinding the name is an error. Only `const` parameters
    /// produce constant bindings.
    pub constant: bool,
}

impl Binding {
    /// A plain, rebindable binding.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self { value,
               constant: false }
    }

    /// A binding whose name may not be rebound.
    #[must_use]
    pub const fn constant(value: Value) -> Self {
        Self { value,
               constant: true }
    }
}

/// A name→value mapping: the global scope, one call frame, or an instance's
/// member scope.
#[derive(Debug, Default, Clone)]
pub struct Scope {
    bindings: HashMap<String, Binding>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a binding by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Returns `true` if the scope binds `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Inserts a binding, replacing any previous binding of the same name.
    pub fn insert(&mut self, name: &str, binding: Binding) {
        self.bindings.insert(name.to_owned(), binding);
    }

    /// Returns `true` if the scope holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The scope's contents as name-sorted `(name, value)` pairs.
    ///
    /// HashMap iteration order is arbitrary; sorting makes the snapshot
    /// deterministic for hosts and tests.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, Value)> {
        let mut entries: Vec<(String, Value)> =
            self.bindings
                .iter()
                .map(|(name, binding)| (name.clone(), binding.value.clone()))
                .collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }
}

impl Interpreter {
    /// Adds a fresh empty call frame on top of the frame stack.
    ///
    /// Called when entering a function or member body. Blocks, conditionals
    /// and loops do not push frames; only calls do.
    pub(crate) fn push_frame(&mut self) {
        self.frames.push(Scope::new());
    }

    /// Removes the innermost call frame.
    ///
    /// Called on every exit path of an invocation, normal or early.
    pub(crate) fn pop_frame(&mut self) {
        // The global frame is permanent.
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Returns `true` while a call frame is active above the global scope.
    pub(crate) fn has_local_frame(&self) -> bool {
        self.frames.len() > 1
    }

    pub(crate) fn global_frame(&self) -> &Scope {
        &self.frames[0]
    }

    fn global_frame_mut(&mut self) -> &mut Scope {
        &mut self.frames[0]
    }

    fn active_frame_mut(&mut self) -> &mut Scope {
        // frames is never empty: new() seeds the global scope.
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Resolves a name the way plain-variable reads do: the active call
    /// frame first, then the global scope. Intermediate callers' frames are
    /// never consulted.
    pub(crate) fn lookup(&self, name: &str) -> Option<&Value> {
        if let Some(frame) = self.frames.last() {
            if let Some(binding) = frame.get(name) {
                return Some(&binding.value);
            }
        }
        self.global_frame().get(name).map(|binding| &binding.value)
    }

    /// Binds a name in the current frame (the active call frame if one
    /// exists, else the global scope).
    ///
    /// `declared` marks a fresh `let` initialization: declaring a name that
    /// already exists in the *global* scope while a call frame is active is
    /// a fatal shadowing error. Bare re-assignments skip that check and bind
    /// locally, leaving the global untouched — the write order deliberately
    /// differs from the read order.
    ///
    /// ## Errors
    /// - `RuntimeError::VariableShadowing`: A `let` of a global name inside
    ///   a call.
    /// - `RuntimeError::ConstBinding`: The target frame already binds the
    ///   name as `const`.
    pub(crate) fn bind(&mut self,
                       name: &str,
                       value: Value,
                       declared: bool,
                       line: usize)
                       -> EvalResult<()> {
        if declared && self.has_local_frame() && self.global_frame().contains(name) {
            return Err(RuntimeError::VariableShadowing { name: name.to_owned(),
                                                         line });
        }

        let frame = self.active_frame_mut();
        if frame.get(name).is_some_and(|binding| binding.constant) {
            return Err(RuntimeError::ConstBinding { name: name.to_owned(),
                                                    line });
        }

        frame.insert(name, Binding::new(value));
        Ok(())
    }

    /// Binds a name in the current frame without any shadowing or const
    /// checking. Used for declarations the interpreter itself produces
    /// (functions, objects, call parameters).
    pub(crate) fn bind_unchecked(&mut self, name: &str, binding: Binding) {
        self.active_frame_mut().insert(name, binding);
    }

    /// Binds a builtin object singleton into the global scope. Construction
    /// only.
    pub(crate) fn bind_global(&mut self, name: &str, value: Value) {
        self.global_frame_mut().insert(name, Binding::new(value));
    }
}
