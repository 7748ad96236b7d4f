use std::rc::Rc;

use crate::{ast::FunctionDecl, interpreter::evaluator::scope::Scope};

/// An evaluated `object` declaration: the blueprint instances are copied
/// from.
#[derive(Debug, Clone, PartialEq)]
pub struct StructData {
    /// The declared object name.
    pub name:    String,
    /// The member functions, in declaration order.
    pub members: Vec<Rc<FunctionDecl>>,
}

impl StructData {
    /// Looks up a member function by name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Rc<FunctionDecl>> {
        self.members.iter().find(|member| member.name == name)
    }
}

/// One living instance of an object: the definition's members copied into a
/// private scope under a unique identifier.
///
/// Distinct instances never alias each other's storage; equality between
/// instances is identity (`id`) alone.
#[derive(Debug)]
pub struct InstanceData {
    /// The unique instance identifier, drawn from the interpreter's counter.
    pub id:    u64,
    /// The name of the object this is an instance of.
    pub name:  String,
    /// The member scope. Written once at instantiation, read-only afterwards.
    pub scope: Scope,
}
