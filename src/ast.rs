/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code: strings, integers, decimals, booleans, and `null`. It is used
/// both inside tokens (as the typed payload of a literal token) and in the AST
/// as the payload of a literal statement.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A string literal, stored without its delimiters.
    Str(String),
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A decimal literal.
    Decimal(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The `null` literal.
    Null,
}

impl<T: Into<Self> + Clone> From<&T> for LiteralValue {
    fn from(v: &T) -> Self {
        v.clone().into()
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

/// An advisory nominal type tag attached to declarations and parameters.
///
/// Hints are compared by name equality only and never change what a value
/// is at runtime; a mismatch produces a diagnostic, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeHint {
    /// The declared type name, e.g. `string` or `any`.
    pub name: String,
}

impl TypeHint {
    /// Creates a hint with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The default hint attached when a declaration omits one.
    #[must_use]
    pub fn any() -> Self {
        Self::new("any")
    }

    /// Returns `true` when this hint matches every value.
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.name == "any"
    }

    /// Returns `true` when this hint names an integral type.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.name == "int" || self.name == "integer"
    }

    /// Returns `true` when this hint names a string type.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.name == "string" || self.name == "str"
    }

    /// Whether a runtime type name satisfies this hint. `any` accepts
    /// everything; `int`/`integer` and `string`/`str` are synonyms;
    /// everything else compares by name.
    ///
    /// ## Example
    /// ```
    /// use ladle::ast::TypeHint;
    ///
    /// assert!(TypeHint::new("int").matches("integer"));
    /// assert!(TypeHint::any().matches("list"));
    /// assert!(!TypeHint::new("string").matches("integer"));
    /// ```
    #[must_use]
    pub fn matches(&self, type_name: &str) -> bool {
        if self.is_any() {
            return true;
        }
        if self.is_integral() {
            return type_name == "integer";
        }
        if self.is_string() {
            return type_name == "string";
        }
        self.name == type_name
    }
}

impl std::fmt::Display for TypeHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A declared function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// The parameter name.
    pub name:     String,
    /// The advisory type hint, `any` when omitted.
    pub hint:     TypeHint,
    /// Whether the parameter was marked `const`.
    pub constant: bool,
}

/// A user-defined function declaration, either free-standing or an object
/// member. The same shape backs the runtime function value.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The declared name.
    pub name:        String,
    /// The ordered parameter list.
    pub params:      Vec<Parameter>,
    /// The advisory return hint, `any` when the arrow was omitted.
    pub return_hint: TypeHint,
    /// The body statements, executed in order.
    pub body:        Vec<Statement>,
    /// Line number in the source code.
    pub line:        usize,
}

impl FunctionDecl {
    /// Returns `true` when the first declared parameter is literally named
    /// `self`, making this an instance method.
    #[must_use]
    pub fn is_instance_method(&self) -> bool {
        self.params.first().is_some_and(|p| p.name == "self")
    }
}

/// One step of a variable-access chain such as `a::b::c()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Accessor {
    /// A plain member or variable name.
    Name {
        /// The accessed name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A call, with its unevaluated arguments.
    Call {
        /// The called name.
        name: String,
        /// The argument statements, evaluated left to right.
        args: Vec<Statement>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Accessor {
    /// Returns the accessed name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name { name, .. } | Self::Call { name, .. } => name,
        }
    }

    /// Returns the source line of this accessor.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Name { line, .. } | Self::Call { line, .. } => *line,
        }
    }
}

/// A comparison operator usable in conditions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompareOp {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// An arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathOp {
    /// Addition (`+`)
    Addition,
    /// Subtraction (`-`)
    Subtraction,
    /// Multiplication (`*`)
    Multiplication,
    /// Division (`/`)
    Division,
}

impl std::fmt::Display for MathOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
        };
        write!(f, "{operator}")
    }
}

/// A condition of the fixed shape `primary operator primary`.
///
/// Conditions are deliberately this narrow: no boolean connectives, no
/// relational operators, no chaining.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// The left operand.
    pub left:  Box<Statement>,
    /// The comparison operator.
    pub op:    CompareOp,
    /// The right operand.
    pub right: Box<Statement>,
    /// Line number in the source code.
    pub line:  usize,
}

/// An abstract syntax tree node.
///
/// Every production of the grammar is a `Statement` — literals, variables,
/// calls, and assignments included. This unification keeps the AST lattice
/// flat at the cost of runtime tag-checking in the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binding produced by `let` or by a bare re-assignment.
    Assignment {
        /// The target name.
        name:     String,
        /// The declared hint, `any` when omitted.
        hint:     TypeHint,
        /// The right-hand side.
        value:    Box<Self>,
        /// Whether this is a fresh `let` initialization rather than a bare
        /// re-assignment.
        declared: bool,
        /// Line number in the source code.
        line:     usize,
    },
    /// A list literal.
    List {
        /// Elements in literal order.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A dict literal; every entry is a `DictAssignment`.
    Dict {
        /// The key/value entries in literal order.
        entries: Vec<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// One `key: value` pair of a dict literal.
    DictAssignment {
        /// The key statement.
        key:   Box<Self>,
        /// The value statement.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A call such as `f(1, 'two')`.
    FunctionCall {
        /// The called name.
        name: String,
        /// The argument statements, evaluated left to right.
        args: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A function declaration.
    FunctionDeclaration(FunctionDecl),
    /// An `object` declaration; members are function declarations only.
    StructDeclaration {
        /// The declared object name.
        name:    String,
        /// The member functions.
        members: Vec<FunctionDecl>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A `{ ... }` body.
    Block {
        /// Statements in declaration order.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// An `if (cond) { .. } [else { .. }]`.
    Conditional {
        /// The comparison to test.
        condition:   Condition,
        /// The block run when the condition holds.
        then_branch: Box<Self>,
        /// The block run otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A `while (cond) { .. }` loop.
    WhileLoop {
        /// The comparison tested before every iteration.
        condition: Condition,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An accessor chain such as `a::b::c()`.
    VariableAccess {
        /// The ordered accessors, at least two.
        accessors: Vec<Accessor>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An arithmetic operation.
    Math {
        /// The operator.
        op:    MathOp,
        /// The left operand.
        left:  Box<Self>,
        /// The right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized sequence of arithmetic sub-statements, evaluated
    /// left to right.
    Grouping {
        /// The sub-statements.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A `return [value];` statement.
    Return {
        /// The payload, if any.
        value: Option<Box<Self>>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `mod 'name';` module identity declaration.
    ModuleIdentity {
        /// The declared module name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A `from 'path' import { .. };` declaration.
    ModuleImport {
        /// The import path string.
        path:     String,
        /// The named imports; empty when `wildcard` is set.
        names:    Vec<String>,
        /// Whether `{ * }` was written.
        wildcard: bool,
        /// Line number in the source code.
        line:     usize,
    },
    /// An explicit `__break;` breakpoint marker.
    ExplicitBreakpoint {
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use ladle::ast::Statement;
    ///
    /// let stmt = Statement::Variable { name: "x".to_string(),
    ///                                  line: 5, };
    ///
    /// assert_eq!(stmt.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Assignment { line, .. }
            | Self::List { line, .. }
            | Self::Dict { line, .. }
            | Self::DictAssignment { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::StructDeclaration { line, .. }
            | Self::Block { line, .. }
            | Self::Conditional { line, .. }
            | Self::WhileLoop { line, .. }
            | Self::VariableAccess { line, .. }
            | Self::Math { line, .. }
            | Self::Grouping { line, .. }
            | Self::Return { line, .. }
            | Self::ModuleIdentity { line, .. }
            | Self::ModuleImport { line, .. }
            | Self::ExplicitBreakpoint { line } => *line,
            Self::FunctionDeclaration(decl) => decl.line,
        }
    }
}
