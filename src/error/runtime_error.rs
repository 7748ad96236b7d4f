#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A fresh `let` would shadow a global binding from inside a call.
    VariableShadowing {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to re-assign a binding marked constant.
    ConstBinding {
        /// The name of the binding.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An accessor chain hit a value that has no members.
    NotAccessible {
        /// The accessor that resolved to a plain value.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operation received a value of the wrong type.
    TypeError {
        /// Details describing the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A condition evaluated to something other than a boolean.
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function or member was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the callable.
        name:     String,
        /// The declared parameter count.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed, or an integer was too large to
    /// promote to a decimal without losing precision.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `assert` builtin found two values unequal.
    AssertionFailed {
        /// The evaluated value.
        actual:   String,
        /// The value it was compared against.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Script code raised an explicit panic.
    UserPanic {
        /// The panic message.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Script code requested termination via `quit`.
    Quit {
        /// The requested exit code.
        code: i32,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A malformed AST node reached a branch that cannot evaluate it.
    MalformedNode {
        /// Details describing the invariant that was violated.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Returns the source line this error was raised on.
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::VariableShadowing { line, .. }
            | Self::ConstBinding { line, .. }
            | Self::NotAccessible { line, .. }
            | Self::TypeError { line, .. }
            | Self::ExpectedBoolean { line }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::AssertionFailed { line, .. }
            | Self::UserPanic { line, .. }
            | Self::Quit { line, .. }
            | Self::MalformedNode { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },

            Self::VariableShadowing { name, line } => {
                write!(f,
                       "Error on line {line}: '{name}' would shadow a global variable.")
            },

            Self::ConstBinding { name, line } => {
                write!(f,
                       "Error on line {line}: Cannot assign to constant binding '{name}'.")
            },

            Self::NotAccessible { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not further accessible.")
            },

            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },

            Self::ExpectedBoolean { line } => {
                write!(f, "Error on line {line}: Condition did not evaluate to a boolean.")
            },

            Self::ArgumentCountMismatch { name, expected, found, line } => {
                write!(f,
                       "Error on line {line}: '{name}' takes {expected} argument(s) but {found} were supplied.")
            },

            Self::DivisionByZero { line } => {
                write!(f, "Error on line {line}: Division by zero.")
            },

            Self::Overflow { line } => {
                write!(f, "Error on line {line}: Numeric overflow.")
            },

            Self::AssertionFailed { actual, expected, line } => {
                write!(f,
                       "Error on line {line}: Assertion failed: {actual} is not {expected}.")
            },

            Self::UserPanic { message, line } => {
                write!(f, "Error on line {line}: Panic: {message}")
            },

            Self::Quit { code, line } => {
                write!(f, "Error on line {line}: Quit with exit code {code}.")
            },

            Self::MalformedNode { details, line } => {
                write!(f, "Error on line {line}: Malformed statement: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
