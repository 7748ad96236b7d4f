#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character the lexer cannot classify.
    UnexpectedCharacter {
        /// The offending character(s).
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A string literal was still open when the input ended.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal matched the scan rule but parses as neither an
    /// integer nor a decimal.
    MalformedNumber {
        /// The raw slice that failed to parse.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier was required but something else was found.
    ExpectedIdentifier {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// The expected token spelling.
        expected: &'static str,
        /// The token encountered instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An `object` declaration contained a member that is not a function
    /// declaration.
    InvalidStructMember {
        /// The name of the object being declared.
        object: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A condition was not of the form `primary == primary` or
    /// `primary != primary`.
    InvalidCondition {
        /// The token encountered where a comparison operator belongs.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A grouping `(` was still open when the input or statement ended.
    UnterminatedGrouping {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to use a reserved word as an identifier.
    IdentifierReserved {
        /// The reserved name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, line } => {
                write!(f, "Error on line {line}: Unexpected character: {found}.")
            },

            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },

            Self::MalformedNumber { lexeme, line } => {
                write!(f,
                       "Error on line {line}: Malformed number literal '{lexeme}'.")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedIdentifier { found, line } => {
                write!(f,
                       "Error on line {line}: Expected an identifier but found {found}.")
            },

            Self::ExpectedToken { expected, found, line } => {
                write!(f,
                       "Error on line {line}: Expected '{expected}' but found {found}.")
            },

            Self::InvalidStructMember { object, line } => {
                write!(f,
                       "Error on line {line}: Members of object '{object}' must be function declarations.")
            },

            Self::InvalidCondition { found, line } => {
                write!(f,
                       "Error on line {line}: Conditions must compare two values with '==' or '!=', found {found}.")
            },

            Self::UnterminatedGrouping { line } => {
                write!(f, "Error on line {line}: Unterminated grouping.")
            },

            Self::IdentifierReserved { name, line } => {
                write!(f, "Error on line {line}: Identifier {name} is reserved.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
