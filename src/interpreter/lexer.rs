use logos::Logos;

use crate::{ast::LiteralValue, error::ParseError};

/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[`
    ListOpen,
    /// `]`
    ListClose,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `(`
    CallOpen,
    /// `)`
    CallClose,
    /// `=`
    Equals,
    /// `;`
    LineBreak,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `->`
    Arrow,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// A string literal.
    Str,
    /// An integer or decimal literal.
    Number,
    /// `true` or `false`.
    Boolean,
    /// `null`
    Null,
    /// A name.
    Identifier,
    /// `mod`
    Mod,
    /// `end`
    End,
    /// `if`
    If,
    /// `else`
    Else,
    /// `fn`
    Fn,
    /// `return`
    Return,
    /// `let`
    Let,
    /// `__break`
    Break,
    /// `object`
    Object,
    /// A run of spaces/tabs, only present in layout-preserving streams.
    Whitespace,
    /// A newline, only present in layout-preserving streams.
    Newline,
    /// A `#` comment, only present in layout-preserving streams.
    Comment,
    /// The end-of-input sentinel, always the final token.
    Eof,
}

/// A lexical token: its kind, its text, an optional typed literal payload,
/// and the source line it starts on.
///
/// For string tokens the lexeme is the captured content without delimiters;
/// for everything else it is the raw slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classification.
    pub kind:    TokenKind,
    /// The token text.
    pub lexeme:  String,
    /// The typed payload of literal tokens, `None` otherwise.
    pub literal: Option<LiteralValue>,
    /// The source line the token starts on.
    pub line:    usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.lexeme),
            TokenKind::Str => write!(f, "string '{}'", self.lexeme),
            TokenKind::Number => write!(f, "number '{}'", self.lexeme),
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}

/// Scanner-level failures, mapped to [`ParseError`] before leaving the
/// lexer.
#[derive(Clone, Debug, Default, PartialEq)]
enum LexError {
    /// A character outside every token class.
    #[default]
    UnexpectedCharacter,
    /// A string still open at end of input.
    UnterminatedString,
    /// A digit/dot run that is neither an integer nor a decimal.
    MalformedNumber,
}

impl LexError {
    fn into_parse_error(self, slice: &str, line: usize) -> ParseError {
        match self {
            Self::UnexpectedCharacter => ParseError::UnexpectedCharacter { found: slice.to_owned(),
                                                                           line },
            Self::UnterminatedString => ParseError::UnterminatedString { line },
            Self::MalformedNumber => ParseError::MalformedNumber { lexeme: slice.to_owned(),
                                                                   line },
        }
    }
}

/// The raw token produced by the generated scanner, before projection into
/// the public [`Token`] record.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
enum RawToken {
    /// Numeric literals: a maximal run of digits and dots, such as `42` or
    /// `10.0`. Runs matching neither an integer nor a decimal are fatal.
    #[regex(r"[0-9][0-9.]*", lex_number)]
    Number(LiteralValue),
    /// String literals, delimited by `'` or `"`. No escape mechanism
    /// exists; the content simply ends at the next matching delimiter.
    #[token("'", lex_string)]
    #[token("\"", lex_string)]
    Str(String),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", lex_bool)]
    #[token("false", lex_bool)]
    Boolean(bool),
    /// `null`
    #[token("null")]
    Null,
    /// `mod`
    #[token("mod")]
    Mod,
    /// `end`
    #[token("end")]
    End,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `return`
    #[token("return")]
    Return,
    /// `let`
    #[token("let")]
    Let,
    /// `__break`
    #[token("__break")]
    Break,
    /// `object`
    #[token("object")]
    Object,
    /// Identifier tokens: a maximal run of letters, `_`, and `$`. Digits
    /// are not identifier characters.
    #[regex(r"[a-zA-Z_$]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `[`
    #[token("[")]
    ListOpen,
    /// `]`
    #[token("]")]
    ListClose,
    /// `{`
    #[token("{")]
    BraceOpen,
    /// `}`
    #[token("}")]
    BraceClose,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    CallOpen,
    /// `)`
    #[token(")")]
    CallClose,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    LineBreak,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `->`
    #[token("->")]
    Arrow,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `# Comments.`
    #[regex(r"#[^\n]*")]
    Comment,
    /// Newlines bump the line counter; the token itself only survives in
    /// layout-preserving streams.
    #[token("\n", |lex| lex.extras.line += 1)]
    Newline,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f]+")]
    Whitespace,
    /// Carriage returns are dropped in every mode.
    #[token("\r", logos::skip)]
    CarriageReturn,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice: first as a 64-bit
/// integer, else as a decimal.
///
/// # Returns
/// - `Ok(LiteralValue)`: The parsed integer or decimal.
/// - `Err(LexError::MalformedNumber)`: If the run parses as neither, e.g.
///   `1.2.3`.
fn lex_number(lex: &logos::Lexer<RawToken>) -> Result<LiteralValue, LexError> {
    let slice = lex.slice();
    if let Ok(integer) = slice.parse::<i64>() {
        return Ok(LiteralValue::Integer(integer));
    }
    slice.parse::<f64>()
         .map(LiteralValue::Decimal)
         .map_err(|_| LexError::MalformedNumber)
}

/// Scans a string literal from the opening delimiter to its matching twin,
/// consuming the content and the closing delimiter.
///
/// Newlines inside the content are legal and counted. There is no escape
/// mechanism: the content simply cannot contain the delimiter character.
///
/// # Returns
/// - `Ok(String)`: The captured content without delimiters.
/// - `Err(LexError::UnterminatedString)`: If the input ends first.
fn lex_string(lex: &mut logos::Lexer<RawToken>) -> Result<String, LexError> {
    let quote = lex.slice()
                   .chars()
                   .next()
                   .ok_or(LexError::UnterminatedString)?;
    match lex.remainder().find(quote) {
        Some(end) => {
            let content = lex.remainder()[..end].to_owned();
            lex.extras.line += content.matches('\n').count();
            lex.bump(end + quote.len_utf8());
            Ok(content)
        },
        None => Err(LexError::UnterminatedString),
    }
}

/// Parses a boolean literal from the current token slice (`true` or
/// `false`).
fn lex_bool(lex: &logos::Lexer<RawToken>) -> Result<bool, LexError> {
    match lex.slice() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(LexError::UnexpectedCharacter),
    }
}

impl Token {
    fn from_raw(raw: RawToken, slice: &str, line: usize) -> Self {
        let (kind, lexeme, literal) = match raw {
            RawToken::Number(value) => (TokenKind::Number, slice.to_owned(), Some(value)),
            RawToken::Str(content) => {
                let literal = LiteralValue::Str(content.clone());
                (TokenKind::Str, content, Some(literal))
            },
            RawToken::Boolean(value) => {
                (TokenKind::Boolean, slice.to_owned(), Some(LiteralValue::Bool(value)))
            },
            RawToken::Null => (TokenKind::Null, slice.to_owned(), None),
            RawToken::Mod => (TokenKind::Mod, slice.to_owned(), None),
            RawToken::End => (TokenKind::End, slice.to_owned(), None),
            RawToken::If => (TokenKind::If, slice.to_owned(), None),
            RawToken::Else => (TokenKind::Else, slice.to_owned(), None),
            RawToken::Fn => (TokenKind::Fn, slice.to_owned(), None),
            RawToken::Return => (TokenKind::Return, slice.to_owned(), None),
            RawToken::Let => (TokenKind::Let, slice.to_owned(), None),
            RawToken::Break => (TokenKind::Break, slice.to_owned(), None),
            RawToken::Object => (TokenKind::Object, slice.to_owned(), None),
            RawToken::Identifier(name) => (TokenKind::Identifier, name, None),
            RawToken::ListOpen => (TokenKind::ListOpen, slice.to_owned(), None),
            RawToken::ListClose => (TokenKind::ListClose, slice.to_owned(), None),
            RawToken::BraceOpen => (TokenKind::BraceOpen, slice.to_owned(), None),
            RawToken::BraceClose => (TokenKind::BraceClose, slice.to_owned(), None),
            RawToken::Comma => (TokenKind::Comma, slice.to_owned(), None),
            RawToken::Colon => (TokenKind::Colon, slice.to_owned(), None),
            RawToken::CallOpen => (TokenKind::CallOpen, slice.to_owned(), None),
            RawToken::CallClose => (TokenKind::CallClose, slice.to_owned(), None),
            RawToken::Equals => (TokenKind::Equals, slice.to_owned(), None),
            RawToken::LineBreak => (TokenKind::LineBreak, slice.to_owned(), None),
            RawToken::Plus => (TokenKind::Plus, slice.to_owned(), None),
            RawToken::Minus => (TokenKind::Minus, slice.to_owned(), None),
            RawToken::Star => (TokenKind::Star, slice.to_owned(), None),
            RawToken::Slash => (TokenKind::Slash, slice.to_owned(), None),
            RawToken::Arrow => (TokenKind::Arrow, slice.to_owned(), None),
            RawToken::EqualEqual => (TokenKind::EqualEqual, slice.to_owned(), None),
            RawToken::BangEqual => (TokenKind::BangEqual, slice.to_owned(), None),
            RawToken::Comment => (TokenKind::Comment, slice.to_owned(), None),
            RawToken::Newline => (TokenKind::Newline, slice.to_owned(), None),
            RawToken::Whitespace => (TokenKind::Whitespace, slice.to_owned(), None),
            RawToken::CarriageReturn => (TokenKind::Whitespace, String::new(), None),
        };
        Self { kind,
               lexeme,
               literal,
               line }
    }
}

/// Tokenizes `source` into an Eof-terminated stream, filtering whitespace,
/// newline, and comment tokens.
///
/// # Errors
/// Returns a [`ParseError`] and no partial stream for unterminated strings,
/// malformed numbers, and unclassifiable characters.
///
/// # Example
/// ```
/// use ladle::interpreter::lexer::{lex, TokenKind};
///
/// let tokens = lex("let x = 1;").unwrap();
///
/// assert_eq!(tokens[0].kind, TokenKind::Let);
/// assert_eq!(tokens[1].lexeme, "x");
/// assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
/// ```
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    lex_with_layout(source, false)
}

/// Tokenizes `source` like [`lex`], but retains whitespace, newline, and
/// comment tokens verbatim for layout-sensitive tooling. Carriage returns
/// are still dropped.
pub fn lex_preserving(source: &str) -> Result<Vec<Token>, ParseError> {
    lex_with_layout(source, true)
}

fn lex_with_layout(source: &str, preserve_layout: bool) -> Result<Vec<Token>, ParseError> {
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    loop {
        // Snapshot before advancing: callbacks bump the counter for any
        // newlines inside the token, and the token belongs to its first line.
        let line = lexer.extras.line;
        let Some(result) = lexer.next() else {
            break;
        };
        let raw = result.map_err(|e| e.into_parse_error(lexer.slice(), lexer.extras.line))?;

        if !preserve_layout
           && matches!(raw,
                       RawToken::Whitespace | RawToken::Newline | RawToken::Comment)
        {
            continue;
        }

        tokens.push(Token::from_raw(raw, lexer.slice(), line));
    }

    tokens.push(Token { kind:    TokenKind::Eof,
                        lexeme:  String::new(),
                        literal: None,
                        line:    lexer.extras.line, });
    Ok(tokens)
}
