use std::{collections::HashMap, iter::Peekable, slice};

use tracing::{debug, trace};

use crate::{
    ast::{Statement, TypeHint},
    error::{Diagnostics, ParseError, Severity},
    interpreter::lexer::{Token, TokenKind},
};

/// Result type used by the parser.
///
/// All parsing functions return either a parsed node of type `T` or a
/// [`ParseError`] describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// The recursive-descent parser state.
///
/// A single cursor over the token slice (cloneable, so any production can
/// peek arbitrarily far ahead), the severity-thresholded diagnostics sink,
/// and the advisory name→hint table fed by `fn` and `object` declarations.
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) tokens:      Peekable<slice::Iter<'a, Token>>,
    pub(in crate::interpreter::parser) diagnostics: Diagnostics,
    pub(in crate::interpreter::parser) hints:       HashMap<String, TypeHint>,
}

/// Parses an Eof-terminated token stream into an ordered statement sequence.
///
/// Returns the sequence (or the first structurally unrecoverable
/// [`ParseError`]) together with the diagnostics retained under `threshold`.
/// The diagnostics list may be non-empty even when parsing succeeds, and it
/// survives a parse failure: everything reported before the error is kept.
///
/// # Example
/// ```
/// use ladle::{
///     ast::Statement,
///     error::Severity,
///     interpreter::{lexer::lex, parser::core::parse},
/// };
///
/// let tokens = lex("let src: string = 'src';").unwrap();
/// let (statements, diagnostics) = parse(&tokens, Severity::Many);
///
/// let statements = statements.unwrap();
/// assert_eq!(statements.len(), 1);
/// assert!(matches!(&statements[0], Statement::Assignment { name, .. } if name == "src"));
/// assert!(diagnostics.is_empty());
/// ```
pub fn parse(tokens: &[Token],
             threshold: Severity)
             -> (ParseResult<Vec<Statement>>, Diagnostics) {
    let mut parser = Parser { tokens:      tokens.iter().peekable(),
                              diagnostics: Diagnostics::new(threshold),
                              hints:       HashMap::new(), };

    let statements = parser.parse_program();
    (statements, parser.diagnostics)
}

impl Parser<'_> {
    fn parse_program(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();

        loop {
            self.skip_line_breaks();
            if self.peek_kind() == TokenKind::Eof {
                break;
            }
            statements.push(self.parse_statement()?);
        }

        debug!("parsed {} top-level statements", statements.len());
        Ok(statements)
    }

    /// Parses one statement, dispatching on the head token.
    ///
    /// Block-shaped statements (`fn`, `object`, `if`, `while`) end with their
    /// closing brace; every other statement is `;`-terminated here. `while`
    /// and `from` are contextual keywords, recognized by spelling and the
    /// token that follows them.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        let token = self.peek();
        trace!("statement dispatch on {token} at line {}", token.line);

        match token.kind {
            TokenKind::Fn => {
                return Ok(Statement::FunctionDeclaration(self.parse_fn_declaration(true)?))
            },
            TokenKind::Object => return self.parse_object(),
            TokenKind::If => return self.parse_if(),
            TokenKind::Identifier
                if token.lexeme == "while"
                   && self.peek_second().kind == TokenKind::CallOpen =>
            {
                return self.parse_while();
            },
            _ => {},
        }

        let statement = match token.kind {
            TokenKind::Let => self.parse_let(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Mod => self.parse_module_identity(),
            TokenKind::Break => {
                let line = self.advance().line;
                Ok(Statement::ExplicitBreakpoint { line })
            },
            TokenKind::CallOpen => self.parse_grouping(),
            TokenKind::ListOpen => self.parse_list_literal(),
            TokenKind::BraceOpen => self.parse_dict_literal(),
            TokenKind::Identifier
                if token.lexeme == "from" && self.peek_second().kind == TokenKind::Str =>
            {
                self.parse_import()
            },
            TokenKind::Identifier => self.parse_assignment_or_value(),
            TokenKind::Str | TokenKind::Number | TokenKind::Boolean | TokenKind::Null => {
                self.parse_value_statement()
            },
            TokenKind::Eof => Err(ParseError::UnexpectedEndOfInput { line: token.line }),
            _ => {
                Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                  line:  token.line, })
            },
        }?;

        self.expect(TokenKind::LineBreak)?;
        Ok(statement)
    }

    /// Parses `mod 'name';`.
    fn parse_module_identity(&mut self) -> ParseResult<Statement> {
        let line = self.expect(TokenKind::Mod)?.line;
        let name = self.expect(TokenKind::Str)?.lexeme.clone();

        Ok(Statement::ModuleIdentity { name, line })
    }

    /// Parses `from 'path' import { a, b };` or `from 'path' import { * };`.
    fn parse_import(&mut self) -> ParseResult<Statement> {
        let line = self.expect_contextual("from")?.line;
        let path = self.expect(TokenKind::Str)?.lexeme.clone();
        self.expect_contextual("import")?;
        self.expect(TokenKind::BraceOpen)?;

        let (names, wildcard) = if self.peek_kind() == TokenKind::Star {
            self.advance();
            self.expect(TokenKind::BraceClose)?;
            (Vec::new(), true)
        } else {
            let names =
                self.comma_separated(TokenKind::BraceClose,
                                     |parser| Ok(parser.expect_identifier()?.lexeme.clone()))?;
            (names, false)
        };

        Ok(Statement::ModuleImport { path,
                                     names,
                                     wildcard,
                                     line })
    }
}
