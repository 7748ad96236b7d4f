use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// Fallback token handed out if a caller-provided stream is missing its
/// Eof terminator.
static EOF: Token = Token { kind:    TokenKind::Eof,
                            lexeme:  String::new(),
                            literal: None,
                            line:    0, };

/// The source spelling of a token kind, for expectation messages.
pub(in crate::interpreter::parser) const fn spelling(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::ListOpen => "[",
        TokenKind::ListClose => "]",
        TokenKind::BraceOpen => "{",
        TokenKind::BraceClose => "}",
        TokenKind::Comma => ",",
        TokenKind::Colon => ":",
        TokenKind::CallOpen => "(",
        TokenKind::CallClose => ")",
        TokenKind::Equals => "=",
        TokenKind::LineBreak => ";",
        TokenKind::Plus => "+",
        TokenKind::Minus => "-",
        TokenKind::Star => "*",
        TokenKind::Slash => "/",
        TokenKind::Arrow => "->",
        TokenKind::EqualEqual => "==",
        TokenKind::BangEqual => "!=",
        TokenKind::Str => "a string",
        TokenKind::Number => "a number",
        TokenKind::Boolean => "a boolean",
        TokenKind::Null => "null",
        TokenKind::Identifier => "an identifier",
        TokenKind::Mod => "mod",
        TokenKind::End => "end",
        TokenKind::If => "if",
        TokenKind::Else => "else",
        TokenKind::Fn => "fn",
        TokenKind::Return => "return",
        TokenKind::Let => "let",
        TokenKind::Break => "__break",
        TokenKind::Object => "object",
        TokenKind::Whitespace => "whitespace",
        TokenKind::Newline => "a newline",
        TokenKind::Comment => "a comment",
        TokenKind::Eof => "end of input",
    }
}

impl<'a> Parser<'a> {
    /// Looks at the next token without consuming it.
    ///
    /// The returned reference borrows the token slice, not the parser, so
    /// the cursor stays free for further calls.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> &'a Token {
        self.tokens.peek().copied().unwrap_or(&EOF)
    }

    /// Looks at the kind of the next token without consuming it.
    pub(in crate::interpreter::parser) fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    /// Looks two tokens ahead by cloning the cursor.
    pub(in crate::interpreter::parser) fn peek_second(&self) -> &'a Token {
        let mut lookahead = self.tokens.clone();
        lookahead.next();
        lookahead.next().unwrap_or(&EOF)
    }

    /// Consumes and returns the next token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> &'a Token {
        self.tokens.next().unwrap_or(&EOF)
    }

    /// Consumes the next token if it has the given kind, or fails with an
    /// expectation error naming the kind's spelling.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 kind: TokenKind)
                                                 -> ParseResult<&'a Token> {
        let token = self.peek();
        if token.kind == kind {
            Ok(self.advance())
        } else {
            Err(ParseError::ExpectedToken { expected: spelling(kind),
                                            found:    token.to_string(),
                                            line:     token.line, })
        }
    }

    /// Consumes the next token if it is an identifier.
    pub(in crate::interpreter::parser) fn expect_identifier(&mut self) -> ParseResult<&'a Token> {
        let token = self.peek();
        if token.kind == TokenKind::Identifier {
            Ok(self.advance())
        } else {
            Err(ParseError::ExpectedIdentifier { found: token.to_string(),
                                                 line:  token.line, })
        }
    }

    /// Consumes the next token if it is an identifier with the given
    /// spelling. Contextual keywords (`while`, `from`, `import`, `const`)
    /// are matched this way rather than being reserved.
    pub(in crate::interpreter::parser) fn expect_contextual(&mut self,
                                                            word: &'static str)
                                                            -> ParseResult<&'a Token> {
        let token = self.peek();
        if token.kind == TokenKind::Identifier && token.lexeme == word {
            Ok(self.advance())
        } else {
            Err(ParseError::ExpectedToken { expected: word,
                                            found:    token.to_string(),
                                            line:     token.line, })
        }
    }

    /// Skips any run of stray `;` tokens.
    pub(in crate::interpreter::parser) fn skip_line_breaks(&mut self) {
        while self.peek_kind() == TokenKind::LineBreak {
            self.advance();
        }
    }

    /// Returns `true` when the next two tokens form a `::` separator.
    pub(in crate::interpreter::parser) fn at_double_colon(&mut self) -> bool {
        self.peek_kind() == TokenKind::Colon && self.peek_second().kind == TokenKind::Colon
    }

    /// Parses a comma-separated list of items, consuming the closing token.
    ///
    /// Shared by list and dict literals, argument and parameter lists, and
    /// import-name lists. An immediately encountered closing token produces
    /// an empty list.
    ///
    /// Grammar: `list := closing | item ("," item)* closing`
    pub(in crate::interpreter::parser) fn comma_separated<T>(
        &mut self,
        closing: TokenKind,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.peek_kind() == closing {
            self.advance();
            return Ok(items);
        }

        loop {
            items.push(parse_item(self)?);

            let token = self.peek();
            if token.kind == TokenKind::Comma {
                self.advance();
            } else if token.kind == closing {
                self.advance();
                break;
            } else {
                return Err(ParseError::UnexpectedToken { token: format!("{token} where ',' or '{}' belongs",
                                                                        spelling(closing)),
                                                         line:  token.line, });
            }
        }
        Ok(items)
    }
}
