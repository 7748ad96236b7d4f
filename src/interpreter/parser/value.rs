use crate::{
    ast::{Accessor, LiteralValue, MathOp, Statement, TypeHint},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// Maps an operator token to its arithmetic operation, if it is one.
const fn math_op(kind: TokenKind) -> Option<MathOp> {
    match kind {
        TokenKind::Plus => Some(MathOp::Addition),
        TokenKind::Minus => Some(MathOp::Subtraction),
        TokenKind::Star => Some(MathOp::Multiplication),
        TokenKind::Slash => Some(MathOp::Division),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses a primary: a literal, a list or dict literal, a bare
    /// identifier, a call, or an accessor chain.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Statement> {
        let token = self.peek();
        match token.kind {
            TokenKind::Str
            | TokenKind::Number
            | TokenKind::Boolean
            | TokenKind::Null => self.parse_literal(),
            TokenKind::Identifier => self.parse_identifier_primary(),
            TokenKind::ListOpen => self.parse_list_literal(),
            TokenKind::BraceOpen => self.parse_dict_literal(),
            _ => {
                Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                  line:  token.line, })
            },
        }
    }

    /// Parses a literal token into a literal statement.
    pub(in crate::interpreter::parser) fn parse_literal(&mut self) -> ParseResult<Statement> {
        let token = self.advance();
        let value = match token.kind {
            TokenKind::Null => LiteralValue::Null,
            _ => {
                token.literal
                     .clone()
                     .ok_or(ParseError::UnexpectedToken { token: token.to_string(),
                                                          line:  token.line, })?
            },
        };

        Ok(Statement::Literal { value,
                                line: token.line })
    }

    /// Parses an identifier head: a call, an accessor chain, or a plain
    /// variable reference.
    pub(in crate::interpreter::parser) fn parse_identifier_primary(&mut self)
                                                                   -> ParseResult<Statement> {
        let token = self.expect_identifier()?;
        let name = token.lexeme.clone();
        let line = token.line;

        if self.peek_kind() == TokenKind::CallOpen {
            self.advance();
            let args =
                self.comma_separated(TokenKind::CallClose, Self::parse_value_statement)?;

            if self.at_double_colon() {
                return self.parse_chain(Accessor::Call { name, args, line }, line);
            }
            return Ok(Statement::FunctionCall { name, args, line });
        }

        if self.at_double_colon() {
            return self.parse_chain(Accessor::Name { name, line }, line);
        }

        Ok(Statement::Variable { name, line })
    }

    /// Parses the tail of an accessor chain: `::member` or `::member(args)`,
    /// repeated. Only shape is validated here; resolution is entirely the
    /// interpreter's concern.
    fn parse_chain(&mut self, head: Accessor, line: usize) -> ParseResult<Statement> {
        let mut accessors = vec![head];

        while self.at_double_colon() {
            self.advance();
            self.advance();

            let token = self.expect_identifier()?;
            let name = token.lexeme.clone();
            let accessor_line = token.line;

            if self.peek_kind() == TokenKind::CallOpen {
                self.advance();
                let args =
                    self.comma_separated(TokenKind::CallClose, Self::parse_value_statement)?;
                accessors.push(Accessor::Call { name,
                                                args,
                                                line: accessor_line });
            } else {
                accessors.push(Accessor::Name { name,
                                                line: accessor_line });
            }
        }

        Ok(Statement::VariableAccess { accessors, line })
    }

    /// Parses a general value: a primary, optionally continued by an
    /// arithmetic chain. Used for call arguments, list elements, dict
    /// values, and `return` payloads.
    pub(in crate::interpreter::parser) fn parse_value_statement(&mut self)
                                                                -> ParseResult<Statement> {
        let head = self.parse_primary()?;
        self.parse_math_chain(head)
    }

    /// The shared "operator + right operand" routine: folds `head op primary
    /// op primary ...` left-associatively. With no operator ahead, `head` is
    /// returned untouched.
    pub(in crate::interpreter::parser) fn parse_math_chain(&mut self,
                                                           head: Statement)
                                                           -> ParseResult<Statement> {
        let mut left = head;

        while let Some(op) = math_op(self.peek_kind()) {
            let line = self.advance().line;
            let right = self.parse_primary()?;
            left = Statement::Math { op,
                                     left: Box::new(left),
                                     right: Box::new(right),
                                     line };
        }

        Ok(left)
    }

    /// Parses `[e1, e2, ...]`.
    pub(in crate::interpreter::parser) fn parse_list_literal(&mut self) -> ParseResult<Statement> {
        let line = self.expect(TokenKind::ListOpen)?.line;
        let elements =
            self.comma_separated(TokenKind::ListClose, Self::parse_value_statement)?;

        Ok(Statement::List { elements, line })
    }

    /// Parses `{ k1: v1, k2: v2, ... }`; every entry becomes a
    /// `DictAssignment` pair.
    pub(in crate::interpreter::parser) fn parse_dict_literal(&mut self) -> ParseResult<Statement> {
        let line = self.expect(TokenKind::BraceOpen)?.line;
        let entries = self.comma_separated(TokenKind::BraceClose, Self::parse_dict_entry)?;

        Ok(Statement::Dict { entries, line })
    }

    fn parse_dict_entry(&mut self) -> ParseResult<Statement> {
        let key = self.parse_primary()?;
        let line = self.expect(TokenKind::Colon)?.line;
        let value = self.parse_value_statement()?;

        Ok(Statement::DictAssignment { key: Box::new(key),
                                       value: Box::new(value),
                                       line })
    }

    /// Parses `( sub; sub; ... )`: a sequence of arithmetic sub-statements
    /// separated by `;`, evaluated left to right. Inside grouping an
    /// operator chain may head with any primary, literals included.
    pub(in crate::interpreter::parser) fn parse_grouping(&mut self) -> ParseResult<Statement> {
        let line = self.expect(TokenKind::CallOpen)?.line;
        let mut statements = Vec::new();

        if self.peek_kind() == TokenKind::CallClose {
            self.advance();
            return Ok(Statement::Grouping { statements, line });
        }

        loop {
            if self.peek_kind() == TokenKind::Eof {
                return Err(ParseError::UnterminatedGrouping { line });
            }
            statements.push(self.parse_value_statement()?);

            match self.peek_kind() {
                TokenKind::LineBreak => {
                    self.advance();
                    if self.peek_kind() == TokenKind::CallClose {
                        self.advance();
                        break;
                    }
                },
                TokenKind::CallClose => {
                    self.advance();
                    break;
                },
                TokenKind::Eof => return Err(ParseError::UnterminatedGrouping { line }),
                _ => {
                    let token = self.peek();
                    return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                             line:  token.line, });
                },
            }
        }

        Ok(Statement::Grouping { statements, line })
    }

    /// Parses a statement that starts with a plain identifier: a bare
    /// re-assignment when `=` follows, otherwise a call, chain, or variable
    /// expression statement.
    pub(in crate::interpreter::parser) fn parse_assignment_or_value(&mut self)
                                                                    -> ParseResult<Statement> {
        if self.peek_second().kind == TokenKind::Equals {
            let token = self.expect_identifier()?;
            let name = token.lexeme.clone();
            let line = token.line;
            self.expect(TokenKind::Equals)?;
            let value = self.parse_let_value()?;

            return Ok(Statement::Assignment { name,
                                              hint: TypeHint::any(),
                                              value: Box::new(value),
                                              declared: false,
                                              line });
        }

        self.parse_value_statement()
    }
}
