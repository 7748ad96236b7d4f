use crate::{
    ast::{CompareOp, Condition, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses `if (cond) { .. } [else { .. }]`.
    pub(in crate::interpreter::parser) fn parse_if(&mut self) -> ParseResult<Statement> {
        let line = self.expect(TokenKind::If)?.line;

        self.expect(TokenKind::CallOpen)?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::CallClose)?;

        let then_branch = Box::new(self.parse_block()?);
        let else_branch = if self.peek_kind() == TokenKind::Else {
            self.advance();
            Some(Box::new(self.parse_block()?))
        } else {
            None
        };

        Ok(Statement::Conditional { condition,
                                    then_branch,
                                    else_branch,
                                    line })
    }

    /// Parses `while (cond) { .. }`. `while` is contextual: the dispatcher
    /// only routes here when the identifier is followed by `(`.
    pub(in crate::interpreter::parser) fn parse_while(&mut self) -> ParseResult<Statement> {
        let line = self.expect_contextual("while")?.line;

        self.expect(TokenKind::CallOpen)?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::CallClose)?;

        let body = Box::new(self.parse_block()?);

        Ok(Statement::WhileLoop { condition, body, line })
    }

    /// Parses a condition of the fixed shape `primary operator primary` with
    /// the operator in `{==, !=}`.
    ///
    /// The restriction is deliberate: no boolean connectives, no relational
    /// operators, no chaining.
    fn parse_condition(&mut self) -> ParseResult<Condition> {
        let left = Box::new(self.parse_primary()?);

        let token = self.peek();
        let op = match token.kind {
            TokenKind::EqualEqual => CompareOp::Equal,
            TokenKind::BangEqual => CompareOp::NotEqual,
            _ => {
                return Err(ParseError::InvalidCondition { found: token.to_string(),
                                                          line:  token.line, })
            },
        };
        let line = self.advance().line;

        let right = Box::new(self.parse_primary()?);

        Ok(Condition { left,
                       op,
                       right,
                       line })
    }

    /// Parses `return [value];`. The statement dispatcher consumes the `;`.
    pub(in crate::interpreter::parser) fn parse_return(&mut self) -> ParseResult<Statement> {
        let line = self.expect(TokenKind::Return)?.line;

        let value = if self.peek_kind() == TokenKind::LineBreak {
            None
        } else {
            Some(Box::new(self.parse_value_statement()?))
        };

        Ok(Statement::Return { value, line })
    }

    /// Parses a `{ .. }` body into a block statement.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Statement> {
        let line = self.expect(TokenKind::BraceOpen)?.line;
        let statements = self.parse_block_body()?;

        Ok(Statement::Block { statements, line })
    }

    /// Parses statements up to the closing `}`, the `{` already consumed.
    pub(in crate::interpreter::parser) fn parse_block_body(&mut self)
                                                           -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();

        loop {
            self.skip_line_breaks();
            match self.peek_kind() {
                TokenKind::BraceClose => {
                    self.advance();
                    return Ok(statements);
                },
                TokenKind::Eof => {
                    return Err(ParseError::UnexpectedEndOfInput { line: self.peek().line })
                },
                _ => statements.push(self.parse_statement()?),
            }
        }
    }
}
