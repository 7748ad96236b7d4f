use crate::{
    ast::{FunctionDecl, Parameter, Statement, TypeHint},
    error::{DiagnosticCode, ParseError},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// Whether two advisory hints agree. `any` on either side matches
/// everything; the integral and string synonym groups match within
/// themselves; everything else compares by name.
fn hints_agree(a: &TypeHint, b: &TypeHint) -> bool {
    a.is_any()
    || b.is_any()
    || a.name == b.name
    || (a.is_integral() && b.is_integral())
    || (a.is_string() && b.is_string())
}

impl Parser<'_> {
    /// Parses `let name[: Type] = value`.
    ///
    /// A missing `: Type` annotation is a non-fatal diagnostic; the hint
    /// defaults to `any`. When the right-hand side is a call whose name has a
    /// recorded hint, the two hints are compared and a mismatch is reported
    /// (best-effort, never fatal).
    ///
    /// Grammar: `let := "let" identifier (":" identifier)? "=" let-value`
    pub(in crate::interpreter::parser) fn parse_let(&mut self) -> ParseResult<Statement> {
        let line = self.expect(TokenKind::Let)?.line;
        let name = self.declared_name()?;

        let hint = if self.peek_kind() == TokenKind::Colon {
            self.advance();
            TypeHint::new(self.expect_identifier()?.lexeme.clone())
        } else {
            self.diagnostics.report(DiagnosticCode::MissingTypeHint,
                                    line,
                                    format!("no type hint on '{name}', defaulting to 'any'"));
            TypeHint::any()
        };

        self.expect(TokenKind::Equals)?;
        let value = self.parse_let_value()?;
        self.check_call_hint(&name, &hint, &value);

        Ok(Statement::Assignment { name,
                                   hint,
                                   value: Box::new(value),
                                   declared: true,
                                   line })
    }

    /// Parses the right-hand side of a `let` or bare re-assignment.
    ///
    /// Accepted heads: a list or dict literal, a plain literal, an accessor
    /// chain, a call, or a bare identifier. Only an identifier head may
    /// continue into an arithmetic chain; a literal head does not.
    pub(in crate::interpreter::parser) fn parse_let_value(&mut self) -> ParseResult<Statement> {
        let token = self.peek();
        match token.kind {
            TokenKind::ListOpen => self.parse_list_literal(),
            TokenKind::BraceOpen => self.parse_dict_literal(),
            TokenKind::Str
            | TokenKind::Number
            | TokenKind::Boolean
            | TokenKind::Null => self.parse_literal(),
            TokenKind::Identifier => {
                let head = self.parse_identifier_primary()?;
                if matches!(head, Statement::Variable { .. }) {
                    self.parse_math_chain(head)
                } else {
                    Ok(head)
                }
            },
            _ => {
                Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                  line:  token.line, })
            },
        }
    }

    /// Flags a `let` whose right-hand side is a call with a recorded hint
    /// that disagrees with the declared one.
    fn check_call_hint(&mut self, target: &str, declared: &TypeHint, value: &Statement) {
        let Statement::FunctionCall { name, line, .. } = value else {
            return;
        };
        let Some(recorded) = self.hints.get(name) else {
            return;
        };

        if !hints_agree(declared, recorded) {
            let message =
                format!("'{target}' is hinted '{declared}' but '{name}' is hinted '{recorded}'");
            self.diagnostics
                .report(DiagnosticCode::HintMismatch, *line, message);
        }
    }

    /// Parses `fn name(param, ...) -> Type { body }`.
    ///
    /// A missing `->` annotation is a non-fatal diagnostic; the return hint
    /// defaults to `any`. `record_hint` controls whether the declared name
    /// enters the hint table — free-standing declarations do, object members
    /// do not.
    ///
    /// Grammar: `fn-decl := "fn" identifier "(" parameters ")" ("->" identifier)? block`
    pub(in crate::interpreter::parser) fn parse_fn_declaration(&mut self,
                                                               record_hint: bool)
                                                               -> ParseResult<FunctionDecl> {
        let line = self.expect(TokenKind::Fn)?.line;
        let name = self.declared_name()?;

        self.expect(TokenKind::CallOpen)?;
        let params = self.comma_separated(TokenKind::CallClose, Self::parse_parameter)?;
        for (index, param) in params.iter().enumerate() {
            if params[..index].iter().any(|earlier| earlier.name == param.name) {
                self.diagnostics.report(DiagnosticCode::DuplicateParameter,
                                        line,
                                        format!("parameter '{}' of '{name}' is declared twice",
                                                param.name));
            }
        }

        let return_hint = if self.peek_kind() == TokenKind::Arrow {
            self.advance();
            TypeHint::new(self.expect_identifier()?.lexeme.clone())
        } else {
            self.diagnostics.report(DiagnosticCode::MissingReturnHint,
                                    line,
                                    format!("no return hint on '{name}', defaulting to 'any'"));
            TypeHint::any()
        };

        if record_hint {
            self.hints.insert(name.clone(), return_hint.clone());
        }

        self.expect(TokenKind::BraceOpen)?;
        let body = self.parse_block_body()?;

        Ok(FunctionDecl { name,
                          params,
                          return_hint,
                          body,
                          line })
    }

    /// Parses one parameter: `[const] name[: Type]`.
    ///
    /// `const` is contextual — it only acts as a marker when another
    /// identifier follows, so a parameter may itself be named `const`.
    fn parse_parameter(&mut self) -> ParseResult<Parameter> {
        let constant = self.peek_kind() == TokenKind::Identifier
                       && self.peek().lexeme == "const"
                       && self.peek_second().kind == TokenKind::Identifier;
        if constant {
            self.advance();
        }

        let name = self.expect_identifier()?.lexeme.clone();
        let hint = if self.peek_kind() == TokenKind::Colon {
            self.advance();
            TypeHint::new(self.expect_identifier()?.lexeme.clone())
        } else {
            TypeHint::any()
        };

        Ok(Parameter { name,
                       hint,
                       constant })
    }

    /// Parses `object Name { members }`.
    ///
    /// Every member must be a function declaration; anything else is a
    /// fatal parse error. The object's own name enters the hint table as its
    /// own nominal type.
    pub(in crate::interpreter::parser) fn parse_object(&mut self) -> ParseResult<Statement> {
        let line = self.expect(TokenKind::Object)?.line;
        let name = self.declared_name()?;
        self.hints.insert(name.clone(), TypeHint::new(name.clone()));

        self.expect(TokenKind::BraceOpen)?;
        let mut members: Vec<FunctionDecl> = Vec::new();
        loop {
            self.skip_line_breaks();
            match self.peek_kind() {
                TokenKind::BraceClose => {
                    self.advance();
                    break;
                },
                TokenKind::Fn => {
                    let member = self.parse_fn_declaration(false)?;
                    if members.iter().any(|earlier| earlier.name == member.name) {
                        self.diagnostics.report(DiagnosticCode::DuplicateMember,
                                                member.line,
                                                format!("member '{}' of '{name}' is declared twice",
                                                        member.name));
                    }
                    members.push(member);
                },
                TokenKind::Eof => {
                    return Err(ParseError::UnexpectedEndOfInput { line: self.peek().line })
                },
                _ => {
                    return Err(ParseError::InvalidStructMember { object: name,
                                                                 line:   self.peek().line })
                },
            }
        }

        Ok(Statement::StructDeclaration { name, members, line })
    }

    /// Consumes the name of a `let`, `fn`, or `object` declaration. `self`
    /// only carries meaning in parameter position and cannot be declared.
    fn declared_name(&mut self) -> ParseResult<String> {
        let token = self.expect_identifier()?;
        if token.lexeme == "self" {
            return Err(ParseError::IdentifierReserved { name: token.lexeme.clone(),
                                                        line: token.line, });
        }
        Ok(token.lexeme.clone())
    }
}
