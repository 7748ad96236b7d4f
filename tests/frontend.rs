use ladle::{
    ast::{LiteralValue, Statement},
    error::{DiagnosticCode, ParseError, Severity},
    interpreter::{
        lexer::{lex, lex_preserving, TokenKind},
        parser::core::parse,
    },
};

fn parse_ok(source: &str, threshold: Severity) -> Vec<Statement> {
    let tokens = lex(source).expect("lexing failed");
    let (statements, _diagnostics) = parse(&tokens, threshold);
    statements.expect("parsing failed")
}

#[test]
fn lexing_mixed_assignments_yields_the_reference_stream() {
    let tokens = lex("'window' = 'window';'size=size'='size';").unwrap();

    assert_eq!(tokens[0].lexeme, "window");
    assert_eq!(tokens[0], tokens[2]);
    assert_eq!(tokens[3].kind, TokenKind::LineBreak);
    assert_eq!(tokens[4].lexeme, "size=size");
    assert_eq!(tokens[6].lexeme, "size");
}

#[test]
fn lexing_captures_decimal_literals_exactly() {
    let tokens = lex("10.0 = 'number';'number'=10.938249428242;").unwrap();

    assert_eq!(tokens[0].literal, Some(LiteralValue::Decimal(10.0)));
    assert_eq!(tokens[6].literal,
               Some(LiteralValue::Decimal(10.938_249_428_242)));
}

#[test]
fn token_streams_end_with_exactly_one_eof() {
    let tokens = lex("let x = 1;").unwrap();

    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    assert_eq!(tokens.iter()
                     .filter(|token| token.kind == TokenKind::Eof)
                     .count(),
               1);

    let empty = lex("").unwrap();
    assert_eq!(empty.len(), 1);
    assert_eq!(empty[0].kind, TokenKind::Eof);
}

#[test]
fn default_streams_filter_layout_tokens() {
    let source = "let x = 1; # note\nlet y = 2;";

    let filtered = lex(source).unwrap();
    assert!(filtered.iter().all(|token| {
                      !matches!(token.kind,
                                TokenKind::Whitespace | TokenKind::Newline | TokenKind::Comment)
                  }));

    let preserved = lex_preserving(source).unwrap();
    assert!(preserved.iter().any(|token| token.kind == TokenKind::Whitespace));
    assert!(preserved.iter().any(|token| token.kind == TokenKind::Newline));
    assert!(preserved.iter()
                     .any(|token| token.kind == TokenKind::Comment && token.lexeme == "# note"));
}

#[test]
fn line_numbers_follow_newlines() {
    let tokens = lex("let x = 1;\nlet y = 2;\n\nlet z = 3;").unwrap();

    let lines: Vec<usize> = tokens.iter()
                                  .filter(|token| token.kind == TokenKind::Let)
                                  .map(|token| token.line)
                                  .collect();
    assert_eq!(lines, vec![1, 2, 4]);
}

#[test]
fn reserved_words_get_dedicated_kinds() {
    let tokens = lex("mod end if else fn return let __break object").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(kinds,
               vec![TokenKind::Mod,
                    TokenKind::End,
                    TokenKind::If,
                    TokenKind::Else,
                    TokenKind::Fn,
                    TokenKind::Return,
                    TokenKind::Let,
                    TokenKind::Break,
                    TokenKind::Object,
                    TokenKind::Eof]);
}

#[test]
fn contextual_keywords_lex_as_identifiers() {
    let tokens = lex("while from import const").unwrap();
    assert!(tokens[..4].iter()
                       .all(|token| token.kind == TokenKind::Identifier));
}

#[test]
fn boolean_and_null_literals() {
    let tokens = lex("true false null").unwrap();

    assert_eq!(tokens[0].literal, Some(LiteralValue::Bool(true)));
    assert_eq!(tokens[1].literal, Some(LiteralValue::Bool(false)));
    assert_eq!(tokens[2].kind, TokenKind::Null);
}

#[test]
fn unterminated_strings_abort_lexing() {
    assert!(matches!(lex("let s = 'oops"),
                     Err(ParseError::UnterminatedString { .. })));
}

#[test]
fn malformed_numbers_abort_lexing() {
    assert!(matches!(lex("let n = 1.2.3;"),
                     Err(ParseError::MalformedNumber { .. })));
}

#[test]
fn unclassifiable_characters_abort_lexing() {
    assert!(matches!(lex("let @ = 1;"),
                     Err(ParseError::UnexpectedCharacter { .. })));
}

#[test]
fn let_without_hint_defaults_to_any() {
    let statements = parse_ok("let src = 'src';", Severity::Many);

    assert_eq!(statements.len(), 1);
    let Statement::Assignment { name,
                                hint,
                                value,
                                declared,
                                .. } = &statements[0]
    else {
        panic!("expected an assignment, found {:?}", statements[0]);
    };

    assert_eq!(name, "src");
    assert_eq!(hint.name, "any");
    assert!(declared);
    assert!(matches!(value.as_ref(),
                     Statement::Literal { value: LiteralValue::Str(s), .. } if s == "src"));
}

#[test]
fn let_records_its_declared_hint() {
    let statements = parse_ok("let src: string = 'hello';", Severity::Many);

    let Statement::Assignment { hint, value, .. } = &statements[0] else {
        panic!("expected an assignment, found {:?}", statements[0]);
    };

    assert_eq!(hint.name, "string");
    assert!(matches!(value.as_ref(),
                     Statement::Literal { value: LiteralValue::Str(s), .. } if s == "hello"));
}

#[test]
fn missing_hints_are_reported_only_at_the_all_threshold() {
    let tokens = lex("let x = 1;").unwrap();

    let (_, diagnostics) = parse(&tokens, Severity::All);
    assert_eq!(diagnostics.entries().len(), 1);
    assert_eq!(diagnostics.entries()[0].code, DiagnosticCode::MissingTypeHint);

    let (_, diagnostics) = parse(&tokens, Severity::Many);
    assert!(diagnostics.is_empty());
}

#[test]
fn fn_without_arrow_is_reported_and_defaults_to_any() {
    let tokens = lex("fn f(x) { return x; }").unwrap();

    let (statements, diagnostics) = parse(&tokens, Severity::All);
    let statements = statements.unwrap();

    let Statement::FunctionDeclaration(decl) = &statements[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(decl.return_hint.name, "any");
    assert!(diagnostics.entries()
                       .iter()
                       .any(|d| d.code == DiagnosticCode::MissingReturnHint));
}

#[test]
fn call_hint_mismatches_are_flagged_at_parse_time() {
    let source = "fn make_name() -> string { return 'x'; }\nlet n: int = make_name();";
    let tokens = lex(source).unwrap();

    let (statements, diagnostics) = parse(&tokens, Severity::Many);
    assert!(statements.is_ok());
    assert!(diagnostics.entries()
                       .iter()
                       .any(|d| d.code == DiagnosticCode::HintMismatch));

    // Agreeing hints stay quiet, and `any` matches everything.
    let quiet = "fn make_name() -> string { return 'x'; }\nlet n: string = make_name();\nlet m = make_name();";
    let tokens = lex(quiet).unwrap();
    let (statements, diagnostics) = parse(&tokens, Severity::Many);
    assert!(statements.is_ok());
    assert!(diagnostics.is_empty());
}

#[test]
fn object_declarations_hold_member_functions() {
    let statements = parse_ok("object Point {\n    fn construct(self: Point) -> any { return null; }\n    fn describe(self: Point) -> string { return 'point'; }\n}",
                              Severity::Many);

    let Statement::StructDeclaration { name, members, .. } = &statements[0] else {
        panic!("expected an object declaration");
    };
    assert_eq!(name, "Point");
    assert_eq!(members.len(), 2);
    assert!(members[0].is_instance_method());
}

#[test]
fn non_function_object_members_are_fatal() {
    let tokens = lex("object Bad { let x = 1; }").unwrap();
    let (statements, _) = parse(&tokens, Severity::Many);

    assert!(matches!(statements,
                     Err(ParseError::InvalidStructMember { ref object, .. }) if object == "Bad"));
}

#[test]
fn duplicate_parameters_and_members_are_reported() {
    let tokens = lex("fn f(a: int, a: int) -> int { return a; }").unwrap();
    let (_, diagnostics) = parse(&tokens, Severity::Minimum);
    assert!(diagnostics.entries()
                       .iter()
                       .any(|d| d.code == DiagnosticCode::DuplicateParameter));

    let tokens = lex("object O {\n    fn m(self: O) -> any { return null; }\n    fn m(self: O) -> any { return null; }\n}").unwrap();
    let (_, diagnostics) = parse(&tokens, Severity::Minimum);
    assert!(diagnostics.entries()
                       .iter()
                       .any(|d| d.code == DiagnosticCode::DuplicateMember));
}

#[test]
fn access_chains_parse_as_ordered_accessors() {
    let statements = parse_ok("let home = env::get('HOME');", Severity::Many);

    let Statement::Assignment { value, .. } = &statements[0] else {
        panic!("expected an assignment");
    };
    let Statement::VariableAccess { accessors, .. } = value.as_ref() else {
        panic!("expected an access chain, found {value:?}");
    };

    assert_eq!(accessors.len(), 2);
    assert_eq!(accessors[0].name(), "env");
    assert_eq!(accessors[1].name(), "get");
}

#[test]
fn conditions_reject_anything_but_equality_operators() {
    let tokens = lex("if (1 + 2) { let x = 1; }").unwrap();
    let (statements, _) = parse(&tokens, Severity::Many);
    assert!(matches!(statements, Err(ParseError::InvalidCondition { .. })));
}

#[test]
fn unterminated_groupings_are_fatal() {
    let tokens = lex("(1 + 2").unwrap();
    let (statements, _) = parse(&tokens, Severity::Many);
    assert!(matches!(statements, Err(ParseError::UnterminatedGrouping { .. })));
}

#[test]
fn imports_record_names_or_wildcards() {
    let statements =
        parse_ok("from 'lib' import { a, b };\nfrom 'util' import { * };", Severity::Many);

    let Statement::ModuleImport { path,
                                  names,
                                  wildcard,
                                  .. } = &statements[0]
    else {
        panic!("expected an import");
    };
    assert_eq!(path, "lib");
    assert_eq!(names, &["a".to_owned(), "b".to_owned()]);
    assert!(!wildcard);

    let Statement::ModuleImport { names, wildcard, .. } = &statements[1] else {
        panic!("expected an import");
    };
    assert!(names.is_empty());
    assert!(wildcard);
}

#[test]
fn declaring_self_is_reserved() {
    let tokens = lex("let self = 1;").unwrap();
    let (statements, _) = parse(&tokens, Severity::Many);
    assert!(matches!(statements, Err(ParseError::IdentifierReserved { .. })));
}

#[test]
fn missing_terminators_are_fatal() {
    let tokens = lex("let x = 1").unwrap();
    let (statements, _) = parse(&tokens, Severity::Many);
    assert!(matches!(statements, Err(ParseError::ExpectedToken { expected: ";", .. })));
}

#[test]
fn end_has_no_production() {
    let tokens = lex("end;").unwrap();
    let (statements, _) = parse(&tokens, Severity::Many);
    assert!(matches!(statements, Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn a_variable_named_while_shadows_the_loop_form() {
    // `while` is contextual: without a following `(` it is a plain name.
    let statements = parse_ok("let loops = 1; while = 2;", Severity::Many);

    assert!(matches!(&statements[1],
                     Statement::Assignment { name, declared: false, .. } if name == "while"));
}
