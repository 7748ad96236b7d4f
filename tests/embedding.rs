use ladle::{
    error::{DiagnosticCode, Error, RuntimeError, Severity},
    interpreter::{evaluator::core::Interpreter, value::core::Value},
    prepare, run_source,
};

fn run_quiet(source: &str) -> (Interpreter, Value) {
    let (mut interpreter, diagnostics) =
        prepare(source, Severity::Many).expect("parsing failed");
    assert!(diagnostics.is_empty(), "unexpected parse diagnostics: {diagnostics:?}");

    interpreter.set_flag("stdout", false);
    let sentinel = interpreter.interpret().expect("evaluation failed");
    (interpreter, sentinel)
}

#[test]
fn the_sentinel_is_the_last_value_producing_statement() {
    let (_, sentinel) = run_quiet("let a = 1;\nlet b = 2;\nfn noop() -> any { return null; }");
    assert_eq!(sentinel, Value::Integer(2));

    // Undefined-yielding statements do not overwrite an earlier sentinel.
    let (_, sentinel) = run_quiet("let a = 'kept';\n__break;");
    assert_eq!(sentinel, Value::Str("kept".to_owned()));
}

#[test]
fn a_top_level_return_overrides_the_sentinel_and_stops_the_run() {
    let (interpreter, sentinel) = run_quiet("let x = 1;\nreturn 42;\nlet y = 7;");

    assert_eq!(sentinel, Value::Integer(42));
    assert!(!interpreter.globals()
                        .iter()
                        .any(|(name, _)| name == "y"));
}

#[test]
fn an_empty_program_yields_undefined() {
    let (_, sentinel) = run_quiet("");
    assert_eq!(sentinel, Value::Undefined);
    assert!(sentinel.is_undefined());
}

#[test]
fn groupings_yield_their_last_sub_value() {
    let (_, sentinel) = run_quiet("(1 + 2; 2 * 3);");
    assert_eq!(sentinel, Value::Integer(6));
}

#[test]
fn globals_snapshot_is_name_sorted_and_includes_builtin_objects() {
    let (interpreter, _) = run_quiet("let zeta = 1;\nlet alpha = 2;");

    let names: Vec<String> = interpreter.globals()
                                        .into_iter()
                                        .map(|(name, _)| name)
                                        .collect();
    assert_eq!(names, vec!["alpha", "env", "time", "zeta"]);
}

#[test]
fn globals_carry_final_values() {
    let (interpreter, _) = run_quiet("let count = 0;\ncount = 1;\ncount = 2;");

    assert!(interpreter.globals()
                       .contains(&("count".to_owned(), Value::Integer(2))));
}

#[test]
fn module_flags_have_defaults_and_a_closed_set() {
    let interpreter = Interpreter::new(Vec::new());

    assert_eq!(interpreter.flag("stdout"), Some(true));
    assert_eq!(interpreter.flag("stdin"), Some(false));
    assert_eq!(interpreter.flag("telemetry"), None);

    let mut interpreter = interpreter;
    assert!(interpreter.set_flag("stdin", true));
    assert_eq!(interpreter.flag("stdin"), Some(true));
    assert!(!interpreter.set_flag("telemetry", true));
}

#[test]
fn scripts_toggle_flags_through_enable_and_disable() {
    let (interpreter, _) = run_quiet("disable('stdout');\nenable('stdin');");

    assert_eq!(interpreter.flag("stdout"), Some(false));
    assert_eq!(interpreter.flag("stdin"), Some(true));
}

#[test]
fn unknown_flag_toggles_are_recorded_not_fatal() {
    let (interpreter, _) = run_quiet("disable('stdout');\nenable('telemetry');");

    assert!(interpreter.diagnostics()
                       .entries()
                       .iter()
                       .any(|d| d.code == DiagnosticCode::UnknownFlag));
}

#[test]
fn identity_and_imports_are_recorded_for_the_host() {
    let (interpreter, _) =
        run_quiet("mod 'demo';\nfrom 'lib' import { helper, extra };\nfrom 'util' import { * };");

    assert_eq!(interpreter.identity(), Some("demo"));

    let imports = interpreter.imports();
    assert_eq!(imports.len(), 2);
    assert_eq!(imports[0].path, "lib");
    assert_eq!(imports[0].names, vec!["helper", "extra"]);
    assert!(!imports[0].wildcard);
    assert!(imports[1].wildcard);
}

#[test]
fn identity_defaults_to_none() {
    let (interpreter, _) = run_quiet("let x = 1;");
    assert_eq!(interpreter.identity(), None);
}

#[test]
fn recoverable_failures_land_in_the_runtime_sink() {
    let (interpreter, _) = run_quiet("let v = nonexistent();\n__break;");

    let codes: Vec<DiagnosticCode> = interpreter.diagnostics()
                                                .entries()
                                                .iter()
                                                .map(|d| d.code)
                                                .collect();
    assert_eq!(codes,
               vec![DiagnosticCode::UnknownCallable, DiagnosticCode::Breakpoint]);
}

#[test]
fn input_while_stdin_is_off_degrades_to_undefined() {
    let (interpreter, _) = run_quiet("let line = input();\nassert(typeof(line), 'undefined');");

    assert!(interpreter.diagnostics()
                       .entries()
                       .iter()
                       .any(|d| d.code == DiagnosticCode::InputDisabled));
}

#[test]
fn quit_surfaces_as_a_catchable_error() {
    match run_source("quit(3);", Severity::Many) {
        Err(Error::Runtime(RuntimeError::Quit { code, .. })) => assert_eq!(code, 3),
        other => panic!("expected a quit request, found {other:?}"),
    }

    match run_source("quit();", Severity::Many) {
        Err(Error::Runtime(RuntimeError::Quit { code, .. })) => assert_eq!(code, 0),
        other => panic!("expected a quit request, found {other:?}"),
    }
}

#[test]
fn panics_carry_their_message() {
    match run_source("panic('boom');", Severity::Many) {
        Err(Error::Runtime(RuntimeError::UserPanic { message, .. })) => {
            assert_eq!(message, "boom");
        },
        other => panic!("expected a panic, found {other:?}"),
    }
}

#[test]
fn prepare_hands_back_parse_diagnostics_without_running() {
    let (interpreter, diagnostics) =
        prepare("let x = 1;", Severity::All).expect("parsing failed");

    assert_eq!(diagnostics.entries().len(), 1);
    assert_eq!(diagnostics.entries()[0].code, DiagnosticCode::MissingTypeHint);

    // Nothing ran yet: only the builtin objects are bound.
    assert_eq!(interpreter.globals().len(), 2);
}

#[test]
fn runtime_errors_carry_their_source_line() {
    let err = run_source("let x = 1;\nlet y = missing;", Severity::Many);

    match err {
        Err(Error::Runtime(RuntimeError::UnknownVariable { name, line })) => {
            assert_eq!(name, "missing");
            assert_eq!(line, 2);
        },
        other => panic!("expected an unknown-variable error, found {other:?}"),
    }
}
