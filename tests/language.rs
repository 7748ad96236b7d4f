use std::fs;

use ladle::{error::Severity, run_source};
use walkdir::WalkDir;

fn assert_success(src: &str) {
    if let Err(e) = run_source(src, Severity::Many) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_source(src, Severity::Many).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn shipped_scripts_run_clean() {
    let mut count = 0;

    for root in ["demos", "tests/scripts"] {
        for entry in
            WalkDir::new(root).into_iter()
                              .filter_map(Result::ok)
                              .filter(|e| e.path().extension().is_some_and(|ext| ext == "la"))
        {
            let path = entry.path();
            let source =
                fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

            count += 1;
            if let Err(e) = run_source(&source, Severity::Many) {
                panic!("Script {path:?} failed: {e}");
            }
        }
    }

    assert!(count > 0, "No .la scripts found");
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_success("let one = 1; let x = one + 2; assert(x, 3);");
    assert_success("let a = 7; let b = a * 9; assert(b, 63);");
    assert_success("let a = 8; let b = a - 5; assert(b, 3);");
    assert_success("let a = 10; let b = a / 2; assert(b, 5);");
    assert_success("let a = 2; let b = a + 3 * 4; assert(b, 20);");
}

#[test]
fn integer_arithmetic_stays_integral() {
    assert_success("let a = 2; let b = a + 2; assert(typeof(b), 'integer');");
    assert_success("let a = 9; let b = a / 2; assert(b, 4);");
}

#[test]
fn mixed_arithmetic_promotes_to_decimal() {
    assert_success("let d = 1.5; let s = d + 1; assert(s, 2.5);");
    assert_success("let d = 1.5; let s = d + 1; assert(typeof(s), 'decimal');");
    assert_success("let d = 2.5; let p = d * 2; assert(p, 5.0);");
    assert_success("assert(10, 10.0);");
}

#[test]
fn division_by_zero_is_fatal() {
    assert_failure("let one = 1; let zero = 0; let q = one / zero;");
    assert_failure("let one = 1.0; let zero = 0.0; let q = one / zero;");
    assert_failure("let one = 1; let zero = 0.0; let q = one / zero;");
}

#[test]
fn integer_overflow_is_fatal() {
    assert_failure("let big = 9223372036854775807; let one = 1; let x = big + one;");
    assert_failure("let big = 9223372036854775807; let two = 2; let x = big * two;");
}

#[test]
fn non_numeric_arithmetic_is_fatal() {
    assert_failure("let s = 'two'; let x = s + 1;");
    assert_failure("let flag = true; let x = flag * 3;");
}

#[test]
fn grouping_evaluates_left_to_right() {
    assert_success("let x = 0; x = 6; (1 + 2; x * 7); assert(x, 6);");
    assert_success("(2 + 2);");
}

#[test]
fn while_with_false_condition_runs_zero_times() {
    assert_success("let hits = 0;\nwhile (1 == 2) { hits = hits + 1; }\nassert(hits, 0);");
}

#[test]
fn while_re_evaluates_its_condition() {
    assert_success("let i = 0;\nwhile (i != 3) { i = i + 1; }\nassert(i, 3);");
}

#[test]
fn conditionals_pick_the_right_branch() {
    assert_success("let x = 0;\nif (1 == 1) { x = 10; } else { x = 20; }\nassert(x, 10);");
    assert_success("let x = 0;\nif (1 == 2) { x = 10; } else { x = 20; }\nassert(x, 20);");
    assert_success("let x = 0;\nif (1 != 1) { x = 10; }\nassert(x, 0);");
}

#[test]
fn user_defined_functions() {
    assert_success("fn double(x: int) -> int { return x + x; }\nassert(double(4), 8);");
    assert_success("fn add(a: int, b: int) -> int { return a + b; }\nassert(add(2, 5), 7);");
    assert_success("fn shout() -> string { return 'hey'; }\nassert(shout(), 'hey');");
}

#[test]
fn function_without_return_yields_undefined() {
    assert_success("fn quiet() -> any { let x = 1; }\nlet v = quiet();\nassert(typeof(v), 'undefined');");
}

#[test]
fn recursion_works() {
    assert_success("fn fact(n: int) -> int {\n    if (n == 0) { return 1; }\n    return n * fact(n - 1);\n}\nassert(fact(5), 120);");
}

#[test]
fn user_function_arity_mismatch_is_fatal() {
    assert_failure("fn double(x: int) -> int { return x + x; }\ndouble(1, 2);");
    assert_failure("fn double(x: int) -> int { return x + x; }\ndouble();");
}

#[test]
fn callee_bindings_do_not_leak_to_the_caller() {
    assert_failure("fn stash() -> int {\n    let inner = 1;\n    return inner;\n}\nstash();\nlet leak = inner;");
}

#[test]
fn let_of_a_global_name_inside_a_call_is_fatal_shadowing() {
    assert_failure("let config = 1;\nfn clash() -> int {\n    let config = 2;\n    return config;\n}\nclash();");
}

#[test]
fn bare_reassignment_inside_a_call_binds_locally() {
    // Writes target the active frame; reads fall back to the global scope.
    // The asymmetry is deliberate.
    assert_success("let counter = 1;\nfn bump() -> int {\n    counter = 99;\n    return counter;\n}\nassert(bump(), 99);\nassert(counter, 1);");
}

#[test]
fn globals_are_readable_inside_calls() {
    assert_success("let base = 10;\nfn read_base() -> int { return base; }\nassert(read_base(), 10);");
}

#[test]
fn const_parameters_cannot_be_rebound() {
    assert_failure("fn frozen(const x: int) -> int {\n    x = 2;\n    return x;\n}\nfrozen(1);");
    assert_success("fn loose(x: int) -> int {\n    x = 2;\n    return x;\n}\nassert(loose(1), 2);");
}

#[test]
fn construct_runs_exactly_once_at_instantiation() {
    assert_success("object Tracker {\n    fn construct(self: Tracker) -> any {\n        env::set('LADLE_TEST_TRACKER', 'constructed');\n    }\n}\nenv::set('LADLE_TEST_TRACKER', 'untouched');\nlet t = Tracker();\nassert(env::get('LADLE_TEST_TRACKER'), 'constructed');");
}

#[test]
fn instantiation_without_construct_invokes_no_member() {
    assert_success("object Quiet {\n    fn touch(self: Quiet) -> any {\n        env::set('LADLE_TEST_QUIET', 'touched');\n    }\n}\nenv::set('LADLE_TEST_QUIET', 'untouched');\nlet q = Quiet();\nassert(env::get('LADLE_TEST_QUIET'), 'untouched');");
}

#[test]
fn construct_receives_the_calls_arguments() {
    assert_success("object Pair {\n    fn construct(self: Pair, a: string, b: string) -> any {\n        env::set('LADLE_TEST_PAIR', a);\n    }\n}\nlet p = Pair('left', 'right');\nassert(env::get('LADLE_TEST_PAIR'), 'left');");
    assert_failure("object Pair {\n    fn construct(self: Pair, a: string, b: string) -> any {\n        return null;\n    }\n}\nlet p = Pair('only');");
}

#[test]
fn instance_members_dispatch_through_chains() {
    assert_success("object Greeter {\n    fn greet(self: Greeter, name: string) -> string { return 'hello'; }\n    fn version() -> int { return 2; }\n}\nlet g = Greeter();\nassert(g::greet('world'), 'hello');\nassert(g::version(), 2);");
}

#[test]
fn member_arity_mismatch_is_fatal() {
    assert_failure("object Greeter {\n    fn greet(self: Greeter, name: string) -> string { return 'hello'; }\n}\nlet g = Greeter();\ng::greet();");
}

#[test]
fn typeof_reports_instance_object_names() {
    assert_success("object Point {\n    fn describe(self: Point) -> string { return 'a point'; }\n}\nlet p = Point();\nassert(typeof(p), 'Point');");
}

#[test]
fn instances_are_distinct() {
    assert_success("object Token {\n    fn noop(self: Token) -> any { return null; }\n}\nlet a = Token();\nlet b = Token();\nif (a == b) { panic('distinct instances compared equal'); }\nassert(a, a);");
}

#[test]
fn chaining_past_a_plain_value_is_fatal() {
    assert_failure("let n = 3;\nlet bad = n::member();");
}

#[test]
fn missing_members_are_recoverable() {
    assert_success("object Empty {\n    fn noop(self: Empty) -> any { return null; }\n}\nlet e = Empty();\nlet v = e::missing();\nassert(typeof(v), 'undefined');");
}

#[test]
fn unknown_callables_are_recoverable() {
    assert_success("let v = nonexistent();\nassert(typeof(v), 'undefined');");
}

#[test]
fn wrong_builtin_arity_is_recoverable() {
    assert_success("let v = len();\nassert(typeof(v), 'undefined');");
    assert_success("let v = typeof();\nassert(typeof(v), 'undefined');");
}

#[test]
fn len_measures_strings_lists_and_dicts() {
    assert_success("assert(len('héllo'), 5);");
    assert_success("assert(len([1, 2, 3]), 3);");
    assert_success("assert(len({ 'a': 1, 'b': 2 }), 2);");
    assert_failure("len(3);");
}

#[test]
fn lists_and_dicts_compare_structurally() {
    assert_success("let a = [1, 'two', 3.0];\nlet b = [1, 'two', 3.0];\nassert(a, b);");
    assert_success("let d = { 'k': 1, 2: 'v' };\nlet e = { 2: 'v', 'k': 1 };\nassert(d, e);");
    assert_failure("let a = [1];\nlet b = [2];\nassert(a, b);");
}

#[test]
fn unhashable_dict_keys_are_fatal() {
    assert_failure("let d = { [1]: 'list key' };");
}

#[test]
fn null_and_undefined_stay_distinct() {
    assert_success("let n = null;\nassert(typeof(n), 'null');");
    assert_success("let n = null;\nlet u = missing_call();\nif (n == u) { panic('null compared equal to undefined'); }\nassert(typeof(u), 'undefined');");
}

#[test]
fn strings_take_either_quote_kind() {
    assert_success("let s = \"it's\";\nassert(len(s), 4);");
    assert_success("let s = 'plain';\nassert(s, \"plain\");");
}

#[test]
fn hint_mismatches_are_advisory() {
    // The binding still happens with the actual value.
    assert_success("let n: string = 5;\nassert(n, 5);");
}

#[test]
fn panic_and_quit_abort_the_run() {
    assert_failure("panic('boom');");
    assert_failure("quit(3);");
    assert_failure("quit();");
}

#[test]
fn environment_builtins_round_trip() {
    assert_success("env::set('LADLE_TEST_ROUNDTRIP', 'stored');\nassert(env::get('LADLE_TEST_ROUNDTRIP'), 'stored');");
    assert_success("assert(env::get('LADLE_TEST_NEVER_SET_ANYWHERE'), null);");
}

#[test]
fn time_components_are_integers() {
    assert_success("assert(typeof(time::year()), 'integer');");
    assert_success("assert(typeof(time::hour()), 'integer');");
}

#[test]
fn breakpoints_do_not_disturb_evaluation() {
    assert_success("let x = 1;\n__break;\nassert(x, 1);");
}

#[test]
fn comments_are_ignored() {
    assert_success("# a leading note\nlet x = 1; # trailing\nassert(x, 1);");
}
