#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::{error_kind, eval, eval_err, interpreter, num};
use crate::{ErrorKind, NativeFunction, Value};

#[test]
fn test_named_function() {
    assert_eq!(eval("@add(a, b) { a + b }; add(1, 2)"), num(3.0));
    assert_eq!(eval("@one() { 1 }; one()"), num(1.0));
}

#[test]
fn test_anonymous_function() {
    assert_eq!(eval("double = @(x) { x * 2 }; double(21)"), num(42.0));
    assert_eq!(eval("@(x) { x + 1 }(1)"), num(2.0));
}

#[test]
fn test_function_returns_last_statement() {
    assert_eq!(eval("@f() { 1; 2; 3 }; f()"), num(3.0));
    assert_eq!(eval("@f() { 1; }; f()"), Value::Null);
    assert_eq!(eval("@f() { }; f()"), Value::Null);
    assert_eq!(eval("@f() { x = (1) }; f()"), Value::Null);
}

#[test]
fn test_missing_arguments_are_null() {
    assert_eq!(eval("@f(a, b) { b }; f(1)"), Value::Null);
}

#[test]
fn test_surplus_arguments_are_rejected() {
    let err = eval_err("@f(a) { a }; f(1, 2)");
    assert_eq!(err.kind, ErrorKind::Range);
    assert_eq!(err.message, "f expects at most 1 argument(s), got 2");
}

#[test]
fn test_parameters_must_be_words() {
    assert_eq!(error_kind("@f(1) { 1 }"), ErrorKind::Syntax);
    assert_eq!(error_kind("@f(a b) { 1 }"), ErrorKind::Syntax);
    assert_eq!(error_kind("@f(a,, b) { 1 }"), ErrorKind::Syntax);
    assert_eq!(error_kind("@f { 1 }"), ErrorKind::Syntax);
    assert_eq!(error_kind("@"), ErrorKind::Syntax);
}

#[test]
fn test_parameters_shadow_outer_names() {
    assert_eq!(eval("x = 1; @f(x) { x = x + 1; x }; f(10) + x"), num(12.0));
}

#[test]
fn test_assignment_updates_enclosing_binding() {
    assert_eq!(eval("n = 0; @bump() { n = n + 1 }; bump(); bump(); n"), num(2.0));
}

#[test]
fn test_new_names_stay_local() {
    assert_eq!(error_kind("@f() { local = 1 }; f(); local"), ErrorKind::Reference);
}

#[test]
fn test_closure_counter() {
    let source = "
        @counter() {
            count = 0;
            @() {
                count = count + 1;
                count
            }
        };
        c = counter();
        c();
        c();
        c()
    ";
    assert_eq!(eval(source), num(3.0));
}

#[test]
fn test_closures_are_independent() {
    let source = "
        @counter() {
            count = 0;
            @() { count = count + 1 }
        };
        a = counter();
        b = counter();
        a(); a();
        b()
    ";
    assert_eq!(eval(source), num(1.0));
}

#[test]
fn test_closures_see_later_assignments() {
    let source = "
        @make() {
            value = 1;
            read = @() { value };
            value = 2;
            read
        };
        make()()
    ";
    assert_eq!(eval(source), num(2.0));
}

#[test]
fn test_recursion() {
    let source = "
        @fact(n) {
            result = 1;
            if (n > 1) { result = n * fact(n - 1) };
            result
        };
        fact(10)
    ";
    assert_eq!(eval(source), num(3_628_800.0));
}

#[test]
fn test_functions_are_values() {
    assert_eq!(eval("@twice(f, x) { f(f(x)) }; twice(@(n) { n * 3 }, 2)"), num(18.0));
    assert_eq!(eval("@f() { 1 }; g = f; g == f"), Value::Bool(true));
    assert_eq!(eval("@() { 1 } == @() { 1 }"), Value::Bool(false));
}

#[test]
fn test_calling_a_non_function() {
    let err = eval_err("x = 1; x()");
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "invalid function call: number is not a function");
    assert_eq!(error_kind("'f'()"), ErrorKind::Type);
}

#[test]
fn test_callback_passes_a_block() {
    let source = "@run(block) { block() }; x = 1; run { x = 5 }; x";
    assert_eq!(eval(source), num(5.0));
}

#[test]
fn test_blocks_ignore_arguments() {
    let source = "@run(block) { block(1, 2, 3) }; run { 7 }";
    assert_eq!(eval(source), num(7.0));
}

#[test]
fn test_host_function() {
    let mut interp = interpreter();
    interp.define(
        "sum",
        Value::native(NativeFunction::new("sum", 0, NativeFunction::VARIADIC, |_, args, _| {
            Ok(Value::Number(args.iter().filter_map(Value::as_number).sum()))
        })),
    );
    assert_eq!(interp.eval_source("sum(1, 2, 3 * 4)"), Ok(Some(num(15.0))));
    assert_eq!(interp.eval_source("help(sum)"), Ok(Some(Value::Null)));
}

#[test]
fn test_host_function_can_call_back_into_scripts() {
    let mut interp = interpreter();
    interp.define(
        "apply",
        Value::native(
            NativeFunction::new("apply", 2, 2, |interp, args, referrer| {
                interp.apply(&args[0], vec![args[1].clone()], referrer)
            })
            .with_help("apply(f, x)"),
        ),
    );
    assert_eq!(interp.eval_source("apply(@(x) { x + 1 }, 1)"), Ok(Some(num(2.0))));
    assert_eq!(
        interp.eval_source("help(apply)"),
        Ok(Some(Value::from("apply(f, x)")))
    );
    let err = interp.eval_source("apply(1, 2)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
}

#[test]
fn test_host_function_arity() {
    let mut interp = interpreter();
    interp.define(
        "pair",
        Value::native(NativeFunction::new("pair", 2, 2, |_, args, _| {
            Ok(Value::array(args))
        })),
    );
    let err = interp.eval_source("pair(1)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "pair expects 2 argument(s), got 1");
}

#[test]
fn test_store_is_restored_after_errors() {
    let mut interp = interpreter();
    let err = interp.eval_source("@f(a) { a + 'x' }; f(1)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert!(interp.store().ptr_eq(interp.globals()));
    assert_eq!(interp.eval_source("a").unwrap_err().kind, ErrorKind::Reference);
}
