use pretty_assertions::assert_eq;

use super::{error_kind, eval, interpreter, num};
use crate::{ErrorKind, Value};

#[test]
fn test_if_runs_block_on_true() {
    assert_eq!(eval("x = 0; if (1 < 2) { x = 1 }; x"), num(1.0));
    assert_eq!(eval("x = 0; if (1 > 2) { x = 1 }; x"), num(0.0));
}

#[test]
fn test_if_returns_block_value() {
    assert_eq!(eval("if (true) { 'yes' }"), Value::from("yes"));
    assert_eq!(eval("if (false) { 'yes' }"), Value::Null);
}

#[test]
fn test_if_requires_boolean() {
    assert_eq!(error_kind("if (1) { 2 }"), ErrorKind::Type);
    assert_eq!(error_kind("if (true) 1"), ErrorKind::Syntax);
}

#[test]
fn test_if_can_be_stored() {
    assert_eq!(eval("when = if(true); when { 3 }"), num(3.0));
}

#[test]
fn test_block_assigns_in_defining_scope() {
    let source = "
        @f() {
            y = 1;
            if (true) { y = 2 };
            y
        };
        f()
    ";
    assert_eq!(eval(source), num(2.0));
    assert_eq!(error_kind("@f() { if (true) { z = 1 } }; f(); z"), ErrorKind::Reference);
}

#[test]
fn test_while_loop() {
    let source = "
        i = 0;
        sum = 0;
        while (@() { i < 5 }) {
            sum = sum + i;
            i = i + 1;
        };
        sum
    ";
    assert_eq!(eval(source), num(10.0));
}

#[test]
fn test_while_returns_null() {
    assert_eq!(eval("while (@() { false }) { 1 }"), Value::Null);
}

#[test]
fn test_while_condition_must_be_function_returning_boolean() {
    assert_eq!(error_kind("while (true) { 1 }"), ErrorKind::Type);
    assert_eq!(error_kind("while (@() { 1 }) { 1 }"), ErrorKind::Type);
}

#[test]
fn test_nested_loops_print() {
    let mut interp = interpreter();
    let source = "
        i = 0;
        while (@() { i < 2 }) {
            j = 0;
            while (@() { j < 2 }) {
                print(i, j);
                j = j + 1;
            };
            i = i + 1;
        };
    ";
    assert_eq!(interp.eval_source(source), Ok(None));
    assert_eq!(interp.print_handler().output(), "0 0\n0 1\n1 0\n1 1\n");
}

#[test]
fn test_errors_inside_blocks_propagate() {
    assert_eq!(error_kind("if (true) { undefined }"), ErrorKind::Reference);
    assert_eq!(error_kind("while (@() { true }) { 1 + 'a' }"), ErrorKind::Type);
}
