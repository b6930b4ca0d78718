//! Test modules relocated from implementation files.
//!
//! End-to-end script tests: source text goes through `hxs_lexer` and the
//! full prelude, with `print` captured in a buffer.

mod control_tests;
mod functions_tests;
mod numbers_tests;
mod strings_tests;

use crate::{buffer_handler, ErrorKind, EvalError, EvalResult, Interpreter, Value};

pub(crate) fn interpreter() -> Interpreter {
    Interpreter::builder()
        .source_name("test.hxs")
        .print_handler(buffer_handler())
        .build()
}

pub(crate) fn run(source: &str) -> EvalResult<Option<Value>> {
    interpreter().eval_source(source)
}

/// Value of a program that must succeed with a result.
pub(crate) fn eval(source: &str) -> Value {
    match run(source) {
        Ok(Some(value)) => value,
        other => panic!("`{source}` produced {other:?}"),
    }
}

/// Error of a program that must fail.
pub(crate) fn eval_err(source: &str) -> EvalError {
    match run(source) {
        Err(err) => err,
        Ok(value) => panic!("`{source}` should fail, produced {value:?}"),
    }
}

pub(crate) fn error_kind(source: &str) -> ErrorKind {
    eval_err(source).kind
}

/// `repr` of a program's value, for comparing containers.
pub(crate) fn eval_repr(source: &str) -> String {
    eval(source).repr()
}

pub(crate) fn num(n: f64) -> Value {
    Value::Number(n)
}
