//! Prelude: constants and host functions registered into the top-level
//! store.
//!
//! Every function goes through [`NativeFunction`], so arity is checked and
//! errors are located at the call site by the adapter. The helpers below
//! only produce unlocated `TypeError`s for argument kind mismatches.

mod array;
mod basics;
mod string;

use crate::errors::{expected, EvalResult};
use crate::value::Dict;
use crate::{Interpreter, NativeFunction, Shared, Term, Value};

/// Register the whole prelude into the interpreter's top-level store.
pub(crate) fn register(interpreter: &Interpreter) {
    interpreter.define("true", Value::Bool(true));
    interpreter.define("false", Value::Bool(false));
    interpreter.define("null", Value::Null);
    interpreter.define("infinity", Value::Number(f64::INFINITY));
    interpreter.define("NaN", Value::Number(f64::NAN));

    for entry in basics::functions() {
        interpreter.define(entry.0, native(entry));
    }
    interpreter.define("Array", namespace(array::functions()));
    interpreter.define("String", namespace(string::functions()));
}

/// Host operation as stored in the prelude tables.
type Op = fn(&mut Interpreter, Vec<Value>, &Term) -> EvalResult;

/// `(name, min, max, help, op)`
type Entry = (&'static str, usize, usize, &'static str, Op);

fn native((name, min, max, help, op): Entry) -> Value {
    Value::native(NativeFunction::new(name, min, max, op).with_help(help))
}

fn namespace(entries: Vec<Entry>) -> Value {
    let dict: Dict = entries
        .into_iter()
        .map(|entry| (entry.0, native(entry)))
        .collect();
    Value::dict(dict)
}

/// Argument `i`, or `null` when absent.
#[inline]
fn arg(args: &[Value], i: usize) -> Value {
    args.get(i).cloned().unwrap_or_default()
}

fn expect_array<'v>(value: &'v Value, what: &str) -> EvalResult<&'v Shared<Vec<Value>>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(expected(what, other)),
    }
}

fn expect_number(value: &Value, what: &str) -> EvalResult<f64> {
    value.as_number().ok_or_else(|| expected(what, value))
}

fn expect_str<'v>(value: &'v Value, what: &str) -> EvalResult<&'v str> {
    value.as_str().ok_or_else(|| expected(what, value))
}

fn expect_bool(value: &Value, what: &str) -> EvalResult<bool> {
    value.as_bool().ok_or_else(|| expected(what, value))
}

#[cfg(test)]
mod tests;
