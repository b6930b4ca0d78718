//! The `String` namespace.
//!
//! Lengths and positions count characters, not bytes.

use super::array::slice_bounds;
use super::{expect_array, expect_str, Entry};
use crate::errors::{expected, EvalResult};
use crate::{Interpreter, Term, Value};

pub(super) fn functions() -> Vec<Entry> {
    vec![
        ("join", 1, 2, "String.join(strings, separator = '')", join),
        ("toLowerCase", 1, 1, "String.toLowerCase(string)", to_lower_case),
        ("toUpperCase", 1, 1, "String.toUpperCase(string)", to_upper_case),
        (
            "slice",
            1,
            3,
            "String.slice(string, start = 0, end = string.length)",
            slice,
        ),
    ]
}

fn join(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let strings = expect_array(&args[0], "an array of strings")?;
    let separator = match args.get(1) {
        Some(separator) => expect_str(separator, "a string as separator")?,
        None => "",
    };
    let strings = strings.borrow();
    let parts = strings
        .iter()
        .map(|item| item.as_str().ok_or_else(|| expected("strings to join", item)))
        .collect::<EvalResult<Vec<_>>>()?;
    Ok(Value::from(parts.join(separator)))
}

fn to_lower_case(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let text = expect_str(&args[0], "a string")?;
    Ok(Value::from(text.to_lowercase()))
}

fn to_upper_case(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let text = expect_str(&args[0], "a string")?;
    Ok(Value::from(text.to_uppercase()))
}

fn slice(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let text = expect_str(&args[0], "a string as source")?;
    let (start, end) = slice_bounds(&args, text.chars().count())?;
    let sliced: String = text
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect();
    Ok(Value::from(sliced))
}
