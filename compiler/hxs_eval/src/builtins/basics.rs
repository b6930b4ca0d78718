//! Top-level prelude functions.

use super::{arg, expect_bool, expect_str, Entry};
use crate::errors::{expected, undefined_variable, EvalResult};
use crate::{Interpreter, NativeFunction, Term, Value};

pub(super) fn functions() -> Vec<Entry> {
    vec![
        ("help", 1, 1, "help(function)", help),
        ("set", 2, 2, "set(name, value)", set),
        ("get", 1, 1, "get(name)", get),
        ("exist", 1, 1, "exist(name)", exist),
        ("print", 0, NativeFunction::VARIADIC, "print(data...)", print),
        ("number", 1, 1, "number(value)", number),
        ("string", 1, 1, "string(value)", string),
        ("boolean", 1, 1, "boolean(value)", boolean),
        ("dir", 1, 1, "dir(dict)", dir),
        ("if", 1, 1, "if(condition) { ... }", if_),
        ("while", 1, 1, "while(conditionFn) { ... }", while_),
    ]
}

/// Usage text of a function, `null` when it has none.
fn help(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    match &args[0] {
        Value::Function(function) => Ok(function.help().map_or(Value::Null, Value::from)),
        other => Err(expected("a function", other)),
    }
}

fn set(interp: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let name = expect_str(&args[0], "a string as variable name")?;
    let value = arg(&args, 1);
    interp.assign(name, value.clone());
    Ok(value)
}

fn get(interp: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let name = expect_str(&args[0], "a string as variable name")?;
    interp.lookup(name).ok_or_else(|| undefined_variable(name))
}

fn exist(interp: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let name = expect_str(&args[0], "a string as variable name")?;
    Ok(Value::Bool(interp.store().borrow().contains(name)))
}

/// Display forms joined by spaces, one line per call.
fn print(interp: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    interp.print_handler().println(&line);
    Ok(Value::Null)
}

fn number(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    Ok(Value::Number(args[0].to_number()))
}

fn string(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    Ok(Value::from(args[0].repr()))
}

fn boolean(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    Ok(Value::Bool(args[0].is_truthy()))
}

/// Keys of a dict, in insertion order.
fn dir(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let Value::Dict(dict) = &args[0] else {
        return Err(expected("a dict", &args[0]));
    };
    let keys = dict.borrow().keys().map(|key| Value::Str(key.clone())).collect();
    Ok(Value::array(keys))
}

/// `if(cond) { ... }`: runs the block when `cond` is `true`.
fn if_(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let condition = expect_bool(&args[0], "a boolean as condition")?;
    let run = NativeFunction::new("if", 1, 1, move |interp, args, referrer| {
        if condition {
            interp.apply(&args[0], Vec::new(), referrer)
        } else {
            Ok(Value::Null)
        }
    });
    Ok(Value::native(run))
}

/// `while(conditionFn) { ... }`: runs the block while `conditionFn()`
/// returns `true`.
fn while_(_: &mut Interpreter, args: Vec<Value>, _: &Term) -> EvalResult {
    let condition = args[0].clone();
    if !matches!(condition, Value::Function(_)) {
        return Err(expected("a function as loop condition", &condition));
    }
    let run = NativeFunction::new("while", 1, 1, move |interp, args, referrer| {
        loop {
            let keep_going = interp.apply(&condition, Vec::new(), referrer)?;
            if !expect_bool(&keep_going, "a boolean from loop condition")? {
                return Ok(Value::Null);
            }
            interp.apply(&args[0], Vec::new(), referrer)?;
        }
    });
    Ok(Value::native(run))
}
