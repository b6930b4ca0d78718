#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::array::{filled, slice_bounds};
use super::*;
use crate::{ErrorKind, Function};

fn registered() -> Interpreter {
    Interpreter::new()
}

fn native_of(value: &Value) -> &NativeFunction {
    match value {
        Value::Function(function) => match &**function {
            Function::Native(native) => native,
            other => panic!("expected a native function, got {other:?}"),
        },
        other => panic!("expected a function, got {other:?}"),
    }
}

#[test]
fn test_constants_are_registered() {
    let interp = registered();
    assert_eq!(interp.lookup("true"), Some(Value::Bool(true)));
    assert_eq!(interp.lookup("false"), Some(Value::Bool(false)));
    assert_eq!(interp.lookup("null"), Some(Value::Null));
    assert_eq!(interp.lookup("infinity"), Some(Value::Number(f64::INFINITY)));
    let nan = interp.lookup("NaN").and_then(|value| value.as_number());
    assert!(nan.is_some_and(f64::is_nan));
}

#[test]
fn test_every_prelude_function_has_help() {
    let interp = registered();
    for (name, _, _, help, _) in basics::functions() {
        let value = interp.lookup(name).unwrap();
        let native = native_of(&value);
        assert_eq!(native.name(), name);
        assert_eq!(native.help(), Some(help));
    }
}

#[test]
fn test_namespaces_hold_their_tables() {
    let interp = registered();
    for (namespace, entries) in [
        ("Array", array::functions()),
        ("String", string::functions()),
    ] {
        let Some(Value::Dict(dict)) = interp.lookup(namespace) else {
            panic!("{namespace} is not a dict");
        };
        let dict = dict.borrow();
        assert_eq!(dict.len(), entries.len(), "{namespace}");
        for (name, min, max, help, _) in entries {
            let native = native_of(dict.get(name).unwrap());
            assert_eq!(native.arity(), (min, max), "{namespace}.{name}");
            assert!(help.starts_with(namespace), "{namespace}.{name}");
        }
    }
}

#[test]
fn test_arg_defaults_to_null() {
    let args = vec![Value::Number(1.0)];
    assert_eq!(arg(&args, 0), Value::Number(1.0));
    assert_eq!(arg(&args, 1), Value::Null);
}

#[test]
fn test_expect_helpers() {
    assert_eq!(expect_number(&Value::Number(2.0), "a number"), Ok(2.0));
    assert_eq!(expect_str(&Value::from("a"), "a string"), Ok("a"));
    assert_eq!(expect_bool(&Value::Bool(true), "a boolean"), Ok(true));
    assert!(expect_array(&Value::array(Vec::new()), "an array").is_ok());

    let err = expect_number(&Value::Null, "a number as size").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "expect a number as size, got null");
    assert!(!err.is_located());

    let err = expect_array(&Value::from("x"), "an array").unwrap_err();
    assert_eq!(err.message, "expect an array, got string");
}

#[test]
fn test_filled() {
    assert_eq!(filled(2, &Value::Bool(true)), Ok(vec![Value::Bool(true); 2]));
    assert_eq!(filled(0, &Value::Null), Ok(Vec::new()));
    let err = filled(usize::MAX, &Value::Null).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Range);
    assert_eq!(
        err.message,
        format!("cannot allocate an array of size {}", usize::MAX)
    );
}

#[test]
fn test_slice_bounds() {
    let n = Value::Number;
    let source = Value::Null;
    assert_eq!(slice_bounds(&[source.clone()], 5), Ok((0, 5)));
    assert_eq!(slice_bounds(&[source.clone(), n(2.0)], 5), Ok((2, 5)));
    assert_eq!(slice_bounds(&[source.clone(), n(-2.0)], 5), Ok((3, 5)));
    assert_eq!(slice_bounds(&[source.clone(), n(1.0), n(-1.0)], 5), Ok((1, 4)));
    assert_eq!(slice_bounds(&[source.clone(), n(0.0), n(99.0)], 5), Ok((0, 5)));
    let err = slice_bounds(&[source, Value::from("1")], 5).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
}

#[test]
fn test_native_errors_are_located_at_the_call() {
    let mut interp = registered();
    let err = interp.eval_source("x = 1;\nString.toUpperCase(x)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "expect a string, got number");
    assert_eq!(err.location.position.map(|pos| (pos.line, pos.column)), Some((2, 19)));
}
