use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{error_kind, eval, num};
use crate::{ErrorKind, Value};

#[test]
fn test_decimal_literals() {
    assert_eq!(eval("0"), num(0.0));
    assert_eq!(eval("3.1415"), num(3.1415));
    assert_eq!(eval("-3.14"), num(-3.14));
    assert_eq!(eval("2020D"), num(2020.0));
    assert_eq!(eval("2020.0101D"), num(2020.0101));
}

#[test]
fn test_negative_zero_keeps_its_sign() {
    let Value::Number(n) = eval("-0") else {
        panic!("expected a number");
    };
    assert!(n == 0.0 && n.is_sign_negative());
}

#[test]
fn test_radix_literals() {
    assert_eq!(eval("0ABH"), num(171.0));
    assert_eq!(eval("0AB.ABH"), num(171.0));
    assert_eq!(eval("123O"), num(83.0));
    assert_eq!(eval("123.456O"), num(83.0));
    assert_eq!(eval("1011B"), num(11.0));
    assert_eq!(eval("1011.0100B"), num(11.0));
}

#[test]
fn test_invalid_digits() {
    for source in ["0GH", "0AD", "8O", "2B"] {
        assert_eq!(error_kind(source), ErrorKind::Syntax, "{source}");
    }
}

#[test]
fn test_constants() {
    assert_eq!(eval("true"), Value::Bool(true));
    assert_eq!(eval("false"), Value::Bool(false));
    assert_eq!(eval("null"), Value::Null);
    assert_eq!(eval("infinity"), num(f64::INFINITY));
    assert_eq!(eval("-infinity"), num(f64::NEG_INFINITY));
    assert!(matches!(eval("NaN"), Value::Number(n) if n.is_nan()));
}

proptest! {
    #[test]
    fn prop_addition_matches_host(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let value = eval(&format!("{a} + {b}"));
        prop_assert_eq!(value, num(f64::from(a) + f64::from(b)));
    }

    #[test]
    fn prop_unary_minus_negates(a in 0u32..1_000_000) {
        prop_assert_eq!(eval(&format!("-{a}")), num(-f64::from(a)));
        prop_assert_eq!(eval(&format!("1 - -{a}")), num(1.0 + f64::from(a)));
    }

    #[test]
    fn prop_bitwise_matches_i32(a in any::<i32>(), b in any::<i32>()) {
        // Negative literals go through unary minus.
        let source = format!("({a}) & ({b})");
        prop_assert_eq!(eval(&source), num(f64::from(a & b)));
    }
}
