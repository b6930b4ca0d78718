#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::handlers::unescape;
use super::*;

fn terms(source: &str) -> Vec<Term> {
    hxs_lexer::lex(source)
        .unwrap()
        .into_iter()
        .map(Term::Node)
        .collect()
}

fn value(n: f64) -> Term {
    Term::Value(Value::Number(n), Position::START)
}

/// Name of the rule that would fire first in `buffer`, with its start.
fn first_rule(buffer: &[Term]) -> Option<(&'static str, usize)> {
    (0..buffer.len()).find_map(|start| {
        RULES
            .iter()
            .find(|rule| rule.matches(buffer, start))
            .map(|rule| (rule.name, start))
    })
}

#[test]
fn test_rule_names_are_unique() {
    let mut names: Vec<_> = RULES.iter().map(|rule| rule.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), RULES.len());
}

#[test]
fn test_unescape() {
    assert_eq!(unescape("'abc'"), "abc");
    assert_eq!(unescape("\"a\\nb\""), "a\nb");
    assert_eq!(unescape("`\\t\\r\\0`"), "\t\r\0");
    assert_eq!(unescape("'\\''"), "'");
    assert_eq!(unescape("'\\q'"), "q");
    assert_eq!(unescape("'\\\\'"), "\\");
    assert_eq!(unescape("''"), "");
}

#[test]
fn test_value_matcher_only_matches_values() {
    assert!(Matcher::Value.matches(&value(1.0)));
    assert!(!Matcher::Value.matches(&terms("1")[0]));
    assert!(!Matcher::Number.matches(&value(1.0)));
}

#[test]
fn test_operand_matcher() {
    for source in ["1", "x", "(1)"] {
        assert!(Matcher::Operand.matches(&terms(source)[0]), "{source}");
    }
    for source in ["'a'", "[1]", "{}", "-"] {
        assert!(!Matcher::Operand.matches(&terms(source)[0]), "{source}");
    }
}

#[test]
fn test_leftmost_rule_fires_first() {
    assert_eq!(first_rule(&terms("x + 1")), Some(("word", 0)));
    assert_eq!(first_rule(&terms("+ 'a'")), Some(("glob", 1)));
    assert_eq!(first_rule(&terms("@f(a) { a }")), Some(("named function", 0)));
    assert_eq!(first_rule(&terms("@(a) { a }")), Some(("anonymous function", 0)));
}

#[test]
fn test_assignment_target_is_not_read() {
    assert_eq!(first_rule(&terms("x = 1")), Some(("number", 2)));
}

#[test]
fn test_declaration_only_as_statement_tail() {
    assert_eq!(first_rule(&terms("x = (1)")), Some(("declaration", 0)));
    let buffer = terms("x = (1) + 1");
    assert_eq!(first_rule(&buffer), Some(("parentheses", 2)));
}

#[test]
fn test_value_followed_by_span() {
    let mut buffer = terms("(1)[0]{}");
    buffer[0] = value(1.0);
    assert_eq!(first_rule(&buffer), Some(("index", 0)));
    let mut buffer = terms("f(1)");
    buffer[0] = value(1.0);
    assert_eq!(first_rule(&buffer), Some(("call", 0)));
    let mut buffer = terms("f { 1 }");
    buffer[0] = value(1.0);
    assert_eq!(first_rule(&buffer), Some(("callback", 0)));
}

#[test]
fn test_sign_rule_positions() {
    assert_eq!(first_rule(&terms("-x")), Some(("negative sign", 0)));
    assert_eq!(first_rule(&terms("+1")), Some(("positive sign", 0)));
    // Infix position: the number rule fires instead.
    let mut buffer = terms("1 - 2");
    buffer[0] = value(1.0);
    assert_eq!(first_rule(&buffer), Some(("number", 2)));
    // After another symbol the sign is unary.
    let mut buffer = terms("1 * -2");
    buffer[0] = value(1.0);
    assert_eq!(first_rule(&buffer), Some(("negative sign", 2)));
}

#[test]
fn test_sign_waits_for_postfix_operations() {
    assert_eq!(first_rule(&terms("-f(1)")), Some(("word", 1)));
    assert_eq!(first_rule(&terms("-a[0]")), Some(("word", 1)));
    assert_eq!(first_rule(&terms("-d.k")), Some(("word", 1)));
}

#[test]
fn test_malformed_function_matches_lone_at() {
    assert_eq!(first_rule(&terms("@ 1")), Some(("malformed function", 0)));
}
