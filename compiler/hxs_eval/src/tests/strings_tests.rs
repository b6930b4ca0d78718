use pretty_assertions::assert_eq;

use super::{error_kind, eval};
use crate::{ErrorKind, Value};

fn s(text: &str) -> Value {
    Value::from(text)
}

#[test]
fn test_string_literals() {
    assert_eq!(eval("\"\nabc\n\""), s("\nabc\n"));
    assert_eq!(eval("\"\""), s(""));
    assert_eq!(eval("'\n666\n'"), s("\n666\n"));
    assert_eq!(eval("`\n233\n`"), s("\n233\n"));
    assert_eq!(eval("``"), s(""));
}

#[test]
fn test_escapes() {
    assert_eq!(eval(r"'a\nb'"), s("a\nb"));
    assert_eq!(eval(r"'tab\there'"), s("tab\there"));
    assert_eq!(eval(r"'it\'s'"), s("it's"));
    assert_eq!(eval(r"'back\\slash'"), s("back\\slash"));
    assert_eq!(eval(r"'\q'"), s("q"));
}

#[test]
fn test_unterminated_string() {
    assert_eq!(error_kind("'"), ErrorKind::Syntax);
    assert_eq!(error_kind("\"abc"), ErrorKind::Syntax);
}

#[test]
fn test_word_strings() {
    assert_eq!(eval("#word"), s("word"));
    assert_eq!(eval("# hello"), s("hello"));
    assert_eq!(error_kind("#1"), ErrorKind::Syntax);
}

#[test]
fn test_indexing() {
    assert_eq!(eval("'abc'[0]"), s("a"));
    assert_eq!(eval("'abc'[2]"), s("c"));
    assert_eq!(eval("'abc'[-2]"), s("b"));
    assert_eq!(eval("'héllo'[1]"), s("é"));
    assert_eq!(error_kind("'abc'['a']"), ErrorKind::Type);
    assert_eq!(error_kind("'abc'[3]"), ErrorKind::Range);
    assert_eq!(error_kind("'abc'[-4]"), ErrorKind::Range);
}

#[test]
fn test_join() {
    assert_eq!(eval("String.join(['a', 'b', 'c'])"), s("abc"));
    assert_eq!(eval("String.join(['a', 'b', 'c'], ',')"), s("a,b,c"));
    assert_eq!(eval("String.join([])"), s(""));
    assert_eq!(eval("String.join([''])"), s(""));
    assert_eq!(eval("String.join([], ',')"), s(""));
    assert_eq!(eval("String.join([''], ',')"), s(""));
    assert_eq!(error_kind("String.join('foo', 'bar')"), ErrorKind::Type);
    assert_eq!(error_kind("String.join([0])"), ErrorKind::Type);
    assert_eq!(error_kind("String.join([''], 1)"), ErrorKind::Type);
}

#[test]
fn test_case_conversion() {
    assert_eq!(eval("String.toLowerCase('LowerCase')"), s("lowercase"));
    assert_eq!(eval("String.toUpperCase('UpperCase')"), s("UPPERCASE"));
    assert_eq!(error_kind("String.toLowerCase(123)"), ErrorKind::Type);
    assert_eq!(error_kind("String.toUpperCase(456)"), ErrorKind::Type);
}

#[test]
fn test_slice() {
    assert_eq!(eval("String.slice('012')"), s("012"));
    assert_eq!(eval("String.slice('012', 0)"), s("012"));
    assert_eq!(eval("String.slice('012', 1)"), s("12"));
    assert_eq!(eval("String.slice('012', 2)"), s("2"));
    assert_eq!(eval("String.slice('012', 3)"), s(""));
    assert_eq!(eval("String.slice('012', 0, 1)"), s("0"));
    assert_eq!(eval("String.slice('012', 1, 3)"), s("12"));
    assert_eq!(eval("String.slice('012', 1, -1)"), s("1"));
    assert_eq!(eval("String.slice('012', 1, -2)"), s(""));
    assert_eq!(error_kind("String.slice(['2', '3', '3'])"), ErrorKind::Type);
    assert_eq!(error_kind("String.slice('012', '0')"), ErrorKind::Type);
    assert_eq!(error_kind("String.slice('012', 0, '1')"), ErrorKind::Type);
}
