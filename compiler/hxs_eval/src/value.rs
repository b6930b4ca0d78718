//! Runtime values.
//!
//! `Value` is a closed union. Scalars (`Null`, `Bool`, `Number`, `Str`) are
//! immutable; `Array` and `Dict` are shared mutable containers, so aliases
//! observe each other's mutations; functions are shared immutably.

mod dict;
mod format;
mod function;

use std::fmt;
use std::rc::Rc;

pub use dict::Dict;
pub use format::format_number;
pub use function::{BlockFunction, Function, ScriptFunction};

use crate::shared::Nested;
use crate::{NativeFunction, Shared};

/// A runtime value.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Array(Shared<Vec<Value>>),
    Dict(Shared<Dict>),
    Function(Rc<Function>),
}

impl Value {
    #[inline]
    pub fn str(text: &str) -> Self {
        Value::Str(Rc::from(text))
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Shared::new(items))
    }

    #[inline]
    pub fn dict(dict: Dict) -> Self {
        Value::Dict(Shared::new(dict))
    }

    #[inline]
    pub fn function(function: Function) -> Self {
        Value::Function(Rc::new(function))
    }

    #[inline]
    pub fn native(native: NativeFunction) -> Self {
        Value::function(Function::Native(native))
    }

    /// Name of the value's runtime kind, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Dict(_) => "dict",
            Value::Function(_) => "function",
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness used by `boolean(...)`.
    ///
    /// `null`, `false`, `0`, `NaN` and `''` are false; containers and
    /// functions are always true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Array(_) | Value::Dict(_) | Value::Function(_) => true,
        }
    }

    /// Numeric conversion used by `number(...)`.
    ///
    /// Containers and functions convert to `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::Str(s) => parse_numeric_string(s),
            Value::Array(_) | Value::Dict(_) | Value::Function(_) => f64::NAN,
        }
    }
}

/// Parse a string the way `number('...')` does: surrounding whitespace is
/// ignored, the empty string is zero, `0x`/`0o`/`0b` prefixes select a
/// radix, and anything unparseable is `NaN`.
fn parse_numeric_string(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0, |acc, c| {
                c.to_digit(radix)
                    .map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN);
    }
    let unsigned = text.trim_start_matches(&['+', '-'][..]);
    if unsigned == "Infinity" {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    // Keep Rust's extra spellings (`inf`, `nan`) out.
    let numeric = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if numeric {
        text.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

impl Value {
    /// Whether dropping this value may free further values.
    #[inline]
    pub(crate) fn may_nest(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Dict(_) | Value::Function(_))
    }
}

impl Nested for Value {
    fn take_nested(&mut self, out: &mut Vec<Value>) {
        match self {
            Value::Array(items) => items.take_nested_into(out),
            Value::Dict(dict) => dict.take_nested_into(out),
            Value::Function(function) => match Rc::get_mut(function) {
                Some(Function::Script(script)) => script.store.take_nested_into(out),
                Some(Function::Block(block)) => block.store.take_nested_into(out),
                Some(Function::Native(_)) | None => {}
            },
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Str(_) => {}
        }
    }
}

impl Nested for Vec<Value> {
    fn take_nested(&mut self, out: &mut Vec<Value>) {
        out.extend(self.drain(..).filter(Value::may_nest));
    }
}

/// Primitives compare by value (`NaN` is unequal to itself); arrays, dicts
/// and functions compare by identity. Different kinds are never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Dict(a), Value::Dict(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::str(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Rc::from(s))
    }
}

/// Strings display raw; everything else displays as its [`Value::repr`].
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => f.write_str(&other.repr()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}
