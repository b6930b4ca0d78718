//! Error types for evaluation.
//!
//! Every failure is one of four kinds. Errors are created unlocated by the
//! factory functions below and pick up a location (position plus source
//! name) the first time they pass a point that knows one; a located error
//! keeps its original location while it unwinds.

use std::fmt;
use std::sync::Arc;

use hxs_ir::Position;
use hxs_lexer::{LexError, LexErrorKind};

use crate::Value;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Error taxonomy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed structural pattern: missing name, colon or argument.
    Syntax,
    /// Operand or argument of the wrong runtime kind.
    Type,
    /// Correctly typed value outside its legal domain.
    Range,
    /// Unresolved identifier or member.
    Reference,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Syntax => "SyntaxError",
            ErrorKind::Type => "TypeError",
            ErrorKind::Range => "RangeError",
            ErrorKind::Reference => "ReferenceError",
        })
    }
}

/// Where an error was raised.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub position: Option<Position>,
    pub source_name: Option<Arc<str>>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.position, &self.source_name) {
            (Some(pos), Some(name)) => write!(f, " ({pos} @{name})"),
            (Some(pos), None) => write!(f, " ({pos})"),
            (None, _) => Ok(()),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}{location}")]
pub struct EvalError {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Location,
}

impl EvalError {
    #[cold]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        EvalError {
            kind,
            message: message.into(),
            location: Location::default(),
        }
    }

    /// Attach a location unless one is already present.
    #[must_use]
    pub fn at(mut self, pos: Position, source_name: &Arc<str>) -> Self {
        if self.location.position.is_none() {
            self.location = Location {
                position: Some(pos),
                source_name: Some(Arc::clone(source_name)),
            };
        }
        self
    }

    #[inline]
    pub fn is_located(&self) -> bool {
        self.location.position.is_some()
    }

    /// Fold a lexer failure into the error taxonomy. Nesting past the
    /// limit is a `RangeError`; everything else is a `SyntaxError`.
    #[cold]
    pub fn from_lex(err: LexError, source_name: &Arc<str>) -> Self {
        let kind = match err.kind {
            LexErrorKind::TooDeep { .. } => ErrorKind::Range,
            _ => ErrorKind::Syntax,
        };
        EvalError::new(kind, err.kind.to_string()).at(err.pos, source_name)
    }
}

// Factories

#[cold]
pub fn syntax_error(message: impl Into<String>) -> EvalError {
    EvalError::new(ErrorKind::Syntax, message)
}

#[cold]
pub fn type_error(message: impl Into<String>) -> EvalError {
    EvalError::new(ErrorKind::Type, message)
}

#[cold]
pub fn range_error(message: impl Into<String>) -> EvalError {
    EvalError::new(ErrorKind::Range, message)
}

#[cold]
pub fn reference_error(message: impl Into<String>) -> EvalError {
    EvalError::new(ErrorKind::Reference, message)
}

/// Reading a name bound nowhere in the store chain.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    reference_error(format!("variable \"{name}\" is not defined"))
}

/// A value of the wrong kind where a specific one was required.
#[cold]
pub fn expected(what: &str, got: &Value) -> EvalError {
    type_error(format!("expect {what}, got {}", got.type_name()))
}

/// Calling something that is not a function.
#[cold]
pub fn not_callable(got: &Value) -> EvalError {
    type_error(format!("invalid function call: {} is not a function", got.type_name()))
}

/// A native function called with an argument count outside its arity.
#[cold]
pub fn arity_mismatch(name: &str, min: usize, max: usize, got: usize) -> EvalError {
    let expected = if min == max {
        format!("{min}")
    } else if max == usize::MAX {
        format!("at least {min}")
    } else {
        format!("{min} to {max}")
    };
    type_error(format!(
        "{name} expects {expected} argument(s), got {got}"
    ))
}

/// Script nesting beyond the configured depth limit.
#[cold]
pub fn depth_exceeded(max_depth: usize) -> EvalError {
    range_error(format!(
        "maximum evaluation depth exceeded (limit {max_depth})"
    ))
}

/// An array or string index outside its bounds.
#[cold]
pub fn index_out_of_range(index: f64) -> EvalError {
    range_error(format!("index({index}) out of range"))
}
