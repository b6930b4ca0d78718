//! Lexer error types.
//!
//! Every error carries the position of the offending character; the
//! evaluator folds these into its own `SyntaxError` category, except for
//! excessive nesting, which it reports as a `RangeError`.

use hxs_ir::Position;

/// A lexer error located in source.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind} ({pos})")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE it went wrong.
    pub pos: Position,
}

impl LexError {
    #[cold]
    pub(crate) fn new(kind: LexErrorKind, pos: Position) -> Self {
        LexError { kind, pos }
    }
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
    /// String literal missing its closing quote.
    #[error("unterminated string literal")]
    UnterminatedGlob,
    /// A closing delimiter with nothing open.
    #[error("unexpected `{0}`")]
    UnexpectedClose(char),
    /// End of input with a delimiter still open.
    #[error("unclosed `{0}`")]
    Unclosed(char),
    /// A closing delimiter that does not match the innermost open one.
    #[error("expected `{expected}` but found `{found}`")]
    Mismatched { expected: char, found: char },
    /// Delimiter groups nested past the configured limit.
    #[error("maximum nesting depth exceeded (limit {limit})")]
    TooDeep { limit: usize },
}
