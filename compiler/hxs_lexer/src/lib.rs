//! Lexer for HXS using logos.
//!
//! Turns source text into the nested [`Node`] stream the evaluator reduces:
//! whitespace (newlines included) is dropped, literals and symbols become
//! leaf nodes, and each `()`, `[]` or `{}` group is folded into a single
//! span node carrying its body.
//!
//! String literals are kept raw, quotes and escapes included. Resolving
//! escapes is the evaluator's business.

mod lex_error;
mod line_index;
mod raw_token;

use hxs_ir::{Delimiter, Node, NumberSuffix, Position, Symbol};
use logos::Logos;

use line_index::LineIndex;
use raw_token::RawToken;

pub use lex_error::{LexError, LexErrorKind};

/// An open delimiter group waiting for its closing token.
struct Frame {
    delimiter: Delimiter,
    pos: Position,
    body: Vec<Node>,
}

/// Deepest delimiter nesting [`lex`] accepts.
pub const DEFAULT_MAX_NESTING: usize = 10_000;

/// Group stack plus the top-level node list.
struct Grouper {
    open: Vec<Frame>,
    top: Vec<Node>,
    max_nesting: usize,
}

impl Grouper {
    fn new(max_nesting: usize) -> Self {
        Grouper {
            open: Vec::new(),
            top: Vec::new(),
            max_nesting,
        }
    }

    fn push(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(frame) => frame.body.push(node),
            None => self.top.push(node),
        }
    }

    fn open(&mut self, delimiter: Delimiter, pos: Position) -> Result<(), LexError> {
        if self.open.len() >= self.max_nesting {
            return Err(LexError::new(
                LexErrorKind::TooDeep {
                    limit: self.max_nesting,
                },
                pos,
            ));
        }
        self.open.push(Frame {
            delimiter,
            pos,
            body: Vec::new(),
        });
        Ok(())
    }

    fn close(&mut self, delimiter: Delimiter, pos: Position) -> Result<(), LexError> {
        let Some(frame) = self.open.pop() else {
            return Err(LexError::new(
                LexErrorKind::UnexpectedClose(delimiter.close()),
                pos,
            ));
        };
        if frame.delimiter != delimiter {
            return Err(LexError::new(
                LexErrorKind::Mismatched {
                    expected: frame.delimiter.close(),
                    found: delimiter.close(),
                },
                pos,
            ));
        }
        self.push(Node::span(frame.delimiter, frame.body, frame.pos));
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Node>, LexError> {
        // Report the innermost unclosed group.
        if let Some(frame) = self.open.pop() {
            return Err(LexError::new(
                LexErrorKind::Unclosed(frame.delimiter.open()),
                frame.pos,
            ));
        }
        Ok(self.top)
    }
}

/// Lex `source` into a nested node stream.
pub fn lex(source: &str) -> Result<Vec<Node>, LexError> {
    lex_with_limit(source, DEFAULT_MAX_NESTING)
}

/// Lex `source`, rejecting delimiter groups nested deeper than
/// `max_nesting`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex_with_limit(source: &str, max_nesting: usize) -> Result<Vec<Node>, LexError> {
    let index = LineIndex::new(source);
    let mut grouper = Grouper::new(max_nesting);
    let mut lexer = RawToken::lexer(source);

    while let Some(token) = lexer.next() {
        let text = lexer.slice();
        let pos = index.position(lexer.span().start);
        let Ok(token) = token else {
            return Err(unexpected_character(text, pos));
        };
        match token {
            RawToken::Number => grouper.push(number_node(text, pos)),
            RawToken::Word => grouper.push(Node::word(text, pos)),
            RawToken::Glob => grouper.push(Node::glob(text, pos)),
            RawToken::UnterminatedGlob => {
                return Err(LexError::new(LexErrorKind::UnterminatedGlob, pos));
            }
            RawToken::Symbol => match Symbol::from_text(text) {
                Some(sym) => grouper.push(Node::symbol(sym, pos)),
                None => return Err(unexpected_character(text, pos)),
            },
            RawToken::LParen => grouper.open(Delimiter::Paren, pos)?,
            RawToken::LBracket => grouper.open(Delimiter::Bracket, pos)?,
            RawToken::LBrace => grouper.open(Delimiter::Brace, pos)?,
            RawToken::RParen => grouper.close(Delimiter::Paren, pos)?,
            RawToken::RBracket => grouper.close(Delimiter::Bracket, pos)?,
            RawToken::RBrace => grouper.close(Delimiter::Brace, pos)?,
        }
    }

    let nodes = grouper.finish()?;
    tracing::trace!(nodes = nodes.len(), "lexed");
    Ok(nodes)
}

/// Split a trailing radix suffix off a number literal.
///
/// A lone suffix letter can't occur since number literals start with a
/// digit, so any literal longer than one character may carry one.
fn number_node(text: &str, pos: Position) -> Node {
    if text.len() > 1 {
        if let Some(suffix) = text.chars().next_back().and_then(NumberSuffix::from_char) {
            // Number literals are ASCII, so the last char is one byte.
            return Node::number(&text[..text.len() - 1], suffix, pos);
        }
    }
    Node::number(text, NumberSuffix::Plain, pos)
}

#[cold]
fn unexpected_character(text: &str, pos: Position) -> LexError {
    let c = text.chars().next().unwrap_or('\0');
    LexError::new(LexErrorKind::UnexpectedCharacter(c), pos)
}
