//! Structural rule table.
//!
//! Each rule is a fixed-width pattern of term matchers, an optional context
//! guard, and a handler producing the value that replaces the matched
//! window. The engine scans the buffer left to right and, at each start
//! position, fires the first rule (in table order) that matches there.

mod handlers;

use hxs_ir::{Delimiter, NodeKind, Position, Symbol};

use crate::errors::EvalResult;
use crate::{Interpreter, Term, Value};

/// Matches a single buffer term.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Matcher {
    Number,
    Word,
    Glob,
    /// An already reduced value node.
    Value,
    Sym(Symbol),
    Span(Delimiter),
    /// Operand of a sign: a number, a word or a parenthesised span.
    Operand,
}

impl Matcher {
    fn matches(self, term: &Term) -> bool {
        let Term::Node(node) = term else {
            return self == Matcher::Value;
        };
        match (self, &node.kind) {
            (Matcher::Number, NodeKind::Number { .. })
            | (Matcher::Word, NodeKind::Word(_))
            | (Matcher::Glob, NodeKind::Glob(_)) => true,
            (Matcher::Sym(expected), NodeKind::Symbol(sym)) => expected == *sym,
            (Matcher::Span(expected), NodeKind::Span { delimiter, .. }) => expected == *delimiter,
            (Matcher::Operand, kind) => matches!(
                kind,
                NodeKind::Number { .. }
                    | NodeKind::Word(_)
                    | NodeKind::Span {
                        delimiter: Delimiter::Paren,
                        ..
                    }
            ),
            _ => false,
        }
    }
}

/// Context predicate over `(buffer, start)`.
type Guard = fn(&[Term], usize) -> bool;

/// Produces the replacement value for a matched window. The position is the
/// window's first term, used to locate errors that carry no location yet.
type Handler = fn(&mut Interpreter, &[Term], Position) -> EvalResult;

pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: &'static [Matcher],
    pub guard: Option<Guard>,
    pub handler: Handler,
}

impl Rule {
    fn matches(&self, buffer: &[Term], start: usize) -> bool {
        let Some(window) = buffer.get(start..start + self.pattern.len()) else {
            return false;
        };
        self.pattern
            .iter()
            .zip(window)
            .all(|(matcher, term)| matcher.matches(term))
            && self.guard.map_or(true, |guard| guard(buffer, start))
    }
}

pub(crate) static RULES: &[Rule] = &[
    Rule {
        name: "number",
        pattern: &[Matcher::Number],
        guard: None,
        handler: handlers::number,
    },
    Rule {
        name: "declaration",
        pattern: &[
            Matcher::Word,
            Matcher::Sym(Symbol::Eq),
            Matcher::Span(Delimiter::Paren),
        ],
        guard: Some(ends_buffer),
        handler: handlers::declaration,
    },
    Rule {
        name: "word",
        pattern: &[Matcher::Word],
        guard: Some(not_assignment_target),
        handler: handlers::word,
    },
    Rule {
        name: "glob",
        pattern: &[Matcher::Glob],
        guard: None,
        handler: handlers::glob,
    },
    Rule {
        name: "bind",
        pattern: &[Matcher::Value, Matcher::Sym(Symbol::Dollar), Matcher::Word],
        guard: None,
        handler: handlers::bind,
    },
    Rule {
        name: "member",
        pattern: &[Matcher::Value, Matcher::Sym(Symbol::Dot), Matcher::Word],
        guard: None,
        handler: handlers::member,
    },
    Rule {
        name: "call",
        pattern: &[Matcher::Value, Matcher::Span(Delimiter::Paren)],
        guard: None,
        handler: handlers::call,
    },
    Rule {
        name: "callback",
        pattern: &[Matcher::Value, Matcher::Span(Delimiter::Brace)],
        guard: None,
        handler: handlers::callback,
    },
    Rule {
        name: "word string",
        pattern: &[Matcher::Sym(Symbol::Hash), Matcher::Word],
        guard: None,
        handler: handlers::word_string,
    },
    Rule {
        name: "named function",
        pattern: &[
            Matcher::Sym(Symbol::At),
            Matcher::Word,
            Matcher::Span(Delimiter::Paren),
            Matcher::Span(Delimiter::Brace),
        ],
        guard: None,
        handler: handlers::named_function,
    },
    Rule {
        name: "anonymous function",
        pattern: &[
            Matcher::Sym(Symbol::At),
            Matcher::Span(Delimiter::Paren),
            Matcher::Span(Delimiter::Brace),
        ],
        guard: None,
        handler: handlers::anonymous_function,
    },
    Rule {
        name: "malformed function",
        pattern: &[Matcher::Sym(Symbol::At)],
        guard: None,
        handler: handlers::malformed_function,
    },
    Rule {
        name: "negative sign",
        pattern: &[Matcher::Sym(Symbol::Minus), Matcher::Operand],
        guard: Some(prefix_sign),
        handler: handlers::negate,
    },
    Rule {
        name: "positive sign",
        pattern: &[Matcher::Sym(Symbol::Plus), Matcher::Operand],
        guard: Some(prefix_sign),
        handler: handlers::identity,
    },
    Rule {
        name: "parentheses",
        pattern: &[Matcher::Span(Delimiter::Paren)],
        guard: None,
        handler: handlers::parentheses,
    },
    Rule {
        name: "array",
        pattern: &[Matcher::Span(Delimiter::Bracket)],
        guard: None,
        handler: handlers::array,
    },
    Rule {
        name: "index",
        pattern: &[Matcher::Value, Matcher::Span(Delimiter::Bracket)],
        guard: None,
        handler: handlers::index,
    },
    Rule {
        name: "dict",
        pattern: &[Matcher::Span(Delimiter::Brace)],
        guard: None,
        handler: handlers::dict,
    },
];

// Guards

/// `name = (...)` only as a whole statement tail; otherwise the parentheses
/// are an operand and `=` is left to the operator table.
fn ends_buffer(buffer: &[Term], start: usize) -> bool {
    start + 3 == buffer.len()
}

/// A word directly followed by `=` is an assignment target, not a read.
fn not_assignment_target(buffer: &[Term], start: usize) -> bool {
    buffer.get(start + 1).and_then(Term::as_symbol) != Some(Symbol::Eq)
}

/// A sign is unary at the buffer start or right after a symbol, and only
/// when its operand is not itself the head of a call, index or member read.
fn prefix_sign(buffer: &[Term], start: usize) -> bool {
    let prefix_position = start == 0 || buffer[start - 1].is_symbol();
    let postfix_follows = buffer.get(start + 2).is_some_and(|next| {
        next.as_symbol() == Some(Symbol::Dot)
            || matches!(
                next.as_node().map(|node| &node.kind),
                Some(NodeKind::Span { .. })
            )
    });
    prefix_position && !postfix_follows
}

impl Interpreter {
    /// Fire the leftmost matching rule. Returns whether anything fired.
    pub(crate) fn apply_rule(&mut self, buffer: &mut Vec<Term>) -> EvalResult<bool> {
        for start in 0..buffer.len() {
            let Some(rule) = RULES.iter().find(|rule| rule.matches(buffer.as_slice(), start)) else {
                continue;
            };
            let end = start + rule.pattern.len();
            let pos = buffer[start].pos();
            tracing::trace!(rule = rule.name, %pos, "rule");
            let value: Value = (rule.handler)(self, &buffer[start..end], pos)
                .map_err(|err| self.locate(err, pos))?;
            buffer.splice(start..end, std::iter::once(Term::Value(value, pos)));
            return Ok(true);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests;
