//! Syntax nodes.

use std::rc::Rc;

use crate::{Position, Symbol};

/// Radix suffix of a number literal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NumberSuffix {
    /// No suffix: decimal float.
    #[default]
    Plain,
    /// `B`: base-2 integer.
    Binary,
    /// `O`: base-8 integer.
    Octal,
    /// `H`: base-16 integer.
    Hex,
    /// `D`: explicit decimal float.
    Decimal,
}

impl NumberSuffix {
    /// Map a trailing literal character onto a suffix.
    ///
    /// Only uppercase letters are suffixes; anything else stays part of the
    /// digits.
    pub fn from_char(c: char) -> Option<NumberSuffix> {
        match c {
            'B' => Some(NumberSuffix::Binary),
            'O' => Some(NumberSuffix::Octal),
            'H' => Some(NumberSuffix::Hex),
            'D' => Some(NumberSuffix::Decimal),
            _ => None,
        }
    }

    /// Integer radix for the suffix, `None` for decimal floats.
    pub const fn radix(self) -> Option<u32> {
        match self {
            NumberSuffix::Binary => Some(2),
            NumberSuffix::Octal => Some(8),
            NumberSuffix::Hex => Some(16),
            NumberSuffix::Plain | NumberSuffix::Decimal => None,
        }
    }
}

/// Delimiter of a span node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `( ... )`
    Paren,
    /// `[ ... ]`
    Bracket,
    /// `{ ... }`
    Brace,
}

impl Delimiter {
    pub const fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
            Delimiter::Brace => '{',
        }
    }

    pub const fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::Brace => '}',
        }
    }
}

/// Kind-specific payload of a node.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Number literal. `digits` excludes the suffix character.
    Number { digits: String, suffix: NumberSuffix },
    /// Identifier.
    Word(String),
    /// String literal, delimiters and escapes still in place.
    Glob(String),
    /// Operator or punctuation.
    Symbol(Symbol),
    /// Delimiter group. The body is shared so that function values can keep
    /// it alive without copying.
    Span { delimiter: Delimiter, body: Rc<[Node]> },
}

/// A positioned syntax node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub pos: Position,
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, pos: Position) -> Self {
        Node { kind, pos }
    }

    pub fn number(digits: impl Into<String>, suffix: NumberSuffix, pos: Position) -> Self {
        Node::new(
            NodeKind::Number {
                digits: digits.into(),
                suffix,
            },
            pos,
        )
    }

    pub fn word(text: impl Into<String>, pos: Position) -> Self {
        Node::new(NodeKind::Word(text.into()), pos)
    }

    pub fn glob(raw: impl Into<String>, pos: Position) -> Self {
        Node::new(NodeKind::Glob(raw.into()), pos)
    }

    pub fn symbol(sym: Symbol, pos: Position) -> Self {
        Node::new(NodeKind::Symbol(sym), pos)
    }

    pub fn span(delimiter: Delimiter, body: Vec<Node>, pos: Position) -> Self {
        Node::new(
            NodeKind::Span {
                delimiter,
                body: body.into(),
            },
            pos,
        )
    }

    /// The symbol carried by this node, if it is a symbol node.
    #[inline]
    pub fn as_symbol(&self) -> Option<Symbol> {
        match self.kind {
            NodeKind::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// The identifier text, if this is a word node.
    #[inline]
    pub fn as_word(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Word(text) => Some(text),
            _ => None,
        }
    }

    /// Short human-readable description for diagnostics.
    pub fn describe(&self) -> String {
        match &self.kind {
            NodeKind::Number { .. } => "number".to_string(),
            NodeKind::Word(text) => format!("word `{text}`"),
            NodeKind::Glob(_) => "string".to_string(),
            NodeKind::Symbol(sym) => format!("symbol `{sym}`"),
            NodeKind::Span { delimiter, .. } => {
                format!("`{}...{}`", delimiter.open(), delimiter.close())
            }
        }
    }
}

// Span bodies are freed with an explicit work list; the derived drop glue
// would recurse once per nesting level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_body(&mut self.kind, &mut pending);
        while let Some(mut body) = pending.pop() {
            // A body still shared with a function value is only released.
            if let Some(children) = Rc::get_mut(&mut body) {
                for child in children.iter_mut() {
                    take_body(&mut child.kind, &mut pending);
                }
            }
        }
    }
}

fn take_body(kind: &mut NodeKind, pending: &mut Vec<Rc<[Node]>>) {
    if !matches!(kind, NodeKind::Span { .. }) {
        return;
    }
    let placeholder = NodeKind::Symbol(Symbol::Semicolon);
    if let NodeKind::Span { body, .. } = std::mem::replace(kind, placeholder) {
        pending.push(body);
    }
}

#[cfg(test)]
mod tests;
