//! Reduction buffer entries.

use std::rc::Rc;

use hxs_ir::{Delimiter, Node, NodeKind, Position, Symbol};

use crate::Value;

/// One entry of a reduction buffer: either a syntax node still waiting to be
/// reduced, or a value node carrying a computed result.
///
/// Value nodes are terminal; reducing one yields its value unchanged.
#[derive(Clone, Debug)]
pub enum Term {
    Node(Node),
    Value(Value, Position),
}

impl Term {
    #[inline]
    pub fn pos(&self) -> Position {
        match self {
            Term::Node(node) => node.pos,
            Term::Value(_, pos) => *pos,
        }
    }

    #[inline]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Term::Node(node) => Some(node),
            Term::Value(..) => None,
        }
    }

    #[inline]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Term::Value(value, _) => Some(value),
            Term::Node(_) => None,
        }
    }

    #[inline]
    pub fn as_symbol(&self) -> Option<Symbol> {
        self.as_node().and_then(Node::as_symbol)
    }

    #[inline]
    pub fn is_symbol(&self) -> bool {
        self.as_symbol().is_some()
    }

    #[inline]
    pub fn as_word(&self) -> Option<&str> {
        self.as_node().and_then(Node::as_word)
    }

    /// Body of a span node with the given delimiter.
    pub fn as_span(&self, delimiter: Delimiter) -> Option<&Rc<[Node]>> {
        match self.as_node().map(|node| &node.kind) {
            Some(NodeKind::Span { delimiter: d, body }) if *d == delimiter => Some(body),
            _ => None,
        }
    }

    /// Short description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Term::Node(node) => node.describe(),
            Term::Value(value, _) => format!("{} value", value.type_name()),
        }
    }
}

impl From<Node> for Term {
    fn from(node: Node) -> Self {
        Term::Node(node)
    }
}
