//! HXS IR - syntax node stream shared by the lexer and the evaluator.
//!
//! The evaluator never sees source text. It consumes an ordered list of
//! positioned [`Node`]s where delimiter groups (`()`, `[]`, `{}`) are already
//! nested into [`NodeKind::Span`] nodes.
//!
//! # Node kinds
//!
//! - `Number`: literal digits plus an optional radix suffix (`B`, `O`, `H`, `D`)
//! - `Word`: identifier text
//! - `Glob`: raw string literal text, delimiters included
//! - `Symbol`: one operator or punctuation symbol
//! - `Span`: a delimiter group carrying its inner node list

mod node;
mod position;
mod symbol;

pub use node::{Delimiter, Node, NodeKind, NumberSuffix};
pub use position::Position;
pub use symbol::Symbol;
