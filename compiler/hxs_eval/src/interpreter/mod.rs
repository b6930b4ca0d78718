//! Reduction engine.
//!
//! A statement is a flat buffer of [`Term`]s. The engine repeatedly fires
//! the leftmost structural rule that matches; when none matches anywhere it
//! applies the highest-priority operator; when neither applies the buffer is
//! malformed. Every reduction replaces a window of terms with a single value
//! node, so the buffer strictly shrinks until one value remains.
//!
//! # Recursion
//!
//! Spans, calls and function bodies re-enter the engine. Each re-entry goes
//! through [`Interpreter::enter`], which enforces the configured depth limit
//! and grows the native stack on demand, so deep scripts fail with a
//! `RangeError` rather than overflowing the host stack.
//!
//! # Stores
//!
//! `store` is the scope the engine currently reads and assigns in. Calls
//! swap it for the callee's scope through [`ScopedInterpreter`] and restore
//! it on the way out, errors included.

mod builder;
mod call;
mod scope_guard;

use std::sync::Arc;

use hxs_ir::{Delimiter, Node, NodeKind, Position, Symbol};
use smallvec::SmallVec;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use crate::errors::{depth_exceeded, syntax_error, EvalError, EvalResult};
use crate::{Shared, SharedPrintHandler, Store, Term, Value};

/// Default limit on nested reductions.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Source name used when the embedder does not set one.
pub const DEFAULT_SOURCE_NAME: &str = "<input>";

/// Evaluates HXS programs.
pub struct Interpreter {
    /// Scope of the code currently being reduced.
    store: Shared<Store>,
    /// Top-level scope; prelude and host definitions live here.
    globals: Shared<Store>,
    /// Name of the source the current code came from.
    source_name: Arc<str>,
    depth: usize,
    max_depth: usize,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter with the prelude loaded and default settings.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The top-level store.
    #[inline]
    pub fn globals(&self) -> &Shared<Store> {
        &self.globals
    }

    /// The store the engine is currently evaluating in.
    #[inline]
    pub fn store(&self) -> &Shared<Store> {
        &self.store
    }

    #[inline]
    pub fn source_name(&self) -> &Arc<str> {
        &self.source_name
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Bind `name` in the top-level store.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.globals.borrow_mut().define(name, value);
    }

    /// Resolve `name` from the current store outward.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.store.borrow().lookup(name)
    }

    /// Assign `name` from the current store: the nearest store binding it is
    /// updated, otherwise it is defined in the current store.
    pub fn assign(&self, name: &str, value: Value) {
        self.store.borrow_mut().assign(name, value);
    }

    /// Attach `pos` in the current source to `err`, unless it is already
    /// located.
    #[inline]
    pub fn locate(&self, err: EvalError, pos: Position) -> EvalError {
        err.at(pos, &self.source_name)
    }

    /// Lex and run `source`. Delimiters may nest at most `max_depth` deep.
    pub fn eval_source(&mut self, source: &str) -> EvalResult<Option<Value>> {
        let nodes = hxs_lexer::lex_with_limit(source, self.max_depth)
            .map_err(|err| EvalError::from_lex(err, &self.source_name))?;
        self.eval_program(&nodes)
    }

    /// Run a program: top-level statements separated by `;`.
    ///
    /// Returns the value of the last statement, or `None` when that
    /// statement is empty or a declaration.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(source = %self.source_name, nodes = nodes.len())
    )]
    pub fn eval_program(&mut self, nodes: &[Node]) -> EvalResult<Option<Value>> {
        let result = self.eval_statements(nodes);
        if let Err(err) = &result {
            tracing::debug!(%err, "program failed");
        }
        result
    }

    pub(crate) fn eval_statements(&mut self, nodes: &[Node]) -> EvalResult<Option<Value>> {
        let mut last = None;
        for statement in nodes.split(|node| node.as_symbol() == Some(Symbol::Semicolon)) {
            last = if statement.is_empty() {
                None
            } else if is_declaration(statement) {
                self.eval_nodes(statement)?;
                None
            } else {
                Some(self.eval_nodes(statement)?)
            };
        }
        Ok(last)
    }

    /// Reduce a node list to one value.
    pub(crate) fn eval_nodes(&mut self, nodes: &[Node]) -> EvalResult {
        self.reduce(nodes.iter().cloned().map(Term::Node).collect())
    }

    /// Value of a single term; syntax nodes are reduced on their own.
    pub(crate) fn eval_term(&mut self, term: &Term) -> EvalResult {
        match term {
            Term::Value(value, _) => Ok(value.clone()),
            Term::Node(_) => self.reduce(vec![term.clone()]),
        }
    }

    /// Split a list body on top-level commas. A trailing comma is allowed;
    /// an empty element is not.
    pub(crate) fn split_list<'n>(
        &self,
        nodes: &'n [Node],
    ) -> EvalResult<SmallVec<[&'n [Node]; 4]>> {
        let mut items = SmallVec::new();
        let mut start = 0;
        for (i, node) in nodes.iter().enumerate() {
            if node.as_symbol() != Some(Symbol::Comma) {
                continue;
            }
            if i == start {
                return Err(self.locate(syntax_error("unexpected `,`"), node.pos));
            }
            items.push(&nodes[start..i]);
            start = i + 1;
        }
        if start < nodes.len() {
            items.push(&nodes[start..]);
        }
        Ok(items)
    }

    /// Evaluate each element of a comma-separated list.
    pub(crate) fn eval_list(&mut self, nodes: &[Node]) -> EvalResult<Vec<Value>> {
        let items = self.split_list(nodes)?;
        items.into_iter().map(|item| self.eval_nodes(item)).collect()
    }

    /// Parameter names of a function definition.
    pub(crate) fn parse_params(&self, nodes: &[Node]) -> EvalResult<Vec<String>> {
        self.split_list(nodes)?
            .into_iter()
            .map(|param| {
                if let [node] = param {
                    if let Some(name) = node.as_word() {
                        return Ok(name.to_string());
                    }
                }
                let pos = param.first().map_or(Position::START, |node| node.pos);
                Err(self.locate(syntax_error("expect a word as parameter name"), pos))
            })
            .collect()
    }

    /// Reduce `buffer` until it is one value node.
    pub(crate) fn reduce(&mut self, buffer: Vec<Term>) -> EvalResult {
        self.enter(|this| this.reduce_buffer(buffer))
    }

    fn reduce_buffer(&mut self, mut buffer: Vec<Term>) -> EvalResult {
        if buffer.is_empty() {
            return Err(syntax_error("empty expression"));
        }
        loop {
            if let [Term::Value(value, _)] = buffer.as_slice() {
                return Ok(value.clone());
            }
            if self.apply_rule(&mut buffer)? || self.apply_operator(&mut buffer)? {
                continue;
            }
            let culprit = match buffer.as_slice() {
                [Term::Value(..), next, ..] => next,
                [first, ..] => first,
                [] => return Err(syntax_error("empty expression")),
            };
            return Err(self.locate(
                syntax_error(format!("unexpected {}", culprit.describe())),
                culprit.pos(),
            ));
        }
    }

    /// Run `f` one level deeper, within the depth limit and with enough
    /// native stack.
    pub(crate) fn enter<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> EvalResult<R>,
    ) -> EvalResult<R> {
        if self.depth >= self.max_depth {
            tracing::debug!(
                max_depth = self.max_depth,
                remaining_stack = ?hxs_stack::remaining_stack(),
                "depth limit reached"
            );
            return Err(depth_exceeded(self.max_depth));
        }
        self.depth += 1;
        let result = hxs_stack::ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

/// `name = ( ... )` as a whole statement.
fn is_declaration(statement: &[Node]) -> bool {
    matches!(
        statement,
        [name, eq, Node {
            kind: NodeKind::Span {
                delimiter: Delimiter::Paren,
                ..
            },
            ..
        }] if name.as_word().is_some() && eq.as_symbol() == Some(Symbol::Eq)
    )
}
