//! Native function adapter.
//!
//! Host operations take already evaluated arguments. The adapter evaluates
//! the raw argument nodes of a call (split on top-level commas, each reduced
//! through the engine), enforces the declared arity, and locates any error
//! the operation returns at the call site.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use hxs_ir::Node;

use crate::errors::{arity_mismatch, EvalResult};
use crate::{Interpreter, Term, Value};

/// Host operation signature.
///
/// The referrer is the call-site term, for diagnostics.
pub type NativeOp = dyn Fn(&mut Interpreter, Vec<Value>, &Term) -> EvalResult;

/// A host-implemented function.
#[derive(Clone)]
pub struct NativeFunction {
    name: Cow<'static, str>,
    min: usize,
    max: usize,
    op: Rc<NativeOp>,
    help: Option<Cow<'static, str>>,
}

impl NativeFunction {
    /// Upper arity bound for functions taking any number of arguments.
    pub const VARIADIC: usize = usize::MAX;

    /// Wrap `op` as a function accepting `min..=max` arguments.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        min: usize,
        max: usize,
        op: impl Fn(&mut Interpreter, Vec<Value>, &Term) -> EvalResult + 'static,
    ) -> Self {
        debug_assert!(min <= max, "arity range must not be empty");
        NativeFunction {
            name: name.into(),
            min,
            max,
            op: Rc::new(op),
            help: None,
        }
    }

    /// Attach usage text, retrievable through `help(f)`.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<Cow<'static, str>>) -> Self {
        self.help = Some(help.into());
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Inclusive `(min, max)` argument counts.
    #[inline]
    pub fn arity(&self) -> (usize, usize) {
        (self.min, self.max)
    }

    #[inline]
    pub fn accepts(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }

    /// Evaluate raw argument nodes, then call.
    pub(crate) fn invoke(
        &self,
        interpreter: &mut Interpreter,
        raw_args: &[Node],
        referrer: &Term,
    ) -> EvalResult {
        let args = interpreter.eval_list(raw_args)?;
        self.call(interpreter, args, referrer)
    }

    /// Check arity and run the host operation.
    pub(crate) fn call(
        &self,
        interpreter: &mut Interpreter,
        args: Vec<Value>,
        referrer: &Term,
    ) -> EvalResult {
        if !self.accepts(args.len()) {
            let err = arity_mismatch(&self.name, self.min, self.max, args.len());
            return Err(interpreter.locate(err, referrer.pos()));
        }
        (self.op)(interpreter, args, referrer).map_err(|err| interpreter.locate(err, referrer.pos()))
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("min", &self.min)
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}
