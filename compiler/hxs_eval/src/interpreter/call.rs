//! Calling convention.
//!
//! Natives receive their raw argument nodes through the adapter, which
//! evaluates them. Script functions and blocks get evaluated arguments and
//! run their bodies under a [`ScopedInterpreter`](super::ScopedInterpreter).

use std::rc::Rc;
use std::sync::Arc;

use hxs_ir::Node;

use super::Interpreter;
use crate::errors::{not_callable, range_error, EvalResult};
use crate::value::{BlockFunction, Function, ScriptFunction};
use crate::{Shared, Store, Term, Value};

impl Interpreter {
    /// Call `callee` with the raw nodes of a `( ... )` argument list.
    pub(crate) fn call(
        &mut self,
        callee: &Value,
        raw_args: &[Node],
        referrer: &Term,
    ) -> EvalResult {
        let Value::Function(function) = callee else {
            return Err(not_callable(callee));
        };
        if let Function::Native(native) = &**function {
            return native.invoke(self, raw_args, referrer);
        }
        let args = self.eval_list(raw_args)?;
        self.call_function(function, args, referrer)
    }

    /// Call `callee` with already evaluated arguments.
    ///
    /// This is how host operations invoke script callbacks. `referrer` is
    /// the term errors are attributed to when they carry no location.
    pub fn apply(&mut self, callee: &Value, args: Vec<Value>, referrer: &Term) -> EvalResult {
        match callee {
            Value::Function(function) => self.call_function(function, args, referrer),
            other => Err(self.locate(not_callable(other), referrer.pos())),
        }
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = %function.name(), args = args.len())
    )]
    fn call_function(
        &mut self,
        function: &Rc<Function>,
        args: Vec<Value>,
        referrer: &Term,
    ) -> EvalResult {
        match &**function {
            Function::Native(native) => native.call(self, args, referrer),
            Function::Script(script) => {
                self.enter(|this| this.call_script(script, args, referrer))
            }
            Function::Block(block) => self.enter(|this| this.call_block(block)),
        }
    }

    fn call_script(
        &mut self,
        script: &ScriptFunction,
        args: Vec<Value>,
        referrer: &Term,
    ) -> EvalResult {
        let params = &script.params;
        if args.len() > params.len() {
            let name = script.name.as_deref().unwrap_or("<anonymous>");
            let err = range_error(format!(
                "{name} expects at most {} argument(s), got {}",
                params.len(),
                args.len()
            ));
            return Err(self.locate(err, referrer.pos()));
        }
        let mut frame = Store::with_parent(script.store.clone());
        let mut args = args.into_iter();
        for param in params.iter() {
            frame.define(param.as_str(), args.next().unwrap_or_default());
        }
        let mut scoped = self.scoped(Shared::new(frame), Arc::clone(&script.source_name));
        let result = scoped.eval_statements(&script.body)?;
        Ok(result.unwrap_or_default())
    }

    /// Blocks run in the store they were written in and take no parameters.
    fn call_block(&mut self, block: &BlockFunction) -> EvalResult {
        let mut scoped = self.scoped(block.store.clone(), Arc::clone(&block.source_name));
        let result = scoped.eval_statements(&block.body)?;
        Ok(result.unwrap_or_default())
    }
}
