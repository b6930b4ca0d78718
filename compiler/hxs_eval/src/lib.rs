//! HXS evaluator.
//!
//! Turns the node stream produced by `hxs_lexer` into runtime values by
//! repeatedly reducing a flat buffer of terms:
//!
//! - **Structural rules** (`rules`) match fixed node-kind patterns (literals,
//!   reads, calls, indexing, definitions, aggregates) and always take
//!   precedence.
//! - **Operators** (`operators`) apply once no rule matches, lowest priority
//!   value first.
//!
//! Scoping uses chained [`Store`]s shared by reference, so closures observe
//! later assignments to the variables they captured. Host functions plug in
//! through [`NativeFunction`] and are indistinguishable from script functions
//! at call sites.
//!
//! ```text
//! let mut interp = Interpreter::new();
//! let value = interp.eval_source("x = 1 + 2 * 3; x")?;
//! ```

mod builtins;
pub mod errors;
mod interpreter;
mod native;
mod number;
mod operators;
mod print_handler;
mod rules;
mod shared;
mod store;
mod term;
mod value;

pub use errors::{ErrorKind, EvalError, EvalResult, Location};
pub use interpreter::{
    Interpreter, InterpreterBuilder, ScopedInterpreter, DEFAULT_MAX_DEPTH, DEFAULT_SOURCE_NAME,
};
pub use native::{NativeFunction, NativeOp};
pub use number::parse_number;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use shared::{Nested, Shared};
pub use store::Store;
pub use term::Term;
pub use value::{format_number, BlockFunction, Dict, Function, ScriptFunction, Value};

#[cfg(test)]
mod tests;
