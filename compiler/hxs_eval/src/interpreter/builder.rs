//! `InterpreterBuilder` for configuring Interpreter instances.

use std::sync::Arc;

use super::{Interpreter, DEFAULT_MAX_DEPTH, DEFAULT_SOURCE_NAME};
use crate::{builtins, stdout_handler, Shared, SharedPrintHandler, Store};

/// Builder for [`Interpreter`].
///
/// Defaults: source name `<input>`, depth limit [`DEFAULT_MAX_DEPTH`],
/// stdout printing, prelude loaded.
pub struct InterpreterBuilder {
    source_name: Option<Arc<str>>,
    max_depth: usize,
    print_handler: Option<SharedPrintHandler>,
    prelude: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            source_name: None,
            max_depth: DEFAULT_MAX_DEPTH,
            print_handler: None,
            prelude: true,
        }
    }

    /// Name reported in error locations, usually a file path.
    #[must_use]
    pub fn source_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Limit on nested reductions before a `RangeError`.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Where `print` writes. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Whether to register the prelude (constants, core functions, `Array`
    /// and `String`). Without it the top-level store starts empty.
    #[must_use]
    pub fn prelude(mut self, enabled: bool) -> Self {
        self.prelude = enabled;
        self
    }

    pub fn build(self) -> Interpreter {
        let globals = Shared::new(Store::new());
        let interpreter = Interpreter {
            store: globals.clone(),
            globals,
            source_name: self
                .source_name
                .unwrap_or_else(|| Arc::from(DEFAULT_SOURCE_NAME)),
            depth: 0,
            max_depth: self.max_depth,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        };
        if self.prelude {
            builtins::register(&interpreter);
        }
        interpreter
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        InterpreterBuilder::new()
    }
}
