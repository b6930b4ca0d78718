use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use hxs_ir::Node;

use crate::{NativeFunction, Shared, Store};

/// A callable value.
pub enum Function {
    /// Defined with `@`; runs in a fresh child of its captured store.
    Script(ScriptFunction),
    /// A `{ ... }` callback; runs directly in the store it was written in.
    Block(BlockFunction),
    /// Host operation behind the native adapter.
    Native(NativeFunction),
}

/// A script function and the store it closes over.
pub struct ScriptFunction {
    /// Set by the named definition form.
    pub name: Option<Rc<str>>,
    pub params: Rc<[String]>,
    pub body: Rc<[Node]>,
    pub store: Shared<Store>,
    /// Source the body was written in, for diagnostics.
    pub source_name: Arc<str>,
}

/// A deferred `{ ... }` block.
pub struct BlockFunction {
    pub body: Rc<[Node]>,
    pub store: Shared<Store>,
    pub source_name: Arc<str>,
}

impl Function {
    pub fn name(&self) -> &str {
        match self {
            Function::Script(script) => script.name.as_deref().unwrap_or("<anonymous>"),
            Function::Block(_) => "<block>",
            Function::Native(native) => native.name(),
        }
    }

    /// Help text attached at registration, if any.
    pub fn help(&self) -> Option<&str> {
        match self {
            Function::Native(native) => native.help(),
            Function::Script(_) | Function::Block(_) => None,
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.name())
    }
}
