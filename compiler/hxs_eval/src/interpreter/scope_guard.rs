//! RAII scope switching for calls.
//!
//! A call evaluates its body in the callee's store and source. The
//! [`ScopedInterpreter`] guard installs both and puts the caller's back when
//! dropped, so early returns through `?` cannot leave the interpreter in the
//! callee's scope.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use super::Interpreter;
use crate::{Shared, Store};

/// Interpreter borrowed with a swapped-in store and source name.
///
/// Derefs to [`Interpreter`].
pub struct ScopedInterpreter<'a> {
    interpreter: &'a mut Interpreter,
    saved_store: Shared<Store>,
    saved_source_name: Arc<str>,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        std::mem::swap(&mut self.interpreter.store, &mut self.saved_store);
        std::mem::swap(
            &mut self.interpreter.source_name,
            &mut self.saved_source_name,
        );
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Evaluate in `store`, attributing errors to `source_name`, until the
    /// returned guard drops.
    pub fn scoped(
        &mut self,
        store: Shared<Store>,
        source_name: Arc<str>,
    ) -> ScopedInterpreter<'_> {
        let saved_store = std::mem::replace(&mut self.store, store);
        let saved_source_name = std::mem::replace(&mut self.source_name, source_name);
        ScopedInterpreter {
            interpreter: self,
            saved_store,
            saved_source_name,
        }
    }
}
