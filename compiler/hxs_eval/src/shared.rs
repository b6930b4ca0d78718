//! Single-threaded shared mutable cells.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::Value;

/// Contents of a [`Shared`] cell that may own further cells.
pub trait Nested {
    /// Move every owned value whose own teardown could recurse into `out`.
    fn take_nested(&mut self, out: &mut Vec<Value>);
}

/// A single-threaded shared wrapper for reference-counted interior
/// mutability.
///
/// Stores, arrays and dicts all have reference semantics: every holder of a
/// `Shared<T>` observes mutations made through any other holder. All such
/// allocations go through [`Shared::new`].
///
/// `Shared<T>` is NOT thread-safe. Evaluation is single-threaded, so `Rc` is
/// used rather than `Arc`.
///
/// Dropping the last handle frees nested contents with a work list, so
/// arbitrarily deep structures (arrays of arrays, closure chains) never
/// recurse on the native stack.
#[repr(transparent)]
pub struct Shared<T: Nested>(Rc<RefCell<T>>);

impl<T: Nested> Shared<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Shared(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// When this is the last handle, move the nested contents into `out`.
    pub(crate) fn take_nested_into(&self, out: &mut Vec<Value>) {
        if Rc::strong_count(&self.0) != 1 {
            return;
        }
        if let Ok(mut inner) = self.0.try_borrow_mut() {
            inner.take_nested(out);
        }
    }
}

impl<T: Nested> Drop for Shared<T> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_nested_into(&mut pending);
        while let Some(mut value) = pending.pop() {
            // Emptied before it drops, so its own drop stays shallow.
            value.take_nested(&mut pending);
        }
    }
}

impl<T: Nested> Clone for Shared<T> {
    #[inline]
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl<T: Nested + Default> Default for Shared<T> {
    fn default() -> Self {
        Shared::new(T::default())
    }
}

impl<T: Nested> Deref for Shared<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Contents are not printed: shared values may contain themselves.
impl<T: Nested> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shared({:p})", Rc::as_ptr(&self.0))
    }
}
