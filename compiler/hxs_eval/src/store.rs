//! Variable stores.
//!
//! A store is one scope's bindings plus a link to its lexical parent. The
//! top-level program gets one store; every script call gets a fresh child of
//! the store its function captured.

use rustc_hash::FxHashMap;

use crate::shared::Nested;
use crate::{Shared, Value};

/// A single scope of bindings.
#[derive(Default)]
pub struct Store {
    bindings: FxHashMap<String, Value>,
    /// Enclosing store at definition time.
    parent: Option<Shared<Store>>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    pub fn with_parent(parent: Shared<Store>) -> Self {
        Store {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this store, shadowing any outer binding.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look a name up, walking outward.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref()?.borrow().lookup(name)
    }

    /// Whether any store in the chain binds `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
            || self
                .parent
                .as_ref()
                .is_some_and(|parent| parent.borrow().contains(name))
    }

    /// Assign to `name`: the nearest store that already binds it is updated,
    /// otherwise the name is defined here.
    pub fn assign(&mut self, name: &str, value: Value) {
        if let Some(value) = self.assign_existing(name, value) {
            self.bindings.insert(name.to_string(), value);
        }
    }

    /// Update an existing binding somewhere in the chain. Hands the value
    /// back when no store binds `name`.
    fn assign_existing(&mut self, name: &str, value: Value) -> Option<Value> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return None;
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign_existing(name, value),
            None => Some(value),
        }
    }

    /// Names bound directly in this store, sorted.
    pub fn local_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

// Bindings are handed over when the last handle to a store goes away, so
// chains of closures holding each other are freed iteratively.
impl Nested for Store {
    fn take_nested(&mut self, out: &mut Vec<Value>) {
        out.extend(
            self.bindings
                .drain()
                .map(|(_, value)| value)
                .filter(Value::may_nest),
        );
    }
}
