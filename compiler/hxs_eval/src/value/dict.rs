use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::Value;
use crate::shared::Nested;

/// String-keyed map that remembers insertion order.
///
/// Overwriting a key keeps its original position.
#[derive(Clone, Default)]
pub struct Dict {
    entries: Vec<(Rc<str>, Value)>,
    index: FxHashMap<Rc<str>, usize>,
}

impl Dict {
    pub fn new() -> Self {
        Dict::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Insert or overwrite, returning the previous value.
    pub fn insert(&mut self, key: impl Into<Rc<str>>, value: Value) -> Option<Value> {
        let key = key.into();
        if let Some(&i) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[i].1, value));
        }
        self.index.insert(Rc::clone(&key), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Rc<str>> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Rc<str>, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl<K: Into<Rc<str>>> FromIterator<(K, Value)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut dict = Dict::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

impl Nested for Dict {
    fn take_nested(&mut self, out: &mut Vec<Value>) {
        self.index.clear();
        out.extend(
            self.entries
                .drain(..)
                .map(|(_, value)| value)
                .filter(Value::may_nest),
        );
    }
}
