//! Where computed values are kept

use std::collections::HashMap;
use std::hash::Hash;

/// Storage for computed values
///
/// `get_or_insert` runs `f` only for an empty slot and never replaces a
/// stored value.
pub trait Backend<I, K> {
    fn get(&self, index: &I) -> Option<&K>;

    fn get_or_insert<F: FnOnce() -> K>(&mut self, index: I, f: F) -> &K;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense slots for `usize` indices, grown to the largest index written
#[derive(Debug, Default)]
pub struct VecBackend<K> {
    slots: Vec<Option<K>>,
}

impl<K> VecBackend<K> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Reserve room for indices `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.slots.get(*index).and_then(Option::as_ref)
    }

    fn get_or_insert<F: FnOnce() -> K>(&mut self, index: usize, f: F) -> &K {
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index].get_or_insert_with(f)
    }

    fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}

/// Sparse storage for any hashable index
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    values: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.values.get(index)
    }

    fn get_or_insert<F: FnOnce() -> K>(&mut self, index: I, f: F) -> &K {
        self.values.entry(index).or_insert_with(f)
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}
