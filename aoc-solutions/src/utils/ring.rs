//! Circular sequence with a movable cursor at the front

use std::collections::VecDeque;

/// A circle of values whose "current" element is the front of the deque.
#[derive(Debug, Clone, Default)]
pub struct Ring<T> {
    items: VecDeque<T>,
}

impl<T> Ring<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rotate by `k`; positive moves elements towards the back (the last
    /// element becomes the first). Steps are taken modulo the length.
    pub fn rotate(&mut self, k: i64) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let k = k.rem_euclid(len as i64) as usize;
        self.items.rotate_right(k);
    }

    pub fn push_front(&mut self, value: T) {
        self.items.push_front(value);
    }

    pub fn push_back(&mut self, value: T) {
        self.items.push_back(value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(pred)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Element `offset` places after the front, wrapping around.
    pub fn get_wrapped(&self, offset: usize) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(offset % self.items.len())
    }
}

impl<T> FromIterator<T> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
