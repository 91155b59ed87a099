//! Sequence kernels: sliding windows, pairs, combinations, permutations, counts

use itertools::Itertools;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Lazy sliding window of fixed size over any iterator.
///
/// Yields `n - k + 1` windows of length `k` in input order, and nothing when
/// `k > n`.
pub struct Windows<I: Iterator> {
    iter: I,
    size: usize,
    buffer: VecDeque<I::Item>,
}

impl<I> Iterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.len() == self.size {
            self.buffer.pop_front();
        }
        while self.buffer.len() < self.size {
            self.buffer.push_back(self.iter.next()?);
        }
        Some(self.buffer.iter().cloned().collect())
    }
}

/// Sliding windows of size `size` (at least 1) over `iter`.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn windows<I>(iter: I, size: usize) -> Windows<I::IntoIter>
where
    I: IntoIterator,
{
    assert!(size >= 1, "window size must be at least 1");
    Windows {
        iter: iter.into_iter(),
        size,
        buffer: VecDeque::with_capacity(size),
    }
}

/// Adjacent pairs: `n` items give `n - 1` pairs.
pub fn pairwise<I>(iter: I) -> impl Iterator<Item = (I::Item, I::Item)>
where
    I: IntoIterator,
    I::Item: Clone,
{
    iter.into_iter().tuple_windows()
}

/// All `k`-subsets in index-lexicographic order (`C(n, k)` of them).
pub fn combinations<T: Clone>(items: &[T], k: usize) -> impl Iterator<Item = Vec<T>> + '_ {
    items.iter().cloned().combinations(k)
}

/// Every ordering of `items` (`n!` of them).
pub fn permutations<T: Clone>(items: &[T]) -> impl Iterator<Item = Vec<T>> + '_ {
    items.iter().cloned().permutations(items.len())
}

/// Occurrence count of every element.
pub fn counts<I>(iter: I) -> HashMap<I::Item, usize>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    iter.into_iter().counts()
}

/// True when no element repeats.
pub fn all_distinct<T: Eq + Hash>(items: &[T]) -> bool {
    items.iter().all_unique()
}
