//! Memoised evaluation of values that depend on other values
//!
//! Counting puzzles (adapter chains, spring arrangements, stone splits,
//! towel designs, paths through a DAG) are phrased as a [`DpProblem`]: each
//! index names the indices it needs and combines their values. [`DpCache`]
//! resolves them on demand and computes each index at most once.
//!
//! Use [`VecBackend`] for dense `usize` indices and [`HashMapBackend`] for
//! anything else hashable, such as `(position, group)` pairs or node names.
//!
//! Dependencies must be acyclic; a cycle recurses until the stack overflows.
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! /// Ways to climb `n` steps taking one, two or three at a time
//! struct Stairs;
//!
//! impl DpProblem<usize, u64> for Stairs {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         (1..=3).filter(|step| step <= n).map(|step| n - step).collect()
//!     }
//!
//!     fn compute(&self, n: &usize, below: Vec<u64>) -> u64 {
//!         if *n == 0 { 1 } else { below.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), Stairs);
//! assert_eq!(cache.get(&4), 7);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
