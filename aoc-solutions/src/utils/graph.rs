//! Adjacency-map traversals

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use super::dp_cache::{DpCache, DpProblem, HashMapBackend};

pub type Adjacency<N> = HashMap<N, Vec<N>>;

/// Every node reachable from `start` (including `start`), breadth first.
pub fn reachable<N>(adjacency: &Adjacency<N>, start: &N) -> HashSet<N>
where
    N: Hash + Eq + Clone,
{
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([start.clone()]);
    while let Some(node) = queue.pop_front() {
        for next in adjacency.get(&node).into_iter().flatten() {
            if seen.insert(next.clone()) {
                queue.push_back(next.clone());
            }
        }
    }
    seen
}

/// Size of the set reachable from `start`.
pub fn reachable_count<N>(adjacency: &Adjacency<N>, start: &N) -> usize
where
    N: Hash + Eq + Clone,
{
    reachable(adjacency, start).len()
}

/// Number of connected groups when `adjacency` is symmetric.
pub fn group_count<N>(adjacency: &Adjacency<N>) -> usize
where
    N: Hash + Eq + Clone,
{
    let mut seen: HashSet<N> = HashSet::new();
    let mut groups = 0;
    for node in adjacency.keys() {
        if !seen.contains(node) {
            groups += 1;
            seen.extend(reachable(adjacency, node));
        }
    }
    groups
}

struct PathsTo<'a, N> {
    adjacency: &'a Adjacency<N>,
    target: &'a N,
}

impl<N: Hash + Eq + Clone> DpProblem<N, u64> for PathsTo<'_, N> {
    fn deps(&self, node: &N) -> Vec<N> {
        if node == self.target {
            return vec![];
        }
        self.adjacency.get(node).cloned().unwrap_or_default()
    }

    fn compute(&self, node: &N, deps: Vec<u64>) -> u64 {
        if node == self.target {
            1
        } else {
            deps.iter().sum()
        }
    }
}

/// Number of distinct paths from `start` to `target`, depth first with memoisation.
///
/// The graph must be acyclic on every route out of `start`.
pub fn count_paths<N>(adjacency: &Adjacency<N>, start: &N, target: &N) -> u64
where
    N: Hash + Eq + Clone,
{
    let cache = DpCache::with_problem(HashMapBackend::<N, u64>::new(), PathsTo { adjacency, target });
    cache.get(start)
}
