use std::cell::Cell;

use super::*;

/// Adapter chains: an adapter accepts input 1..=3 jolts below its rating
struct Chains<'a> {
    ratings: &'a [u64],
}

impl DpProblem<usize, u64> for Chains<'_> {
    fn deps(&self, i: &usize) -> Vec<usize> {
        (i.saturating_sub(3)..*i)
            .filter(|&j| self.ratings[*i] - self.ratings[j] <= 3)
            .collect()
    }

    fn compute(&self, i: &usize, ways: Vec<u64>) -> u64 {
        if *i == 0 { 1 } else { ways.iter().sum() }
    }
}

/// Lattice paths moving right or down, keyed by (row, col)
struct Lattice;

impl DpProblem<(usize, usize), u64> for Lattice {
    fn deps(&self, &(r, c): &(usize, usize)) -> Vec<(usize, usize)> {
        let mut from = Vec::new();
        if r > 0 {
            from.push((r - 1, c));
        }
        if c > 0 {
            from.push((r, c - 1));
        }
        from
    }

    fn compute(&self, _: &(usize, usize), from: Vec<u64>) -> u64 {
        from.iter().sum::<u64>().max(1)
    }
}

#[test]
fn test_adapter_chain_count() {
    let ratings = [0, 1, 4, 5, 6, 7, 10, 11, 12, 15, 16, 19, 22];
    let cache = DpCache::with_problem(VecBackend::new(), Chains { ratings: &ratings });
    assert!(cache.is_empty());
    assert_eq!(cache.get(&(ratings.len() - 1)), 8);
    assert_eq!(cache.len(), ratings.len());
}

#[test]
fn test_shared_dependency_computed_once() {
    // 0 needs 1 and 2, which both need 3
    struct Diamond<'a> {
        calls: &'a Cell<u32>,
    }

    impl DpProblem<usize, i64> for Diamond<'_> {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i64>) -> i64 {
            self.calls.set(self.calls.get() + 1);
            match n {
                0 => deps[0] - deps[1],
                1 => deps[0] * 5,
                2 => deps[0] + 1,
                _ => 4,
            }
        }
    }

    let calls = Cell::new(0);
    let cache = DpCache::with_problem(HashMapBackend::new(), Diamond { calls: &calls });
    assert_eq!(cache.get(&0), 15);
    assert_eq!(calls.get(), 4);
    assert_eq!(cache.get(&1), 20);
    assert_eq!(calls.get(), 4);
}

#[test]
fn test_tuple_indices() {
    let cache = DpCache::with_problem(HashMapBackend::new(), Lattice);
    assert_eq!(cache.get(&(2, 2)), 6);
    assert_eq!(cache.get(&(16, 16)), 601_080_390);
}

#[test]
fn test_vec_backend_keeps_first_value() {
    let mut backend = VecBackend::<&str>::with_capacity(4);
    assert_eq!(*backend.get_or_insert(6, || "first"), "first");
    assert_eq!(*backend.get_or_insert(6, || "second"), "first");
    assert_eq!(backend.get(&2), None);
    assert_eq!(backend.get(&60), None);
    assert_eq!(backend.len(), 1);
}

#[test]
fn test_hashmap_backend_keeps_first_value() {
    let mut backend = HashMapBackend::<&str, u32>::new();
    assert!(backend.is_empty());
    assert_eq!(*backend.get_or_insert("svr", || 2), 2);
    assert_eq!(*backend.get_or_insert("svr", || 9), 2);
    assert_eq!(backend.get(&"out"), None);
}
