use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// Lazily evaluated table for one [`DpProblem`]
///
/// Lives for a single solve. `get` takes `&self` so the problem's own
/// helpers can hold a shared reference while the table fills.
pub struct DpCache<I, K, B, P> {
    table: RefCell<B>,
    problem: P,
    _index: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            table: RefCell::new(backend),
            problem,
            _index: PhantomData,
        }
    }

    /// Value at `index`, computing it and its missing dependencies first
    pub fn get(&self, index: &I) -> K {
        if let Some(known) = self.table.borrow().get(index) {
            return known.clone();
        }

        // the table must not be borrowed while dependencies recurse
        let inputs: Vec<K> = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect();

        self.table
            .borrow_mut()
            .get_or_insert(index.clone(), || self.problem.compute(index, inputs))
            .clone()
    }

    /// Number of indices computed so far
    pub fn len(&self) -> usize {
        self.table.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
