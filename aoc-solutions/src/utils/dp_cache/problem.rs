//! How a memoised value is defined

/// A recurrence over indices of type `I` producing values of type `K`
pub trait DpProblem<I, K> {
    /// Indices whose values `index` needs; empty for a base case
    fn deps(&self, index: &I) -> Vec<I>;

    /// Combine the values of `deps(index)`, given in the same order
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}
