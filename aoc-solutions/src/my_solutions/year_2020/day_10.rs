use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::input::{non_empty, parse_lines};
use crate::utils::seq::{counts, pairwise};
use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const MAX_STEP: u64 = 3;

impl AocParser for Solver {
    /// Sorted joltages including the outlet (0) and the device (max + 3).
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let adapters = parse_lines(input, |line| line.trim().parse().context("bad joltage"))?;
        let mut chain = non_empty(adapters, "adapters")?;
        chain.push(0);
        chain.sort_unstable();
        let device = chain.last().copied().unwrap_or(0) + MAX_STEP;
        chain.push(device);
        Ok(chain)
    }
}

/// Ways to reach the device from adapter `i`.
struct Arrangements<'a> {
    chain: &'a [u64],
}

impl DpProblem<usize, u64> for Arrangements<'_> {
    fn deps(&self, &i: &usize) -> Vec<usize> {
        (i + 1..self.chain.len())
            .take_while(|&j| self.chain[j] - self.chain[i] <= MAX_STEP)
            .collect()
    }

    fn compute(&self, &i: &usize, deps: Vec<u64>) -> u64 {
        if i + 1 == self.chain.len() { 1 } else { deps.iter().sum() }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let diffs = counts(pairwise(shared.iter()).map(|(a, b)| b - a));
        if let Some(gap) = diffs.keys().find(|&&d| d > MAX_STEP) {
            return Err(SolveError::Invariant(format!("gap of {} jolts in the chain", gap)));
        }
        let ones = diffs.get(&1).copied().unwrap_or(0);
        let threes = diffs.get(&3).copied().unwrap_or(0);
        Ok((ones * threes).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cache = DpCache::with_problem(VecBackend::<u64>::new(), Arrangements { chain: shared });
        Ok(cache.get(&0).to_string())
    }
}
