use crate::utils::input::{non_empty, parse_lines};
use crate::utils::seq::combinations;
use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use itertools::Itertools;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let weights = parse_lines(input, |line| line.trim().parse().context("bad weight"))?;
        non_empty(weights, "packages")
    }
}

/// Whether `items` splits into `groups` subsets each weighing `target`.
fn can_split(items: &[u64], groups: usize, target: u64) -> bool {
    fn fill(items: &[u64], used: &mut [bool], start: usize, remaining: u64, groups: usize, target: u64) -> bool {
        if remaining == 0 {
            return groups == 1 || fill(items, used, 0, target, groups - 1, target);
        }
        for i in start..items.len() {
            if !used[i] && items[i] <= remaining {
                used[i] = true;
                if fill(items, used, i + 1, remaining - items[i], groups, target) {
                    return true;
                }
                used[i] = false;
            }
        }
        false
    }
    if groups == 0 {
        return items.is_empty();
    }
    let mut used = vec![false; items.len()];
    fill(items, &mut used, 0, target, groups, target)
}

/// Smallest quantum entanglement of a minimum-size front group.
pub fn balance(weights: &[u64], groups: u64) -> Result<u64, SolveError> {
    let total: u64 = weights.iter().sum();
    if total % groups != 0 {
        return Err(SolveError::Invariant(format!(
            "total weight {} does not split into {} groups",
            total, groups
        )));
    }
    let target = total / groups;

    for k in 1..=weights.len() {
        let candidates = combinations(weights, k)
            .filter(|front| front.iter().sum::<u64>() == target)
            .map(|front| (front.iter().product::<u64>(), front))
            .sorted_unstable_by_key(|(qe, _)| *qe);
        for (qe, front) in candidates {
            let mut rest = weights.to_vec();
            for w in &front {
                if let Some(pos) = rest.iter().position(|x| x == w) {
                    rest.swap_remove(pos);
                }
            }
            rest.sort_unstable_by(|a, b| b.cmp(a));
            if can_split(&rest, (groups - 1) as usize, target) {
                return Ok(qe);
            }
        }
    }
    Err(SolveError::Exhausted("no balanced arrangement".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        balance(shared, 3).map(|qe| qe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        balance(shared, 4).map(|qe| qe.to_string())
    }
}
