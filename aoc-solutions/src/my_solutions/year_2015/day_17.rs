use crate::utils::input::{non_empty, parse_lines};
use crate::utils::seq::combinations;
use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const EGGNOG: u64 = 150;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let sizes = parse_lines(input, |line| line.trim().parse().context("bad container size"))?;
        non_empty(sizes, "containers")
    }
}

/// Number of container subsets holding exactly `target`, and the number of
/// those using the fewest containers.
pub fn fills(containers: &[u64], target: u64) -> (usize, usize) {
    let mut total = 0;
    let mut at_minimum = None;
    for k in 1..=containers.len() {
        let count = combinations(containers, k)
            .filter(|combo| combo.iter().sum::<u64>() == target)
            .count();
        if count > 0 && at_minimum.is_none() {
            at_minimum = Some(count);
        }
        total += count;
    }
    (total, at_minimum.unwrap_or(0))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(fills(shared, EGGNOG).0.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(fills(shared, EGGNOG).1.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        assert_eq!(fills(&[20, 15, 10, 5, 5], 25), (4, 3));
        assert_eq!(fills(&[20, 15], 7), (0, 0));
    }
}
