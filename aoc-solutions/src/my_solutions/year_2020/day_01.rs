use crate::utils::input::{non_empty, parse_lines};
use crate::utils::seq::combinations;
use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const TARGET: u64 = 2020;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let entries = parse_lines(input, |line| line.trim().parse().context("bad expense"))?;
        non_empty(entries, "expenses")
    }
}

/// Product of the first `k` entries summing to 2020.
fn repair(entries: &[u64], k: usize) -> Result<String, SolveError> {
    combinations(entries, k)
        .find(|combo| combo.iter().sum::<u64>() == TARGET)
        .map(|combo| combo.iter().product::<u64>().to_string())
        .ok_or_else(|| SolveError::Exhausted(format!("no {} entries sum to {}", k, TARGET)))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        repair(shared, 2)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        repair(shared, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const SAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>(SAMPLE, 1).unwrap(), "514579");
        assert_eq!(solve_input::<Solver>(SAMPLE, 2).unwrap(), "241861950");
    }

    #[test]
    fn test_no_match() {
        assert!(solve_input::<Solver>("1\n2\n", 1).is_err());
    }
}
