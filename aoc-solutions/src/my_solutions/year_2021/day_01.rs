use crate::utils::input::{non_empty, parse_lines};
use crate::utils::seq::{pairwise, windows};
use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let depths = parse_lines(input, |line| line.trim().parse().context("bad depth"))?;
        non_empty(depths, "depths")
    }
}

fn increases(values: impl Iterator<Item = u64>) -> usize {
    pairwise(values).filter(|(a, b)| b > a).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(increases(shared.iter().copied()).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sums = windows(shared.iter().copied(), 3).map(|w| w.iter().sum::<u64>());
        Ok(increases(sums).to_string())
    }
}
