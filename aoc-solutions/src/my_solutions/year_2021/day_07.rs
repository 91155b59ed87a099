use crate::utils::input::{comma_separated, non_empty};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use itertools::{Itertools, MinMaxResult};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        non_empty(comma_separated(input)?, "crabs")
    }
}

/// Cheapest alignment over every candidate position between the extremes.
fn cheapest(crabs: &[i64], cost: impl Fn(i64) -> i64) -> i64 {
    let (lo, hi) = match crabs.iter().minmax() {
        MinMaxResult::NoElements => return 0,
        MinMaxResult::OneElement(&x) => (x, x),
        MinMaxResult::MinMax(&lo, &hi) => (lo, hi),
    };
    (lo..=hi)
        .map(|target| crabs.iter().map(|&c| cost((c - target).abs())).sum())
        .min()
        .unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(cheapest(shared, |d| d).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(cheapest(shared, |d| d * (d + 1) / 2).to_string())
    }
}
