use crate::utils::input::{non_empty, parse_lines};
use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use std::iter::successors;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let masses = parse_lines(input, |line| line.trim().parse().context("bad module mass"))?;
        non_empty(masses, "module masses")
    }
}

pub fn fuel(mass: i64) -> i64 {
    (mass / 3 - 2).max(0)
}

/// Fuel for the mass, then fuel for that fuel, until nothing more is needed.
pub fn total_fuel(mass: i64) -> i64 {
    successors(Some(fuel(mass)), |&f| Some(fuel(f)).filter(|&next| next > 0)).sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|&m| fuel(m)).sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|&m| total_fuel(m)).sum::<i64>().to_string())
    }
}
