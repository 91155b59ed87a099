use crate::utils::input::{non_empty, parse_lines, whitespace_separated};
use crate::utils::seq::counts;
use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// The two location-ID columns.
#[derive(Debug)]
pub struct Lists {
    pub left: Vec<u64>,
    pub right: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Lists;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let pairs = parse_lines(input, |line| match whitespace_separated::<u64>(line)?[..] {
            [left, right] => Ok((left, right)),
            _ => bail!("expected two location IDs"),
        })?;
        let (left, right) = non_empty(pairs, "location IDs")?.into_iter().unzip();
        Ok(Lists { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.left.sort_unstable();
        shared.right.sort_unstable();
        let distance: u64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(a, b)| a.abs_diff(*b))
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let seen = counts(shared.right.iter().copied());
        let similarity: u64 = shared
            .left
            .iter()
            .map(|id| id * seen.get(id).copied().unwrap_or(0) as u64)
            .sum();
        Ok(similarity.to_string())
    }
}
