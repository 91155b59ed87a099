use crate::utils::input::{lines, non_empty};
use crate::utils::seq::counts;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        non_empty(lines(input).into_iter().map(str::trim).collect(), "box ids")
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (mut twos, mut threes) = (0, 0);
        for id in shared.iter() {
            let freq = counts(id.chars());
            twos += freq.values().any(|&n| n == 2) as u64;
            threes += freq.values().any(|&n| n == 3) as u64;
        }
        Ok((twos * threes).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        for (i, a) in shared.iter().enumerate() {
            for b in &shared[i + 1..] {
                if a.len() != b.len() {
                    continue;
                }
                let common: String = a
                    .chars()
                    .zip(b.chars())
                    .filter(|(x, y)| x == y)
                    .map(|(x, _)| x)
                    .collect();
                if common.len() + 1 == a.len() {
                    return Ok(common);
                }
            }
        }
        Err(SolveError::Exhausted("no two ids differ by one character".into()))
    }
}
