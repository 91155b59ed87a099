use crate::utils::input::non_empty;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use std::collections::HashSet;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const MAX_CHANGES: usize = 10_000_000;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let changes = input
            .split(|c| c == '\n' || c == ',')
            .map(str::trim)
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse()
                    .map_err(|e| ParseError::InvalidFormat(format!("{:?}: {}", tok, e)))
            })
            .collect::<Result<Vec<i64>, _>>()?;
        non_empty(changes, "frequency changes")
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut seen = HashSet::from([0i64]);
        let mut frequency = 0;
        for change in shared.iter().cycle().take(MAX_CHANGES) {
            frequency += change;
            if !seen.insert(frequency) {
                return Ok(frequency.to_string());
            }
        }
        Err(SolveError::Exhausted("no frequency repeats".into()))
    }
}
