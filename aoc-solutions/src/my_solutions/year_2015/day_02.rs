use crate::utils::input::{non_empty, parse_lines};
use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Box dimensions, sorted ascending.
pub type Present = [u64; 3];

fn parse_present(line: &str) -> anyhow::Result<Present> {
    let dims: Vec<u64> = line
        .trim()
        .split('x')
        .map(|d| d.parse().with_context(|| format!("bad dimension {:?}", d)))
        .collect::<anyhow::Result<_>>()?;
    let [a, b, c] = dims[..] else {
        bail!("expected LxWxH, got {:?}", line);
    };
    let mut present = [a, b, c];
    present.sort_unstable();
    Ok(present)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Present>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        non_empty(parse_lines(input, parse_present)?, "presents")
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let paper: u64 = shared
            .iter()
            .map(|&[a, b, c]| 2 * (a * b + b * c + a * c) + a * b)
            .sum();
        Ok(paper.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ribbon: u64 = shared
            .iter()
            .map(|&[a, b, c]| 2 * (a + b) + a * b * c)
            .sum();
        Ok(ribbon.to_string())
    }
}
