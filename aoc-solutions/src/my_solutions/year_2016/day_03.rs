use crate::utils::input::{non_empty, parse_lines, whitespace_separated};
use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<[u64; 3]>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let rows = parse_lines(input, |line| match whitespace_separated::<u64>(line)?[..] {
            [a, b, c] => Ok([a, b, c]),
            _ => bail!("expected three side lengths"),
        })?;
        non_empty(rows, "triangles")
    }
}

fn is_triangle([a, b, c]: [u64; 3]) -> bool {
    a + b > c && a + c > b && b + c > a
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let valid = shared.iter().filter(|&&t| is_triangle(t)).count();
        Ok(valid.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(SolveError::Invariant(format!(
                "{} rows do not form column triples",
                shared.len()
            )));
        }
        let valid = shared
            .chunks_exact(3)
            .flat_map(|rows| (0..3).map(move |col| [rows[0][col], rows[1][col], rows[2][col]]))
            .filter(|&t| is_triangle(t))
            .count();
        Ok(valid.to_string())
    }
}
