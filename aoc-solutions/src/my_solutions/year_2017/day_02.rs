use crate::utils::input::{non_empty, parse_lines, whitespace_separated};
use crate::utils::seq::combinations;
use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use itertools::{Itertools, MinMaxResult};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<u64>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let rows = parse_lines(input, |line| {
            let row = whitespace_separated(line)?;
            if row.is_empty() {
                bail!("empty row");
            }
            Ok(row)
        })?;
        non_empty(rows, "rows")
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let checksum: u64 = shared
            .iter()
            .map(|row| match row.iter().minmax() {
                MinMaxResult::MinMax(lo, hi) => hi - lo,
                MinMaxResult::OneElement(_) | MinMaxResult::NoElements => 0,
            })
            .sum();
        Ok(checksum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for (idx, row) in shared.iter().enumerate() {
            total += combinations(row, 2)
                .find_map(|pair| {
                    let (lo, hi) = (pair[0].min(pair[1]), pair[0].max(pair[1]));
                    (lo != 0 && hi % lo == 0).then(|| hi / lo)
                })
                .ok_or_else(|| {
                    SolveError::Invariant(format!("row {} has no evenly dividing pair", idx + 1))
                })?;
        }
        Ok(total.to_string())
    }
}
