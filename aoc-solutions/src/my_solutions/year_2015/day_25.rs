use crate::utils::numeric::mod_pow;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use regex::Regex;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
pub struct Solver;

const FIRST_CODE: u64 = 20151125;
const MULTIPLIER: u64 = 252533;
const MODULUS: u64 = 33554393;

impl AocParser for Solver {
    type SharedData<'a> = (u64, u64);

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(r"row (\d+), column (\d+)").map_err(|e| ParseError::Other(e.to_string()))?;
        let caps = re
            .captures(input)
            .ok_or_else(|| anyhow!("no `row R, column C` in input"))?;
        let row: u64 = caps[1].parse().map_err(anyhow::Error::from)?;
        let col: u64 = caps[2].parse().map_err(anyhow::Error::from)?;
        if row == 0 || col == 0 {
            return Err(ParseError::InvalidFormat("rows and columns start at 1".into()));
        }
        Ok((row, col))
    }
}

/// Position of `(row, col)` in the diagonal fill order, starting at 1.
pub fn diagonal_index(row: u64, col: u64) -> u64 {
    let diagonal = row + col - 1;
    (diagonal - 1) * diagonal / 2 + col
}

pub fn code_at(row: u64, col: u64) -> u64 {
    let n = diagonal_index(row, col);
    FIRST_CODE * mod_pow(MULTIPLIER, n - 1, MODULUS) % MODULUS
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (row, col) = *shared;
        Ok(code_at(row, col).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    #[test]
    fn test_diagonal_index() {
        assert_eq!(diagonal_index(1, 1), 1);
        assert_eq!(diagonal_index(2, 1), 2);
        assert_eq!(diagonal_index(1, 2), 3);
        assert_eq!(diagonal_index(4, 1), 7);
        assert_eq!(diagonal_index(1, 4), 10);
    }

    #[test]
    fn test_grid_corner() {
        assert_eq!(code_at(1, 1), 20151125);
        assert_eq!(code_at(2, 1), 31916031);
        assert_eq!(code_at(1, 2), 18749137);
        assert_eq!(code_at(6, 6), 27995004);
        let input = "To continue, please consult the code grid in the manual.  Enter the code at row 4, column 2.\n";
        assert_eq!(solve_input::<Solver>(input, 1).unwrap(), "32451966");
    }
}
