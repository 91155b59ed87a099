use crate::utils::hash::{SaltedHasher, leading_zero_nibbles};
use crate::utils::input::single_token;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const SEARCH_LIMIT: u64 = 100_000_000;

impl AocParser for Solver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(single_token(input)?.trim())
    }
}

/// Lowest positive counter whose salted hash starts with `zeros` zero nibbles.
pub fn mine(key: &str, zeros: usize) -> Result<u64, SolveError> {
    let hasher = SaltedHasher::new(key);
    (1..SEARCH_LIMIT)
        .find(|&n| leading_zero_nibbles(&hasher.digest(n), zeros))
        .ok_or_else(|| SolveError::Exhausted(format!("no hash with {} leading zeros", zeros)))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        mine(shared, 5).map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        mine(shared, 6).map(|n| n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>("abcdef\n", 1).unwrap(), "609043");
        assert_eq!(mine("pqrstuv", 5).unwrap(), 1048970);
    }
}
