use crate::utils::input::parse_token;
use crate::utils::ring::Ring;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const SHORT_RUN: u32 = 2017;
const LONG_RUN: u32 = 50_000_000;

impl AocParser for Solver {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_token(input)
    }
}

/// Value right after the last inserted one, after `insertions` steps.
pub fn after_last(step: usize, insertions: u32) -> u32 {
    // The current position is kept at the back of the ring.
    let mut ring = Ring::with_capacity(insertions as usize + 1);
    ring.push_back(0);
    for value in 1..=insertions {
        ring.rotate(-(step as i64));
        ring.push_back(value);
    }
    ring.front().copied().unwrap_or(0)
}

/// Value right after 0; only insertions at index 1 matter, so no buffer is kept.
pub fn after_zero(step: usize, insertions: u32) -> u32 {
    let mut pos = 0;
    let mut after = 0;
    for value in 1..=insertions {
        pos = (pos + step) % value as usize + 1;
        if pos == 1 {
            after = value;
        }
    }
    after
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(after_last(*shared, SHORT_RUN).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(after_zero(*shared, LONG_RUN).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>("3\n", 1).unwrap(), "638");
        assert_eq!(after_last(3, 3), 1);
    }

    #[test]
    fn test_after_zero_matches_ring() {
        assert_eq!(after_zero(3, 9), 9);
        for n in 1..200 {
            let mut ring: Ring<u32> = Ring::new();
            ring.push_back(0);
            for v in 1..=n {
                ring.rotate(-3);
                ring.push_back(v);
            }
            let zero = ring.position(|&v| v == 0).unwrap();
            assert_eq!(ring.get_wrapped(zero + 1).copied(), Some(after_zero(3, n)));
        }
    }
}
