use crate::utils::input::parse_token;
use crate::utils::numeric::josephus;
use crate::utils::ring::Ring;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = u32;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let elves: u32 = parse_token(input)?;
        if elves == 0 {
            return Err(ParseError::InvalidFormat("need at least one elf".into()));
        }
        Ok(elves)
    }
}

/// Winner when every elf steals from the one directly across the circle.
///
/// The circle is split into two halves; the victim is always at the join
/// between them, so each steal is a constant-time pop.
pub fn steal_across(elves: u32) -> u32 {
    let mut left: Ring<u32> = (1..=elves / 2).collect();
    let mut right: Ring<u32> = (elves / 2 + 1..=elves).collect();
    while left.len() + right.len() > 1 {
        if left.len() > right.len() {
            left.pop_back();
        } else {
            right.pop_front();
        }
        if let Some(current) = left.pop_front() {
            right.push_back(current);
        }
        if let Some(moved) = right.pop_front() {
            left.push_back(moved);
        }
    }
    left.front().or(right.front()).copied().unwrap_or(1)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(josephus(*shared as u64).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(steal_across(*shared).to_string())
    }
}
