use crate::utils::input::lines;
use crate::utils::seq::{pairwise, windows};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use std::collections::HashMap;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(lines(input).into_iter().map(str::trim).collect())
    }
}

const FORBIDDEN: [&str; 4] = ["ab", "cd", "pq", "xy"];

pub fn nice_v1(s: &str) -> bool {
    let vowels = s.chars().filter(|c| "aeiou".contains(*c)).count();
    let doubled = pairwise(s.chars()).any(|(a, b)| a == b);
    vowels >= 3 && doubled && !FORBIDDEN.iter().any(|f| s.contains(f))
}

pub fn nice_v2(s: &str) -> bool {
    let bytes = s.as_bytes();
    // first index of each pair; a repeat must start at least two later
    let mut first_seen: HashMap<(u8, u8), usize> = HashMap::new();
    let repeated_pair = pairwise(bytes.iter().copied())
        .enumerate()
        .any(|(i, pair)| i >= *first_seen.entry(pair).or_insert(i) + 2);
    let sandwich = windows(bytes.iter(), 3).any(|w| w[0] == w[2]);
    repeated_pair && sandwich
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| nice_v1(s)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| nice_v2(s)).count().to_string())
    }
}
