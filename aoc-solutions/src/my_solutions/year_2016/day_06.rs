use crate::utils::input::{lines, non_empty};
use crate::utils::seq::counts;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use std::cmp::Reverse;
use std::collections::HashMap;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<char>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let messages: Vec<Vec<char>> = lines(input).iter().map(|l| l.trim().chars().collect()).collect();
        let messages = non_empty(messages, "messages")?;
        let width = messages[0].len();
        if let Some(idx) = messages.iter().position(|m| m.len() != width) {
            return Err(ParseError::at_line(idx, format!("expected {} characters", width)));
        }
        Ok(messages)
    }
}

/// Per column, the character `pick` chooses from that column's frequencies.
fn decode<F>(messages: &[Vec<char>], pick: F) -> String
where
    F: Fn(&HashMap<char, usize>) -> Option<char>,
{
    (0..messages[0].len())
        .filter_map(|col| pick(&counts(messages.iter().map(|m| m[col]))))
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(decode(shared, |freq| {
            freq.iter()
                .max_by_key(|&(&c, &n)| (n, Reverse(c)))
                .map(|(&c, _)| c)
        }))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(decode(shared, |freq| {
            freq.iter().min_by_key(|&(&c, &n)| (n, c)).map(|(&c, _)| c)
        }))
    }
}
