use crate::utils::input::{non_empty, parse_lines, whitespace_separated};
use crate::utils::seq::pairwise;
use anyhow::ensure;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let histories = parse_lines(input, |line| {
            let values = whitespace_separated::<i64>(line)?;
            ensure!(!values.is_empty(), "empty history");
            Ok(values)
        })?;
        non_empty(histories, "histories")
    }
}

/// Leading and trailing values of each difference row, down to the all-zero row.
fn difference_edges(history: &[i64]) -> Vec<(i64, i64)> {
    let mut edges = Vec::new();
    let mut row = history.to_vec();
    while row.iter().any(|&v| v != 0) {
        edges.push((row[0], row[row.len() - 1]));
        row = pairwise(row.iter()).map(|(a, b)| b - a).collect();
    }
    edges
}

pub fn next_value(history: &[i64]) -> i64 {
    difference_edges(history).iter().map(|&(_, last)| last).sum()
}

pub fn previous_value(history: &[i64]) -> i64 {
    difference_edges(history)
        .iter()
        .rev()
        .fold(0, |below, &(first, _)| first - below)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|h| next_value(h)).sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|h| previous_value(h)).sum::<i64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const SAMPLE: &str = "0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>(SAMPLE, 1).unwrap(), "114");
        assert_eq!(solve_input::<Solver>(SAMPLE, 2).unwrap(), "2");
    }

    #[test]
    fn test_single_value() {
        assert_eq!(next_value(&[7]), 7);
        assert_eq!(previous_value(&[7]), 7);
        assert_eq!(next_value(&[0, 0]), 0);
    }
}
