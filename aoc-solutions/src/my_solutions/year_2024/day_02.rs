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
        let reports = parse_lines(input, |line| {
            let levels = whitespace_separated::<i64>(line)?;
            ensure!(!levels.is_empty(), "empty report");
            Ok(levels)
        })?;
        non_empty(reports, "reports")
    }
}

/// Strictly increasing or decreasing, each step between 1 and 3.
pub fn is_safe<'a>(levels: impl IntoIterator<Item = &'a i64>) -> bool {
    let diffs: Vec<i64> = pairwise(levels).map(|(a, b)| b - a).collect();
    diffs.iter().all(|d| (1..=3).contains(d)) || diffs.iter().all(|d| (-3..=-1).contains(d))
}

/// Safe as is, or after dropping any single level.
pub fn is_tolerably_safe(levels: &[i64]) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|skip| {
            is_safe(
                levels
                    .iter()
                    .enumerate()
                    .filter(|&(idx, _)| idx != skip)
                    .map(|(_, level)| level),
            )
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|r| is_safe(r.iter())).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|r| is_tolerably_safe(r)).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const SAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>(SAMPLE, 1).unwrap(), "2");
        assert_eq!(solve_input::<Solver>(SAMPLE, 2).unwrap(), "4");
    }

    #[test]
    fn test_short_reports() {
        assert!(is_safe(&[5]));
        assert!(is_tolerably_safe(&[5, 5]));
        assert!(!is_safe(&[5, 5]));
    }
}
