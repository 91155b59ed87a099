use crate::utils::input::{lines, non_empty};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const WORDS: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        non_empty(lines(input), "calibration lines")
    }
}

/// Digit starting at byte `idx`, optionally recognising spelled-out words.
///
/// Words may overlap (`eightwo` holds both 8 and 2).
fn digit_at(line: &str, idx: usize, spelled: bool) -> Option<u32> {
    let rest = &line.as_bytes()[idx..];
    match rest.first() {
        Some(b) if b.is_ascii_digit() => Some(u32::from(b - b'0')),
        _ if spelled => WORDS
            .iter()
            .position(|word| rest.starts_with(word.as_bytes()))
            .map(|pos| pos as u32 + 1),
        _ => None,
    }
}

pub fn calibration(line: &str, spelled: bool) -> Result<u32, SolveError> {
    let mut digits = (0..line.len()).filter_map(|idx| digit_at(line, idx, spelled));
    let first = digits
        .next()
        .ok_or_else(|| SolveError::Invariant(format!("no digit in {:?}", line)))?;
    let last = digits.last().unwrap_or(first);
    Ok(first * 10 + last)
}

fn total(lines: &[&str], spelled: bool) -> Result<String, SolveError> {
    lines
        .iter()
        .map(|line| calibration(line, spelled))
        .sum::<Result<u32, _>>()
        .map(|sum| sum.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total(shared, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    #[test]
    fn test_digits_only() {
        let input = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n";
        assert_eq!(solve_input::<Solver>(input, 1).unwrap(), "142");
    }

    #[test]
    fn test_spelled() {
        let input = "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n\
                     4nineeightseven2\nzoneight234\n7pqrstsixteen\n";
        assert_eq!(solve_input::<Solver>(input, 2).unwrap(), "281");
        assert_eq!(calibration("eightwo", true).unwrap(), 82);
    }

    #[test]
    fn test_line_without_digits() {
        assert!(matches!(
            solve_input::<Solver>("abc\n", 1),
            Err(aoc_solver::SolverError::SolveError(SolveError::Invariant(_)))
        ));
    }
}
