use crate::utils::input::{non_empty, parse_lines};
use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
pub struct Solver;

/// Balanced base-5 with digits `=`, `-`, `0`, `1`, `2` (-2 to 2).
pub fn from_snafu(text: &str) -> anyhow::Result<i64> {
    let mut value: i64 = 0;
    for c in text.chars() {
        let digit = match c {
            '2' => 2,
            '1' => 1,
            '0' => 0,
            '-' => -1,
            '=' => -2,
            other => bail!("{:?} is not a SNAFU digit", other),
        };
        value = value * 5 + digit;
    }
    Ok(value)
}

pub fn to_snafu(mut n: i64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        let (digit, carry) = match n % 5 {
            0 => ('0', 0),
            1 => ('1', 0),
            2 => ('2', 0),
            3 => ('=', 1),
            _ => ('-', 1),
        };
        digits.push(digit);
        n = n / 5 + carry;
    }
    digits.iter().rev().collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = parse_lines(input, |line| from_snafu(line.trim()))?;
        non_empty(numbers, "fuel requirements")
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: i64 = shared.iter().sum();
        if total < 0 {
            return Err(SolveError::Invariant(format!("negative fuel total {}", total)));
        }
        Ok(to_snafu(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const SAMPLE: &str = "1=-0-2\n12111\n2=0=\n21\n2=01\n111\n20012\n112\n1=-1=\n1-12\n12\n1=\n122\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>(SAMPLE, 1).unwrap(), "2=-1=0");
    }

    #[test]
    fn test_conversions() {
        for (decimal, snafu) in [(1, "1"), (3, "1="), (8, "2="), (2022, "1=11-2"), (314159265, "1121-1110-1=0")] {
            assert_eq!(to_snafu(decimal), snafu);
            assert_eq!(from_snafu(snafu).unwrap(), decimal);
        }
        assert!(from_snafu("12a").is_err());
    }

    #[test]
    fn test_single_part() {
        assert!(solve_input::<Solver>(SAMPLE, 2).is_err());
    }
}
