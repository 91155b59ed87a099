use crate::utils::input::single_token;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        single_token(input)?
            .trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("not a digit: {:?}", c)))
            })
            .collect()
    }
}

/// Sum of digits equal to the digit `offset` places ahead, wrapping around.
pub fn captcha(digits: &[u32], offset: usize) -> u32 {
    let n = digits.len();
    digits
        .iter()
        .enumerate()
        .filter(|&(i, d)| *d == digits[(i + offset) % n])
        .map(|(_, d)| d)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(captcha(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(captcha(shared, shared.len() / 2).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    #[test]
    fn test_next_digit() {
        for (input, expected) in [("1122", "3"), ("1111", "4"), ("1234", "0"), ("91212129", "9")] {
            assert_eq!(solve_input::<Solver>(input, 1).unwrap(), expected, "{}", input);
        }
    }

    #[test]
    fn test_halfway_digit() {
        for (input, expected) in [
            ("1212", "6"),
            ("1221", "0"),
            ("123425", "4"),
            ("123123", "12"),
            ("12131415", "4"),
        ] {
            assert_eq!(solve_input::<Solver>(input, 2).unwrap(), expected, "{}", input);
        }
    }
}
