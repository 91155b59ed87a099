use crate::utils::input::single_token;
use crate::utils::seq::{all_distinct, windows};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = &'a [u8];

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(single_token(input)?.trim().as_bytes())
    }
}

/// Characters processed when the last `size` received are all different.
pub fn marker_end(stream: &[u8], size: usize) -> Result<usize, SolveError> {
    windows(stream.iter(), size)
        .position(|w| all_distinct(&w))
        .map(|start| start + size)
        .ok_or_else(|| SolveError::Exhausted(format!("no {} distinct characters in a row", size)))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        marker_end(shared, 4).map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        marker_end(shared, 14).map(|n| n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    #[test]
    fn test_samples() {
        for (input, packet, message) in [
            ("mjqjpqmgbljsphjdztnvjfqwrcgsmlb", "7", "19"),
            ("bvwbjplbgvbhsrlpgdmjqwftvncz", "5", "23"),
            ("nppdvjthqldpwncqszvftbrmjlhg", "6", "23"),
            ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", "10", "29"),
            ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", "11", "26"),
        ] {
            assert_eq!(solve_input::<Solver>(input, 1).unwrap(), packet);
            assert_eq!(solve_input::<Solver>(input, 2).unwrap(), message);
        }
    }

    #[test]
    fn test_no_marker() {
        assert!(solve_input::<Solver>("aaaa", 1).is_err());
    }
}
