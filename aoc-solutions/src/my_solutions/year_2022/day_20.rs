use crate::utils::input::{non_empty, parse_lines};
use crate::utils::ring::Ring;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const DECRYPTION_KEY: i64 = 811_589_153;
const GROVE_OFFSETS: [usize; 3] = [1000, 2000, 3000];

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = parse_lines(input, |line| Ok(line.trim().parse::<i64>()?))?;
        non_empty(numbers, "numbers")
    }
}

/// Mix `numbers` `rounds` times, then sum the grove coordinates.
///
/// Entries are tagged with their original index so duplicates move
/// independently.
pub fn grove_sum(numbers: &[i64], rounds: usize) -> Result<i64, SolveError> {
    let mut ring: Ring<(usize, i64)> = numbers.iter().copied().enumerate().collect();
    for _ in 0..rounds {
        for original in 0..numbers.len() {
            let pos = ring
                .position(|&(idx, _)| idx == original)
                .ok_or_else(|| SolveError::Invariant(format!("entry {} vanished", original)))?;
            ring.rotate(-(pos as i64));
            let Some(entry) = ring.pop_front() else {
                break;
            };
            // The remaining len - 1 entries decide where it lands.
            ring.rotate(-entry.1);
            ring.push_front(entry);
        }
    }

    let zero = ring
        .position(|&(_, value)| value == 0)
        .ok_or_else(|| SolveError::Invariant("no zero in the file".into()))?;
    ring.rotate(-(zero as i64));
    Ok(GROVE_OFFSETS
        .iter()
        .filter_map(|&offset| ring.get_wrapped(offset))
        .map(|&(_, value)| value)
        .sum())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        grove_sum(shared, 1).map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let keyed: Vec<i64> = shared.iter().map(|n| n * DECRYPTION_KEY).collect();
        grove_sum(&keyed, 10).map(|n| n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const SAMPLE: &str = "1\n2\n-3\n3\n-2\n0\n4\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>(SAMPLE, 1).unwrap(), "3");
        assert_eq!(solve_input::<Solver>(SAMPLE, 2).unwrap(), "1623178306");
    }

    #[test]
    fn test_missing_zero() {
        assert!(matches!(grove_sum(&[1, 2, 3], 1), Err(SolveError::Invariant(_))));
    }
}
