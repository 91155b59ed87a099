use crate::utils::input::single_token;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const FIRST_DISK: usize = 272;
const SECOND_DISK: usize = 35_651_584;

impl AocParser for Solver {
    type SharedData<'a> = Vec<bool>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        single_token(input)?
            .trim()
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(ParseError::InvalidFormat(format!("unexpected {:?}", other))),
            })
            .collect()
    }
}

/// Grow `seed` with the dragon curve until it covers `length`, then fold
/// the checksum in place until its length is odd.
pub fn disk_checksum(seed: &[bool], length: usize) -> String {
    let mut data = Vec::with_capacity(length * 2 + 1);
    data.extend_from_slice(seed);
    while data.len() < length {
        let n = data.len();
        data.push(false);
        for i in (0..n).rev() {
            let bit = !data[i];
            data.push(bit);
        }
    }
    data.truncate(length);

    while data.len() % 2 == 0 && !data.is_empty() {
        let half = data.len() / 2;
        for i in 0..half {
            data[i] = data[2 * i] == data[2 * i + 1];
        }
        data.truncate(half);
    }
    data.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

fn fill(seed: &[bool], length: usize) -> Result<String, SolveError> {
    if seed.is_empty() {
        return Err(SolveError::Invariant("cannot grow an empty seed".into()));
    }
    Ok(disk_checksum(seed, length))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        fill(shared, FIRST_DISK)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        fill(shared, SECOND_DISK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_sample() {
        assert_eq!(disk_checksum(&bits("10000"), 20), "01100");
        assert_eq!(disk_checksum(&bits("110010110100"), 12), "100");
    }
}
