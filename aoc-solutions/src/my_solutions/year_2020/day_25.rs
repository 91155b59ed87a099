use crate::utils::input::{non_empty, parse_lines};
use crate::utils::numeric::mod_pow;
use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
pub struct Solver;

const SUBJECT: u64 = 7;
const MODULUS: u64 = 20201227;

impl AocParser for Solver {
    type SharedData<'a> = (u64, u64);

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let keys = non_empty(
            parse_lines(input, |line| line.trim().parse::<u64>().context("bad public key"))?,
            "public keys",
        )?;
        match keys[..] {
            [card, door] => Ok((card, door)),
            _ => Err(ParseError::InvalidFormat(format!("expected two public keys, got {}", keys.len()))),
        }
    }
}

/// Smallest loop size turning the subject number into `public_key`.
pub fn loop_size(public_key: u64) -> Option<u64> {
    let mut value = 1;
    for size in 0..MODULUS {
        if value == public_key {
            return Some(size);
        }
        value = value * SUBJECT % MODULUS;
    }
    None
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (card, door) = *shared;
        let card_loop = loop_size(card)
            .ok_or_else(|| SolveError::Exhausted(format!("{} is not a power of {}", card, SUBJECT)))?;
        Ok(mod_pow(door, card_loop, MODULUS).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    #[test]
    fn test_sample() {
        assert_eq!(loop_size(5764801), Some(8));
        assert_eq!(loop_size(17807724), Some(11));
        assert_eq!(solve_input::<Solver>("5764801\n17807724\n", 1).unwrap(), "14897079");
    }
}
