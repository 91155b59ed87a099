use crate::utils::hash::{SaltedHasher, leading_zero_nibbles};
use crate::utils::input::single_token;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const PASSWORD_LEN: usize = 8;
const SEARCH_LIMIT: u64 = 1_000_000_000;

impl AocParser for Solver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(single_token(input)?.trim())
    }
}

/// Sixth and seventh hex digits of every interesting hash, in index order.
fn interesting(door: &str) -> impl Iterator<Item = (u8, u8)> {
    let hasher = SaltedHasher::new(door);
    (0..SEARCH_LIMIT).filter_map(move |n| {
        let digest = hasher.digest(n);
        leading_zero_nibbles(&digest, 5).then(|| (digest.0[2] & 0x0f, digest.0[3] >> 4))
    })
}

fn hex_digit(nibble: u8) -> char {
    char::from_digit(nibble as u32, 16).unwrap_or('?')
}

fn exhausted() -> SolveError {
    SolveError::Exhausted("ran out of hashes before filling the password".into())
}

pub fn ordered_password(door: &str) -> Result<String, SolveError> {
    let password: String = interesting(door)
        .take(PASSWORD_LEN)
        .map(|(sixth, _)| hex_digit(sixth))
        .collect();
    if password.len() < PASSWORD_LEN {
        return Err(exhausted());
    }
    Ok(password)
}

pub fn positional_password(door: &str) -> Result<String, SolveError> {
    let mut slots = [None; PASSWORD_LEN];
    for (position, value) in interesting(door) {
        let Some(slot) = slots.get_mut(position as usize) else {
            continue;
        };
        if slot.is_none() {
            *slot = Some(hex_digit(value));
            if slots.iter().all(Option::is_some) {
                return Ok(slots.iter().flatten().collect());
            }
        }
    }
    Err(exhausted())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        ordered_password(shared)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        positional_password(shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_digit() {
        assert_eq!(hex_digit(0), '0');
        assert_eq!(hex_digit(10), 'a');
        assert_eq!(hex_digit(15), 'f');
    }

    #[test]
    #[ignore = "millions of hashes; slow without optimisations"]
    fn test_sample_passwords() {
        let (sixth, seventh) = interesting("abc").next().unwrap();
        assert_eq!((sixth, seventh), (1, 5));
        assert_eq!(ordered_password("abc").unwrap(), "18f47a30");
        assert_eq!(positional_password("abc").unwrap(), "05ace8e3");
    }
}
