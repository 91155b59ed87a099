use crate::utils::hash::{hex_into, stretched_md5_hex};
use crate::utils::input::single_token;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const KEYS_NEEDED: usize = 64;
const LOOKAHEAD: usize = 1000;
const STRETCH_ROUNDS: usize = 2016;
const SEARCH_LIMIT: usize = 10_000_000;

impl AocParser for Solver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(single_token(input)?.trim())
    }
}

/// What a hash offers the key search: its first triple, and every hex
/// digit that appears five times in a row (as a bit set).
#[derive(Debug, Clone, Copy)]
struct Runs {
    triple: Option<u8>,
    quintuples: u16,
}

impl Runs {
    fn of(hex: &[u8]) -> Self {
        let digit = |b: u8| if b.is_ascii_digit() { b - b'0' } else { b - b'a' + 10 };
        let triple = hex
            .windows(3)
            .find(|w| w[0] == w[1] && w[1] == w[2])
            .map(|w| digit(w[0]));
        let quintuples = hex
            .windows(5)
            .filter(|w| w.iter().all(|&b| b == w[0]))
            .fold(0u16, |set, w| set | 1 << digit(w[0]));
        Self { triple, quintuples }
    }
}

/// Lazily hashed `salt + index` stream with a fixed number of stretch rounds.
struct Pad<'a> {
    salt: &'a str,
    rounds: usize,
    runs: Vec<Runs>,
}

impl<'a> Pad<'a> {
    fn new(salt: &'a str, rounds: usize) -> Self {
        Self {
            salt,
            rounds,
            runs: Vec::new(),
        }
    }

    fn runs(&mut self, index: usize) -> Runs {
        while self.runs.len() <= index {
            let input = format!("{}{}", self.salt, self.runs.len());
            let runs = if self.rounds == 0 {
                let mut hex = [0u8; 32];
                hex_into(&md5::compute(input.as_bytes()), &mut hex);
                Runs::of(&hex)
            } else {
                Runs::of(stretched_md5_hex(&input, self.rounds).as_bytes())
            };
            self.runs.push(runs);
        }
        self.runs[index]
    }

    fn is_key(&mut self, index: usize) -> bool {
        let Some(digit) = self.runs(index).triple else {
            return false;
        };
        (index + 1..=index + LOOKAHEAD).any(|next| self.runs(next).quintuples & (1 << digit) != 0)
    }
}

/// Index producing the 64th key.
pub fn key_index(salt: &str, rounds: usize) -> Result<usize, SolveError> {
    let mut pad = Pad::new(salt, rounds);
    (0..SEARCH_LIMIT)
        .filter(|&i| pad.is_key(i))
        .nth(KEYS_NEEDED - 1)
        .ok_or_else(|| SolveError::Exhausted(format!("fewer than {} keys", KEYS_NEEDED)))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        key_index(shared, 0).map(|i| i.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        key_index(shared, STRETCH_ROUNDS).map(|i| i.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs() {
        let runs = Runs::of(b"0034e0923cc38887a57bd7b1d4f953df");
        assert_eq!(runs.triple, Some(8));
        assert_eq!(runs.quintuples, 0);
        let runs = Runs::of(b"3aeeeee1367614f3061d165a5fe3cac3");
        assert_eq!(runs.triple, Some(0xe));
        assert_eq!(runs.quintuples, 1 << 0xe);
    }

    #[test]
    fn test_plain_keys() {
        let mut pad = Pad::new("abc", 0);
        assert!(!pad.is_key(18));
        assert!(pad.is_key(39));
        assert_eq!(key_index("abc", 0).unwrap(), 22728);
    }

    #[test]
    #[ignore = "stretched hashing is slow without optimisations"]
    fn test_stretched_keys() {
        assert_eq!(key_index("abc", STRETCH_ROUNDS).unwrap(), 22551);
    }
}
