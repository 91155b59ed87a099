use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::input::{non_empty, single_token, whitespace_separated};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let stones = whitespace_separated(single_token(input)?)?;
        non_empty(stones, "stones")
    }
}

/// What a single stone turns into after one blink.
pub fn blink(stone: u64) -> Vec<u64> {
    if stone == 0 {
        return vec![1];
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        vec![stone / half, stone % half]
    } else {
        vec![stone * 2024]
    }
}

/// Stones produced by `(stone, blinks)`; stones never interact, so each is counted alone.
struct Descendants;

impl DpProblem<(u64, u8), u64> for Descendants {
    fn deps(&self, &(stone, blinks): &(u64, u8)) -> Vec<(u64, u8)> {
        if blinks == 0 {
            return vec![];
        }
        blink(stone).into_iter().map(|s| (s, blinks - 1)).collect()
    }

    fn compute(&self, &(_, blinks): &(u64, u8), deps: Vec<u64>) -> u64 {
        if blinks == 0 { 1 } else { deps.iter().sum() }
    }
}

pub fn stones_after(stones: &[u64], blinks: u8) -> u64 {
    let cache = DpCache::with_problem(HashMapBackend::<(u64, u8), u64>::new(), Descendants);
    stones.iter().map(|&stone| cache.get(&(stone, blinks))).sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(stones_after(shared, 25).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(stones_after(shared, 75).to_string())
    }
}
