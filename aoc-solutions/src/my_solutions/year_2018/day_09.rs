use crate::utils::ring::Ring;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use regex::Regex;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Game {
    pub players: usize,
    pub last_marble: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = Game;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(r"(\d+) players; last marble is worth (\d+) points")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        let caps = re
            .captures(input)
            .ok_or_else(|| anyhow!("expected `N players; last marble is worth M points`"))?;
        let players: usize = caps[1].parse().map_err(anyhow::Error::from)?;
        let last_marble: u64 = caps[2].parse().map_err(anyhow::Error::from)?;
        if players == 0 {
            return Err(ParseError::InvalidFormat("no players".into()));
        }
        Ok(Game {
            players,
            last_marble,
        })
    }
}

/// Winning score. The current marble is kept at the back of the ring.
pub fn high_score(players: usize, last_marble: u64) -> u64 {
    let mut circle = Ring::with_capacity(last_marble as usize + 1);
    circle.push_back(0u64);
    let mut scores = vec![0u64; players];
    for marble in 1..=last_marble {
        if marble % 23 == 0 {
            circle.rotate(7);
            let removed = circle.pop_back().unwrap_or(0);
            scores[(marble % players as u64) as usize] += marble + removed;
            circle.rotate(-1);
        } else {
            circle.rotate(-1);
            circle.push_back(marble);
        }
    }
    scores.into_iter().max().unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(high_score(shared.players, shared.last_marble).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(high_score(shared.players, shared.last_marble * 100).to_string())
    }
}
