use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::input::groups;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct Onsen<'a> {
    pub towels: Vec<&'a str>,
    pub designs: Vec<&'a str>,
}

impl AocParser for Solver {
    type SharedData<'a> = Onsen<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let sections = groups(input);
        let (towels, designs) = match &sections[..] {
            [towels, designs @ ..] if towels.len() == 1 && !designs.is_empty() => (towels[0], designs),
            _ => {
                return Err(ParseError::MissingData(
                    "expected one line of towels, a blank line, then designs".into(),
                ));
            }
        };
        let towels: Vec<&str> = towels.trim().split(',').map(str::trim).collect();
        if towels.iter().any(|t| t.is_empty()) {
            return Err(ParseError::InvalidFormat("empty towel pattern".into()));
        }
        let designs = designs.iter().flatten().map(|&d| d.trim()).collect();
        Ok(Onsen { towels, designs })
    }
}

/// Ways to finish `design[i..]`, indexed by `i`.
struct Ways<'o> {
    towels: &'o [&'o str],
    design: &'o str,
}

impl DpProblem<usize, u64> for Ways<'_> {
    fn deps(&self, &i: &usize) -> Vec<usize> {
        let rest = &self.design[i..];
        self.towels
            .iter()
            .filter(|t| rest.starts_with(**t))
            .map(|t| i + t.len())
            .collect()
    }

    fn compute(&self, &i: &usize, deps: Vec<u64>) -> u64 {
        if i == self.design.len() { 1 } else { deps.iter().sum() }
    }
}

pub fn arrangements(towels: &[&str], design: &str) -> u64 {
    let cache = DpCache::with_problem(VecBackend::<u64>::with_capacity(design.len() + 1), Ways { towels, design });
    cache.get(&0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = shared
            .designs
            .iter()
            .filter(|d| arrangements(&shared.towels, d) > 0)
            .count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .designs
            .iter()
            .map(|d| arrangements(&shared.towels, d))
            .sum();
        Ok(total.to_string())
    }
}
