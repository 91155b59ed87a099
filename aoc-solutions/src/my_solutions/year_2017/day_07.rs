use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::input::{non_empty, parse_lines};
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use itertools::Itertools;
use regex::Regex;
use std::collections::{HashMap, HashSet};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct Program<'a> {
    pub weight: u64,
    pub holds: Vec<&'a str>,
}

pub type Tower<'a> = HashMap<&'a str, Program<'a>>;

impl AocParser for Solver {
    type SharedData<'a> = Tower<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(r"^(\w+) \((\d+)\)(?: -> (.+))?$").map_err(|e| ParseError::Other(e.to_string()))?;
        let programs = parse_lines(input, |line| {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| anyhow!("expected `name (weight) [-> a, b]`"))?;
            let name = caps.get(1).map_or("", |m| m.as_str());
            let weight = caps[2].parse().context("bad weight")?;
            let holds = caps
                .get(3)
                .map(|m| m.as_str().split(", ").collect())
                .unwrap_or_default();
            Ok((name, Program { weight, holds }))
        })?;
        let tower: Tower = non_empty(programs, "programs")?.into_iter().collect();

        for (name, program) in &tower {
            if let Some(missing) = program.holds.iter().find(|h| !tower.contains_key(*h)) {
                return Err(ParseError::MissingData(format!("{} holds unknown {}", name, missing)));
            }
        }
        Ok(tower)
    }
}

/// The single program nobody holds.
pub fn root<'a>(tower: &Tower<'a>) -> Result<&'a str, SolveError> {
    let held: HashSet<&str> = tower.values().flat_map(|p| p.holds.iter().copied()).collect();
    let roots: Vec<&'a str> = tower.keys().copied().filter(|n| !held.contains(n)).collect();
    match roots[..] {
        [root] => Ok(root),
        _ => Err(SolveError::Invariant(format!(
            "expected one bottom program, found {}",
            roots.len()
        ))),
    }
}

/// Total weight of a program and everything it holds.
struct StackWeight<'t, 'a> {
    tower: &'t Tower<'a>,
}

impl<'a> DpProblem<&'a str, u64> for StackWeight<'_, 'a> {
    fn deps(&self, name: &&'a str) -> Vec<&'a str> {
        self.tower.get(name).map(|p| p.holds.clone()).unwrap_or_default()
    }

    fn compute(&self, name: &&'a str, held: Vec<u64>) -> u64 {
        self.tower.get(name).map_or(0, |p| p.weight) + held.iter().sum::<u64>()
    }
}

/// Weight the single wrong program would need for the tower to balance.
pub fn corrected_weight(tower: &Tower<'_>) -> Result<u64, SolveError> {
    let totals = DpCache::with_problem(HashMapBackend::<&str, u64>::new(), StackWeight { tower });

    let mut current = root(tower)?;
    let mut adjustment: Option<i64> = None;
    loop {
        let holds = &tower[current].holds;
        let child_totals: Vec<u64> = holds.iter().map(|h| totals.get(h)).collect();
        let freq = child_totals.iter().counts();
        if freq.len() <= 1 {
            let delta = adjustment
                .ok_or_else(|| SolveError::Invariant("the tower is already balanced".into()))?;
            return Ok((tower[current].weight as i64 + delta) as u64);
        }
        let (Some((&&odd, _)), Some((&&common, _))) = (
            freq.iter().find(|(_, n)| **n == 1),
            freq.iter().find(|(_, n)| **n > 1),
        ) else {
            return Err(SolveError::Invariant(format!(
                "cannot tell which disc above {} is wrong",
                current
            )));
        };
        adjustment = Some(common as i64 - odd as i64);
        let (odd_idx, _) = child_totals
            .iter()
            .find_position(|&&t| t == odd)
            .ok_or_else(|| SolveError::Invariant("odd total vanished".into()))?;
        current = holds[odd_idx];
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        root(shared).map(str::to_string)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        corrected_weight(shared).map(|w| w.to_string())
    }
}
