use crate::utils::input::{non_empty, parse_lines};
use crate::utils::numeric::lcm_all;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use regex::Regex;
use std::collections::HashMap;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct Map<'a> {
    /// `true` for a left turn.
    pub turns: Vec<bool>,
    pub network: HashMap<&'a str, (&'a str, &'a str)>,
}

impl AocParser for Solver {
    type SharedData<'a> = Map<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (head, body) = input
            .trim_start()
            .split_once('\n')
            .ok_or_else(|| ParseError::MissingData("no network after the instructions".into()))?;
        let turns = head
            .trim()
            .chars()
            .map(|c| match c {
                'L' => Ok(true),
                'R' => Ok(false),
                other => Err(ParseError::InvalidFormat(format!("unknown turn {:?}", other))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let turns = non_empty(turns, "instructions")?;

        let re = Regex::new(r"^(\w+) = \((\w+), (\w+)\)$").map_err(|e| ParseError::Other(e.to_string()))?;
        let nodes = parse_lines(body.trim_start_matches(['\r', '\n']), |line| {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| anyhow!("expected `AAA = (BBB, CCC)`"))?;
            let [node, left, right] = [1, 2, 3].map(|i| caps.get(i).map_or("", |m| m.as_str()));
            Ok((node, (left, right)))
        })?;
        let network = non_empty(nodes, "nodes")?.into_iter().collect();
        Ok(Map { turns, network })
    }
}

impl Map<'_> {
    /// Steps from `start` until `done` holds, cycling through the turns.
    ///
    /// Gives up once every (node, turn index) state could have been visited.
    pub fn steps<'s>(&'s self, start: &'s str, done: impl Fn(&str) -> bool) -> Result<u64, SolveError> {
        let limit = (self.network.len() * self.turns.len()) as u64;
        let mut node = start;
        for (step, &left) in (0..=limit).zip(self.turns.iter().cycle()) {
            if done(node) {
                return Ok(step);
            }
            let &(l, r) = self
                .network
                .get(node)
                .ok_or_else(|| SolveError::Invariant(format!("node {} is not in the network", node)))?;
            node = if left { l } else { r };
        }
        Err(SolveError::Exhausted(format!("{} never reaches a goal", start)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if !shared.network.contains_key("AAA") {
            return Err(SolveError::Invariant("no AAA node".into()));
        }
        shared.steps("AAA", |n| n == "ZZZ").map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Each ghost's first goal repeats on the same period in these maps.
        let periods = shared
            .network
            .keys()
            .filter(|n| n.ends_with('A'))
            .map(|start| shared.steps(start, |n| n.ends_with('Z')).map(|s| s as i64))
            .collect::<Result<Vec<_>, _>>()?;
        if periods.is_empty() {
            return Err(SolveError::Invariant("no start nodes ending in A".into()));
        }
        Ok(lcm_all(periods).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const BRANCHING: &str = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";

    const REPEATING: &str = "LLR\n\nAAA = (BBB, BBB)\nBBB = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)\n";

    const GHOSTS: &str = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";

    #[test]
    fn test_single_walk() {
        assert_eq!(solve_input::<Solver>(BRANCHING, 1).unwrap(), "2");
        assert_eq!(solve_input::<Solver>(REPEATING, 1).unwrap(), "6");
    }

    #[test]
    fn test_ghosts() {
        assert_eq!(solve_input::<Solver>(GHOSTS, 2).unwrap(), "6");
    }

    #[test]
    fn test_unreachable_goal() {
        let input = "L\n\nAAA = (BBB, BBB)\nBBB = (AAA, AAA)\nZZZ = (ZZZ, ZZZ)\n";
        assert!(matches!(
            solve_input::<Solver>(input, 1),
            Err(aoc_solver::SolverError::SolveError(SolveError::Exhausted(_)))
        ));
    }
}
