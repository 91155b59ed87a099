use crate::utils::graph::Adjacency;
use crate::utils::input::{non_empty, parse_lines};
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use std::collections::HashSet;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const START: &str = "start";
const END: &str = "end";

impl AocParser for Solver {
    type SharedData<'a> = Adjacency<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let edges = parse_lines(input, |line| {
            line.trim()
                .split_once('-')
                .ok_or_else(|| anyhow!("expected `a-b`"))
        })?;
        let mut caves = Adjacency::new();
        for (a, b) in non_empty(edges, "passages")? {
            caves.entry(a).or_insert_with(Vec::new).push(b);
            caves.entry(b).or_insert_with(Vec::new).push(a);
        }
        if !caves.contains_key(START) || !caves.contains_key(END) {
            return Err(ParseError::MissingData("start or end cave".into()));
        }
        Ok(caves)
    }
}

fn is_small(cave: &str) -> bool {
    cave.chars().all(|c| c.is_ascii_lowercase())
}

/// Paths from `cave` to the end; one small cave may be entered twice while
/// `spare_visit` is set.
fn paths<'a>(
    caves: &Adjacency<&'a str>,
    cave: &'a str,
    visited: &mut HashSet<&'a str>,
    spare_visit: bool,
) -> u64 {
    if cave == END {
        return 1;
    }
    let mut total = 0;
    for &next in caves.get(cave).into_iter().flatten() {
        if next == START {
            continue;
        }
        if !is_small(next) {
            total += paths(caves, next, visited, spare_visit);
        } else if visited.insert(next) {
            total += paths(caves, next, visited, spare_visit);
            visited.remove(next);
        } else if spare_visit {
            total += paths(caves, next, visited, false);
        }
    }
    total
}

fn count_paths(caves: &Adjacency<&str>, spare_visit: bool) -> u64 {
    let mut visited = HashSet::from([START]);
    paths(caves, START, &mut visited, spare_visit)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_paths(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_paths(shared, true).to_string())
    }
}
