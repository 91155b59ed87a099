use crate::utils::graph::{Adjacency, count_paths};
use crate::utils::input::{non_empty, parse_lines};
use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    /// Device → devices its outputs feed.
    type SharedData<'a> = Adjacency<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let devices = parse_lines(input, |line| {
            let (device, outputs) = line
                .trim()
                .split_once(':')
                .ok_or_else(|| anyhow!("expected `device: outputs...`"))?;
            ensure!(!device.is_empty(), "unnamed device");
            Ok((device, outputs.split_whitespace().collect::<Vec<_>>()))
        })?;
        Ok(non_empty(devices, "devices")?.into_iter().collect())
    }
}

fn require<'a>(graph: &Adjacency<&'a str>, devices: &[&'a str]) -> Result<(), SolveError> {
    match devices.iter().find(|d| !graph.contains_key(*d)) {
        Some(missing) => Err(SolveError::Invariant(format!("no device named {}", missing))),
        None => Ok(()),
    }
}

/// Paths from `start` to `out` that pass through both `first` and `second`, in either order.
pub fn paths_via<'g>(graph: &Adjacency<&'g str>, start: &'g str, first: &'g str, second: &'g str) -> u64 {
    let paths = |from: &'g str, to: &'g str| count_paths(graph, &from, &to);
    paths(start, first) * paths(first, second) * paths(second, "out")
        + paths(start, second) * paths(second, first) * paths(first, "out")
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        require(shared, &["you"])?;
        Ok(count_paths(shared, &"you", &"out").to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        require(shared, &["svr", "dac", "fft"])?;
        Ok(paths_via(shared, "svr", "dac", "fft").to_string())
    }
}
