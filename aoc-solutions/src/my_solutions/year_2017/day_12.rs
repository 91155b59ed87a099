use crate::utils::graph::{Adjacency, group_count, reachable_count};
use crate::utils::input::{non_empty, parse_lines};
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Adjacency<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let pipes = parse_lines(input, |line| {
            let (from, to) = line
                .split_once("<->")
                .ok_or_else(|| anyhow!("expected `ID <-> ID, ID`"))?;
            let from: u32 = from.trim().parse().context("bad program id")?;
            let to = to
                .split(',')
                .map(|id| id.trim().parse::<u32>().context("bad program id"))
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok((from, to))
        })?;

        let mut adjacency = Adjacency::new();
        for (from, to) in non_empty(pipes, "pipes")? {
            for &peer in &to {
                adjacency.entry(peer).or_insert_with(Vec::new).push(from);
            }
            adjacency.entry(from).or_insert_with(Vec::new).extend(to);
        }
        Ok(adjacency)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(reachable_count(shared, &0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(group_count(shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const SAMPLE: &str = "0 <-> 2\n1 <-> 1\n2 <-> 0, 3, 4\n3 <-> 2, 4\n4 <-> 2, 3, 6\n5 <-> 6\n6 <-> 4, 5\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>(SAMPLE, 1).unwrap(), "6");
        assert_eq!(solve_input::<Solver>(SAMPLE, 2).unwrap(), "2");
    }
}
