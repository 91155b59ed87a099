use crate::utils::input::{non_empty, parse_lines};
use crate::utils::seq::{pairwise, permutations};
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use regex::Regex;
use std::collections::HashMap;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Symmetric distance table over place indices.
pub struct Routes {
    places: usize,
    distance: HashMap<(usize, usize), u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Routes;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(r"^(\w+) to (\w+) = (\d+)$").map_err(|e| ParseError::Other(e.to_string()))?;
        let edges = parse_lines(input, |line| {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| anyhow!("expected `A to B = N`, got {:?}", line))?;
            let dist: u64 = caps[3].parse().context("bad distance")?;
            Ok((caps[1].to_string(), caps[2].to_string(), dist))
        })?;
        let edges = non_empty(edges, "routes")?;

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut distance = HashMap::new();
        for (a, b, d) in edges {
            let next = index.len();
            let a = *index.entry(a).or_insert(next);
            let next = index.len();
            let b = *index.entry(b).or_insert(next);
            distance.insert((a, b), d);
            distance.insert((b, a), d);
        }
        Ok(Routes {
            places: index.len(),
            distance,
        })
    }
}

impl Routes {
    /// Total length of every complete route that only uses known legs.
    fn route_lengths(&self) -> Vec<u64> {
        let places: Vec<usize> = (0..self.places).collect();
        permutations(&places)
            .filter_map(|order| {
                pairwise(order)
                    .map(|(a, b)| self.distance.get(&(a, b)).copied())
                    .sum::<Option<u64>>()
            })
            .collect()
    }
}

fn no_route() -> SolveError {
    SolveError::Exhausted("no route visits every place".into())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let shortest = shared.route_lengths().into_iter().min().ok_or_else(no_route)?;
        Ok(shortest.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared.route_lengths().into_iter().max().ok_or_else(no_route)?;
        Ok(longest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const SAMPLE: &str = "London to Dublin = 464\nLondon to Belfast = 518\nDublin to Belfast = 141\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>(SAMPLE, 1).unwrap(), "605");
        assert_eq!(solve_input::<Solver>(SAMPLE, 2).unwrap(), "982");
    }
}
