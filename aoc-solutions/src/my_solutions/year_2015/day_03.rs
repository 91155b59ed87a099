use crate::utils::geometry::{Heading, Point2, step};
use crate::utils::input::single_token;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use std::collections::HashSet;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Heading>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        single_token(input)?
            .chars()
            .map(|c| {
                Heading::from_arrow(c)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("unexpected {:?}", c)))
            })
            .collect()
    }
}

fn visit(moves: impl Iterator<Item = Heading>, visited: &mut HashSet<Point2>) {
    let mut pos = (0, 0);
    visited.insert(pos);
    for heading in moves {
        pos = step(pos, heading);
        visited.insert(pos);
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut visited = HashSet::new();
        visit(shared.iter().copied(), &mut visited);
        Ok(visited.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut visited = HashSet::new();
        visit(shared.iter().copied().step_by(2), &mut visited);
        visit(shared.iter().copied().skip(1).step_by(2), &mut visited);
        Ok(visited.len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    #[test]
    fn test_santa_alone() {
        assert_eq!(solve_input::<Solver>(">", 1).unwrap(), "2");
        assert_eq!(solve_input::<Solver>("^>v<", 1).unwrap(), "4");
        assert_eq!(solve_input::<Solver>("^v^v^v^v^v", 1).unwrap(), "2");
    }

    #[test]
    fn test_with_robot() {
        assert_eq!(solve_input::<Solver>("^v", 2).unwrap(), "3");
        assert_eq!(solve_input::<Solver>("^>v<", 2).unwrap(), "3");
        assert_eq!(solve_input::<Solver>("^v^v^v^v^v", 2).unwrap(), "11");
    }
}
