use crate::utils::geometry::{Heading, Point2, manhattan2, step};
use crate::utils::input::single_token;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use std::collections::HashSet;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub enum Turn {
    Left,
    Right,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Turn, i64)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        single_token(input)?
            .split(',')
            .map(str::trim)
            .map(|token| {
                let turn = match token.chars().next() {
                    Some('L') => Turn::Left,
                    Some('R') => Turn::Right,
                    _ => return Err(ParseError::InvalidFormat(format!("bad instruction {:?}", token))),
                };
                let blocks = token[1..]
                    .parse()
                    .map_err(|e| ParseError::InvalidFormat(format!("{:?}: {}", token, e)))?;
                Ok((turn, blocks))
            })
            .collect()
    }
}

/// Every block stood on, starting at the origin facing north.
fn walk(instructions: &[(Turn, i64)]) -> impl Iterator<Item = Point2> + '_ {
    let mut heading = Heading::North;
    let mut pos = (0, 0);
    instructions.iter().flat_map(move |&(turn, blocks)| {
        heading = match turn {
            Turn::Left => heading.turn_left(),
            Turn::Right => heading.turn_right(),
        };
        let h = heading;
        let start = pos;
        pos = (0..blocks).fold(pos, |p, _| step(p, h));
        (1..=blocks).scan(start, move |p, _| {
            *p = step(*p, h);
            Some(*p)
        })
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let end = walk(shared).last().unwrap_or((0, 0));
        Ok(manhattan2((0, 0), end).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut seen = HashSet::from([(0, 0)]);
        walk(shared)
            .find(|&p| !seen.insert(p))
            .map(|p| manhattan2((0, 0), p).to_string())
            .ok_or_else(|| SolveError::Exhausted("no location visited twice".into()))
    }
}
