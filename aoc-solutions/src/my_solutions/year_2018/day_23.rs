use crate::utils::geometry::{Point3, manhattan3};
use crate::utils::input::{non_empty, parse_lines};
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use regex::Regex;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nanobot {
    pub pos: Point3,
    pub radius: i64,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Nanobot>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(r"^pos=<(-?\d+),(-?\d+),(-?\d+)>, r=(\d+)$")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        let bots = parse_lines(input, |line| {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| anyhow!("expected `pos=<x,y,z>, r=N`"))?;
            let num = |i: usize| caps[i].parse::<i64>().context("bad number");
            Ok(Nanobot {
                pos: (num(1)?, num(2)?, num(3)?),
                radius: num(4)?,
            })
        })?;
        non_empty(bots, "nanobots")
    }
}

/// Axis-aligned cube `min..min + size` on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Cube {
    min: Point3,
    size: i64,
}

impl Cube {
    fn distance_to(&self, (x, y, z): Point3) -> i64 {
        let axis = |v: i64, lo: i64| {
            let hi = lo + self.size - 1;
            (lo - v).max(0) + (v - hi).max(0)
        };
        axis(x, self.min.0) + axis(y, self.min.1) + axis(z, self.min.2)
    }

    fn bots_in_range(&self, bots: &[Nanobot]) -> usize {
        bots.iter()
            .filter(|b| self.distance_to(b.pos) <= b.radius)
            .count()
    }

    fn octants(&self) -> impl Iterator<Item = Cube> + '_ {
        let half = self.size / 2;
        (0..8).map(move |i| Cube {
            min: (
                self.min.0 + if i & 1 != 0 { half } else { 0 },
                self.min.1 + if i & 2 != 0 { half } else { 0 },
                self.min.2 + if i & 4 != 0 { half } else { 0 },
            ),
            size: half,
        })
    }
}

/// Manhattan distance from the origin to the closest point in range of the
/// most nanobots.
///
/// Cubes are refined best-first: most bots possibly in range, then closest
/// to the origin, then smallest. The bot count of a cube bounds the count of
/// every point inside it, so the first unit cube popped is optimal.
pub fn best_distance(bots: &[Nanobot]) -> i64 {
    // Clamping into a box holding the origin and every bot never moves a
    // point out of anyone's range, so the search can start from that box.
    let lo = bots.iter().map(|b| b.pos.0.min(b.pos.1).min(b.pos.2)).fold(0, i64::min);
    let hi = bots.iter().map(|b| b.pos.0.max(b.pos.1).max(b.pos.2)).fold(0, i64::max);
    let size = ((hi - lo + 1) as u64).next_power_of_two() as i64;
    let start = Cube {
        min: (lo, lo, lo),
        size,
    };

    let origin = (0, 0, 0);
    let entry = |cube: Cube| {
        (
            cube.bots_in_range(bots),
            Reverse(cube.distance_to(origin)),
            Reverse(cube.size),
            cube,
        )
    };
    let mut heap = BinaryHeap::from([entry(start)]);
    while let Some((_, Reverse(distance), _, cube)) = heap.pop() {
        if cube.size == 1 {
            return distance;
        }
        heap.extend(cube.octants().map(&entry));
    }
    0
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let strongest = shared
            .iter()
            .max_by_key(|b| b.radius)
            .ok_or_else(|| SolveError::Invariant("no nanobots".into()))?;
        let in_range = shared
            .iter()
            .filter(|b| manhattan3(b.pos, strongest.pos) <= strongest.radius)
            .count();
        Ok(in_range.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_distance(shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    #[test]
    fn test_strongest_range() {
        let input = "\
pos=<0,0,0>, r=4
pos=<1,0,0>, r=1
pos=<4,0,0>, r=3
pos=<0,2,0>, r=1
pos=<0,5,0>, r=3
pos=<0,0,3>, r=1
pos=<1,1,1>, r=1
pos=<1,1,2>, r=1
pos=<1,3,1>, r=1
";
        assert_eq!(solve_input::<Solver>(input, 1).unwrap(), "7");
    }

    #[test]
    fn test_best_point() {
        let input = "\
pos=<10,12,12>, r=2
pos=<12,14,12>, r=2
pos=<16,12,12>, r=4
pos=<14,14,14>, r=6
pos=<50,50,50>, r=200
pos=<10,10,10>, r=5
";
        assert_eq!(solve_input::<Solver>(input, 2).unwrap(), "36");
    }

    #[test]
    fn test_cube_distance() {
        let cube = Cube { min: (0, 0, 0), size: 4 };
        assert_eq!(cube.distance_to((2, 2, 2)), 0);
        assert_eq!(cube.distance_to((5, -1, 3)), 3);
        assert_eq!(cube.octants().count(), 8);
    }
}
