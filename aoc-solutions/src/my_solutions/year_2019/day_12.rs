use crate::utils::input::{non_empty, parse_lines};
use crate::utils::numeric::lcm_all;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use regex::Regex;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const STEPS: usize = 1000;

/// Positions and velocities of every moon along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Axis {
    pos: Vec<i64>,
    vel: Vec<i64>,
}

impl Axis {
    fn step(&mut self) {
        for i in 0..self.pos.len() {
            for j in 0..self.pos.len() {
                self.vel[i] += (self.pos[j] - self.pos[i]).signum();
            }
        }
        for (p, v) in self.pos.iter_mut().zip(&self.vel) {
            *p += v;
        }
    }

    /// Steps until this axis first returns to its starting state.
    fn period(&self) -> i64 {
        let mut state = self.clone();
        let mut steps = 0;
        loop {
            state.step();
            steps += 1;
            if state == *self {
                return steps;
            }
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<[i64; 3]>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(r"^<x=(-?\d+), y=(-?\d+), z=(-?\d+)>$").map_err(|e| ParseError::Other(e.to_string()))?;
        let moons = parse_lines(input, |line| {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| anyhow!("expected `<x=X, y=Y, z=Z>`"))?;
            let num = |i: usize| caps[i].parse::<i64>().context("bad coordinate");
            Ok([num(1)?, num(2)?, num(3)?])
        })?;
        non_empty(moons, "moons")
    }
}

fn axes(moons: &[[i64; 3]]) -> [Axis; 3] {
    std::array::from_fn(|d| Axis {
        pos: moons.iter().map(|m| m[d]).collect(),
        vel: vec![0; moons.len()],
    })
}

pub fn energy_after(moons: &[[i64; 3]], steps: usize) -> i64 {
    let mut axes = axes(moons);
    for axis in axes.iter_mut() {
        for _ in 0..steps {
            axis.step();
        }
    }
    (0..moons.len())
        .map(|m| {
            let potential: i64 = axes.iter().map(|a| a.pos[m].abs()).sum();
            let kinetic: i64 = axes.iter().map(|a| a.vel[m].abs()).sum();
            potential * kinetic
        })
        .sum()
}

/// Axes evolve independently, so the system repeats at the lcm of their periods.
pub fn system_period(moons: &[[i64; 3]]) -> i64 {
    lcm_all(axes(moons).iter().map(Axis::period))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(energy_after(shared, STEPS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(system_period(shared).to_string())
    }
}
