use crate::utils::input::{non_empty, parse_lines};
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const DIAL_START: i64 = 50;
const DIAL_SIZE: i64 = 100;

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<i64>,
    common_result: Option<CommonResult>,
}

/// Both answers come out of the same pass over the rotations.
#[derive(Debug)]
pub struct CommonResult {
    zero_stops: u64,
    zero_passes: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let rotations = parse_lines(input, |line| {
            let line = line.trim();
            let sign = match line.as_bytes().first() {
                Some(b'L') => -1,
                Some(b'R') => 1,
                _ => return Err(anyhow!("first character needs to be 'L' or 'R'")),
            };
            let clicks: u32 = line[1..].parse().context("rotation must be a non-negative number")?;
            Ok(sign * i64::from(clicks))
        })?;
        Ok(SharedData {
            rotations: non_empty(rotations, "rotations")?,
            common_result: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).zero_stops.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).zero_passes.to_string())
    }
}

fn solve_once_for_both(shared: &mut SharedData) -> &CommonResult {
    shared.common_result.get_or_insert_with(|| {
        let (_, zero_stops, zero_passes) = shared.rotations.iter().fold(
            (DIAL_START, 0u64, 0u64),
            |(dial, mut zero_stops, mut zero_passes), rotation| {
                let moved = dial + rotation;
                // Reaching or crossing 0 going left counts once, then once per full turn.
                if moved <= 0 && dial != 0 {
                    zero_passes += 1;
                }
                zero_passes += (moved / DIAL_SIZE).unsigned_abs();
                let dial = moved.rem_euclid(DIAL_SIZE);
                if dial == 0 {
                    zero_stops += 1;
                }
                (dial, zero_stops, zero_passes)
            },
        );

        CommonResult {
            zero_stops,
            zero_passes,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const SAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>(SAMPLE, 1).unwrap(), "3");
        assert_eq!(solve_input::<Solver>(SAMPLE, 2).unwrap(), "6");
    }

    #[test]
    fn test_full_turns() {
        assert_eq!(solve_input::<Solver>("R1000\n", 2).unwrap(), "10");
        assert_eq!(solve_input::<Solver>("L50\nL100\n", 2).unwrap(), "2");
    }

    #[test]
    fn test_both_parts_share_one_pass() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "6");
        assert!(shared.common_result.is_some());
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "3");
    }

    #[test]
    fn test_bad_direction() {
        assert!(solve_input::<Solver>("X10\n", 1).is_err());
        assert!(solve_input::<Solver>("L-5\n", 1).is_err());
    }
}
