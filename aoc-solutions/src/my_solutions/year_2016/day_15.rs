use crate::utils::input::{non_empty, parse_lines};
use crate::utils::numeric::crt;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use regex::Regex;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disc {
    pub positions: i64,
    pub start: i64,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Disc>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(r"has (\d+) positions; at time=0, it is at position (\d+)")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        let discs = parse_lines(input, |line| {
            let caps = re.captures(line).ok_or_else(|| anyhow!("unrecognised disc {:?}", line))?;
            let positions: i64 = caps[1].parse().context("bad position count")?;
            let start: i64 = caps[2].parse().context("bad start position")?;
            if positions == 0 {
                return Err(anyhow!("a disc needs at least one position"));
            }
            Ok(Disc { positions, start })
        })?;
        non_empty(discs, "discs")
    }
}

/// First press time at which the capsule falls through every disc.
///
/// Disc `i` (1-based) is reached at `t + i`, so `t ≡ -(start + i) (mod positions)`.
pub fn first_drop(discs: &[Disc]) -> Result<i64, SolveError> {
    let congruences: Vec<(i64, i64)> = discs
        .iter()
        .zip(1..)
        .map(|(d, i)| ((-(d.start + i)).rem_euclid(d.positions), d.positions))
        .collect();
    crt(&congruences)
        .map(|(t, _)| t)
        .ok_or_else(|| SolveError::Invariant("disc sizes are not pairwise coprime".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_drop(shared).map(|t| t.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut discs = shared.clone();
        discs.push(Disc {
            positions: 11,
            start: 0,
        });
        first_drop(&discs).map(|t| t.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const SAMPLE: &str = "\
Disc #1 has 5 positions; at time=0, it is at position 4.
Disc #2 has 2 positions; at time=0, it is at position 1.
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>(SAMPLE, 1).unwrap(), "5");
    }

    #[test]
    fn test_extra_disc() {
        let t: i64 = solve_input::<Solver>(SAMPLE, 2).unwrap().parse().unwrap();
        assert_eq!((t + 3) % 11, 0);
        assert_eq!((4 + t + 1) % 5, 0);
        assert_eq!((1 + t + 2) % 2, 0);
    }
}
