use crate::utils::input::{non_empty, parse_lines};
use crate::utils::interval::{Interval, merge};
use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const MAX_ADDRESS: i64 = u32::MAX as i64;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Interval>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let ranges = parse_lines(input, |line| {
            let (lo, hi) = line
                .trim()
                .split_once('-')
                .ok_or_else(|| anyhow!("expected LOW-HIGH"))?;
            let lo: i64 = lo.parse().context("bad lower bound")?;
            let hi: i64 = hi.parse().context("bad upper bound")?;
            if lo > hi {
                bail!("range {}-{} is reversed", lo, hi);
            }
            Ok(Interval::new(lo, hi))
        })?;
        Ok(merge(non_empty(ranges, "ranges")?))
    }
}

/// Lowest address in `0..=max` outside every merged range.
pub fn lowest_allowed(blocked: &[Interval], max: i64) -> Option<i64> {
    let mut candidate = 0;
    for iv in blocked {
        if iv.start > candidate {
            break;
        }
        candidate = candidate.max(iv.end + 1);
    }
    (candidate <= max).then_some(candidate)
}

/// Number of addresses in `0..=max` outside every merged range.
pub fn allowed_count(blocked: &[Interval], max: i64) -> u64 {
    let covered: u64 = blocked
        .iter()
        .filter_map(|iv| {
            let clipped = Interval::new(iv.start.max(0), iv.end.min(max));
            (!clipped.is_empty()).then(|| clipped.len())
        })
        .sum();
    (max + 1) as u64 - covered
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_allowed(shared, MAX_ADDRESS)
            .map(|a| a.to_string())
            .ok_or_else(|| SolveError::Exhausted("every address is blocked".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(allowed_count(shared, MAX_ADDRESS).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        let blocked = merge(vec![
            Interval::new(5, 8),
            Interval::new(0, 2),
            Interval::new(4, 7),
        ]);
        assert_eq!(lowest_allowed(&blocked, 9), Some(3));
        assert_eq!(allowed_count(&blocked, 9), 2);
    }

    #[test]
    fn test_everything_blocked() {
        let blocked = merge(vec![Interval::new(0, 9)]);
        assert_eq!(lowest_allowed(&blocked, 9), None);
        assert_eq!(allowed_count(&blocked, 9), 0);
    }
}
