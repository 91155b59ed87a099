use crate::utils::input::groups;
use crate::utils::interval::{Interval, merge, merged_contains, total_len};
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct Inventory {
    /// Fresh ranges, merged.
    pub fresh: Vec<Interval>,
    pub available: Vec<i64>,
}

fn parse_range(line: &str) -> anyhow::Result<Interval> {
    let (lo, hi) = line
        .trim()
        .split_once('-')
        .ok_or_else(|| anyhow!("expected `lo-hi`, got {:?}", line))?;
    let lo = lo.parse().with_context(|| format!("range start {:?}", lo))?;
    let hi = hi.parse().with_context(|| format!("range end {:?}", hi))?;
    Ok(Interval::new(lo, hi))
}

impl AocParser for Solver {
    type SharedData<'a> = Inventory;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let sections = groups(input);
        let (ranges, ids) = match &sections[..] {
            [ranges] => (ranges, &[][..]),
            [ranges, ids] => (ranges, &ids[..]),
            _ => {
                return Err(ParseError::InvalidFormat(format!(
                    "expected ranges and ingredient IDs, found {} sections",
                    sections.len()
                )));
            }
        };
        let ranges = ranges
            .iter()
            .enumerate()
            .map(|(idx, line)| parse_range(line).map_err(|e| ParseError::at_line(idx, format!("{:#}", e))))
            .collect::<Result<Vec<_>, _>>()?;
        let available = ids
            .iter()
            .map(|id| {
                id.trim()
                    .parse()
                    .map_err(|e| ParseError::InvalidFormat(format!("ingredient {:?}: {}", id, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Inventory {
            fresh: merge(ranges),
            available,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fresh = shared
            .available
            .iter()
            .filter(|&&id| merged_contains(&shared.fresh, id))
            .count();
        Ok(fresh.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_len(&shared.fresh).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const SAMPLE: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>(SAMPLE, 1).unwrap(), "3");
        assert_eq!(solve_input::<Solver>(SAMPLE, 2).unwrap(), "14");
    }

    #[test]
    fn test_ranges_only() {
        assert_eq!(solve_input::<Solver>("1-3\n3-4\n", 2).unwrap(), "4");
    }

    #[test]
    fn test_bad_range() {
        let err = solve_input::<Solver>("3-5\n10:14\n\n1\n", 1).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }
}
