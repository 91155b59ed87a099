use crate::utils::input::{groups, non_empty};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    /// Calories carried per elf, largest first.
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut totals = groups(input)
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|line| {
                        line.trim()
                            .parse::<u64>()
                            .map_err(|e| ParseError::InvalidFormat(format!("{:?}: {}", line, e)))
                    })
                    .sum::<Result<u64, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        totals.sort_unstable_by(|a, b| b.cmp(a));
        non_empty(totals, "elves")
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared[0].to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().take(3).sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const SAMPLE: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>(SAMPLE, 1).unwrap(), "24000");
        assert_eq!(solve_input::<Solver>(SAMPLE, 2).unwrap(), "45000");
    }

    #[test]
    fn test_empty_input() {
        assert!(solve_input::<Solver>("\n\n", 1).is_err());
    }
}
