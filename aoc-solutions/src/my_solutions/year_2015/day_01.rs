use crate::utils::input::single_token;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        single_token(input)?
            .chars()
            .enumerate()
            .map(|(idx, c)| match c {
                '(' => Ok(1),
                ')' => Ok(-1),
                other => Err(ParseError::InvalidFormat(format!(
                    "unexpected {:?} at position {}",
                    other,
                    idx + 1
                ))),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .scan(0i64, |floor, step| {
                *floor += step;
                Some(*floor)
            })
            .position(|floor| floor == -1)
            .map(|idx| (idx + 1).to_string())
            .ok_or_else(|| SolveError::Exhausted("never reached the basement".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    #[test]
    fn test_final_floor() {
        for (input, expected) in [("(())", "0"), ("(()(()(", "3"), ("))(((((", "3"), (")())())", "-3")] {
            assert_eq!(solve_input::<Solver>(input, 1).unwrap(), expected);
        }
    }

    #[test]
    fn test_first_basement() {
        assert_eq!(solve_input::<Solver>(")", 2).unwrap(), "1");
        assert_eq!(solve_input::<Solver>("()())", 2).unwrap(), "5");
        assert!(solve_input::<Solver>("((", 2).is_err());
    }

    #[test]
    fn test_rejects_other_characters() {
        assert!(solve_input::<Solver>("(x)", 1).is_err());
    }
}
