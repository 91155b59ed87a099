use crate::utils::input::comma_separated;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const NEW_TIMER: usize = 8;
const RESET_TIMER: usize = 6;

/// Number of fish at each timer value.
pub type School = [u64; NEW_TIMER + 1];

impl AocParser for Solver {
    type SharedData<'a> = School;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut school = [0; NEW_TIMER + 1];
        for timer in comma_separated::<usize>(input)? {
            *school.get_mut(timer).ok_or_else(|| {
                ParseError::InvalidFormat(format!("timer {} is above {}", timer, NEW_TIMER))
            })? += 1;
        }
        Ok(school)
    }
}

pub fn population(mut school: School, days: usize) -> u64 {
    for _ in 0..days {
        school.rotate_left(1);
        school[RESET_TIMER] += school[NEW_TIMER];
    }
    school.iter().sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population(*shared, 80).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population(*shared, 256).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, solve_input};

    #[test]
    fn test_sample() {
        let school = Solver::parse("3,4,3,1,2\n").unwrap();
        assert_eq!(population(school, 18), 26);
        assert_eq!(solve_input::<Solver>("3,4,3,1,2\n", 1).unwrap(), "5934");
        assert_eq!(solve_input::<Solver>("3,4,3,1,2\n", 2).unwrap(), "26984457539");
    }

    #[test]
    fn test_bad_timer() {
        assert!(solve_input::<Solver>("3,9\n", 1).is_err());
    }
}
