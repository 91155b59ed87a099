use crate::utils::input::single_token;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const MAX_RECIPES: usize = 100_000_000;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        single_token(input)?
            .trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("not a digit: {:?}", c)))
            })
            .collect()
    }
}

/// Scoreboard with the two elves' positions.
struct Kitchen {
    scores: Vec<u8>,
    elves: [usize; 2],
}

impl Kitchen {
    fn new() -> Self {
        Self {
            scores: vec![3, 7],
            elves: [0, 1],
        }
    }

    /// Combine the current recipes, appending one or two new scores.
    fn step(&mut self) {
        let [a, b] = self.elves;
        let sum = self.scores[a] + self.scores[b];
        if sum >= 10 {
            self.scores.push(sum / 10);
        }
        self.scores.push(sum % 10);
        let len = self.scores.len();
        self.elves = [
            (a + 1 + self.scores[a] as usize) % len,
            (b + 1 + self.scores[b] as usize) % len,
        ];
    }
}

pub fn ten_after(recipes: usize) -> String {
    let mut kitchen = Kitchen::new();
    while kitchen.scores.len() < recipes + 10 {
        kitchen.step();
    }
    kitchen.scores[recipes..recipes + 10]
        .iter()
        .map(|d| char::from(b'0' + d))
        .collect()
}

/// Number of recipes left of the first appearance of `pattern`.
pub fn first_occurrence(pattern: &[u8]) -> Option<usize> {
    let mut kitchen = Kitchen::new();
    let mut checked = 0;
    while kitchen.scores.len() < MAX_RECIPES {
        while checked + pattern.len() <= kitchen.scores.len() {
            if kitchen.scores[checked..checked + pattern.len()] == *pattern {
                return Some(checked);
            }
            checked += 1;
        }
        kitchen.step();
    }
    None
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let recipes = shared
            .iter()
            .try_fold(0usize, |n, &d| n.checked_mul(10)?.checked_add(d as usize))
            .filter(|&n| n <= MAX_RECIPES)
            .ok_or_else(|| SolveError::Invariant("recipe count is too large".into()))?;
        Ok(ten_after(recipes))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_occurrence(shared)
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::Exhausted("score sequence never appears".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    #[test]
    fn test_ten_scores() {
        assert_eq!(solve_input::<Solver>("9\n", 1).unwrap(), "5158916779");
        assert_eq!(ten_after(5), "0124515891");
        assert_eq!(ten_after(18), "9251071085");
        assert_eq!(ten_after(2018), "5941429882");
    }

    #[test]
    fn test_first_occurrence() {
        assert_eq!(solve_input::<Solver>("51589\n", 2).unwrap(), "9");
        assert_eq!(solve_input::<Solver>("01245\n", 2).unwrap(), "5");
        assert_eq!(first_occurrence(&[9, 2, 5, 1, 0]), Some(18));
        assert_eq!(first_occurrence(&[5, 9, 4, 1, 4]), Some(2018));
    }
}
