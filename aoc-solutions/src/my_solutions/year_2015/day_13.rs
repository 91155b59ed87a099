use crate::utils::input::{non_empty, parse_lines};
use crate::utils::seq::permutations;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use regex::Regex;
use std::collections::HashMap;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// `happiness[(a, b)]` is how `a` feels about sitting next to `b`.
pub struct Table {
    guests: usize,
    happiness: HashMap<(usize, usize), i64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Table;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(
            r"^(\w+) would (gain|lose) (\d+) happiness units? by sitting next to (\w+)\.$",
        )
        .map_err(|e| ParseError::Other(e.to_string()))?;

        let rules = parse_lines(input, |line| {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| anyhow!("unrecognised rule {:?}", line))?;
            let amount: i64 = caps[3].parse().context("bad amount")?;
            let amount = if &caps[2] == "lose" { -amount } else { amount };
            Ok((caps[1].to_string(), caps[4].to_string(), amount))
        })?;

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut happiness = HashMap::new();
        for (a, b, amount) in non_empty(rules, "rules")? {
            let next = index.len();
            let a = *index.entry(a).or_insert(next);
            let next = index.len();
            let b = *index.entry(b).or_insert(next);
            happiness.insert((a, b), amount);
        }
        Ok(Table {
            guests: index.len(),
            happiness,
        })
    }
}

impl Table {
    fn pair(&self, a: usize, b: usize) -> i64 {
        self.happiness.get(&(a, b)).copied().unwrap_or(0)
            + self.happiness.get(&(b, a)).copied().unwrap_or(0)
    }

    /// Best total happiness around a circular table of `guests` seats.
    ///
    /// Guests without rules (e.g. an added neutral guest) contribute zero.
    fn best(&self, guests: usize) -> i64 {
        if guests < 2 {
            return 0;
        }
        // Seat guest 0 first; rotations of the same circle are equivalent.
        let rest: Vec<usize> = (1..guests).collect();
        permutations(&rest)
            .map(|order| {
                let mut total = 0;
                let mut prev = 0;
                for &g in &order {
                    total += self.pair(prev, g);
                    prev = g;
                }
                total + self.pair(prev, 0)
            })
            .max()
            .unwrap_or(0)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.best(shared.guests).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.best(shared.guests + 1).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const SAMPLE: &str = "\
Alice would gain 54 happiness units by sitting next to Bob.
Alice would lose 79 happiness units by sitting next to Carol.
Alice would lose 2 happiness units by sitting next to David.
Bob would gain 83 happiness units by sitting next to Alice.
Bob would lose 7 happiness units by sitting next to Carol.
Bob would lose 63 happiness units by sitting next to David.
Carol would lose 62 happiness units by sitting next to Alice.
Carol would gain 60 happiness units by sitting next to Bob.
Carol would gain 55 happiness units by sitting next to David.
David would gain 46 happiness units by sitting next to Alice.
David would lose 7 happiness units by sitting next to Bob.
David would gain 41 happiness units by sitting next to Carol.
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>(SAMPLE, 1).unwrap(), "330");
    }

    #[test]
    fn test_neutral_guest_never_improves() {
        let with_me: i64 = solve_input::<Solver>(SAMPLE, 2).unwrap().parse().unwrap();
        assert!(with_me <= 330);
    }
}
