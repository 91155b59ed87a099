//! Parsed puzzles behind dynamic dispatch, with wall-clock timing

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Run `f` and record the UTC instants around it
fn timed<T, E>(f: impl FnOnce() -> Result<T, E>) -> Result<(T, Span), E> {
    let start = Utc::now();
    let value = f()?;
    Ok((value, Span { start, end: Utc::now() }))
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Span {
    fn length(self) -> TimeDelta {
        self.end - self.start
    }
}

/// One answered part
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Shared data for one (year, day), parsed once and solved part by part
///
/// Later parts see whatever earlier parts left in the shared data. Timings
/// are informational; answers never depend on them.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parsed: Span,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parsed) = timed(|| S::parse(input))?;
        Ok(Self {
            year,
            day,
            shared,
            parsed,
        })
    }
}

/// Object-safe view of a [`SolverInstance`], as handed out by the registry
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn answer_all(solver: &mut dyn DynSolver) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("{}/{:02} part {}: {}", solver.year(), solver.day(), result.part, result.answer);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part` against the shared data; out-of-range parts are rejected
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    /// Time spent in the parser
    fn parse_duration(&self) -> TimeDelta;
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let shared = &mut self.shared;
        let (answer, span) = timed(|| S::solve_part_checked_range(shared, part))?;
        Ok(SolveResult {
            part,
            answer,
            solve_start: span.start,
            solve_end: span.end,
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parsed.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::solver::AocParser;

    /// Part 1 remembers the word count so part 2 can reuse it.
    struct Words;

    impl AocParser for Words {
        type SharedData<'a> = (Vec<&'a str>, Option<usize>);

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.trim().is_empty() {
                return Err(ParseError::MissingData("no words".into()));
            }
            Ok((input.split_whitespace().collect(), None))
        }
    }

    impl Solver for Words {
        const PARTS: u8 = 2;

        fn solve_part(
            (words, count): &mut Self::SharedData<'_>,
            part: u8,
        ) -> Result<String, SolveError> {
            match part {
                1 => {
                    *count = Some(words.len());
                    Ok(words.len().to_string())
                }
                2 => count
                    .map(|n| (n * 2).to_string())
                    .ok_or_else(|| SolveError::Invariant("part 1 has not run".into())),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_parts_share_data() {
        let mut instance = SolverInstance::<Words>::new(2017, 4, "aa bb cc").unwrap();
        assert!(instance.solve(2).is_err());
        let first = instance.solve(1).unwrap();
        assert_eq!((first.part, first.answer.as_str()), (1, "3"));
        assert_eq!(instance.solve(2).unwrap().answer, "6");
        assert!(instance.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_out_of_range_part() {
        let mut instance = SolverInstance::<Words>::new(2017, 4, "aa").unwrap();
        assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
        assert_eq!((instance.year(), instance.day(), instance.parts()), (2017, 4, 2));
    }

    #[test]
    fn test_parse_failure() {
        assert!(SolverInstance::<Words>::new(2017, 4, "  \n").is_err());
    }
}
