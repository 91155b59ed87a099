//! Parser and solver traits implemented by every puzzle

use crate::error::{ParseError, SolveError, SolverError};
use std::ops::RangeInclusive;

/// Turns the raw puzzle text into the structure all parts work on
///
/// `SharedData` may borrow from the input (`Vec<&'a str>`, maps keyed by
/// node names) or own it outright. It is mutable during solving, so a part
/// can leave results behind for a later part.
pub trait AocParser {
    type SharedData<'a>;

    /// Parse the full puzzle input; malformed text is a [`ParseError`]
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// One part of a puzzle; `N` is the part number
///
/// Implemented once per part and wired up by `#[derive(AocSolver)]`.
pub trait PartSolver<const N: u8>: AocParser {
    /// The answer line, without a trailing newline
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A whole puzzle: how many parts it has and how to solve each of them
///
/// Normally derived. A hand-written impl looks like this:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
///
/// /// Final floor, then the first step into the basement.
/// struct Floors;
///
/// impl AocParser for Floors {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .trim_end()
///             .chars()
///             .map(|c| match c {
///                 '(' => Ok(1),
///                 ')' => Ok(-1),
///                 other => Err(ParseError::InvalidFormat(format!("unexpected {:?}", other))),
///             })
///             .collect()
///     }
/// }
///
/// impl Solver for Floors {
///     const PARTS: u8 = 2;
///
///     fn solve_part(moves: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(moves.iter().sum::<i64>().to_string()),
///             2 => moves
///                 .iter()
///                 .scan(0, |floor, step| {
///                     *floor += step;
///                     Some(*floor)
///                 })
///                 .position(|floor| floor < 0)
///                 .map(|idx| (idx + 1).to_string())
///                 .ok_or_else(|| SolveError::Exhausted("never reaches the basement".into())),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// assert_eq!(Floors::parse_and_solve("(()(()(", 1).unwrap(), "3");
/// assert_eq!(Floors::parse_and_solve("()())", 2).unwrap(), "5");
/// assert!(Floors::parse_and_solve("()", 3).is_err());
/// ```
pub trait Solver: AocParser {
    /// Number of parts, counted from 1
    const PARTS: u8;

    /// Solve `part`; parts the puzzle lacks give `SolveError::PartNotImplemented`
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry points shared by the script runner and the registry
pub trait SolverExt: Solver {
    /// Valid part numbers
    fn parts() -> RangeInclusive<u8> {
        1..=Self::PARTS
    }

    /// Like [`Solver::solve_part`], but parts outside [`SolverExt::parts`]
    /// fail with `SolveError::PartOutOfRange`
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if Self::parts().contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }

    /// Parse `input` and solve a single part
    fn parse_and_solve(input: &str, part: u8) -> Result<String, SolverError> {
        let mut shared = Self::parse(input)?;
        Ok(Self::solve_part_checked_range(&mut shared, part)?)
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
