//! Catalogue of puzzles by year and day

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// First Advent of Code event
pub const FIRST_YEAR: u16 = 2015;
/// Puzzles per event
pub const LAST_DAY: u8 = 25;

fn check_puzzle(year: u16, day: u8) -> Option<(u16, u8)> {
    (year >= FIRST_YEAR && (1..=LAST_DAY).contains(&day)).then_some((year, day))
}

/// Parses input for one registered puzzle
pub type SolverFactory =
    for<'a> fn(u16, u8, &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>;

fn instantiate<'a, S: Solver + 'static>(
    year: u16,
    day: u8,
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
    Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
}

/// What the registry knows about a puzzle before any input is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
}

#[derive(Clone, Copy)]
struct Entry {
    factory: SolverFactory,
    parts: u8,
}

/// Collects solvers keyed by (year, day), then freezes into a [`SolverRegistry`]
///
/// ```
/// use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct Sum;
///
/// impl AocParser for Sum {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Sum {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i64>().to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register_solver::<Sum>(2015, 1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2015, 1, "1\n2\n3").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "6");
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<(u16, u8), Entry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a factory by hand; the year must be 2015 or later and the day in 1..=25
    pub fn register(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: SolverFactory,
    ) -> Result<Self, RegistrationError> {
        let key = check_puzzle(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        if self.entries.contains_key(&key) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.entries.insert(key, Entry { factory, parts });
        Ok(self)
    }

    /// Add a [`Solver`] type under a year and day
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(year, day, S::PARTS, instantiate::<S>)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

/// Read-only catalogue of puzzles, iterated in (year, day) order
pub struct SolverRegistry {
    entries: BTreeMap<(u16, u8), Entry>,
}

impl SolverRegistry {
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().map(|(&(year, day), entry)| FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.entries.get(&(year, day)).map(|entry| FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entries.contains_key(&(year, day))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `input` with the solver registered for `year`/`day`
    ///
    /// Unknown puzzles are `SolverError::NotFound`; parser failures come back
    /// as `SolverError::ParseError`.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;
        Ok((entry.factory)(year, day, input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::AocParser;

    struct Echo;

    impl AocParser for Echo {
        type SharedData<'a> = &'a str;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                Err(ParseError::MissingData("empty".into()))
            } else {
                Ok(input)
            }
        }
    }

    impl Solver for Echo {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            Ok(format!("{}:{}", part, shared))
        }
    }

    #[test]
    fn test_puzzle_bounds() {
        assert_eq!(check_puzzle(2015, 1), Some((2015, 1)));
        assert_eq!(check_puzzle(2025, 25), Some((2025, 25)));
        assert_eq!(check_puzzle(2014, 1), None);
        assert_eq!(check_puzzle(2015, 0), None);
        assert_eq!(check_puzzle(2015, 26), None);
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = RegistryBuilder::new()
            .register_solver::<Echo>(2016, 3)
            .unwrap()
            .register_solver::<Echo>(2016, 3);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(2016, 3))
        ));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let result = RegistryBuilder::new().register_solver::<Echo>(2014, 1);
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidYearDay(2014, 1))
        ));
    }

    #[test]
    fn test_create_and_solve() {
        let registry = RegistryBuilder::new()
            .register_solver::<Echo>(2017, 9)
            .unwrap()
            .register_solver::<Echo>(2015, 2)
            .unwrap()
            .build();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(2015, 2) && !registry.contains(2015, 3));
        assert_eq!(registry.get_info(2017, 9).map(|i| i.parts), Some(2));
        let years: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(years, vec![(2015, 2), (2017, 9)]);

        let mut solver = registry.create_solver(2017, 9, "abc").unwrap();
        assert_eq!(solver.parts(), 2);
        assert_eq!(solver.solve(2).unwrap().answer, "2:abc");
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_missing_and_parse_errors() {
        let registry = RegistryBuilder::new()
            .register_solver::<Echo>(2017, 9)
            .unwrap()
            .build();

        assert!(matches!(
            registry.create_solver(2017, 10, "abc"),
            Err(SolverError::NotFound(2017, 10))
        ));
        assert!(matches!(
            registry.create_solver(2017, 9, ""),
            Err(SolverError::ParseError(ParseError::MissingData(_)))
        ));
    }
}
