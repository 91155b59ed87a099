//! Advent of Code Solver Library
//!
//! The shared contract behind every puzzle script: how input is parsed, how
//! each part is solved, how failures are classified, and how a script turns
//! stdin into a single answer line.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`], [`PartSolver`] and [`Solver`] traits for puzzle code
//! - `#[derive(AocSolver)]` to dispatch part numbers to `PartSolver<N>` impls
//! - The script runner ([`run_script`], [`script_main!`])
//! - A year/day [`SolverRegistry`] used by the developer runner
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, solve_input};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i32>().to_string())
//!     }
//! }
//!
//! assert_eq!(solve_input::<MyDay1>("1\n2\n3", 1).unwrap(), "6");
//! assert_eq!(solve_input::<MyDay1>("2\n3\n4", 2).unwrap(), "24");
//! ```
//!
//! # Error taxonomy
//!
//! - [`ParseError`]: the input does not have the expected shape
//! - [`SolveError::Invariant`]: an assumption about the input broke mid-solve
//! - [`SolveError::Exhausted`]: an open-ended search found nothing
//!
//! Scripts never recover from any of them; they print `Error: ...` and exit non-zero.

mod error;
mod instance;
mod registry;
mod script;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{FactoryInfo, RegistryBuilder, SolverFactory, SolverRegistry};
pub use script::{run_script, run_script_with, solve_input};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

pub use aoc_solver_macros::AocSolver;
