//! Advent of Code puzzle solutions
//!
//! Puzzles live under [`my_solutions`], organised by year and day; each
//! module exposes a `Solver` type. Every part of every puzzle also has its
//! own script binary in `src/bin/` reading stdin and printing one answer.
//! [`catalogue`] collects all of them into a [`aoc_solver::SolverRegistry`].

pub mod my_solutions;
pub mod utils;

mod catalogue;

pub use catalogue::catalogue;
