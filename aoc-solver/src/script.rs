//! The per-script entry contract: stdin in, one answer line out

use crate::error::SolverError;
use crate::solver::SolverExt;
use std::io::{self, Read, Write};
use std::process::ExitCode;

/// Parse `input` and solve a single part
pub fn solve_input<S: SolverExt>(input: &str, part: u8) -> Result<String, SolverError> {
    S::parse_and_solve(input, part)
}

/// Read all of `reader`, solve `part` and write the answer line to `writer`
///
/// Nothing is written unless the solver succeeds; the answer and its
/// newline go out in a single write.
pub fn run_script_with<S, R, W>(part: u8, mut reader: R, mut writer: W) -> Result<(), SolverError>
where
    S: SolverExt,
    R: Read,
    W: Write,
{
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(SolverError::Input)?;

    let mut answer = solve_input::<S>(&input, part)?;
    answer.push('\n');

    writer
        .write_all(answer.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(SolverError::Output)
}

/// Run one script against the process stdin/stdout
///
/// Exits with success after printing the answer, or prints `Error: ...` to
/// stderr and exits with failure.
pub fn run_script<S: SolverExt>(part: u8) -> ExitCode {
    match run_script_with::<S, _, _>(part, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Define `main` for a single-part script binary
///
/// ```ignore
/// aoc_solver::script_main!(aoc_solutions::my_solutions::year_2015::day_01::Solver, 1);
/// ```
#[macro_export]
macro_rules! script_main {
    ($solver:ty, $part:expr) => {
        fn main() -> ::std::process::ExitCode {
            $crate::run_script::<$solver>($part)
        }
    };
}
