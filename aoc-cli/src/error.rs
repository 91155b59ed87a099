use std::path::PathBuf;
use thiserror::Error;

/// Anything that stops the runner; printed as `Error: ...` before exiting 1
#[derive(Error, Debug)]
pub enum CliError {
    /// Arguments that parse but do not describe a runnable request
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Solver(#[from] aoc_solver::SolverError),

    /// The built-in catalogue is inconsistent
    #[error("Catalogue error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Reading stdin failed
    #[error("Cannot read stdin: {0}")]
    Io(#[from] std::io::Error),
}
