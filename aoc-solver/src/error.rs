//! Failure kinds, from malformed input through to I/O on the answer line

use std::fmt::Display;
use thiserror::Error;

/// The input does not have the shape the puzzle expects
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A section, header or value the puzzle needs is absent
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

impl ParseError {
    /// `InvalidFormat` tagged with the 1-based line number of `line_idx`
    pub fn at_line(line_idx: usize, err: impl Display) -> Self {
        Self::InvalidFormat(format!("(line {}) {}", line_idx + 1, err))
    }
}

/// Helpers built on `anyhow` report through here with their full context chain.
impl From<anyhow::Error> for ParseError {
    fn from(err: anyhow::Error) -> Self {
        Self::InvalidFormat(format!("{:#}", err))
    }
}

/// A part could not produce an answer from well-formed input
#[derive(Debug, Error)]
pub enum SolveError {
    /// The puzzle declares the part but has no solver for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An assumption about the input broke mid-solve (no start tile, a
    /// missing device, a negative total)
    #[error("Invariant violated: {0}")]
    Invariant(String),
    /// An open-ended search hit its bound without a match
    #[error("Search exhausted: {0}")]
    Exhausted(String),
}

/// Everything a script or the runner can fail with
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("No solver registered for {0}/{1:02}")]
    NotFound(u16, u8),
    /// Reading stdin or the input file failed, invalid UTF-8 included
    #[error("Failed to read input: {0}")]
    Input(#[source] std::io::Error),
    #[error("Failed to write answer: {0}")]
    Output(#[source] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Rejected while building a registry
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error("{0}/{1:02} is registered twice")]
    DuplicateSolver(u16, u8),
    #[error("{0}/{1:02} is not a puzzle date")]
    InvalidYearDay(u16, u8),
}
