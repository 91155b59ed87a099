//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::io::Read;
use std::path::PathBuf;

/// Where the puzzle input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Read the whole input; invalid UTF-8 is an error
    pub fn read(&self) -> Result<String, CliError> {
        match self {
            InputSource::Stdin => {
                let mut input = String::new();
                std::io::stdin().lock().read_to_string(&mut input)?;
                Ok(input)
            }
            InputSource::File(path) => std::fs::read_to_string(path).map_err(|source| CliError::Input {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// One puzzle to solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub year: u16,
    pub day: u8,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    pub input: InputSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the catalogue, optionally for a single year
    List { year_filter: Option<u16> },
    Solve(SolveRequest),
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    pub command: Command,
    /// Show parse and solve times
    pub timings: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let command = if args.list {
            Command::List {
                year_filter: args.year,
            }
        } else {
            let (Some(year), Some(day)) = (args.year, args.day) else {
                return Err(CliError::Config("--year and --day are required to solve a puzzle".into()));
            };
            Command::Solve(SolveRequest {
                year,
                day,
                part_filter: args.part,
                input: args.input.map_or(InputSource::Stdin, InputSource::File),
            })
        };

        Ok(Config {
            command,
            timings: args.timings,
            quiet: args.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config(argv: &[&str]) -> Config {
        Config::from_args(Args::try_parse_from(argv).unwrap()).unwrap()
    }

    #[test]
    fn test_solve_from_stdin_by_default() {
        let cfg = config(&["aoc", "-y", "2015", "-d", "1"]);
        assert_eq!(
            cfg.command,
            Command::Solve(SolveRequest {
                year: 2015,
                day: 1,
                part_filter: None,
                input: InputSource::Stdin,
            })
        );
        assert!(!cfg.quiet && !cfg.timings);
    }

    #[test]
    fn test_list_with_year_filter() {
        let cfg = config(&["aoc", "--list", "-y", "2020", "-q"]);
        assert_eq!(cfg.command, Command::List { year_filter: Some(2020) });
        assert!(cfg.quiet);
    }

    #[test]
    fn test_input_file_is_read() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "(()(()(").unwrap();
        let cfg = config(&["aoc", "-y", "2015", "-d", "1", "-i", file.path().to_str().unwrap()]);
        let Command::Solve(request) = cfg.command else {
            panic!("expected a solve command");
        };
        assert_eq!(request.input.read().unwrap(), "(()(()(");
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = InputSource::File(dir.path().join("nope.txt"));
        let err = missing.read().unwrap_err();
        assert!(matches!(err, CliError::Input { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_invalid_utf8_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x0a]).unwrap();
        let source = InputSource::File(file.path().to_path_buf());
        assert!(matches!(source.read(), Err(CliError::Input { .. })));
    }
}
