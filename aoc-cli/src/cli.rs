//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solution runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code puzzle solutions", version)]
pub struct Args {
    /// Puzzle year (required unless listing)
    #[arg(short, long, required_unless_present = "list")]
    pub year: Option<u16>,

    /// Puzzle day (required unless listing)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25), required_unless_present = "list")]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Puzzle input file; standard input is read when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Show parse and solve times next to each answer
    #[arg(long)]
    pub timings: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// List the available puzzles instead of solving one
    #[arg(long, conflicts_with_all = ["day", "part", "input", "timings"])]
    pub list: bool,
}
