//! AOC CLI - developer runner for the Advent of Code solutions

mod cli;
mod config;
mod error;
mod executor;
mod output;

use clap::Parser;
use cli::Args;
use config::{Command, Config};
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    let registry = aoc_solutions::catalogue()?;
    let formatter = OutputFormatter::new(config.quiet, config.timings);

    match config.command {
        Command::List { year_filter } => {
            for info in registry
                .iter_info()
                .filter(|info| year_filter.is_none_or(|y| info.year == y))
            {
                println!("{}", formatter.format_listing(&info));
            }
            Ok(())
        }
        Command::Solve(request) => {
            let input = request.input.read()?;
            let executor = Executor::new(&registry, &request);
            let results = executor.execute(&input, |result| formatter.print_result(result))?;
            formatter.print_summary(&results);
            Ok(())
        }
    }
}
