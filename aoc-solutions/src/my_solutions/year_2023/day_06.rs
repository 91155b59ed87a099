use crate::utils::input::lines;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Race durations and record distances, as written.
#[derive(Debug)]
pub struct Races<'a> {
    times: Vec<&'a str>,
    records: Vec<&'a str>,
}

fn labelled<'a>(line: &'a str, label: &str) -> anyhow::Result<Vec<&'a str>> {
    let values = line
        .trim()
        .strip_prefix(label)
        .ok_or_else(|| anyhow!("expected a line starting with {:?}", label))?;
    let values: Vec<&str> = values.split_whitespace().collect();
    for value in &values {
        value
            .parse::<u64>()
            .with_context(|| format!("{} {:?}", label, value))?;
    }
    Ok(values)
}

impl AocParser for Solver {
    type SharedData<'a> = Races<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (times, records) = match lines(input)[..] {
            [times, records] => (labelled(times, "Time:")?, labelled(records, "Distance:")?),
            _ => return Err(ParseError::InvalidFormat("expected a Time: and a Distance: line".into())),
        };
        if times.is_empty() {
            return Err(ParseError::MissingData("no races".into()));
        }
        if times.len() != records.len() {
            return Err(ParseError::InvalidFormat(format!(
                "{} times but {} distances",
                times.len(),
                records.len()
            )));
        }
        Ok(Races { times, records })
    }
}

fn is_win(hold: u64, time: u64, record: u64) -> bool {
    hold as u128 * (time - hold) as u128 > record as u128
}

/// Number of whole hold times that beat `record` in a race of `time` ms.
///
/// Solves `h * (time - h) > record` with a float root, then nudges it to
/// the exact integer boundary.
pub fn ways_to_win(time: u64, record: u64) -> u64 {
    let (t, d) = (time as f64, record as f64);
    let disc = t * t - 4.0 * d;
    if disc < 0.0 {
        return 0;
    }
    let mut lo = (((t - disc.sqrt()) / 2.0).floor().max(0.0) as u64).min(time / 2);
    while lo > 0 && is_win(lo - 1, time, record) {
        lo -= 1;
    }
    while lo <= time / 2 && !is_win(lo, time, record) {
        lo += 1;
    }
    if lo > time / 2 {
        return 0;
    }
    // The winning holds are symmetric around time / 2.
    time - 2 * lo + 1
}

fn concatenated(values: &[&str]) -> Result<u64, SolveError> {
    values
        .concat()
        .parse()
        .map_err(|e| SolveError::Invariant(format!("kerned value does not fit: {}", e)))
}

fn numbers(values: &[&str]) -> Result<Vec<u64>, SolveError> {
    values
        .iter()
        .map(|v| v.parse().map_err(|e| SolveError::Invariant(format!("{:?}: {}", v, e))))
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let times = numbers(&shared.times)?;
        let records = numbers(&shared.records)?;
        let product: u64 = times
            .iter()
            .zip(&records)
            .map(|(&t, &d)| ways_to_win(t, d))
            .product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let time = concatenated(&shared.times)?;
        let record = concatenated(&shared.records)?;
        Ok(ways_to_win(time, record).to_string())
    }
}
