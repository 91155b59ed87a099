//! Input shapes shared by the puzzles
//!
//! Every helper reports malformed input as a [`ParseError`]; line numbers in
//! messages are 1-based.

use aoc_solver::ParseError;
use std::fmt::Display;
use std::str::FromStr;

/// Whole input with trailing whitespace stripped; empty input is an error.
pub fn single_token(input: &str) -> Result<&str, ParseError> {
    let token = input.trim_end();
    if token.is_empty() {
        Err(ParseError::MissingData("empty input".into()))
    } else {
        Ok(token)
    }
}

/// Whole input parsed as one value (typically an integer).
pub fn parse_token<T>(input: &str) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    let token = single_token(input)?;
    token
        .trim()
        .parse()
        .map_err(|e| ParseError::InvalidFormat(format!("{:?}: {}", token, e)))
}

/// Input split on newlines, with trailing empty lines dropped.
pub fn lines(input: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = input.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines
}

/// Input split into blank-line-separated groups of lines.
pub fn groups(input: &str) -> Vec<Vec<&str>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();
    for line in input.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Comma-separated tokens on a single line.
pub fn comma_separated<T>(input: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    single_token(input)?
        .trim()
        .split(',')
        .map(|tok| {
            let tok = tok.trim();
            tok.parse()
                .map_err(|e| ParseError::InvalidFormat(format!("{:?}: {}", tok, e)))
        })
        .collect()
}

/// Parse each line with `f`, aborting on the first malformed line.
pub fn parse_lines<'a, T, F>(input: &'a str, mut f: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    lines(input)
        .into_iter()
        .enumerate()
        .map(|(idx, line)| f(line).map_err(|e| ParseError::at_line(idx, format!("{:#}", e))))
        .collect()
}

/// Whitespace-separated values on one line.
pub fn whitespace_separated<T>(line: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    line.split_whitespace()
        .map(|tok| tok.parse().map_err(anyhow::Error::from))
        .collect()
}

/// Fail with `MissingData` when a parser produced nothing.
pub fn non_empty<T>(items: Vec<T>, what: &str) -> Result<Vec<T>, ParseError> {
    if items.is_empty() {
        Err(ParseError::MissingData(format!("no {}", what)))
    } else {
        Ok(items)
    }
}
