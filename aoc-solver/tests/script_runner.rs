//! Tests for the stdin/stdout script contract

use aoc_solver::{
    AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverError, run_script_with,
};

/// Sums numbers; part 2 requires a positive total.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Totals;

impl AocParser for Totals {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .enumerate()
            .map(|(idx, l)| l.trim().parse().map_err(|e| ParseError::at_line(idx, e)))
            .collect()
    }
}

impl PartSolver<1> for Totals {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Totals {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: i64 = shared.iter().sum();
        if total <= 0 {
            return Err(SolveError::Invariant(format!("total {} is not positive", total)));
        }
        Ok(total.to_string())
    }
}

fn run(part: u8, input: &[u8]) -> (Result<(), SolverError>, Vec<u8>) {
    let mut out = Vec::new();
    let result = run_script_with::<Totals, _, _>(part, input, &mut out);
    (result, out)
}

#[test]
fn test_answer_is_single_line() {
    let (result, out) = run(1, b"1\n2\n3\n");
    assert!(result.is_ok());
    assert_eq!(out, b"6\n");
}

#[test]
fn test_output_is_deterministic() {
    let (_, first) = run(1, b"10\n-4\n");
    let (_, second) = run(1, b"10\n-4\n");
    assert_eq!(first, second);
}

#[test]
fn test_parse_failure_writes_nothing() {
    let (result, out) = run(1, b"1\nx\n");
    match result {
        Err(SolverError::ParseError(ParseError::InvalidFormat(msg))) => {
            assert!(msg.contains("line 2"), "{}", msg)
        }
        other => panic!("expected parse failure, got {:?}", other),
    }
    assert!(out.is_empty());
}

#[test]
fn test_invariant_failure_writes_nothing() {
    let (result, out) = run(2, b"-5\n");
    assert!(matches!(
        result,
        Err(SolverError::SolveError(SolveError::Invariant(_)))
    ));
    assert!(out.is_empty());
}

#[test]
fn test_invalid_utf8_is_input_error() {
    let (result, out) = run(1, &[0xff, 0xfe, b'\n']);
    assert!(matches!(result, Err(SolverError::Input(_))));
    assert!(out.is_empty());
}

#[test]
fn test_unknown_part_rejected() {
    let (result, _) = run(3, b"1\n");
    assert!(matches!(
        result,
        Err(SolverError::SolveError(SolveError::PartOutOfRange(3)))
    ));
}
