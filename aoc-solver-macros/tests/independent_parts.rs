use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestSolver;

impl AocParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().max().copied().unwrap_or_default().to_string())
    }
}

#[test]
fn test_parts_dispatch() {
    let mut parsed = TestSolver::parse("1\n5\n3").unwrap();
    assert_eq!(TestSolver::solve_part(&mut parsed, 1).unwrap(), "9");
    assert_eq!(TestSolver::solve_part(&mut parsed, 2).unwrap(), "5");
}

#[test]
fn test_part_not_implemented() {
    let mut parsed = TestSolver::parse("1").unwrap();
    let result = TestSolver::solve_part(&mut parsed, 3);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(3))));
}

#[test]
fn test_parts_constant() {
    assert_eq!(TestSolver::PARTS, 2);
}
