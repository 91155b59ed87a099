use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

struct Shared<'a> {
    words: Vec<&'a str>,
    longest: Option<&'a str>,
}

/// Single-part solver borrowing from the input
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct Borrowing;

impl AocParser for Borrowing {
    type SharedData<'a> = Shared<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let words: Vec<&str> = input.split_whitespace().collect();
        if words.is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(Shared {
            words,
            longest: None,
        })
    }
}

impl PartSolver<1> for Borrowing {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared
            .words
            .iter()
            .copied()
            .max_by_key(|w| w.len())
            .ok_or_else(|| SolveError::Exhausted("no words".into()))?;
        shared.longest = Some(longest);
        Ok(longest.to_string())
    }
}

#[test]
fn test_borrowed_shared_data() {
    let input = String::from("a bbb cc");
    let mut shared = Borrowing::parse(&input).unwrap();
    assert_eq!(Borrowing::solve_part(&mut shared, 1).unwrap(), "bbb");
    assert_eq!(shared.longest, Some("bbb"));
}

#[test]
fn test_single_part_bounds() {
    let mut shared = Borrowing::parse("x").unwrap();
    assert_eq!(Borrowing::PARTS, 1);
    assert!(matches!(
        Borrowing::solve_part(&mut shared, 2),
        Err(SolveError::PartNotImplemented(2))
    ));
}

#[test]
fn test_parse_failure() {
    assert!(matches!(
        Borrowing::parse("   "),
        Err(ParseError::MissingData(_))
    ));
}
