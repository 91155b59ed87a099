//! End-to-end runs of puzzle scripts through the stdin/stdout contract

use aoc_solutions::my_solutions::{year_2015, year_2016, year_2020, year_2022, year_2024};
use aoc_solver::{SolverError, SolverExt, run_script_with};

fn run<S: SolverExt>(part: u8, input: &str) -> Result<String, SolverError> {
    let mut out = Vec::new();
    run_script_with::<S, _, _>(part, input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).expect("answers are UTF-8"))
}

#[test]
fn floors_final() {
    assert_eq!(run::<year_2015::day_01::Solver>(1, "(())").unwrap(), "0\n");
    assert_eq!(run::<year_2015::day_01::Solver>(1, "(()(()(").unwrap(), "3\n");
}

#[test]
fn floors_first_basement() {
    assert_eq!(run::<year_2015::day_01::Solver>(2, "()())").unwrap(), "5\n");
}

#[test]
fn wrapping_paper() {
    assert_eq!(run::<year_2015::day_02::Solver>(1, "2x3x4\n1x1x10\n").unwrap(), "101\n");
}

#[test]
fn houses_visited() {
    assert_eq!(run::<year_2015::day_03::Solver>(1, ">").unwrap(), "2\n");
    assert_eq!(run::<year_2015::day_03::Solver>(1, "^>v<").unwrap(), "4\n");
}

#[test]
fn nice_strings() {
    let input = "ugknbfddgicrmopn\naaa\njchzalrnumimnmhp\n";
    assert_eq!(run::<year_2015::day_05::Solver>(1, input).unwrap(), "2\n");
}

#[test]
#[ignore = "stretched hashing is slow without optimisations"]
fn stretched_one_time_pad() {
    assert_eq!(run::<year_2016::day_14::Solver>(2, "abc\n").unwrap(), "22551\n");
}

#[test]
fn earliest_bus_timestamp() {
    assert_eq!(
        run::<year_2020::day_13::Solver>(2, "7,13,x,x,59,x,31,19").unwrap(),
        "1068781\n"
    );
}

#[test]
fn location_distance() {
    let input = "3 4\n4 3\n2 5\n1 3\n3 9\n3 3\n";
    assert_eq!(run::<year_2024::day_01::Solver>(1, input).unwrap(), "11\n");
}

#[test]
fn malformed_input_writes_nothing() {
    let mut out = Vec::new();
    let result = run_script_with::<year_2015::day_02::Solver, _, _>(1, "2x3\n".as_bytes(), &mut out);
    assert!(matches!(result, Err(SolverError::ParseError(_))));
    assert!(out.is_empty());
}

#[test]
fn invalid_utf8_is_an_input_error() {
    let mut out = Vec::new();
    let result = run_script_with::<year_2015::day_01::Solver, _, _>(1, &[0xff, 0xfe][..], &mut out);
    assert!(matches!(result, Err(SolverError::Input(_))));
    assert!(out.is_empty());
}

#[test]
fn missing_part_is_rejected() {
    assert!(matches!(
        run::<year_2022::day_25::Solver>(2, "1=\n"),
        Err(SolverError::SolveError(aoc_solver::SolveError::PartOutOfRange(2)))
    ));
}
