//! Property-based tests for the AocSolver derive macro

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumProduct;

impl AocParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat("bad int".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

fn to_input(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Solver::solve_part(shared, N)` agrees with `<Self as PartSolver<N>>::solve`.
mod part_dispatch {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn solve_part_dispatches_to_part_solver(
            numbers in prop::collection::vec(1i64..10, 1..6),
            part in 1u8..=2
        ) {
            let input = to_input(&numbers);
            let mut shared1 = <SumProduct as AocParser>::parse(&input).unwrap();
            let mut shared2 = <SumProduct as AocParser>::parse(&input).unwrap();

            let dispatched = <SumProduct as Solver>::solve_part(&mut shared1, part).unwrap();
            let direct = match part {
                1 => <SumProduct as PartSolver<1>>::solve(&mut shared2),
                2 => <SumProduct as PartSolver<2>>::solve(&mut shared2),
                _ => unreachable!(),
            }
            .unwrap();

            prop_assert_eq!(dispatched, direct);
        }
    }

    #[test]
    fn parts_constant_matches_attribute() {
        assert_eq!(<SumProduct as Solver>::PARTS, 2);
    }
}

/// Part numbers outside `1..=max_parts` are rejected by the generated dispatch.
mod invalid_part {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn invalid_part_returns_not_implemented(invalid_part in prop_oneof![Just(0u8), 3u8..=255]) {
            let mut shared = <SumProduct as AocParser>::parse("1\n2\n3").unwrap();

            match <SumProduct as Solver>::solve_part(&mut shared, invalid_part) {
                Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, invalid_part),
                other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
            }
        }
    }
}

/// Results cached in the shared data by part 1 are visible to part 2.
mod shared_state {
    use super::*;

    struct Cached {
        numbers: Vec<i64>,
        total: Option<i64>,
    }

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct CachingSolver;

    impl AocParser for CachingSolver {
        type SharedData<'a> = Cached;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            let numbers = SumProduct::parse(input)?;
            Ok(Cached {
                numbers,
                total: None,
            })
        }
    }

    impl PartSolver<1> for CachingSolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let total = *shared
                .total
                .get_or_insert_with(|| shared.numbers.iter().sum());
            Ok(total.to_string())
        }
    }

    impl PartSolver<2> for CachingSolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let total = shared
                .total
                .ok_or_else(|| SolveError::Invariant("part 1 has not run".into()))?;
            Ok((total * 2).to_string())
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn part_two_sees_part_one_cache(numbers in prop::collection::vec(1i64..100, 1..6)) {
            let input = to_input(&numbers);
            let expected: i64 = numbers.iter().sum();
            let mut shared = <CachingSolver as AocParser>::parse(&input).unwrap();

            let first = <CachingSolver as Solver>::solve_part(&mut shared, 1).unwrap();
            prop_assert_eq!(first, expected.to_string());
            let second = <CachingSolver as Solver>::solve_part(&mut shared, 2).unwrap();
            prop_assert_eq!(second, (expected * 2).to_string());
        }
    }

    #[test]
    fn part_two_alone_reports_invariant() {
        let mut shared = <CachingSolver as AocParser>::parse("4\n5").unwrap();
        let result = <CachingSolver as Solver>::solve_part(&mut shared, 2);
        assert!(matches!(result, Err(SolveError::Invariant(_))));
    }
}
