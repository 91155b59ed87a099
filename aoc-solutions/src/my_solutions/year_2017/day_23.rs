use crate::utils::machine::{Instruction, Machine, parse_program};
use crate::utils::numeric::isqrt;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_program(input)
    }
}

/// Range scanned by the debug-off program: `b`, `c` and the stride between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    pub start: i64,
    pub end: i64,
    pub stride: i64,
}

impl Scan {
    /// Read the range from the program's literals (instructions 1, 5, 6, 8 and 31).
    pub fn from_program(program: &[Instruction]) -> Result<Self, SolveError> {
        let literal = |line: usize| {
            program
                .get(line)
                .and_then(|ins| ins.operands().get(1).and_then(|op| op.literal()))
                .ok_or_else(|| {
                    SolveError::Invariant(format!(
                        "instruction {} does not end in a literal",
                        line + 1
                    ))
                })
        };
        let start = literal(0)? * literal(4)? - literal(5)?;
        let end = start - literal(7)?;
        let stride = -literal(30)?;
        if stride <= 0 || end < start {
            return Err(SolveError::Invariant("scan range never terminates".into()));
        }
        Ok(Self { start, end, stride })
    }
}

/// Trial division by `2..isqrt(n)`, upper bound exclusive.
///
/// Squares of primes slip through as "prime".
fn has_small_factor(n: i64) -> bool {
    let n = n.unsigned_abs();
    (2..isqrt(n)).any(|d| n % d == 0)
}

pub fn composites(scan: Scan) -> usize {
    (scan.start..=scan.end)
        .step_by(scan.stride as usize)
        .filter(|&n| has_small_factor(n))
        .count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut machine = Machine::new(shared.clone());
        machine.run();
        Ok(machine.mul_count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Scan::from_program(shared).map(|scan| composites(scan).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    fn program(seed: i64, scale: i64, offset: i64, span: i64) -> String {
        format!(
            "\
set b {seed}
set c b
jnz a 2
jnz 1 5
mul b {scale}
sub b {offset}
set c b
sub c {span}
set f 1
set d 2
set e 2
set g d
mul g e
sub g b
jnz g 2
set f 0
sub e -1
set g e
sub g b
jnz g -8
sub d -1
set g d
sub g b
jnz g -13
jnz f 2
sub h -1
set g b
sub g c
jnz g 2
jnz 1 3
sub b -17
jnz 1 -23
"
        )
    }

    #[test]
    fn test_mul_count() {
        let input = program(57, 100, -100000, -17000);
        assert_eq!(solve_input::<Solver>(&input, 1).unwrap(), "3025");
    }

    #[test]
    fn test_scan_matches_interpreter() {
        let source = program(5, 2, -10, -34);
        let parsed = parse_program(&source).unwrap();
        let scan = Scan::from_program(&parsed).unwrap();
        assert_eq!(scan, Scan { start: 20, end: 54, stride: 17 });

        let mut machine = Machine::new(parsed);
        machine.set_register('a', 1);
        machine.run();
        assert_eq!(machine.register('h'), 2);
        assert_eq!(solve_input::<Solver>(&source, 2).unwrap(), "2");
    }

    #[test]
    fn test_real_shape() {
        let parsed = parse_program(&program(57, 100, -100000, -17000)).unwrap();
        let scan = Scan::from_program(&parsed).unwrap();
        assert_eq!((scan.start, scan.end, scan.stride), (105700, 122700, 17));
    }

    #[test]
    fn test_prime_squares_slip_through() {
        assert!(!has_small_factor(25));
        assert!(has_small_factor(27));
        assert!(!has_small_factor(29));
    }
}
