use crate::utils::machine::{Instruction, Machine, parse_program};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const FIRST_EGGS: i64 = 7;
const SECOND_EGGS: i64 = 12;

// The program computes a! and then adds the product of these two literals.
const FACTOR_LINES: (usize, usize) = (19, 20);

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_program(input)
    }
}

pub fn run_with_eggs(program: &[Instruction], eggs: i64) -> i64 {
    let mut machine = Machine::new(program.to_vec());
    machine.set_register('a', eggs);
    machine.run();
    machine.register('a')
}

/// The interpreter's answer for programs of the usual shape, without running it.
pub fn closed_form(program: &[Instruction], eggs: i64) -> Result<i64, SolveError> {
    let literal = |line: usize| {
        program
            .get(line)
            .and_then(|ins| ins.operands().first().and_then(|op| op.literal()))
            .ok_or_else(|| {
                SolveError::Invariant(format!("instruction {} does not hold a literal", line + 1))
            })
    };
    let (x, y) = (literal(FACTOR_LINES.0)?, literal(FACTOR_LINES.1)?);
    let factorial: i64 = (1..=eggs).product();
    Ok(factorial + x * y)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run_with_eggs(shared, FIRST_EGGS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        closed_form(shared, SECOND_EGGS).map(|a| a.to_string())
    }
}
