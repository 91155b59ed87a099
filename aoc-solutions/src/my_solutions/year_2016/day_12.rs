use crate::utils::machine::{Instruction, Machine, parse_program};
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

fn run_with_c(program: &[Instruction], c: i64) -> i64 {
    let mut machine = Machine::new(program.to_vec());
    machine.set_register('c', c);
    machine.run();
    machine.register('a')
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run_with_c(shared, 0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run_with_c(shared, 1).to_string())
    }
}
