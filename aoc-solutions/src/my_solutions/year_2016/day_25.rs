use crate::utils::machine::{Event, Instruction, Machine, parse_program};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
pub struct Solver;

const SIGNAL_LEN: usize = 32;
const STEP_BUDGET: u64 = 2_000_000;
const MAX_SEED: i64 = 1 << 20;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_program(input)
    }
}

/// Whether the machine started with `a = seed` emits `0, 1, 0, 1, ...`.
fn is_clock(program: &[Instruction], seed: i64) -> bool {
    let mut machine = Machine::new(program.to_vec());
    machine.set_register('a', seed);
    let mut emitted = 0;
    for _ in 0..STEP_BUDGET {
        match machine.step() {
            Event::Halted => return false,
            Event::Output(v) if v != (emitted % 2) as i64 => return false,
            Event::Output(_) => {
                emitted += 1;
                if emitted == SIGNAL_LEN {
                    return true;
                }
            }
            Event::Stepped => {}
        }
    }
    false
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        (1..MAX_SEED)
            .find(|&seed| is_clock(shared, seed))
            .map(|seed| seed.to_string())
            .ok_or_else(|| SolveError::Exhausted("no seed produces a clock signal".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const PROGRAM: &str = "\
cpy a d
cpy 4 c
cpy 643 b
inc d
dec b
jnz b -2
dec c
jnz c -5
cpy d a
jnz 0 0
cpy a b
cpy 0 a
cpy 2 c
jnz b 2
jnz 1 6
dec b
dec c
jnz c -4
inc a
jnz 1 -7
cpy 2 b
jnz c 2
jnz 1 4
dec b
dec c
jnz 1 -4
jnz 0 0
out b
jnz a -19
jnz 1 -21
";

    #[test]
    fn test_finds_alternating_seed() {
        assert_eq!(solve_input::<Solver>(PROGRAM, 1).unwrap(), "158");
    }

    #[test]
    fn test_program_without_output_is_exhausted_quickly() {
        let program = parse_program("jnz 1 0\n").unwrap();
        assert!(!is_clock(&program, 1));
    }
}
