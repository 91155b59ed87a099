//! Register machine shared by the assembunny and coprocessor puzzles
//!
//! Registers are `a` through `h`. A program is kept as a mutable `Vec` since
//! `tgl` rewrites instructions while the machine runs.

use super::input::parse_lines;
use anyhow::{Context, anyhow, bail};
use aoc_solver::ParseError;

pub const REGISTERS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Reg(usize),
    Lit(i64),
}

impl Operand {
    fn parse(token: &str) -> anyhow::Result<Self> {
        let mut chars = token.chars();
        if let (Some(c @ 'a'..='h'), None) = (chars.next(), chars.next()) {
            return Ok(Operand::Reg(c as usize - 'a' as usize));
        }
        token
            .parse()
            .map(Operand::Lit)
            .with_context(|| format!("bad operand {:?}", token))
    }

    /// Literal value, if this operand is one.
    pub fn literal(&self) -> Option<i64> {
        match *self {
            Operand::Lit(v) => Some(v),
            Operand::Reg(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Cpy(Operand, Operand),
    Inc(Operand),
    Dec(Operand),
    Jnz(Operand, Operand),
    Tgl(Operand),
    Out(Operand),
    Set(Operand, Operand),
    Sub(Operand, Operand),
    Mul(Operand, Operand),
}

impl Instruction {
    fn parse(line: &str) -> anyhow::Result<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let one = || -> anyhow::Result<Operand> {
            match parts[1..] {
                [x] => Operand::parse(x),
                _ => bail!("{:?} takes one operand", parts[0]),
            }
        };
        let two = || -> anyhow::Result<(Operand, Operand)> {
            match parts[1..] {
                [x, y] => Ok((Operand::parse(x)?, Operand::parse(y)?)),
                _ => bail!("{:?} takes two operands", parts[0]),
            }
        };
        let Some(&op) = parts.first() else {
            bail!("empty instruction");
        };
        Ok(match op {
            "cpy" => two().map(|(x, y)| Instruction::Cpy(x, y))?,
            "inc" => Instruction::Inc(one()?),
            "dec" => Instruction::Dec(one()?),
            "jnz" => two().map(|(x, y)| Instruction::Jnz(x, y))?,
            "tgl" => Instruction::Tgl(one()?),
            "out" => Instruction::Out(one()?),
            "set" => two().map(|(x, y)| Instruction::Set(x, y))?,
            "sub" => two().map(|(x, y)| Instruction::Sub(x, y))?,
            "mul" => two().map(|(x, y)| Instruction::Mul(x, y))?,
            other => return Err(anyhow!("unknown instruction {:?}", other)),
        })
    }

    /// The instruction `tgl` turns this one into.
    pub fn toggled(self) -> Self {
        use Instruction::*;
        match self {
            Inc(x) => Dec(x),
            Dec(x) | Tgl(x) | Out(x) => Inc(x),
            Jnz(x, y) => Cpy(x, y),
            Cpy(x, y) | Set(x, y) | Sub(x, y) | Mul(x, y) => Jnz(x, y),
        }
    }

    /// Operands in source order.
    pub fn operands(&self) -> Vec<Operand> {
        use Instruction::*;
        match *self {
            Inc(x) | Dec(x) | Tgl(x) | Out(x) => vec![x],
            Cpy(x, y) | Jnz(x, y) | Set(x, y) | Sub(x, y) | Mul(x, y) => vec![x, y],
        }
    }
}

/// Parse one instruction per line.
pub fn parse_program(input: &str) -> Result<Vec<Instruction>, ParseError> {
    let program = parse_lines(input, Instruction::parse)?;
    super::input::non_empty(program, "instructions")
}

/// Result of executing one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Stepped,
    Output(i64),
    Halted,
}

#[derive(Debug, Clone)]
pub struct Machine {
    program: Vec<Instruction>,
    registers: [i64; REGISTERS],
    ip: i64,
    mul_count: u64,
}

impl Machine {
    pub fn new(program: Vec<Instruction>) -> Self {
        Self {
            program,
            registers: [0; REGISTERS],
            ip: 0,
            mul_count: 0,
        }
    }

    /// Register by letter, e.g. `machine.register('a')`.
    pub fn register(&self, name: char) -> i64 {
        self.registers[reg_index(name)]
    }

    pub fn set_register(&mut self, name: char, value: i64) {
        self.registers[reg_index(name)] = value;
    }

    /// How many `mul` instructions have executed.
    pub fn mul_count(&self) -> u64 {
        self.mul_count
    }

    fn value(&self, operand: Operand) -> i64 {
        match operand {
            Operand::Reg(r) => self.registers[r],
            Operand::Lit(v) => v,
        }
    }

    fn write(&mut self, target: Operand, f: impl FnOnce(i64) -> i64) {
        // Literal targets only appear after a toggle; the write is skipped
        if let Operand::Reg(r) = target {
            self.registers[r] = f(self.registers[r]);
        }
    }

    pub fn step(&mut self) -> Event {
        let Some(&instruction) = usize::try_from(self.ip)
            .ok()
            .and_then(|ip| self.program.get(ip))
        else {
            return Event::Halted;
        };

        let mut next = self.ip + 1;
        let mut event = Event::Stepped;
        match instruction {
            Instruction::Cpy(x, y) | Instruction::Set(y, x) => {
                let v = self.value(x);
                self.write(y, |_| v);
            }
            Instruction::Inc(x) => self.write(x, |r| r + 1),
            Instruction::Dec(x) => self.write(x, |r| r - 1),
            Instruction::Sub(x, y) => {
                let v = self.value(y);
                self.write(x, |r| r - v);
            }
            Instruction::Mul(x, y) => {
                self.mul_count += 1;
                let v = self.value(y);
                self.write(x, |r| r * v);
            }
            Instruction::Jnz(x, y) => {
                if self.value(x) != 0 {
                    next = self.ip + self.value(y);
                }
            }
            Instruction::Tgl(x) => {
                let target = self.ip + self.value(x);
                if let Some(slot) = usize::try_from(target)
                    .ok()
                    .and_then(|t| self.program.get_mut(t))
                {
                    *slot = slot.toggled();
                }
            }
            Instruction::Out(x) => event = Event::Output(self.value(x)),
        }
        self.ip = next;
        event
    }

    /// Run until the instruction pointer leaves the program, discarding output.
    pub fn run(&mut self) {
        while self.step() != Event::Halted {}
    }

    /// Collect up to `count` outputs, stopping early on halt or after
    /// `max_steps` instructions.
    pub fn outputs(&mut self, count: usize, max_steps: u64) -> Vec<i64> {
        let mut out = Vec::with_capacity(count);
        let mut steps = 0;
        while out.len() < count && steps < max_steps {
            match self.step() {
                Event::Halted => break,
                Event::Output(v) => out.push(v),
                Event::Stepped => {}
            }
            steps += 1;
        }
        out
    }
}

fn reg_index(name: char) -> usize {
    assert!(('a'..='h').contains(&name), "no register {:?}", name);
    name as usize - 'a' as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_and_jump() {
        let program = parse_program("cpy 41 a\ninc a\ninc a\ndec a\njnz a 2\ndec a\n").unwrap();
        let mut m = Machine::new(program);
        m.run();
        assert_eq!(m.register('a'), 42);
    }

    #[test]
    fn test_toggle_sample() {
        let program =
            parse_program("cpy 2 a\ntgl a\ntgl a\ntgl a\ncpy 1 a\ndec a\ndec a\n").unwrap();
        let mut m = Machine::new(program);
        m.run();
        assert_eq!(m.register('a'), 3);
    }

    #[test]
    fn test_toggle_map() {
        let a = Operand::Reg(0);
        let one = Operand::Lit(1);
        assert_eq!(Instruction::Inc(a).toggled(), Instruction::Dec(a));
        assert_eq!(Instruction::Dec(a).toggled(), Instruction::Inc(a));
        assert_eq!(Instruction::Tgl(a).toggled(), Instruction::Inc(a));
        assert_eq!(Instruction::Jnz(one, a).toggled(), Instruction::Cpy(one, a));
        assert_eq!(Instruction::Cpy(one, a).toggled(), Instruction::Jnz(one, a));
        assert_eq!(Instruction::Mul(a, one).toggled(), Instruction::Jnz(a, one));
    }

    #[test]
    fn test_mul_count_and_output() {
        let program = parse_program("set b 3\nmul b b\nout b\nsub b 2\nout b\n").unwrap();
        let mut m = Machine::new(program);
        assert_eq!(m.outputs(5, 100), vec![9, 7]);
        assert_eq!(m.mul_count(), 1);
        assert_eq!(m.step(), Event::Halted);
    }

    #[test]
    fn test_parse_errors_name_the_line() {
        let err = parse_program("inc a\nfoo b\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
        assert!(parse_program("cpy 1\n").is_err());
        assert!(parse_program("inc z\n").is_err());
        assert!(matches!(parse_program("\n"), Err(ParseError::MissingData(_))));
    }
}
