use crate::utils::input::{groups, non_empty};
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// A distress-signal value: an integer or a list of values.
#[derive(Debug, Clone)]
pub enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(a), Packet::List(b)) => std::slice::from_ref(&Packet::Int(*a)).cmp(b.as_slice()),
            (Packet::List(a), Packet::Int(b)) => a.as_slice().cmp(std::slice::from_ref(&Packet::Int(*b))),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// `3` and `[3]` compare equal, so equality has to follow the ordering.
impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Packet {}

/// Recursive descent over `list := '[' (value (',' value)*)? ']'`.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn value(&mut self) -> anyhow::Result<Packet> {
        match self.peek() {
            Some(b'[') => self.list(),
            Some(b'0'..=b'9') => self.int(),
            Some(other) => bail!("unexpected {:?} at column {}", other as char, self.pos + 1),
            None => bail!("packet ends early"),
        }
    }

    fn int(&mut self) -> anyhow::Result<Packet> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits = std::str::from_utf8(&self.bytes[start..self.pos])?;
        Ok(Packet::Int(digits.parse()?))
    }

    fn list(&mut self) -> anyhow::Result<Packet> {
        self.pos += 1;
        let mut items = Vec::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Packet::List(items));
        }
        loop {
            items.push(self.value()?);
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Packet::List(items));
                }
                _ => bail!("expected `,` or `]` at column {}", self.pos + 1),
            }
        }
    }
}

impl FromStr for Packet {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let mut cursor = Cursor {
            bytes: s.trim().as_bytes(),
            pos: 0,
        };
        if cursor.peek() != Some(b'[') {
            bail!("a packet must be a list");
        }
        let packet = cursor.list()?;
        if cursor.pos != cursor.bytes.len() {
            return Err(anyhow!("trailing input after column {}", cursor.pos));
        }
        Ok(packet)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Packet, Packet)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let pairs = groups(input)
            .iter()
            .enumerate()
            .map(|(idx, group)| -> anyhow::Result<(Packet, Packet)> {
                match group[..] {
                    [left, right] => Ok((left.parse()?, right.parse()?)),
                    _ => Err(anyhow!("pair {} does not have two packets", idx + 1)),
                }
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        non_empty(pairs, "packet pairs")
    }
}

fn divider(n: u32) -> Packet {
    Packet::List(vec![Packet::List(vec![Packet::Int(n)])])
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ordered: usize = shared
            .iter()
            .enumerate()
            .filter(|(_, (left, right))| left < right)
            .map(|(idx, _)| idx + 1)
            .sum();
        Ok(ordered.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (two, six) = (divider(2), divider(6));
        let packets = || shared.iter().flat_map(|(l, r)| [l, r]);
        let two_pos = 1 + packets().filter(|p| **p < two).count();
        let six_pos = 2 + packets().filter(|p| **p < six).count();
        Ok((two_pos * six_pos).to_string())
    }
}
