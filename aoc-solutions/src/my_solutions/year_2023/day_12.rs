use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::input::{non_empty, parse_lines};
use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const UNFOLD: usize = 5;

/// One row of springs: `.` operational, `#` damaged, `?` unknown.
#[derive(Debug, Clone)]
pub struct Record {
    pub springs: Vec<u8>,
    pub groups: Vec<usize>,
}

impl Record {
    pub fn unfolded(&self, copies: usize) -> Record {
        let mut springs = Vec::with_capacity((self.springs.len() + 1) * copies);
        for copy in 0..copies {
            if copy > 0 {
                springs.push(b'?');
            }
            springs.extend_from_slice(&self.springs);
        }
        Record {
            springs,
            groups: self.groups.repeat(copies),
        }
    }

    /// Run of `len` damaged springs starting at `at` that is not followed by another `#`.
    fn fits(&self, at: usize, len: usize) -> bool {
        at + len <= self.springs.len()
            && self.springs[at..at + len].iter().all(|&c| c != b'.')
            && self.springs.get(at + len) != Some(&b'#')
    }
}

/// Arrangements of `springs[i..]` against `groups[j..]`, indexed by `(i, j)`.
struct Arrangements<'r>(&'r Record);

impl DpProblem<(usize, usize), u64> for Arrangements<'_> {
    fn deps(&self, &(i, j): &(usize, usize)) -> Vec<(usize, usize)> {
        let record = self.0;
        let Some(&c) = record.springs.get(i) else {
            return vec![];
        };
        let mut next = Vec::with_capacity(2);
        if c != b'#' {
            next.push((i + 1, j));
        }
        if c != b'.' && j < record.groups.len() && record.fits(i, record.groups[j]) {
            let after = (i + record.groups[j] + 1).min(record.springs.len());
            next.push((after, j + 1));
        }
        next
    }

    fn compute(&self, &(i, j): &(usize, usize), deps: Vec<u64>) -> u64 {
        if i >= self.0.springs.len() {
            u64::from(j == self.0.groups.len())
        } else {
            deps.iter().sum()
        }
    }
}

pub fn arrangements(record: &Record) -> u64 {
    let cache = DpCache::with_problem(
        HashMapBackend::<(usize, usize), u64>::new(),
        Arrangements(record),
    );
    cache.get(&(0, 0))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Record>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let records = parse_lines(input, |line| {
            let (springs, groups) = line
                .trim()
                .split_once(' ')
                .ok_or_else(|| anyhow!("expected `springs groups`"))?;
            if let Some(bad) = springs.bytes().find(|c| !b".#?".contains(c)) {
                bail!("unknown spring {:?}", bad as char);
            }
            let groups = groups
                .split(',')
                .map(|g| g.parse::<usize>().with_context(|| format!("group {:?}", g)))
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok(Record {
                springs: springs.as_bytes().to_vec(),
                groups,
            })
        })?;
        non_empty(records, "records")
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(arrangements).sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .iter()
            .map(|record| arrangements(&record.unfolded(UNFOLD)))
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    const SAMPLE: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_input::<Solver>(SAMPLE, 1).unwrap(), "21");
        assert_eq!(solve_input::<Solver>(SAMPLE, 2).unwrap(), "525152");
    }

    #[test]
    fn test_per_row() {
        let counts: Vec<u64> = Solver::parse(SAMPLE).unwrap().iter().map(arrangements).collect();
        assert_eq!(counts, vec![1, 4, 1, 1, 4, 10]);
    }

    #[test]
    fn test_bad_spring() {
        assert!(solve_input::<Solver>("??x 1\n", 1).is_err());
    }
}
