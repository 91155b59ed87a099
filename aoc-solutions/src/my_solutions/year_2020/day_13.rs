use crate::utils::input::lines;
use crate::utils::numeric::crt;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Schedule {
    /// Earliest departure; only the first puzzle part needs it.
    pub earliest: Option<i64>,
    /// `(offset in the list, bus id)` for every running bus.
    pub buses: Vec<(i64, i64)>,
}

impl AocParser for Solver {
    type SharedData<'a> = Schedule;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let lines: Vec<&str> = lines(input).into_iter().filter(|l| !l.trim().is_empty()).collect();
        let (earliest, timetable) = match lines[..] {
            [timetable] => (None, timetable),
            [earliest, timetable] => {
                let earliest = earliest
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| ParseError::at_line(0, format!("bad timestamp: {}", e)))?;
                (Some(earliest), timetable)
            }
            [] => return Err(ParseError::MissingData("no bus schedule".into())),
            _ => return Err(ParseError::InvalidFormat("expected at most two lines".into())),
        };

        let mut buses = Vec::new();
        for (offset, token) in timetable.trim().split(',').enumerate() {
            if token == "x" {
                continue;
            }
            let id: i64 = token
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("bus {:?}: {}", token, e)))?;
            if id <= 0 {
                return Err(ParseError::InvalidFormat(format!("bus id {} is not positive", id)));
            }
            buses.push((offset as i64, id));
        }
        if buses.is_empty() {
            return Err(ParseError::MissingData("no running buses".into()));
        }
        Ok(Schedule { earliest, buses })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let earliest = shared
            .earliest
            .ok_or_else(|| SolveError::Invariant("no earliest departure given".into()))?;
        let (wait, id) = shared
            .buses
            .iter()
            .map(|&(_, id)| ((-earliest).rem_euclid(id), id))
            .min()
            .ok_or_else(|| SolveError::Invariant("no buses".into()))?;
        Ok((wait * id).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Bus at `offset` leaves at t + offset, so t ≡ -offset (mod id).
        let congruences: Vec<(i64, i64)> = shared
            .buses
            .iter()
            .map(|&(offset, id)| ((-offset).rem_euclid(id), id))
            .collect();
        crt(&congruences)
            .map(|(t, _)| t.to_string())
            .ok_or_else(|| SolveError::Invariant("bus ids are not pairwise coprime".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::solve_input;

    #[test]
    fn test_earliest_bus() {
        let input = "939\n7,13,x,x,59,x,31,19\n";
        assert_eq!(solve_input::<Solver>(input, 1).unwrap(), "295");
        assert_eq!(solve_input::<Solver>(input, 2).unwrap(), "1068781");
    }

    #[test]
    fn test_timetable_only() {
        for (input, expected) in [
            ("7,13,x,x,59,x,31,19", "1068781"),
            ("17,x,13,19", "3417"),
            ("67,7,59,61", "754018"),
            ("67,x,7,59,61", "779210"),
            ("67,7,x,59,61", "1261476"),
            ("1789,37,47,1889", "1202161486"),
        ] {
            assert_eq!(solve_input::<Solver>(input, 2).unwrap(), expected);
        }
        assert!(solve_input::<Solver>("7,13", 1).is_err());
    }
}
