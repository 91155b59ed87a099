//! Output formatting for solver results

use crate::executor::SolverResult;
use aoc_solver::FactoryInfo;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    timings: bool,
}

impl OutputFormatter {
    pub fn new(quiet: bool, timings: bool) -> Self {
        Self { quiet, timings }
    }

    /// Format a single result line
    pub fn format_result(&self, result: &SolverResult) -> String {
        if self.quiet {
            return result.answer.clone();
        }
        let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
        if !self.timings {
            return format!("{}: {}", prefix, result.answer);
        }
        let parse_timing = result
            .parse_duration
            .map(|d| format!("parse: {}, ", format_duration(d)))
            .unwrap_or_default();
        format!(
            "{}: {} ({}solve: {})",
            prefix,
            result.answer,
            parse_timing,
            format_duration(result.solve_duration)
        )
    }

    pub fn print_result(&self, result: &SolverResult) {
        println!("{}", self.format_result(result));
    }

    /// One catalogue line
    pub fn format_listing(&self, info: &FactoryInfo) -> String {
        format!("{}/{:02} ({} parts)", info.year, info.day, info.parts)
    }

    /// Print total times after several timed parts
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet || !self.timings || results.len() < 2 {
            return;
        }
        let parse: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let solve: TimeDelta = results.iter().map(|r| r.solve_duration).sum();
        println!();
        println!("--- Summary ---");
        println!("Total parse time: {}", format_duration(parse));
        println!("Total solve time: {}", format_duration(solve));
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn result(part: u8, parse: Option<i64>) -> SolverResult {
        SolverResult {
            year: 2016,
            day: 5,
            part,
            answer: "18f47a30".to_string(),
            parse_duration: parse.map(TimeDelta::microseconds),
            solve_duration: TimeDelta::milliseconds(1500),
        }
    }

    #[test]
    fn test_plain_line() {
        let fmt = OutputFormatter::new(false, false);
        assert_eq!(fmt.format_result(&result(1, Some(12))), "2016/05 Part 1: 18f47a30");
    }

    #[test]
    fn test_quiet_line_is_answer_only() {
        let fmt = OutputFormatter::new(true, true);
        assert_eq!(fmt.format_result(&result(2, None)), "18f47a30");
    }

    #[test]
    fn test_timed_lines() {
        let fmt = OutputFormatter::new(false, true);
        assert_eq!(
            fmt.format_result(&result(1, Some(12))),
            "2016/05 Part 1: 18f47a30 (parse: 12µs, solve: 1.50s)"
        );
        assert_eq!(
            fmt.format_result(&result(2, None)),
            "2016/05 Part 2: 18f47a30 (solve: 1.50s)"
        );
    }

    #[test]
    fn test_listing() {
        let fmt = OutputFormatter::new(false, false);
        let info = FactoryInfo {
            year: 2020,
            day: 13,
            parts: 2,
        };
        assert_eq!(fmt.format_listing(&info), "2020/13 (2 parts)");
    }

    #[test]
    fn test_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::seconds(3)), "3.00s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
    }

    proptest! {
        #[test]
        fn prop_duration_has_a_unit(micros in -10_000_000_000i64..10_000_000_000) {
            let text = format_duration(TimeDelta::microseconds(micros));
            prop_assert!(text.ends_with("µs") || text.ends_with("ms") || text.ends_with('s'));
            prop_assert_eq!(text.starts_with('-'), micros < 0);
        }
    }
}
