//! Sequential executor for running one puzzle's parts

use crate::config::SolveRequest;
use crate::error::CliError;
use aoc_solver::{SolveError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Answer and timings for one solved part
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: String,
    /// Only the first part solved carries the parse time
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

pub struct Executor<'r> {
    registry: &'r SolverRegistry,
    request: &'r SolveRequest,
}

impl<'r> Executor<'r> {
    pub fn new(registry: &'r SolverRegistry, request: &'r SolveRequest) -> Self {
        Self { registry, request }
    }

    /// Resolve the requested puzzle and parts against the registry
    pub fn work_item(&self) -> Result<WorkItem, SolverError> {
        let SolveRequest { year, day, .. } = *self.request;
        let info = self
            .registry
            .get_info(year, day)
            .ok_or(SolverError::NotFound(year, day))?;
        let parts = match self.request.part_filter {
            Some(p) if p <= info.parts => p..=p,
            Some(p) => return Err(SolveError::PartOutOfRange(p).into()),
            None => 1..=info.parts,
        };
        Ok(WorkItem { year, day, parts })
    }

    /// Parse `input` once and solve each requested part in order
    ///
    /// `on_result` sees every answer as soon as it is ready; the first
    /// failure stops the run.
    pub fn execute(
        &self,
        input: &str,
        mut on_result: impl FnMut(&SolverResult),
    ) -> Result<Vec<SolverResult>, CliError> {
        let work = self.work_item()?;
        let mut solver = self.registry.create_solver(work.year, work.day, input)?;
        let mut parse_duration = Some(solver.parse_duration());

        let mut results = Vec::with_capacity(work.parts.len());
        for part in work.parts {
            let solved = solver.solve(part).map_err(SolverError::from)?;
            let result = SolverResult {
                year: work.year,
                day: work.day,
                part,
                solve_duration: solved.duration(),
                parse_duration: parse_duration.take(),
                answer: solved.answer,
            };
            on_result(&result);
            results.push(result);
        }
        Ok(results)
    }
}
