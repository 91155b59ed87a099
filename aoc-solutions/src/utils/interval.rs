//! Closed integer intervals

use std::cmp::Ordering;

/// The closed range `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        (self.end - self.start + 1).max(0) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }
}

/// Sort and merge overlapping or adjacent intervals.
///
/// The result is sorted, and no two of its intervals overlap or touch.
pub fn merge(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.retain(|iv| !iv.is_empty());
    intervals.sort_unstable();
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for iv in intervals {
        match merged.last_mut() {
            Some(last) if last.end.saturating_add(1) >= iv.start => {
                last.end = last.end.max(iv.end);
            }
            _ => merged.push(iv),
        }
    }
    merged
}

/// Whether `value` lies in any interval of a merged set.
pub fn merged_contains(merged: &[Interval], value: i64) -> bool {
    merged
        .binary_search_by(|iv| {
            if iv.end < value {
                Ordering::Less
            } else if iv.start > value {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Number of integers covered by a merged set.
pub fn total_len(merged: &[Interval]) -> u64 {
    merged.iter().map(Interval::len).sum()
}
