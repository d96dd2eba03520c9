//! Execution timeline (Gantt) model.
//!
//! A timeline is the ordered record of which process held the CPU over
//! which interval. Idle periods are not stored as slices; they are the
//! gaps between consecutive slices (and before the first one).
//!
//! # Invariants
//! - Every slice has `end_time > start_time`.
//! - Slices are sorted by `start_time` and never overlap:
//!   `slices[i].end_time <= slices[i + 1].start_time`.

use serde::{Deserialize, Serialize};

/// One contiguous span of CPU time granted to one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that held the CPU.
    pub process_id: u32,
    /// Dispatch time (inclusive).
    pub start_time: i64,
    /// Release time (exclusive).
    pub end_time: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: u32, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id,
            start_time,
            end_time,
        }
    }

    /// CPU time covered by the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// A renderable piece of the timeline: either CPU work or an idle gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// A process was running.
    Busy(ExecutionSlice),
    /// No process was ready.
    Idle {
        /// Gap start (inclusive).
        start_time: i64,
        /// Gap end (exclusive).
        end_time: i64,
    },
}

impl Segment {
    /// Start of the segment.
    pub fn start_time(&self) -> i64 {
        match self {
            Segment::Busy(s) => s.start_time,
            Segment::Idle { start_time, .. } => *start_time,
        }
    }

    /// End of the segment.
    pub fn end_time(&self) -> i64 {
        match self {
            Segment::Busy(s) => s.end_time,
            Segment::Idle { end_time, .. } => *end_time,
        }
    }
}

/// Ways a timeline can break its ordering invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineDefect {
    /// A slice with `end_time <= start_time` at the given index.
    EmptySlice(usize),
    /// Slice at the given index starts before its predecessor ends.
    Overlap(usize),
}

/// Ordered sequence of execution slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in dispatch order.
    pub slices: Vec<ExecutionSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    ///
    /// Callers append in dispatch order; ordering is not re-checked here.
    pub fn push(&mut self, slice: ExecutionSlice) {
        self.slices.push(slice);
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Total span: latest end time across all slices (0 when empty).
    pub fn total_time(&self) -> i64 {
        self.slices.iter().map(|s| s.end_time).max().unwrap_or(0)
    }

    /// Sum of slice durations.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(ExecutionSlice::duration).sum()
    }

    /// CPU-idle time inside `[0, total_time)`.
    pub fn idle_time(&self) -> i64 {
        self.total_time() - self.busy_time()
    }

    /// Returns all slices owned by a process, in time order.
    pub fn slices_for(&self, process_id: u32) -> Vec<&ExecutionSlice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Start of the process's first slice.
    pub fn first_start(&self, process_id: u32) -> Option<i64> {
        self.slices
            .iter()
            .find(|s| s.process_id == process_id)
            .map(|s| s.start_time)
    }

    /// End of the process's last slice.
    pub fn completion_time(&self, process_id: u32) -> Option<i64> {
        self.slices
            .iter()
            .rev()
            .find(|s| s.process_id == process_id)
            .map(|s| s.end_time)
    }

    /// Total CPU time received by a process.
    pub fn service_time(&self, process_id: u32) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(ExecutionSlice::duration)
            .sum()
    }

    /// Process id of every slice, in order.
    pub fn execution_order(&self) -> Vec<u32> {
        self.slices.iter().map(|s| s.process_id).collect()
    }

    /// Process ids in dispatch order with consecutive repeats collapsed.
    pub fn dispatch_order(&self) -> Vec<u32> {
        let mut order = self.execution_order();
        order.dedup();
        order
    }

    /// Idle gaps as `(start, end)` pairs, including a leading gap before
    /// the first dispatch.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for slice in &self.slices {
            if slice.start_time > cursor {
                gaps.push((cursor, slice.start_time));
            }
            cursor = cursor.max(slice.end_time);
        }
        gaps
    }

    /// Busy slices interleaved with idle gaps, in time order.
    ///
    /// Covers `[0, total_time)` without holes.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.slices.len() * 2);
        let mut cursor = 0;
        for slice in &self.slices {
            if slice.start_time > cursor {
                segments.push(Segment::Idle {
                    start_time: cursor,
                    end_time: slice.start_time,
                });
            }
            segments.push(Segment::Busy(*slice));
            cursor = cursor.max(slice.end_time);
        }
        segments
    }

    /// Merges back-to-back slices of the same process.
    ///
    /// Round Robin emits one slice per quantum even when the same process
    /// is redispatched immediately; renderers usually want one bar.
    pub fn coalesced(&self) -> Timeline {
        let mut merged: Vec<ExecutionSlice> = Vec::with_capacity(self.slices.len());
        for slice in &self.slices {
            match merged.last_mut() {
                Some(last)
                    if last.process_id == slice.process_id
                        && last.end_time == slice.start_time =>
                {
                    last.end_time = slice.end_time;
                }
                _ => merged.push(*slice),
            }
        }
        Timeline { slices: merged }
    }

    /// Checks ordering invariants, returning every defect found.
    pub fn check_invariants(&self) -> Result<(), Vec<TimelineDefect>> {
        let mut defects = Vec::new();
        for (i, slice) in self.slices.iter().enumerate() {
            if slice.end_time <= slice.start_time {
                defects.push(TimelineDefect::EmptySlice(i));
            }
            if i > 0 && self.slices[i - 1].end_time > slice.start_time {
                defects.push(TimelineDefect::Overlap(i));
            }
        }
        if defects.is_empty() {
            Ok(())
        } else {
            Err(defects)
        }
    }
}
