//! Round Robin dispatch loop.
//!
//! # Queue Discipline
//!
//! - At t=0 every process with `arrival_time == 0` is enqueued in ID order.
//! - The queue head runs for `min(quantum, remaining)` units as one slice.
//! - At every slice boundary, processes that arrived by the boundary are
//!   enqueued first (arrival time, then ID), and only then is the
//!   just-run process re-enqueued if it still has work.
//! - An empty queue with pending arrivals jumps the clock to the next
//!   arrival (CPU idle).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::{debug, error};

use super::state::ProcessTable;
use crate::error::{Result, SimulationError};
use crate::models::{ExecutionSlice, ProcessRecord, Timeline};

/// Runs Round Robin with the given quantum.
///
/// `quantum` must be positive; callers validate it first.
pub(crate) fn run(processes: &[ProcessRecord], quantum: i64) -> Result<Timeline> {
    debug_assert!(quantum > 0, "quantum must be positive");

    let mut table = ProcessTable::new(processes);
    let limit = table.clock_bound();
    let mut timeline = Timeline::new();
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
    let mut clock = 0;

    queue.extend(table.admit(clock));

    while !table.all_complete() {
        if clock > limit {
            let unfinished = table.unfinished_ids();
            error!("clock {clock} passed bound {limit}; unfinished {unfinished:?}");
            return Err(SimulationError::IterationLimitExceeded { limit, unfinished });
        }

        let Some(index) = queue.pop_front() else {
            match table.next_arrival() {
                Some(next) => {
                    debug!("cpu idle {clock}..{next}");
                    clock = next;
                    queue.extend(table.admit(clock));
                    continue;
                }
                None => break,
            }
        };

        let process = table.process(index);
        table.dispatch(index);
        let units = quantum.min(table.remaining(index));
        timeline.push(ExecutionSlice::new(process.id, clock, clock + units));
        clock += units;
        let left = table.run(index, units);

        queue.extend(table.admit(clock));

        if left > 0 {
            debug!(
                "t={clock}: {} preempted after {units}, {left} left (queue: {})",
                process.name,
                queue.len() + 1
            );
            table.preempt(index);
            queue.push_back(index);
        } else {
            debug!("t={clock}: {} complete", process.name);
            table.complete(index);
        }
    }

    if !table.all_complete() {
        let missing = table.unfinished_ids();
        error!("round robin loop stopped with {missing:?} unfinished");
        return Err(SimulationError::IncompleteTimeline { missing });
    }

    Ok(timeline)
}
