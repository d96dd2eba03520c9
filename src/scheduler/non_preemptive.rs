//! Shared dispatch loop for FCFS, SJF and Priority.
//!
//! # Algorithm
//!
//! 1. Admit every process that has arrived by the current clock.
//! 2. If nothing is ready, jump the clock to the next arrival (CPU idle).
//! 3. Otherwise pick one ready process with the algorithm's rule chain.
//! 4. Run it to completion in a single slice; advance the clock.
//!
//! A dispatched process is never interrupted, even if a process that
//! would win selection arrives mid-slice.
//!
//! # Complexity
//! O(n² · r) where n = processes, r = rules in the chain.

use log::{debug, error};

use super::state::ProcessTable;
use crate::dispatching::RuleEngine;
use crate::error::{Result, SimulationError};
use crate::models::{ExecutionSlice, ProcessRecord, Timeline};

/// Runs the non-preemptive loop with the given selection rules.
pub(crate) fn run(processes: &[ProcessRecord], engine: &RuleEngine) -> Result<Timeline> {
    let mut table = ProcessTable::new(processes);
    let limit = table.clock_bound();
    let mut timeline = Timeline::new();
    let mut clock = 0;

    while !table.all_complete() {
        if clock > limit {
            let unfinished = table.unfinished_ids();
            error!("clock {clock} passed bound {limit}; unfinished {unfinished:?}");
            return Err(SimulationError::IterationLimitExceeded { limit, unfinished });
        }

        table.admit(clock);
        let ready = table.ready();

        if ready.is_empty() {
            match table.next_arrival() {
                Some(next) => {
                    debug!("cpu idle {clock}..{next}");
                    clock = next;
                    continue;
                }
                None => break,
            }
        }

        let candidates: Vec<&ProcessRecord> = ready.iter().map(|&i| table.process(i)).collect();
        let context = table.context(clock);
        let Some(pick) = engine.select_best(&candidates, &context) else {
            break;
        };
        let index = ready[pick];
        let process = table.process(index);

        table.dispatch(index);
        let burst = table.remaining(index);
        debug!(
            "t={clock}: dispatch {} for {burst} (ready: {})",
            process.name,
            candidates.len()
        );
        timeline.push(ExecutionSlice::new(process.id, clock, clock + burst));
        table.run(index, burst);
        clock += burst;
        table.complete(index);
    }

    if !table.all_complete() {
        let missing = table.unfinished_ids();
        error!("non-preemptive loop stopped with {missing:?} unfinished");
        return Err(SimulationError::IncompleteTimeline { missing });
    }

    Ok(timeline)
}
