//! Per-process lifecycle tracking inside one simulation run.
//!
//! # State Machine
//!
//! ```text
//! PENDING ──(clock >= arrival)──▶ READY ──dispatch──▶ RUNNING ──burst done──▶ COMPLETE
//!                                   ▲                    │
//!                                   └──quantum expired───┘
//! ```
//!
//! `COMPLETE` is terminal and reached exactly once per process.

use crate::dispatching::DispatchContext;
use crate::models::ProcessRecord;

/// Lifecycle state of a simulated process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    /// Not yet arrived.
    Pending,
    /// Arrived and waiting for the CPU.
    Ready,
    /// Holding the CPU.
    Running,
    /// Burst exhausted.
    Complete,
}

impl ProcessState {
    /// Whether `self → next` is a legal transition.
    pub fn can_transition_to(self, next: ProcessState) -> bool {
        use ProcessState::*;
        matches!(
            (self, next),
            (Pending, Ready) | (Ready, Running) | (Running, Ready) | (Running, Complete)
        )
    }
}

/// State and remaining burst for every process of a run.
///
/// Indices refer to positions in the input slice.
#[derive(Debug)]
pub(crate) struct ProcessTable<'a> {
    processes: &'a [ProcessRecord],
    states: Vec<ProcessState>,
    remaining: Vec<i64>,
    completed: usize,
}

impl<'a> ProcessTable<'a> {
    pub(crate) fn new(processes: &'a [ProcessRecord]) -> Self {
        Self {
            processes,
            states: vec![ProcessState::Pending; processes.len()],
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            completed: 0,
        }
    }

    /// Upper bound on the clock for a correct run: every burst back to
    /// back after the last arrival.
    pub(crate) fn clock_bound(&self) -> i64 {
        let total_burst: i64 = self.processes.iter().map(|p| p.burst_time).sum();
        let last_arrival = self
            .processes
            .iter()
            .map(|p| p.arrival_time)
            .max()
            .unwrap_or(0);
        total_burst + last_arrival
    }

    pub(crate) fn process(&self, index: usize) -> &'a ProcessRecord {
        &self.processes[index]
    }

    #[cfg(test)]
    pub(crate) fn state(&self, index: usize) -> ProcessState {
        self.states[index]
    }

    pub(crate) fn remaining(&self, index: usize) -> i64 {
        self.remaining[index]
    }

    /// Moves every pending process with `arrival_time <= clock` to READY.
    ///
    /// Returns the newly admitted indices ordered by arrival time, then ID.
    pub(crate) fn admit(&mut self, clock: i64) -> Vec<usize> {
        let mut arrived: Vec<usize> = (0..self.processes.len())
            .filter(|&i| {
                self.states[i] == ProcessState::Pending && self.processes[i].has_arrived(clock)
            })
            .collect();
        arrived.sort_by_key(|&i| (self.processes[i].arrival_time, self.processes[i].id));
        for &i in &arrived {
            self.transition(i, ProcessState::Ready);
        }
        arrived
    }

    /// Indices currently READY, in input order.
    pub(crate) fn ready(&self) -> Vec<usize> {
        (0..self.processes.len())
            .filter(|&i| self.states[i] == ProcessState::Ready)
            .collect()
    }

    /// Earliest arrival among processes still PENDING.
    pub(crate) fn next_arrival(&self) -> Option<i64> {
        (0..self.processes.len())
            .filter(|&i| self.states[i] == ProcessState::Pending)
            .map(|i| self.processes[i].arrival_time)
            .min()
    }

    /// Dispatch context with the remaining burst of every READY process.
    pub(crate) fn context(&self, clock: i64) -> DispatchContext {
        self.ready()
            .into_iter()
            .fold(DispatchContext::at_time(clock), |ctx, i| {
                ctx.with_remaining_burst(self.processes[i].id, self.remaining[i])
            })
    }

    pub(crate) fn dispatch(&mut self, index: usize) {
        self.transition(index, ProcessState::Running);
    }

    /// Charges `units` of CPU to a RUNNING process; returns what is left.
    pub(crate) fn run(&mut self, index: usize, units: i64) -> i64 {
        debug_assert_eq!(self.states[index], ProcessState::Running);
        self.remaining[index] -= units;
        self.remaining[index]
    }

    pub(crate) fn preempt(&mut self, index: usize) {
        self.transition(index, ProcessState::Ready);
    }

    pub(crate) fn complete(&mut self, index: usize) {
        debug_assert_eq!(self.remaining[index], 0);
        self.transition(index, ProcessState::Complete);
        self.completed += 1;
    }

    pub(crate) fn all_complete(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// IDs of processes not yet COMPLETE, in input order.
    pub(crate) fn unfinished_ids(&self) -> Vec<u32> {
        (0..self.processes.len())
            .filter(|&i| self.states[i] != ProcessState::Complete)
            .map(|i| self.processes[i].id)
            .collect()
    }

    fn transition(&mut self, index: usize, next: ProcessState) {
        debug_assert!(
            self.states[index].can_transition_to(next),
            "illegal transition {:?} -> {:?} for process {}",
            self.states[index],
            next,
            self.processes[index].id
        );
        self.states[index] = next;
    }
}
