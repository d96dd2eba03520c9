//! Simulation outputs.
//!
//! A completed run produces one [`ProcessResult`] per input process and a
//! single [`AggregateMetrics`] block, bundled with the timeline into a
//! [`SimulationResult`].
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Algorithm, Timeline};

/// Timing metrics derived for one process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub process_id: u32,
    /// Display label.
    pub name: String,
    /// Input arrival time.
    pub arrival_time: i64,
    /// Input burst time.
    pub burst_time: i64,
    /// Input priority.
    pub priority: i32,
    /// End of the last slice.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// First dispatch minus `arrival_time`.
    pub response_time: i64,
}

/// Whole-run performance statistics.
///
/// Averages, variances and ratios use `f64`; counts and spans stay integral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Number of processes simulated.
    pub process_count: usize,
    /// Latest slice end.
    pub total_time: i64,
    /// Sum of slice durations.
    pub busy_time: i64,
    /// `total_time - busy_time`.
    pub idle_time: i64,
    /// Sum of input burst times.
    pub total_burst_time: i64,

    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,

    /// Sum of waiting times.
    pub total_waiting_time: i64,
    /// Sum of turnaround times.
    pub total_turnaround_time: i64,
    /// Smallest waiting time.
    pub min_waiting_time: i64,
    /// Largest waiting time.
    pub max_waiting_time: i64,
    /// Smallest turnaround time.
    pub min_turnaround_time: i64,
    /// Largest turnaround time.
    pub max_turnaround_time: i64,
    /// Smallest response time.
    pub min_response_time: i64,
    /// Largest response time.
    pub max_response_time: i64,

    /// `busy_time / total_time` (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Processes completed per time unit.
    pub throughput: f64,
    /// `1 / (1 + variance(waiting))`; 1.0 = perfectly even waits.
    pub fairness_index: f64,
    /// `total_burst_time / total_time`.
    pub efficiency: f64,
    /// `avg_turnaround_time / total_burst_time`.
    pub normalized_avg_turnaround: f64,

    /// Population variance of waiting times.
    pub waiting_time_variance: f64,
    /// Population variance of turnaround times.
    pub turnaround_time_variance: f64,
    /// Population standard deviation of waiting times.
    pub waiting_time_std: f64,
    /// Population standard deviation of turnaround times.
    pub turnaround_time_std: f64,
}

impl AggregateMetrics {
    /// CPU utilization as a percentage.
    pub fn cpu_utilization_percent(&self) -> f64 {
        self.cpu_utilization * 100.0
    }
}

/// Everything a single run hands to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy that produced the timeline.
    pub algorithm: Algorithm,
    /// Quantum used (Round Robin only).
    pub quantum: Option<i64>,
    /// Execution record, in dispatch order.
    pub timeline: Timeline,
    /// Per-process metrics, in input order.
    pub process_results: Vec<ProcessResult>,
    /// Aggregate statistics.
    pub metrics: AggregateMetrics,
}

impl SimulationResult {
    /// Finds the result row for a process.
    pub fn result_for(&self, process_id: u32) -> Option<&ProcessResult> {
        self.process_results
            .iter()
            .find(|r| r.process_id == process_id)
    }

    /// Completion times in input order.
    pub fn completion_times(&self) -> Vec<i64> {
        self.process_results
            .iter()
            .map(|r| r.completion_time)
            .collect()
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantum {
            Some(q) => writeln!(f, "Algorithm: {} (quantum = {q})", self.algorithm)?,
            None => writeln!(f, "Algorithm: {}", self.algorithm)?,
        }

        writeln!(
            f,
            "{:<8} {:>7} {:>5} {:>8} {:>10} {:>10} {:>7} {:>8}",
            "Process", "Arrival", "Burst", "Priority", "Completion", "Turnaround", "Waiting", "Response"
        )?;
        for r in &self.process_results {
            writeln!(
                f,
                "{:<8} {:>7} {:>5} {:>8} {:>10} {:>10} {:>7} {:>8}",
                r.name,
                r.arrival_time,
                r.burst_time,
                r.priority,
                r.completion_time,
                r.turnaround_time,
                r.waiting_time,
                r.response_time
            )?;
        }

        let m = &self.metrics;
        writeln!(f, "Average waiting time:    {:.2}", m.avg_waiting_time)?;
        writeln!(f, "Average turnaround time: {:.2}", m.avg_turnaround_time)?;
        writeln!(f, "Average response time:   {:.2}", m.avg_response_time)?;
        writeln!(
            f,
            "CPU utilization:         {:.2}% (busy {}, idle {}, total {})",
            m.cpu_utilization_percent(),
            m.busy_time,
            m.idle_time,
            m.total_time
        )?;
        writeln!(f, "Throughput:              {:.4} processes/unit", m.throughput)?;
        writeln!(f, "Fairness index:          {:.4}", m.fairness_index)?;
        write!(f, "Efficiency:              {:.4}", m.efficiency)
    }
}
