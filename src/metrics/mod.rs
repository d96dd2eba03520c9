//! Per-process and aggregate scheduling metrics.
//!
//! Derives timing statistics from a completed timeline and its input
//! processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | End of the process's last slice |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | CPU Utilization | busy_time / total_time |
//! | Throughput | process_count / total_time |
//! | Fairness Index | 1 / (1 + variance(waiting)) |
//! | Efficiency | total_burst / total_time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

mod stats;

pub use stats::{mean, population_std, population_variance};

use log::error;

use crate::error::{Result, SimulationError};
use crate::models::{AggregateMetrics, ProcessRecord, ProcessResult, Timeline};
use stats::ratio;

/// Computes per-process results (in input order) and aggregate metrics.
///
/// `processes` are expected to pass
/// [`validate_processes`](crate::validation::validate_processes), whose
/// time-span bound keeps every total here within `i64`.
///
/// # Errors
/// [`SimulationError::IncompleteTimeline`] if any process has no slice in
/// `timeline`.
///
/// # Example
/// ```
/// use cpu_schedsim::metrics::compute;
/// use cpu_schedsim::models::{Algorithm, ProcessRecord};
/// use cpu_schedsim::scheduler::simulate;
///
/// let processes = vec![ProcessRecord::new(1, 0, 4), ProcessRecord::new(2, 1, 2)];
/// let timeline = simulate(&processes, Algorithm::Fcfs, None).unwrap();
/// let (results, metrics) = compute(&timeline, &processes).unwrap();
/// assert_eq!(results[1].waiting_time, 3);
/// assert!((metrics.cpu_utilization - 1.0).abs() < 1e-10);
/// ```
pub fn compute(
    timeline: &Timeline,
    processes: &[ProcessRecord],
) -> Result<(Vec<ProcessResult>, AggregateMetrics)> {
    let results = process_results(timeline, processes)?;
    let metrics = aggregate(timeline, processes, &results);
    Ok((results, metrics))
}

/// Derives one [`ProcessResult`] per process, in input order.
pub fn process_results(
    timeline: &Timeline,
    processes: &[ProcessRecord],
) -> Result<Vec<ProcessResult>> {
    let mut results = Vec::with_capacity(processes.len());
    let mut missing = Vec::new();

    for p in processes {
        let (Some(first_start), Some(completion)) =
            (timeline.first_start(p.id), timeline.completion_time(p.id))
        else {
            missing.push(p.id);
            continue;
        };

        let turnaround = completion - p.arrival_time;
        results.push(ProcessResult {
            process_id: p.id,
            name: p.name.clone(),
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            priority: p.priority,
            completion_time: completion,
            turnaround_time: turnaround,
            waiting_time: turnaround - p.burst_time,
            response_time: first_start - p.arrival_time,
        });
    }

    if !missing.is_empty() {
        error!("timeline has no slices for processes {missing:?}");
        return Err(SimulationError::IncompleteTimeline { missing });
    }

    Ok(results)
}

fn aggregate(
    timeline: &Timeline,
    processes: &[ProcessRecord],
    results: &[ProcessResult],
) -> AggregateMetrics {
    let waiting: Vec<i64> = results.iter().map(|r| r.waiting_time).collect();
    let turnaround: Vec<i64> = results.iter().map(|r| r.turnaround_time).collect();
    let response: Vec<i64> = results.iter().map(|r| r.response_time).collect();

    let total_time = timeline.total_time();
    let busy_time = timeline.busy_time();
    let total_burst_time: i64 = processes.iter().map(|p| p.burst_time).sum();
    let span = total_time as f64;

    let avg_turnaround_time = mean(&turnaround);
    let waiting_time_variance = population_variance(&waiting);
    let turnaround_time_variance = population_variance(&turnaround);

    AggregateMetrics {
        process_count: results.len(),
        total_time,
        busy_time,
        idle_time: total_time - busy_time,
        total_burst_time,

        avg_waiting_time: mean(&waiting),
        avg_turnaround_time,
        avg_response_time: mean(&response),

        total_waiting_time: waiting.iter().sum(),
        total_turnaround_time: turnaround.iter().sum(),
        min_waiting_time: waiting.iter().copied().min().unwrap_or(0),
        max_waiting_time: waiting.iter().copied().max().unwrap_or(0),
        min_turnaround_time: turnaround.iter().copied().min().unwrap_or(0),
        max_turnaround_time: turnaround.iter().copied().max().unwrap_or(0),
        min_response_time: response.iter().copied().min().unwrap_or(0),
        max_response_time: response.iter().copied().max().unwrap_or(0),

        cpu_utilization: ratio(busy_time as f64, span),
        throughput: ratio(results.len() as f64, span),
        fairness_index: 1.0 / (1.0 + waiting_time_variance),
        efficiency: ratio(total_burst_time as f64, span),
        normalized_avg_turnaround: ratio(avg_turnaround_time, total_burst_time as f64),

        waiting_time_variance,
        turnaround_time_variance,
        waiting_time_std: waiting_time_variance.sqrt(),
        turnaround_time_std: turnaround_time_variance.sqrt(),
    }
}
