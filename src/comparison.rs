//! Side-by-side comparison of all scheduling policies.
//!
//! Each algorithm runs on its own scoped worker thread against the same
//! read-only input. Runs share no state, so results are identical to
//! running them one after another.

use std::thread;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{Algorithm, ProcessRecord, SimulationResult};
use crate::simulation::{self, DEFAULT_QUANTUM};
use crate::validation::validate_request;

/// Offset added to min-max normaliser denominators.
const NORMALIZE_EPSILON: f64 = 0.001;

/// Ranking objective for [`Comparison::best`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Objective {
    /// Lowest average waiting time.
    WaitingTime,
    /// Lowest average turnaround time.
    TurnaroundTime,
    /// Highest throughput.
    Throughput,
    /// Composite of waiting, turnaround, throughput and utilization.
    #[default]
    Balanced,
}

/// One summary row per algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Algorithm the row describes.
    pub algorithm: Algorithm,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Fraction in `[0, 1]`.
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// `1 / (1 + variance(waiting))`.
    pub fairness_index: f64,
}

/// Results of every algorithm on one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Quantum given to Round Robin.
    pub quantum: i64,
    /// One result per algorithm, in [`Algorithm::ALL`] order.
    pub results: Vec<SimulationResult>,
}

impl Comparison {
    /// Result of a specific algorithm.
    pub fn result(&self, algorithm: Algorithm) -> Option<&SimulationResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }

    /// Summary rows, in [`Algorithm::ALL`] order.
    pub fn rows(&self) -> Vec<ComparisonRow> {
        self.results
            .iter()
            .map(|r| ComparisonRow {
                algorithm: r.algorithm,
                avg_waiting_time: r.metrics.avg_waiting_time,
                avg_turnaround_time: r.metrics.avg_turnaround_time,
                cpu_utilization: r.metrics.cpu_utilization,
                throughput: r.metrics.throughput,
                avg_response_time: r.metrics.avg_response_time,
                fairness_index: r.metrics.fairness_index,
            })
            .collect()
    }

    /// Best algorithm under `objective`. The earlier algorithm wins ties.
    ///
    /// # Balanced score
    ///
    /// Waiting and turnaround are min-max normalised and inverted
    /// (`1 - (x - min) / (max - min + 0.001)`), throughput is min-max
    /// normalised, utilization is taken as a fraction. The score is the
    /// mean of the four; highest wins.
    pub fn best(&self, objective: Objective) -> Option<Algorithm> {
        let rows = self.rows();
        let scores: Vec<f64> = match objective {
            Objective::WaitingTime => rows.iter().map(|r| -r.avg_waiting_time).collect(),
            Objective::TurnaroundTime => rows.iter().map(|r| -r.avg_turnaround_time).collect(),
            Objective::Throughput => rows.iter().map(|r| r.throughput).collect(),
            Objective::Balanced => balanced_scores(&rows),
        };

        rows.iter()
            .zip(scores)
            .fold(None, |best: Option<(Algorithm, f64)>, (row, score)| match best {
                Some((_, top)) if score <= top => best,
                _ => Some((row.algorithm, score)),
            })
            .map(|(algorithm, _)| algorithm)
    }
}

fn balanced_scores(rows: &[ComparisonRow]) -> Vec<f64> {
    let waiting = normalize(rows.iter().map(|r| r.avg_waiting_time));
    let turnaround = normalize(rows.iter().map(|r| r.avg_turnaround_time));
    let throughput = normalize(rows.iter().map(|r| r.throughput));

    rows.iter()
        .enumerate()
        .map(|(i, r)| {
            ((1.0 - waiting[i]) + (1.0 - turnaround[i]) + throughput[i] + r.cpu_utilization) / 4.0
        })
        .collect()
}

fn normalize(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let values: Vec<f64> = values.collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values
        .iter()
        .map(|v| (v - min) / (max - min + NORMALIZE_EPSILON))
        .collect()
}

/// Runs every algorithm on `processes` concurrently.
///
/// `quantum` defaults to [`DEFAULT_QUANTUM`]. Input is validated once,
/// as for Round Robin, before any worker starts.
///
/// # Errors
/// [`SimulationError::InvalidInput`] for bad input; otherwise the first
/// engine error in [`Algorithm::ALL`] order.
pub fn compare_all(processes: &[ProcessRecord], quantum: Option<i64>) -> Result<Comparison> {
    let quantum = quantum.unwrap_or(DEFAULT_QUANTUM);
    validate_request(processes, Algorithm::RoundRobin, Some(quantum))
        .map_err(SimulationError::InvalidInput)?;

    let outcomes: Vec<Result<SimulationResult>> = thread::scope(|scope| {
        let handles: Vec<_> = Algorithm::ALL
            .iter()
            .map(|&algorithm| {
                scope.spawn(move || {
                    debug!("worker started for {algorithm}");
                    simulation::run(processes, algorithm, Some(quantum))
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    let results = outcomes.into_iter().collect::<Result<Vec<_>>>()?;
    let comparison = Comparison { quantum, results };

    if let Some(best) = comparison.best(Objective::Balanced) {
        info!(
            "compared {} algorithms on {} processes (quantum {quantum}); balanced best: {best}",
            comparison.results.len(),
            processes.len()
        );
    }

    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new(1, 0, 5),
            ProcessRecord::new(2, 1, 4),
            ProcessRecord::new(3, 2, 2),
            ProcessRecord::new(4, 3, 3),
        ]
    }

    #[test]
    fn test_results_in_fixed_order() {
        let cmp = compare_all(&textbook(), None).unwrap();
        assert_eq!(cmp.quantum, DEFAULT_QUANTUM);
        let order: Vec<Algorithm> = cmp.results.iter().map(|r| r.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
    }

    #[test]
    fn test_matches_sequential_runs() {
        let processes = textbook();
        let cmp = compare_all(&processes, Some(2)).unwrap();
        for algorithm in Algorithm::ALL {
            let single = simulation::run(&processes, algorithm, Some(2)).unwrap();
            assert_eq!(cmp.result(algorithm), Some(&single));
        }
    }

    #[test]
    fn test_rows() {
        let rows = compare_all(&textbook(), Some(2)).unwrap().rows();
        assert_eq!(rows.len(), 4);
        // FCFS waits 0, 4, 7, 8; SJF waits 0, 9, 3, 4
        assert!((rows[0].avg_waiting_time - 4.75).abs() < 1e-10);
        assert!((rows[1].avg_waiting_time - 4.0).abs() < 1e-10);
        assert!((rows[1].avg_turnaround_time - 7.5).abs() < 1e-10);
        assert!((rows[3].avg_waiting_time - 6.25).abs() < 1e-10);
        assert!(rows.iter().all(|r| (r.cpu_utilization - 1.0).abs() < 1e-10));
    }

    #[test]
    fn test_best_by_objective() {
        let cmp = compare_all(&textbook(), Some(2)).unwrap();
        assert_eq!(cmp.best(Objective::WaitingTime), Some(Algorithm::Sjf));
        assert_eq!(cmp.best(Objective::TurnaroundTime), Some(Algorithm::Sjf));
        // Equal spans, so FCFS wins the throughput tie
        assert_eq!(cmp.best(Objective::Throughput), Some(Algorithm::Fcfs));
        assert_eq!(cmp.best(Objective::Balanced), Some(Algorithm::Sjf));
    }

    #[test]
    fn test_best_of_empty_comparison() {
        let cmp = Comparison {
            quantum: 2,
            results: Vec::new(),
        };
        assert_eq!(cmp.best(Objective::Balanced), None);
    }

    #[test]
    fn test_rejects_invalid_input_once() {
        let err = compare_all(&[], None).unwrap_err();
        assert_eq!(err.validation_errors().len(), 1);

        let err = compare_all(&textbook(), Some(0)).unwrap_err();
        assert!(err.is_input_error());
    }
}
