//! Simulation entry point.
//!
//! Bundles the engine and the metrics calculator into one call that maps
//! `(processes, algorithm, quantum)` to a [`SimulationResult`].

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::metrics;
use crate::models::{Algorithm, ProcessRecord, SimulationResult};
use crate::scheduler::simulate;
use crate::validation::{validate_request, ValidationResult};

/// Round Robin quantum used by [`compare_all`](crate::comparison::compare_all)
/// when the caller gives none.
///
/// [`run`] does not fall back to it: Round Robin without a quantum is
/// rejected with `MissingQuantum`.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule, in input order.
    pub processes: Vec<ProcessRecord>,
    /// Scheduling policy.
    pub algorithm: Algorithm,
    /// Round Robin time quantum. Ignored by other algorithms.
    #[serde(default)]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request with no quantum.
    pub fn new(processes: Vec<ProcessRecord>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            quantum: None,
        }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Validates the request without running it.
    pub fn validate(&self) -> ValidationResult {
        validate_request(&self.processes, self.algorithm, self.quantum)
    }

    /// Runs the request.
    pub fn run(&self) -> Result<SimulationResult> {
        run(&self.processes, self.algorithm, self.quantum)
    }
}

/// Runs one simulation and derives its metrics.
///
/// The recorded quantum is `None` for algorithms that do not use one.
///
/// # Errors
/// Any [`SimulationError`](crate::error::SimulationError) from validation,
/// scheduling or metrics.
///
/// # Example
///
/// ```
/// use cpu_schedsim::models::{Algorithm, ProcessRecord};
/// use cpu_schedsim::simulation::run;
///
/// let processes = vec![
///     ProcessRecord::new(1, 0, 5),
///     ProcessRecord::new(2, 2, 3),
///     ProcessRecord::new(3, 4, 2),
/// ];
/// let result = run(&processes, Algorithm::Fcfs, None).unwrap();
/// assert_eq!(result.completion_times(), vec![5, 8, 10]);
/// assert!((result.metrics.avg_waiting_time - 2.33).abs() < 1e-2);
/// ```
pub fn run(
    processes: &[ProcessRecord],
    algorithm: Algorithm,
    quantum: Option<i64>,
) -> Result<SimulationResult> {
    let quantum = quantum.filter(|_| algorithm.requires_quantum());
    let timeline = simulate(processes, algorithm, quantum)?;
    let (process_results, metrics) = metrics::compute(&timeline, processes)?;

    info!(
        "{algorithm}: {} processes, span {}, avg wait {:.2}, utilization {:.2}%",
        metrics.process_count,
        metrics.total_time,
        metrics.avg_waiting_time,
        metrics.cpu_utilization_percent()
    );

    Ok(SimulationResult {
        algorithm,
        quantum,
        timeline,
        process_results,
        metrics,
    })
}

/// Runs a [`SimulationRequest`].
pub fn run_simulation(request: &SimulationRequest) -> Result<SimulationResult> {
    request.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;
    use crate::validation::ValidationErrorKind;
    use crate::workload::WorkloadGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn round_robin_processes() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new(1, 0, 5),
            ProcessRecord::new(2, 1, 4),
            ProcessRecord::new(3, 2, 2),
            ProcessRecord::new(4, 3, 3),
        ]
    }

    #[test]
    fn test_run_round_robin() {
        let request =
            SimulationRequest::new(round_robin_processes(), Algorithm::RoundRobin).with_quantum(2);
        assert!(request.validate().is_ok());

        let result = run_simulation(&request).unwrap();
        assert_eq!(result.quantum, Some(2));
        assert_eq!(result.completion_times(), vec![13, 12, 6, 14]);
        assert!((result.metrics.avg_waiting_time - 6.25).abs() < 1e-10);
        assert_eq!(result.result_for(3).map(|r| r.waiting_time), Some(2));
    }

    #[test]
    fn test_quantum_dropped_for_non_preemptive() {
        let result = run(&round_robin_processes(), Algorithm::Sjf, Some(2)).unwrap();
        assert_eq!(result.quantum, None);
    }

    #[test]
    fn test_invalid_request_produces_no_result() {
        let request = SimulationRequest::new(round_robin_processes(), Algorithm::RoundRobin);
        let err = request.run().unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::MissingQuantum
        );
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "processes": [
                {"id": 1, "name": "P1", "arrival_time": 0, "burst_time": 10, "priority": 3},
                {"id": 2, "name": "P2", "arrival_time": 0, "burst_time": 5, "priority": 1},
                {"id": 3, "name": "P3", "arrival_time": 0, "burst_time": 8, "priority": 2},
                {"id": 4, "name": "P4", "arrival_time": 0, "burst_time": 4, "priority": 4}
            ],
            "algorithm": "Priority"
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.quantum, None);

        let result = request.run().unwrap();
        assert_eq!(result.timeline.execution_order(), vec![2, 3, 1, 4]);
        assert!((result.metrics.avg_waiting_time - 10.25).abs() < 1e-10);
    }

    #[test]
    fn test_repeated_runs_are_byte_identical() {
        let processes = round_robin_processes();
        for algorithm in Algorithm::ALL {
            let a = serde_json::to_string(&run(&processes, algorithm, Some(2)).unwrap()).unwrap();
            let b = serde_json::to_string(&run(&processes, algorithm, Some(2)).unwrap()).unwrap();
            assert_eq!(a, b, "{algorithm}");
        }
    }

    #[test]
    fn test_report_text() {
        let processes = vec![
            ProcessRecord::new(1, 0, 5),
            ProcessRecord::new(2, 2, 3),
            ProcessRecord::new(3, 4, 2),
        ];
        let report = run(&processes, Algorithm::Fcfs, None).unwrap().to_string();
        assert!(report.starts_with("Algorithm: FCFS\n"));
        assert!(report.contains("Average waiting time:    2.33"));
        assert!(report.contains("CPU utilization:         100.00%"));
        assert_eq!(report.lines().filter(|l| l.starts_with('P')).count(), 4);
    }

    #[test]
    fn test_oversized_span_is_rejected_not_panicking() {
        let half = i64::MAX / 2 + 1;
        let processes = vec![ProcessRecord::new(1, 0, half), ProcessRecord::new(2, 0, half)];
        for algorithm in Algorithm::ALL {
            let err = run(&processes, algorithm, Some(2)).unwrap_err();
            assert_eq!(
                err.validation_errors()[0].kind,
                ValidationErrorKind::TimeSpanOverflow,
                "{algorithm}"
            );
        }
    }

    fn random_workloads() -> Vec<Vec<ProcessRecord>> {
        (0..64u64)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                let count = 1 + (seed % 9) as usize;
                let generator = if seed % 4 == 0 {
                    WorkloadGenerator::new(count).with_arrival_range(0, 0)
                } else {
                    WorkloadGenerator::new(count).with_arrival_range(0, 15)
                };
                generator.generate(&mut rng)
            })
            .collect()
    }

    #[test]
    fn test_properties_hold_on_random_workloads() {
        for processes in random_workloads() {
            let all_at_zero = processes.iter().all(|p| p.arrival_time == 0);

            for algorithm in Algorithm::ALL {
                for quantum in [1, 2, 3] {
                    let result = run(&processes, algorithm, Some(quantum)).unwrap();
                    let t = &result.timeline;
                    assert!(t.check_invariants().is_ok(), "{algorithm}: {processes:?}");

                    for p in &processes {
                        assert_eq!(t.service_time(p.id), p.burst_time, "{algorithm}");
                    }
                    assert_eq!(result.process_results.len(), processes.len());

                    for r in &result.process_results {
                        assert_eq!(r.turnaround_time, r.waiting_time + r.burst_time);
                        assert!(r.waiting_time >= 0, "{algorithm}: {r:?}");
                        assert!(r.response_time >= 0 && r.response_time <= r.waiting_time);
                        if !algorithm.is_preemptive() {
                            assert_eq!(r.response_time, r.waiting_time, "{algorithm}");
                        }
                    }

                    if all_at_zero {
                        assert!((result.metrics.cpu_utilization - 1.0).abs() < 1e-10);
                    }
                }
            }
        }
    }

    #[test]
    fn test_coarse_round_robin_matches_fcfs_on_random_workloads() {
        for processes in random_workloads() {
            let max_burst = processes.iter().map(|p| p.burst_time).max().unwrap();
            let fcfs = run(&processes, Algorithm::Fcfs, None).unwrap();

            for quantum in [max_burst, max_burst + 5] {
                let rr = run(&processes, Algorithm::RoundRobin, Some(quantum)).unwrap();
                assert_eq!(rr.process_results, fcfs.process_results, "{processes:?}");
                assert_eq!(rr.timeline, fcfs.timeline);
                assert_eq!(rr.metrics, fcfs.metrics);
            }
        }
    }
}
