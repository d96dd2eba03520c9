//! Workload construction and characterization.
//!
//! # Sources
//!
//! - [`Scenario`]: fixed presets (gaming, web server, batch, real-time, mixed)
//! - [`WorkloadGenerator`]: uniform random process sets
//!
//! [`WorkloadProfile`] summarizes a process set, and [`advise_quantum`]
//! flags Round Robin quanta too coarse for it.

mod generator;
mod scenarios;

pub use generator::WorkloadGenerator;
pub use scenarios::Scenario;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::ProcessRecord;

/// Quanta above this fraction of the average burst are flagged.
const COARSE_QUANTUM_RATIO: f64 = 0.5;

/// Summary characteristics of a process set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadProfile {
    /// Number of processes.
    pub process_count: usize,
    /// Mean burst time.
    pub avg_burst: f64,
    /// `max(arrival) - min(arrival)`.
    pub arrival_spread: i64,
    /// Number of distinct priority values.
    pub distinct_priorities: usize,
}

impl WorkloadProfile {
    /// Profiles `processes`. An empty set yields all zeros.
    pub fn from_processes(processes: &[ProcessRecord]) -> Self {
        let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();
        let avg_burst = if processes.is_empty() {
            0.0
        } else {
            total_burst as f64 / processes.len() as f64
        };

        let first = processes.iter().map(|p| p.arrival_time).min();
        let last = processes.iter().map(|p| p.arrival_time).max();
        let arrival_spread = match (first, last) {
            (Some(first), Some(last)) => last - first,
            _ => 0,
        };

        let distinct_priorities = processes
            .iter()
            .map(|p| p.priority)
            .collect::<HashSet<_>>()
            .len();

        Self {
            process_count: processes.len(),
            avg_burst,
            arrival_spread,
            distinct_priorities,
        }
    }
}

/// Verdict on a Round Robin quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantumAdvice {
    /// Quantum exceeds half the average burst; Round Robin drifts toward FCFS.
    TooCoarse,
    /// Quantum is at most half the average burst.
    Reasonable,
}

/// Judges `quantum` against the average burst of `processes`.
pub fn advise_quantum(processes: &[ProcessRecord], quantum: i64) -> QuantumAdvice {
    let avg_burst = WorkloadProfile::from_processes(processes).avg_burst;
    if quantum as f64 > avg_burst * COARSE_QUANTUM_RATIO {
        QuantumAdvice::TooCoarse
    } else {
        QuantumAdvice::Reasonable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_mixed_workload() {
        let profile = WorkloadProfile::from_processes(&Scenario::MixedWorkload.processes());
        assert_eq!(profile.process_count, 5);
        assert!((profile.avg_burst - 5.6).abs() < 1e-10);
        assert_eq!(profile.arrival_spread, 6);
        assert_eq!(profile.distinct_priorities, 3);
    }

    #[test]
    fn test_profile_empty() {
        let profile = WorkloadProfile::from_processes(&[]);
        assert_eq!(profile.process_count, 0);
        assert!((profile.avg_burst - 0.0).abs() < 1e-10);
        assert_eq!(profile.arrival_spread, 0);
    }

    #[test]
    fn test_advise_quantum() {
        // avg burst 5.6 → threshold 2.8
        let processes = Scenario::MixedWorkload.processes();
        assert_eq!(advise_quantum(&processes, 2), QuantumAdvice::Reasonable);
        assert_eq!(advise_quantum(&processes, 3), QuantumAdvice::TooCoarse);

        // avg burst 4 → quantum equal to half is still reasonable
        let processes = vec![ProcessRecord::new(1, 0, 4)];
        assert_eq!(advise_quantum(&processes, 2), QuantumAdvice::Reasonable);
    }
}
