//! Predefined workload presets.

use serde::{Deserialize, Serialize};

use crate::models::ProcessRecord;

/// Canned process sets for quick experiments.
///
/// Each preset is `(arrival, burst, priority)` per process, IDs `1..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Four CPU-bound processes with mixed priorities.
    GamingWorkload,
    /// Five short requests arriving at t=0 and t=1.
    WebServer,
    /// Four long jobs, one arriving late.
    BatchProcessing,
    /// Five short processes with tight arrival spacing.
    RealTime,
    /// Short and long processes with staggered arrivals.
    MixedWorkload,
}

impl Scenario {
    /// All presets.
    pub const ALL: [Scenario; 5] = [
        Scenario::GamingWorkload,
        Scenario::WebServer,
        Scenario::BatchProcessing,
        Scenario::RealTime,
        Scenario::MixedWorkload,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::GamingWorkload => "Gaming Workload (CPU Intensive)",
            Scenario::WebServer => "Web Server (I/O Bound)",
            Scenario::BatchProcessing => "Batch Processing",
            Scenario::RealTime => "Real-Time System",
            Scenario::MixedWorkload => "Mixed Workload",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Scenario::GamingWorkload => "CPU-intensive processes with varying priorities",
            Scenario::WebServer => "Short, frequent processes typical of web requests",
            Scenario::BatchProcessing => "Long-running batch jobs with different priorities",
            Scenario::RealTime => "Time-critical processes with strict priorities",
            Scenario::MixedWorkload => "Mix of short and long processes with staggered arrivals",
        }
    }

    fn table(&self) -> &'static [(i64, i64, i32)] {
        match self {
            Scenario::GamingWorkload => &[(0, 8, 2), (1, 4, 1), (2, 9, 3), (3, 5, 2)],
            Scenario::WebServer => &[(0, 2, 1), (0, 1, 2), (0, 2, 1), (1, 1, 3), (1, 2, 2)],
            Scenario::BatchProcessing => &[(0, 15, 1), (0, 12, 2), (0, 18, 1), (5, 10, 3)],
            Scenario::RealTime => &[(0, 3, 1), (1, 2, 1), (2, 4, 2), (2, 1, 1), (3, 3, 2)],
            Scenario::MixedWorkload => &[(0, 10, 3), (2, 2, 1), (4, 8, 2), (5, 3, 1), (6, 5, 2)],
        }
    }

    /// The preset's processes, `P1..Pn`.
    pub fn processes(&self) -> Vec<ProcessRecord> {
        self.table()
            .iter()
            .zip(1u32..)
            .map(|(&(arrival, burst, priority), id)| {
                ProcessRecord::new(id, arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Algorithm;
    use crate::simulation::run;
    use crate::validation::validate_processes;

    #[test]
    fn test_presets_are_valid() {
        for scenario in Scenario::ALL {
            let processes = scenario.processes();
            assert!(validate_processes(&processes).is_ok(), "{}", scenario.name());
            assert!(!scenario.description().is_empty());
        }
    }

    #[test]
    fn test_web_server_preset() {
        let processes = Scenario::WebServer.processes();
        assert_eq!(processes.len(), 5);
        assert_eq!(processes[3].name, "P4");
        assert_eq!(processes[3].arrival_time, 1);
        assert_eq!(processes[3].priority, 3);
    }

    #[test]
    fn test_batch_priority_order() {
        // P1 and P3 share priority 1; arrival ties, so ID decides
        let result = run(&Scenario::BatchProcessing.processes(), Algorithm::Priority, None).unwrap();
        assert_eq!(result.timeline.execution_order(), vec![1, 3, 2, 4]);
        assert_eq!(result.completion_times(), vec![15, 45, 33, 55]);
    }
}
