//! Deterministic CPU scheduling simulator.
//!
//! Simulates FCFS, SJF, Priority and Round Robin scheduling over a fixed
//! set of processes and reports per-process timing and aggregate metrics.
//! Every run is a pure function of its input: identical input always
//! yields identical output.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessRecord`, `Algorithm`, `Timeline`,
//!   `ExecutionSlice`, `ProcessResult`, `AggregateMetrics`, `SimulationResult`
//! - **`validation`**: Input checks (empty set, bad burst/arrival, duplicate IDs, quantum)
//! - **`dispatching`**: Composable selection rules for non-preemptive policies
//! - **`scheduler`**: Engine producing a `Timeline`
//! - **`metrics`**: Waiting, turnaround, response, utilization, fairness
//! - **`simulation`**: One-call run returning a `SimulationResult`
//! - **`comparison`**: All algorithms side by side, ranked by objective
//! - **`insights`**: Qualitative assessment of aggregate metrics
//! - **`workload`**: Preset scenarios, random generation, quantum advice
//!
//! # Example
//!
//! ```
//! use cpu_schedsim::{run, Algorithm, ProcessRecord};
//!
//! let processes = vec![
//!     ProcessRecord::new(1, 0, 5),
//!     ProcessRecord::new(2, 1, 4),
//!     ProcessRecord::new(3, 2, 2),
//!     ProcessRecord::new(4, 3, 3),
//! ];
//! let result = run(&processes, Algorithm::RoundRobin, Some(2)).unwrap();
//! assert_eq!(result.completion_times(), vec![13, 12, 6, 14]);
//! ```
//!
//! # Logging
//!
//! Emits through the `log` facade; install any logger to see output.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod comparison;
pub mod dispatching;
pub mod error;
pub mod insights;
pub mod metrics;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use comparison::{compare_all, Comparison, Objective};
pub use error::{Result, SimulationError};
pub use models::{Algorithm, ProcessRecord, SimulationResult, Timeline};
pub use simulation::{run, run_simulation, SimulationRequest, DEFAULT_QUANTUM};
