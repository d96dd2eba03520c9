//! Scheduling engine.
//!
//! Turns a process set and an algorithm selection into an execution
//! timeline. Every run is a pure function of its inputs: no state is kept
//! between calls.
//!
//! # Algorithms
//!
//! FCFS, SJF and Priority share one non-preemptive loop parameterized by a
//! [`RuleEngine`] chain. Round Robin owns a FIFO ready queue local to the
//! call.
//!
//! # Termination
//!
//! The model clock never needs to pass `sum(burst) + max(arrival)`. The
//! loops check that bound and fail with
//! [`SimulationError::IterationLimitExceeded`] instead of spinning.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod non_preemptive;
mod round_robin;
mod state;

pub use state::ProcessState;

use log::{debug, warn};

use crate::dispatching::RuleEngine;
use crate::error::{Result, SimulationError};
use crate::models::{Algorithm, ProcessRecord, Timeline};
use crate::validation::{validate_request, ValidationError};

/// Simulates one scheduling policy over a process set.
///
/// `quantum` is required (and must be positive) for
/// [`Algorithm::RoundRobin`]; it is ignored otherwise.
///
/// # Errors
/// - [`SimulationError::InvalidInput`] if the process list is empty, any
///   burst is non-positive, any arrival is negative, IDs repeat, or the
///   Round Robin quantum is missing or non-positive.
/// - [`SimulationError::IncompleteTimeline`] /
///   [`SimulationError::IterationLimitExceeded`] on an engine defect.
///
/// # Example
///
/// ```
/// use cpu_schedsim::models::{Algorithm, ProcessRecord};
/// use cpu_schedsim::scheduler::simulate;
///
/// let processes = vec![
///     ProcessRecord::new(1, 0, 5),
///     ProcessRecord::new(2, 2, 3),
///     ProcessRecord::new(3, 4, 2),
/// ];
/// let timeline = simulate(&processes, Algorithm::Fcfs, None).unwrap();
/// assert_eq!(timeline.execution_order(), vec![1, 2, 3]);
/// assert_eq!(timeline.total_time(), 10);
/// ```
pub fn simulate(
    processes: &[ProcessRecord],
    algorithm: Algorithm,
    quantum: Option<i64>,
) -> Result<Timeline> {
    if let Err(errors) = validate_request(processes, algorithm, quantum) {
        warn!(
            "rejected {algorithm} input: {} problem(s), first: {}",
            errors.len(),
            errors[0]
        );
        return Err(SimulationError::InvalidInput(errors));
    }

    let timeline = match (RuleEngine::for_algorithm(algorithm), quantum) {
        (Some(engine), _) => {
            debug!("{algorithm} rule chain: {engine:?}");
            non_preemptive::run(processes, &engine)?
        }
        (None, Some(q)) => round_robin::run(processes, q)?,
        (None, None) => {
            return Err(SimulationError::InvalidInput(vec![
                ValidationError::missing_quantum(algorithm),
            ]));
        }
    };

    debug!(
        "{algorithm}: {} slice(s), span {}",
        timeline.len(),
        timeline.total_time()
    );
    Ok(timeline)
}
