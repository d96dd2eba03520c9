//! CPU scheduling domain models.
//!
//! Provides the input and output types of a simulation run.
//!
//! # Data Flow
//!
//! | Stage | Type |
//! |-------|------|
//! | Input | `ProcessRecord`, `Algorithm` |
//! | Engine output | `Timeline` of `ExecutionSlice`s |
//! | Metrics output | `ProcessResult`, `AggregateMetrics` |
//! | Bundle | `SimulationResult` |

mod algorithm;
mod outcome;
mod process;
mod timeline;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use outcome::{AggregateMetrics, ProcessResult, SimulationResult};
pub use process::{ProcessRecord, DEFAULT_PRIORITY};
pub use timeline::{ExecutionSlice, Segment, Timeline, TimelineDefect};
