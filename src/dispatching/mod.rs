//! Selection rules and rule engine for non-preemptive dispatch.
//!
//! At every decision point the engine holds the set of ready processes
//! and asks a [`RuleEngine`] which one runs next. Each non-preemptive
//! algorithm is a rule chain: a primary rule, optional tie-breaking
//! rules, and a final deterministic tie-break by process ID.
//!
//! # Usage
//!
//! ```
//! use cpu_schedsim::dispatching::{DispatchContext, RuleEngine};
//! use cpu_schedsim::dispatching::rules;
//! use cpu_schedsim::models::ProcessRecord;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Sjf)
//!     .with_tie_breaker(rules::Fifo);
//!
//! let a = ProcessRecord::new(1, 0, 7);
//! let b = ProcessRecord::new(2, 2, 4);
//! let context = DispatchContext::at_time(7);
//! assert_eq!(engine.select_best(&[&a, &b], &context), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::RuleEngine;

use crate::models::ProcessRecord;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A rule that scores a ready process.
///
/// # Score Convention
/// **Lower score = dispatched first.** Rules should return smaller values
/// for processes that should run sooner.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "FIFO").
    fn name(&self) -> &'static str;

    /// Scores a process given the current dispatch context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &ProcessRecord, context: &DispatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
