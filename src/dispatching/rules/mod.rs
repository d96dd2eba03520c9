//! Built-in selection rules.
//!
//! - **Arrival**: FIFO
//! - **Length**: SJF
//! - **Class**: PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//! Scores are `f64`; time values are exact up to
//! [`MAX_TIME_SPAN`](crate::validation::MAX_TIME_SPAN), which validation
//! enforces.

use super::{DispatchingRule, DispatchContext, RuleScore};
use crate::models::ProcessRecord;

/// First In First Out.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &DispatchContext) -> RuleScore {
        process.arrival_time as f64
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with less remaining CPU time. Uses
/// `context.remaining_burst` if available, falls back to the full burst.
/// Minimizes average waiting time for a fixed ready set.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessRecord, context: &DispatchContext) -> RuleScore {
        context
            .remaining(process.id)
            .unwrap_or(process.burst_time) as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Priority class rule.
///
/// Prioritizes processes with a smaller `priority` value.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &DispatchContext) -> RuleScore {
        process.priority as f64
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo() {
        let ctx = DispatchContext::at_time(10);
        let first = ProcessRecord::new(1, 1, 5);
        let second = ProcessRecord::new(2, 3, 1);
        assert!(Fifo.evaluate(&first, &ctx) < Fifo.evaluate(&second, &ctx));
    }

    #[test]
    fn test_sjf_fallback() {
        let ctx = DispatchContext::at_time(0); // No remaining_burst data
        let short = ProcessRecord::new(1, 0, 2);
        let long = ProcessRecord::new(2, 0, 8);
        assert!(Sjf.evaluate(&short, &ctx) < Sjf.evaluate(&long, &ctx));
    }

    #[test]
    fn test_sjf_with_context() {
        let ctx = DispatchContext::at_time(5)
            .with_remaining_burst(1, 6)
            .with_remaining_burst(2, 1);
        let t1 = ProcessRecord::new(1, 0, 8);
        let t2 = ProcessRecord::new(2, 0, 8);
        assert!(Sjf.evaluate(&t2, &ctx) < Sjf.evaluate(&t1, &ctx));
    }

    #[test]
    fn test_priority_lower_value_first() {
        let ctx = DispatchContext::at_time(0);
        let urgent = ProcessRecord::new(1, 0, 4).with_priority(1);
        let background = ProcessRecord::new(2, 0, 4).with_priority(4);
        assert!(Priority.evaluate(&urgent, &ctx) < Priority.evaluate(&background, &ctx));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Fifo.description(), "First In First Out");
        assert_eq!(Sjf.name(), "SJF");
        assert_eq!(Priority.name(), "PRIORITY");
    }
}
