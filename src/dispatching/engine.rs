//! Rule engine for selecting the next process.
//!
//! Composes selection rules into a lexicographic chain with a final
//! tie-break by process ID.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchContext, DispatchingRule};
use crate::models::{Algorithm, ProcessRecord};

/// A composable rule chain for process selection.
///
/// Rules are applied in sequence; a later rule is consulted only when
/// every earlier rule scores two candidates equally. Candidates tied on
/// every rule are ordered by process ID.
///
/// # Example
/// ```
/// use cpu_schedsim::dispatching::RuleEngine;
/// use cpu_schedsim::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Priority)
///     .with_tie_breaker(rules::Fifo);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Rule chain for a non-preemptive algorithm.
    ///
    /// - FCFS: arrival, then ID
    /// - SJF: burst, then arrival, then ID
    /// - Priority: priority value, then arrival, then ID
    ///
    /// Returns `None` for Round Robin, which dispatches from a FIFO queue.
    pub fn for_algorithm(algorithm: Algorithm) -> Option<Self> {
        match algorithm {
            Algorithm::Fcfs => Some(Self::new().with_rule(rules::Fifo)),
            Algorithm::Sjf => Some(
                Self::new()
                    .with_rule(rules::Sjf)
                    .with_tie_breaker(rules::Fifo),
            ),
            Algorithm::Priority => Some(
                Self::new()
                    .with_rule(rules::Priority)
                    .with_tie_breaker(rules::Fifo),
            ),
            Algorithm::RoundRobin => None,
        }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted after all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Returns the index of the candidate that should run next.
    pub fn select_best(
        &self,
        candidates: &[&ProcessRecord],
        context: &DispatchContext,
    ) -> Option<usize> {
        (0..candidates.len())
            .reduce(|best, i| {
                if self.compare(candidates[i], candidates[best], context) == Ordering::Less {
                    i
                } else {
                    best
                }
            })
    }

    fn compare(&self, a: &ProcessRecord, b: &ProcessRecord, context: &DispatchContext) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        a.id.cmp(&b.id)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjf_selects_shortest() {
        let long = ProcessRecord::new(1, 0, 5);
        let short = ProcessRecord::new(2, 0, 1);
        let medium = ProcessRecord::new(3, 0, 3);
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Sjf);

        assert_eq!(engine.select_best(&[&long, &short, &medium], &ctx), Some(1));
        assert_eq!(engine.select_best(&[&long, &medium], &ctx), Some(1));
    }

    #[test]
    fn test_sjf_uses_remaining_burst() {
        let a = ProcessRecord::new(1, 0, 8);
        let b = ProcessRecord::new(2, 0, 8);
        let ctx = DispatchContext::at_time(4)
            .with_remaining_burst(1, 6)
            .with_remaining_burst(2, 2);
        let engine = RuleEngine::for_algorithm(Algorithm::Sjf).unwrap();

        assert_eq!(engine.select_best(&[&a, &b], &ctx), Some(1));
    }

    #[test]
    fn test_sequential_with_tie_breaker() {
        // Same burst; earlier arrival wins
        let late = ProcessRecord::new(1, 5, 4);
        let early = ProcessRecord::new(2, 2, 4);
        let ctx = DispatchContext::at_time(8);
        let engine = RuleEngine::for_algorithm(Algorithm::Sjf).unwrap();

        assert_eq!(engine.select_best(&[&late, &early], &ctx), Some(1));
    }

    #[test]
    fn test_full_tie_breaks_by_id() {
        let b = ProcessRecord::new(9, 0, 3);
        let a = ProcessRecord::new(4, 0, 3);
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::for_algorithm(Algorithm::Fcfs).unwrap();

        assert_eq!(engine.select_best(&[&b, &a], &ctx), Some(1));
        assert_eq!(engine.select_best(&[&a, &b], &ctx), Some(0));
    }

    #[test]
    fn test_priority_chain() {
        let low = ProcessRecord::new(1, 0, 10).with_priority(3);
        let high = ProcessRecord::new(2, 0, 5).with_priority(1);
        let late_high = ProcessRecord::new(3, 2, 1).with_priority(1);
        let ctx = DispatchContext::at_time(2);
        let engine = RuleEngine::for_algorithm(Algorithm::Priority).unwrap();

        assert_eq!(engine.select_best(&[&low, &high], &ctx), Some(1));
        // Equal priority falls through to arrival
        assert_eq!(engine.select_best(&[&late_high, &low, &high], &ctx), Some(2));
    }

    #[test]
    fn test_round_robin_has_no_rule_chain() {
        assert!(RuleEngine::for_algorithm(Algorithm::RoundRobin).is_none());
    }

    #[test]
    fn test_empty_candidates() {
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Sjf);
        assert!(engine.select_best(&[], &ctx).is_none());
    }

    #[test]
    fn test_debug_lists_rule_names() {
        let engine = RuleEngine::for_algorithm(Algorithm::Sjf).unwrap();
        let text = format!("{engine:?}");
        assert!(text.contains("SJF"));
        assert!(text.contains("FIFO"));
    }
}
