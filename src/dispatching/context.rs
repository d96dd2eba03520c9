//! Dispatch context for rule evaluation.

use std::collections::HashMap;

/// Engine state handed to selection rules at a decision point.
#[derive(Debug, Clone, Default)]
pub struct DispatchContext {
    /// Current model clock.
    pub current_time: i64,
    /// Remaining CPU time per process (process_id → units).
    pub remaining_burst: HashMap<u32, i64>,
}

impl DispatchContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self {
            current_time,
            ..Default::default()
        }
    }

    /// Sets remaining burst for a process.
    pub fn with_remaining_burst(mut self, process_id: u32, units: i64) -> Self {
        self.remaining_burst.insert(process_id, units);
        self
    }

    /// Remaining burst for a process, if tracked.
    pub fn remaining(&self, process_id: u32) -> Option<i64> {
        self.remaining_burst.get(&process_id).copied()
    }
}
