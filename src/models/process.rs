//! Process record model.
//!
//! A process record is the immutable input describing one simulated
//! process: when it becomes eligible, how much CPU it needs, and its
//! priority class.
//!
//! # Time Representation
//! All times are integer model-clock units relative to t=0.
//! The clock has no wall-clock meaning.

use serde::{Deserialize, Serialize};

/// Neutral priority assigned when the caller does not specify one.
///
/// Only the Priority algorithm reads this field.
pub const DEFAULT_PRIORITY: i32 = 1;

/// A simulated process.
///
/// # Ordering
/// `id` is the stable ordering key used as the final tie-break by every
/// algorithm. `name` is a display label only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier.
    pub id: u32,
    /// Display label (defaults to `P{id}`).
    pub name: String,
    /// Time the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Priority class (lower value = higher priority).
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

impl ProcessRecord {
    /// Creates a process with the given timing and neutral priority.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            name: format!("P{id}"),
            arrival_time,
            burst_time,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the priority class.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the display label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}
