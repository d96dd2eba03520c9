//! Scheduling algorithm selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four supported CPU scheduling policies.
///
/// | Algorithm | Selection | Preemptive |
/// |-----------|-----------|------------|
/// | FCFS | earliest arrival | no |
/// | SJF | shortest burst | no |
/// | Priority | lowest priority value | no |
/// | RoundRobin | FIFO ready queue | every quantum |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Priority scheduling (non-preemptive).
    Priority,
    /// Round Robin with a fixed time quantum.
    RoundRobin,
}

impl Algorithm {
    /// All algorithms, in comparison order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    /// One-line description of the policy.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "Processes served in arrival order",
            Algorithm::Sjf => "Shortest ready burst runs next, to completion",
            Algorithm::Priority => "Highest-priority ready process runs next, to completion",
            Algorithm::RoundRobin => "Ready queue served in turns of one time quantum",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }

    /// Whether the algorithm needs a time quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling algorithm '{}'", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts canonical names and common aliases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "fcfs" | "fifo" => Ok(Algorithm::Fcfs),
            "sjf" | "sjn" => Ok(Algorithm::Sjf),
            "priority" | "prio" => Ok(Algorithm::Priority),
            "rr" | "roundrobin" => Ok(Algorithm::RoundRobin),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
