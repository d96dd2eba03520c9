//! Rule-of-thumb observations on aggregate metrics.
//!
//! | Metric | Good | Fair | Poor |
//! |--------|------|------|------|
//! | CPU utilization | > 90% | > 70% | otherwise |
//! | Fairness index | > 0.8 | > 0.5 | otherwise |
//!
//! Throughput and average response time are reported as [`InsightLevel::Info`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::AggregateMetrics;

/// Assessment attached to an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightLevel {
    /// Metric is in its best band.
    Good,
    /// Acceptable, with room to improve.
    Fair,
    /// Metric is in its worst band.
    Poor,
    /// Reported value with no judgement.
    Info,
}

/// One observation about a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Assessment band.
    pub level: InsightLevel,
    /// Human-readable observation, including the measured value.
    pub message: String,
}

impl Insight {
    fn new(level: InsightLevel, message: String) -> Self {
        Self { level, message }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            InsightLevel::Good => "good",
            InsightLevel::Fair => "fair",
            InsightLevel::Poor => "poor",
            InsightLevel::Info => "info",
        };
        write!(f, "[{tag}] {}", self.message)
    }
}

/// Generates utilization, throughput, fairness and response insights, in
/// that order.
pub fn generate(metrics: &AggregateMetrics) -> Vec<Insight> {
    let utilization = metrics.cpu_utilization_percent();
    let fairness = metrics.fairness_index;

    let utilization_insight = if utilization > 90.0 {
        Insight::new(
            InsightLevel::Good,
            format!("Excellent CPU utilization at {utilization:.2}%"),
        )
    } else if utilization > 70.0 {
        Insight::new(
            InsightLevel::Fair,
            format!("Good CPU utilization at {utilization:.2}%, but could be improved"),
        )
    } else {
        Insight::new(
            InsightLevel::Poor,
            format!(
                "Low CPU utilization at {utilization:.2}%; arrivals leave the CPU idle"
            ),
        )
    };

    let fairness_insight = if fairness > 0.8 {
        Insight::new(
            InsightLevel::Good,
            format!("High fairness index ({fairness:.4}): waiting times are well balanced"),
        )
    } else if fairness > 0.5 {
        Insight::new(
            InsightLevel::Fair,
            format!("Moderate fairness ({fairness:.4}): some processes wait significantly longer"),
        )
    } else {
        Insight::new(
            InsightLevel::Poor,
            format!("Low fairness ({fairness:.4}): another algorithm may balance waits better"),
        )
    };

    vec![
        utilization_insight,
        Insight::new(
            InsightLevel::Info,
            format!("Throughput: {:.4} processes per time unit", metrics.throughput),
        ),
        fairness_insight,
        Insight::new(
            InsightLevel::Info,
            format!(
                "Average response time: {:.2} time units",
                metrics.avg_response_time
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Algorithm, ProcessRecord};
    use crate::simulation::run;

    fn levels(processes: &[ProcessRecord]) -> Vec<InsightLevel> {
        let result = run(processes, Algorithm::Fcfs, None).unwrap();
        generate(&result.metrics).iter().map(|i| i.level).collect()
    }

    #[test]
    fn test_busy_but_unfair() {
        // waits 0, 3, 4 → fairness 9/35
        let processes = vec![
            ProcessRecord::new(1, 0, 5),
            ProcessRecord::new(2, 2, 3),
            ProcessRecord::new(3, 4, 2),
        ];
        assert_eq!(
            levels(&processes),
            vec![
                InsightLevel::Good,
                InsightLevel::Info,
                InsightLevel::Poor,
                InsightLevel::Info
            ]
        );
    }

    #[test]
    fn test_fair_bands() {
        // span 9, busy 8; waits 0, 0
        let processes = vec![ProcessRecord::new(1, 0, 4), ProcessRecord::new(2, 5, 4)];
        assert_eq!(levels(&processes)[0], InsightLevel::Fair);
        assert_eq!(levels(&processes)[2], InsightLevel::Good);

        // waits 0, 1 → variance 0.25 → fairness exactly 0.8
        let processes = vec![ProcessRecord::new(1, 0, 1), ProcessRecord::new(2, 0, 1)];
        assert_eq!(levels(&processes)[2], InsightLevel::Fair);
    }

    #[test]
    fn test_low_utilization() {
        let processes = vec![ProcessRecord::new(1, 0, 2), ProcessRecord::new(2, 6, 2)];
        let result = run(&processes, Algorithm::Fcfs, None).unwrap();
        let insights = generate(&result.metrics);
        assert_eq!(insights[0].level, InsightLevel::Poor);
        assert!(insights[0].to_string().starts_with("[poor] Low CPU utilization at 50.00%"));
        assert_eq!(insights[1].message, "Throughput: 0.2500 processes per time unit");
    }
}
