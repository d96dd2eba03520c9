//! Random workload generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::ProcessRecord;

/// Draws synthetic process sets from uniform ranges.
///
/// All ranges are inclusive `(low, high)` pairs. Bounds given in reverse
/// order are swapped. Arrivals are floored at 0 and bursts at 1, so every
/// generated set passes validation.
///
/// # Example
///
/// ```
/// use cpu_schedsim::workload::WorkloadGenerator;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let processes = WorkloadGenerator::new(6).with_burst_range(2, 4).generate(&mut rng);
/// assert_eq!(processes.len(), 6);
/// assert!(processes.iter().all(|p| (2..=4).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes to generate.
    pub count: usize,
    /// Inclusive arrival time bounds.
    pub arrival_range: (i64, i64),
    /// Inclusive burst time bounds.
    pub burst_range: (i64, i64),
    /// Inclusive priority bounds.
    pub priority_range: (i32, i32),
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with arrivals in `0..=10`,
    /// bursts in `1..=10` and priorities in `1..=5`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival_range: (0, 10),
            burst_range: (1, 10),
            priority_range: (1, 5),
        }
    }

    /// Sets the inclusive arrival time bounds.
    pub fn with_arrival_range(mut self, low: i64, high: i64) -> Self {
        self.arrival_range = (low, high);
        self
    }

    /// Sets the inclusive burst time bounds.
    pub fn with_burst_range(mut self, low: i64, high: i64) -> Self {
        self.burst_range = (low, high);
        self
    }

    /// Sets the inclusive priority bounds.
    pub fn with_priority_range(mut self, low: i32, high: i32) -> Self {
        self.priority_range = (low, high);
        self
    }

    /// Generates processes `P1..Pn`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessRecord> {
        let (arrival_lo, arrival_hi) = clamp_range(self.arrival_range, 0);
        let (burst_lo, burst_hi) = clamp_range(self.burst_range, 1);
        let (prio_lo, prio_hi) = ordered(self.priority_range);

        (1..=self.count)
            .map(|i| {
                let arrival = rng.random_range(arrival_lo..=arrival_hi);
                let burst = rng.random_range(burst_lo..=burst_hi);
                let priority = rng.random_range(prio_lo..=prio_hi);
                ProcessRecord::new(i as u32, arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

fn ordered<T: PartialOrd>((a, b): (T, T)) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn clamp_range(range: (i64, i64), floor: i64) -> (i64, i64) {
    let (lo, hi) = ordered(range);
    (lo.max(floor), hi.max(floor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_within_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(20)
            .with_arrival_range(3, 8)
            .with_burst_range(1, 6)
            .with_priority_range(1, 3);
        let processes = generator.generate(&mut rng);

        assert_eq!(processes.len(), 20);
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(p.id, i as u32 + 1);
            assert_eq!(p.name, format!("P{}", i + 1));
            assert!((3..=8).contains(&p.arrival_time));
            assert!((1..=6).contains(&p.burst_time));
            assert!((1..=3).contains(&p.priority));
        }
    }

    #[test]
    fn test_same_seed_same_workload() {
        let generator = WorkloadGenerator::default();
        let a = generator.generate(&mut StdRng::seed_from_u64(9));
        let b = generator.generate(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_ranges_stay_valid() {
        let mut rng = StdRng::seed_from_u64(1);
        let processes = WorkloadGenerator::new(10)
            .with_arrival_range(-5, -1)
            .with_burst_range(0, -4)
            .with_priority_range(4, 2)
            .generate(&mut rng);

        assert!(validate_processes(&processes).is_ok());
        assert!(processes.iter().all(|p| p.arrival_time == 0));
        assert!(processes.iter().all(|p| p.burst_time == 1));
        assert!(processes.iter().all(|p| (2..=4).contains(&p.priority)));
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(WorkloadGenerator::new(0).generate(&mut rng).is_empty());
    }
}
