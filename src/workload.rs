//! Random workload generation.
//!
//! Produces valid process batches for demos, benchmarks and randomized
//! tests. Every generated batch passes [`validate_processes`]: IDs are
//! `1..=count`, bursts are at least 1 and arrivals are non-negative.
//!
//! [`validate_processes`]: crate::validation::validate_processes
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::workload::WorkloadGenerator;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let batch = WorkloadGenerator::new(4).with_max_burst(3).generate(&mut rng);
//! assert_eq!(batch.len(), 4);
//! assert!(batch.iter().all(|p| (1..=3).contains(&p.burst_time)));
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessId};

/// Shape of a random process batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Arrival times are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Burst times are drawn from `1..=max_burst`.
    pub max_burst: i64,
    /// Priority levels are drawn from `0..=max_priority`.
    pub max_priority: i32,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            max_burst: 10,
            max_priority: 5,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest possible burst.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest priority level.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Draws a batch from `rng`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let max_arrival = self.max_arrival.max(0);
        let max_burst = self.max_burst.max(1);
        let max_priority = self.max_priority.max(0);

        (0..self.count)
            .map(|i| {
                Process::new(
                    (i + 1) as ProcessId,
                    rng.random_range(0..=max_arrival),
                    rng.random_range(1..=max_burst),
                )
                .with_priority(rng.random_range(0..=max_priority))
            })
            .collect()
    }
}
