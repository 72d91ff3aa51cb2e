//! Seeded random workload generation.
//!
//! Produces reproducible process sets for exercising the policies:
//! each process either arrives at t=0 (with probability `p_at_zero`) or
//! at a uniform tick in `arrival_range`, with a uniform burst and priority.
//!
//! # Example
//! ```
//! use u_cpusched::workload::WorkloadGenerator;
//!
//! let a = WorkloadGenerator::new(7).with_process_count(5).generate();
//! let b = WorkloadGenerator::new(7).with_process_count(5).generate();
//! assert_eq!(a, b);
//! assert_eq!(a[0].id, "P1");
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::models::Process;

/// Random process-set generator.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    process_count: usize,
    p_at_zero: f64,
    arrival_range: RangeInclusive<i64>,
    burst_range: RangeInclusive<i64>,
    priority_range: RangeInclusive<i64>,
}

impl WorkloadGenerator {
    /// Creates a generator with default ranges (8 processes, arrivals 0..=20,
    /// bursts 1..=10, priorities 0..=5, 30% arriving at t=0).
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            process_count: 8,
            p_at_zero: 0.3,
            arrival_range: 0..=20,
            burst_range: 1..=10,
            priority_range: 0..=5,
        }
    }

    /// Sets the number of processes.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets the probability that a process arrives at t=0.
    pub fn with_zero_arrival_probability(mut self, p: f64) -> Self {
        self.p_at_zero = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the arrival range. The lower bound is clamped to 0.
    pub fn with_arrival_range(mut self, range: RangeInclusive<i64>) -> Self {
        let (lo, hi) = range.into_inner();
        let lo = lo.max(0);
        self.arrival_range = lo..=hi.max(lo);
        self
    }

    /// Sets the burst range. The lower bound is clamped to 1.
    pub fn with_burst_range(mut self, range: RangeInclusive<i64>) -> Self {
        let (lo, hi) = range.into_inner();
        let lo = lo.max(1);
        self.burst_range = lo..=hi.max(lo);
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, range: RangeInclusive<i64>) -> Self {
        let (lo, hi) = range.into_inner();
        self.priority_range = lo..=hi.max(lo);
        self
    }

    /// Generates the process set, ids `P1..Pn` in input order.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (1..=self.process_count)
            .map(|i| {
                let arrival = if rng.random_bool(self.p_at_zero) {
                    0
                } else {
                    rng.random_range(self.arrival_range.clone())
                };
                let burst = rng.random_range(self.burst_range.clone());
                let priority = rng.random_range(self.priority_range.clone());
                Process::new(format!("P{i}"), arrival, burst).with_priority(priority)
            })
            .collect()
    }
}
