//! Random job-set generation.
//!
//! Produces reproducible workloads for demos and tests when seeded:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_jobsched::workload::WorkloadGenerator;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let jobs = WorkloadGenerator::new(10).generate(&mut rng);
//! assert_eq!(jobs.len(), 10);
//! assert_eq!(jobs[0].arrival, 0);
//! ```

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::{JobSpec, Ticks};

/// Parameters of a random workload.
///
/// The first job arrives at t=0; each following job arrives
/// `0..=max_arrival_gap` ticks after the previous one.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    /// Number of jobs to generate.
    pub count: usize,
    /// Largest gap between consecutive arrivals.
    pub max_arrival_gap: Ticks,
    /// Service time range (lower bound clamped to 1).
    pub service: RangeInclusive<Ticks>,
    /// Priority range.
    pub priority: RangeInclusive<i32>,
}

impl WorkloadGenerator {
    /// Creates a generator with default ranges: gaps 0..=4, service
    /// 1..=10, priority 0..=5.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival_gap: 4,
            service: 1..=10,
            priority: 0..=5,
        }
    }

    /// Sets the maximum arrival gap.
    pub fn with_max_arrival_gap(mut self, gap: Ticks) -> Self {
        self.max_arrival_gap = gap.max(0);
        self
    }

    /// Sets the service time range.
    pub fn with_service(mut self, service: RangeInclusive<Ticks>) -> Self {
        self.service = service;
        self
    }

    /// Sets the priority range.
    pub fn with_priority(mut self, priority: RangeInclusive<i32>) -> Self {
        self.priority = priority;
        self
    }

    /// Generates `count` job specs with non-decreasing arrivals.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<JobSpec> {
        let service_lo = (*self.service.start()).max(1);
        let service_hi = (*self.service.end()).max(service_lo);
        let priority_lo = *self.priority.start();
        let priority_hi = (*self.priority.end()).max(priority_lo);
        let max_gap = self.max_arrival_gap.max(0);

        let mut arrival: Ticks = 0;
        (0..self.count)
            .map(|i| {
                if i > 0 {
                    arrival += rng.random_range(0..=max_gap);
                }
                JobSpec::new(
                    arrival,
                    rng.random_range(service_lo..=service_hi),
                    rng.random_range(priority_lo..=priority_hi),
                )
            })
            .collect()
    }
}
