//! Pass quality metrics (KPIs).
//!
//! Computes standard uniprocessor performance indicators from a
//! completed pass.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Completion time of the last job |
//! | Avg Wait | Mean of start - arrival |
//! | Avg Turnaround | Mean of wait + service |
//! | Avg Weighted Turnaround | Mean of turnaround / service |
//! | Max Wait | Longest single wait |
//! | Utilization | Busy time / makespan |
//! | Throughput | Jobs completed per tick |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::PassResult;
use crate::dispatching::Policy;
use crate::models::Ticks;

/// Performance indicators of one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassKpi {
    /// Policy that produced the pass.
    pub policy: Policy,
    /// Number of jobs scheduled.
    pub job_count: usize,
    /// Completion time of the last job.
    pub makespan: Ticks,
    /// Sum of wait times.
    pub total_wait: Ticks,
    /// Sum of turnaround times.
    pub total_turnaround: Ticks,
    /// Mean wait time.
    pub avg_wait: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean of turnaround / service.
    pub avg_weighted_turnaround: f64,
    /// Longest wait of any job.
    pub max_wait: Ticks,
    /// Fraction of [0, makespan] the processor was busy (0.0..1.0).
    pub utilization: f64,
    /// Jobs completed per tick of makespan.
    pub throughput: f64,
}

impl PassKpi {
    /// Computes KPIs from a completed pass.
    pub fn calculate(pass: &PassResult) -> Self {
        let job_count = pass.job_count();
        let makespan = pass.makespan();
        let busy: Ticks = pass.outcomes.iter().map(|o| o.service).sum();
        let max_wait = pass.outcomes.iter().map(|o| o.wait).max().unwrap_or(0);

        let avg_weighted_turnaround = if job_count == 0 {
            0.0
        } else {
            let sum: f64 = pass.outcomes.iter().map(|o| o.weighted_turnaround()).sum();
            sum / job_count as f64
        };

        let (utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy as f64 / makespan as f64,
                job_count as f64 / makespan as f64,
            )
        };

        Self {
            policy: pass.policy,
            job_count,
            makespan,
            total_wait: pass.total_wait,
            total_turnaround: pass.total_turnaround,
            avg_wait: pass.average_wait(),
            avg_turnaround: pass.average_turnaround(),
            avg_weighted_turnaround,
            max_wait,
            utilization,
            throughput,
        }
    }
}
