//! Pass results.

use serde::{Deserialize, Serialize};

use crate::dispatching::Policy;
use crate::models::{Job, Ticks};

/// Outcome of one job within a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOutcome {
    /// 1-based job ID.
    pub job_id: usize,
    /// Arrival time.
    pub arrival: Ticks,
    /// Service time.
    pub service: Ticks,
    /// Start time.
    pub start: Ticks,
    /// `start - arrival`.
    pub wait: Ticks,
    /// `wait + service`.
    pub turnaround: Ticks,
}

impl JobOutcome {
    pub(crate) fn from_job(job: &Job, start: Ticks) -> Self {
        let wait = start - job.arrival;
        Self {
            job_id: job.id,
            arrival: job.arrival,
            service: job.service,
            start,
            wait,
            turnaround: wait + job.service,
        }
    }

    /// Completion time (`start + service`).
    pub fn finish(&self) -> Ticks {
        self.start + self.service
    }

    /// Turnaround relative to service time. 1.0 means no waiting.
    pub fn weighted_turnaround(&self) -> f64 {
        self.turnaround as f64 / self.service as f64
    }
}

/// Result of running one policy over every job.
///
/// Outcomes are in schedule order, not input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassResult {
    /// Policy that produced this pass.
    pub policy: Policy,
    /// Per-job outcomes in the order the jobs ran.
    pub outcomes: Vec<JobOutcome>,
    /// Sum of wait times.
    pub total_wait: Ticks,
    /// Sum of turnaround times.
    pub total_turnaround: Ticks,
}

impl PassResult {
    pub(crate) fn new(policy: Policy, capacity: usize) -> Self {
        Self {
            policy,
            outcomes: Vec::with_capacity(capacity),
            total_wait: 0,
            total_turnaround: 0,
        }
    }

    pub(crate) fn push(&mut self, outcome: JobOutcome) {
        self.total_wait += outcome.wait;
        self.total_turnaround += outcome.turnaround;
        self.outcomes.push(outcome);
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Mean wait time. 0.0 for an empty pass.
    pub fn average_wait(&self) -> f64 {
        self.average(self.total_wait)
    }

    /// Mean turnaround time. 0.0 for an empty pass.
    pub fn average_turnaround(&self) -> f64 {
        self.average(self.total_turnaround)
    }

    /// Job IDs in schedule order.
    pub fn order(&self) -> Vec<usize> {
        self.outcomes.iter().map(|o| o.job_id).collect()
    }

    /// Outcome for a given job ID.
    pub fn outcome_for(&self, job_id: usize) -> Option<&JobOutcome> {
        self.outcomes.iter().find(|o| o.job_id == job_id)
    }

    /// Completion time of the last job. 0 for an empty pass.
    pub fn makespan(&self) -> Ticks {
        self.outcomes.last().map(JobOutcome::finish).unwrap_or(0)
    }

    fn average(&self, total: Ticks) -> f64 {
        if self.outcomes.is_empty() {
            0.0
        } else {
            total as f64 / self.outcomes.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobSpec;

    fn outcome(id: usize, arrival: Ticks, service: Ticks, start: Ticks) -> JobOutcome {
        JobOutcome::from_job(&Job::new(id, JobSpec::new(arrival, service, 0)), start)
    }

    #[test]
    fn test_outcome_derived_fields() {
        let o = outcome(2, 1, 3, 5);
        assert_eq!(o.wait, 4);
        assert_eq!(o.turnaround, 7);
        assert_eq!(o.finish(), 8);
        assert!((o.weighted_turnaround() - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_totals_and_averages() {
        let mut pass = PassResult::new(Policy::Fcfs, 2);
        pass.push(outcome(1, 0, 5, 0));
        pass.push(outcome(2, 1, 3, 5));

        assert_eq!(pass.total_wait, 4);
        assert_eq!(pass.total_turnaround, 12);
        assert!((pass.average_wait() - 2.0).abs() < 1e-12);
        assert!((pass.average_turnaround() - 6.0).abs() < 1e-12);
        assert_eq!(pass.order(), vec![1, 2]);
        assert_eq!(pass.makespan(), 8);
        assert_eq!(pass.outcome_for(2).map(|o| o.start), Some(5));
    }

    #[test]
    fn test_empty_pass_averages() {
        let pass = PassResult::new(Policy::Sjf, 0);
        assert_eq!(pass.average_wait(), 0.0);
        assert_eq!(pass.makespan(), 0);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut pass = PassResult::new(Policy::Hrrf, 1);
        pass.push(outcome(1, 0, 2, 0));
        let json = serde_json::to_string(&pass).unwrap();
        assert!(json.contains("\"policy\":\"hrrf\""));
        let back: PassResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pass);
    }
}
