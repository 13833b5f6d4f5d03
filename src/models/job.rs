//! Job model.
//!
//! A job is a single unit of CPU work, described by its arrival time,
//! service (need) time, and priority. Those three attributes are fixed at
//! load time. The start and wait times are transient: they belong to the
//! scheduling pass that is currently running and are cleared before each pass.
//!
//! # Lifecycle within a pass
//!
//! `pending → scheduled`. A scheduled job is never revisited; its start and
//! wait times are final until the repository is reset.

use serde::{Deserialize, Serialize};

/// Simulated clock time, in abstract ticks relative to t=0.
pub type Ticks = i64;

/// Static description of a job, as supplied by the caller.
///
/// Identity is positional: the repository numbers jobs 1..=N in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Time at which the job becomes available (ticks, ≥ 0).
    pub arrival: Ticks,
    /// Uninterrupted processor time the job needs (ticks, > 0).
    pub service: Ticks,
    /// Scheduling priority (higher = more urgent).
    pub priority: i32,
}

impl JobSpec {
    /// Creates a job spec from an (arrival, service, priority) triple.
    pub fn new(arrival: Ticks, service: Ticks, priority: i32) -> Self {
        Self {
            arrival,
            service,
            priority,
        }
    }
}

impl From<(Ticks, Ticks, i32)> for JobSpec {
    fn from((arrival, service, priority): (Ticks, Ticks, i32)) -> Self {
        Self::new(arrival, service, priority)
    }
}

/// A job held by a [`JobRepository`](super::JobRepository).
///
/// Static attributes are public. Transient pass state is only written by the
/// scheduling engine and read through accessors. Jobs are serialized for
/// reports but only ever built from a [`JobSpec`], so there is no
/// `Deserialize` impl.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    /// 1-based position in load order, also used as display ID.
    pub id: usize,
    /// Arrival time (ticks).
    pub arrival: Ticks,
    /// Service time (ticks).
    pub service: Ticks,
    /// Priority (higher = more urgent).
    pub priority: i32,
    start: Ticks,
    wait: Ticks,
    completed: bool,
}

impl Job {
    /// Creates a pending job with the given display ID.
    pub fn new(id: usize, spec: JobSpec) -> Self {
        Self {
            id,
            arrival: spec.arrival,
            service: spec.service,
            priority: spec.priority,
            start: 0,
            wait: 0,
            completed: false,
        }
    }

    /// The static attributes of this job.
    pub fn spec(&self) -> JobSpec {
        JobSpec::new(self.arrival, self.service, self.priority)
    }

    /// Start time in the current pass. Meaningful only once completed.
    pub fn start(&self) -> Option<Ticks> {
        self.completed.then_some(self.start)
    }

    /// Wait time in the current pass. Meaningful only once completed.
    pub fn wait(&self) -> Option<Ticks> {
        self.completed.then_some(self.wait)
    }

    /// Whether the job has already been scheduled in the current pass.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the job has arrived by `current_time` and is still pending.
    pub fn is_eligible(&self, current_time: Ticks) -> bool {
        !self.completed && self.arrival <= current_time
    }

    /// Response ratio at `current_time`: `(waited + service) / service`.
    ///
    /// Always ≥ 1 for an arrived job, and grows linearly with waiting time.
    pub fn response_ratio(&self, current_time: Ticks) -> f64 {
        let waited = (current_time - self.arrival) as f64;
        let service = self.service as f64;
        (waited + service) / service
    }

    /// Turnaround time (wait + service). Meaningful only once completed.
    pub fn turnaround(&self) -> Option<Ticks> {
        self.wait().map(|w| w + self.service)
    }

    /// Records the job as started at `start`. The caller guarantees
    /// `start >= arrival`.
    pub(crate) fn mark_scheduled(&mut self, start: Ticks) {
        debug_assert!(start >= self.arrival);
        self.start = start;
        self.wait = start - self.arrival;
        self.completed = true;
    }

    /// Clears transient pass state.
    pub(crate) fn reset(&mut self) {
        self.start = 0;
        self.wait = 0;
        self.completed = false;
    }
}
