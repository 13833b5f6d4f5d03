//! Job repository.
//!
//! An ordered, fixed-size collection of jobs shared by every scheduling
//! pass of a simulation. Jobs are only added by [`JobRepository::load`];
//! no pass adds or removes jobs, it only mutates their transient state.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Job, JobSpec, Ticks};
use crate::error::LoadError;
use crate::validation::validate_jobs;

/// Historical maximum number of jobs per simulation.
pub const DEFAULT_CAPACITY: usize = 50;

/// Ordered collection of jobs with a fixed capacity.
///
/// # Example
/// ```
/// use u_jobsched::models::{JobRepository, JobSpec};
///
/// let mut repo = JobRepository::new();
/// repo.load(vec![JobSpec::new(0, 5, 1), JobSpec::new(1, 3, 1)]).unwrap();
/// assert_eq!(repo.len(), 2);
/// assert_eq!(repo.jobs()[1].id, 2);
/// ```
///
/// Deserializing goes through [`load`](Self::load), so a repository read
/// from JSON is validated and starts with every job pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RepositoryData")]
pub struct JobRepository {
    jobs: Vec<Job>,
    capacity: usize,
}

impl JobRepository {
    /// Creates an empty repository with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty repository holding at most `capacity` jobs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            jobs: Vec::new(),
            capacity,
        }
    }

    /// Creates a repository from specs using the default capacity.
    pub fn from_specs(specs: impl IntoIterator<Item = JobSpec>) -> Result<Self, LoadError> {
        let mut repo = Self::new();
        repo.load(specs)?;
        Ok(repo)
    }

    /// Replaces the repository contents with `specs`, numbered 1..=N.
    ///
    /// On error the previous contents are left untouched.
    pub fn load(&mut self, specs: impl IntoIterator<Item = JobSpec>) -> Result<(), LoadError> {
        let specs: Vec<JobSpec> = specs.into_iter().collect();

        if specs.is_empty() {
            return Err(LoadError::Empty);
        }
        if specs.len() > self.capacity {
            return Err(LoadError::CapacityExceeded {
                count: specs.len(),
                capacity: self.capacity,
            });
        }
        validate_jobs(&specs).map_err(LoadError::Invalid)?;

        self.jobs = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| Job::new(i + 1, spec))
            .collect();
        debug!("loaded {} jobs (capacity {})", self.jobs.len(), self.capacity);
        Ok(())
    }

    /// Clears start, wait, and completion state on every job.
    ///
    /// Static attributes (arrival, service, priority) are not touched.
    pub fn reset(&mut self) {
        for job in &mut self.jobs {
            job.reset();
        }
    }

    /// All jobs in load order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Job at a 0-based index.
    pub fn get(&self, index: usize) -> Option<&Job> {
        self.jobs.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Job> {
        self.jobs.get_mut(index)
    }

    /// Number of loaded jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether no jobs are loaded.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Maximum number of jobs accepted by [`load`](Self::load).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of jobs not yet scheduled in the current pass.
    pub fn remaining(&self) -> usize {
        self.jobs.iter().filter(|j| !j.is_completed()).count()
    }

    /// Number of jobs eligible at `current_time` (arrived and pending).
    pub fn count_eligible(&self, current_time: Ticks) -> usize {
        self.jobs
            .iter()
            .filter(|j| j.is_eligible(current_time))
            .count()
    }

    /// Whether any job has been scheduled since the last reset.
    pub fn is_dirty(&self) -> bool {
        self.jobs.iter().any(Job::is_completed)
    }
}

impl Default for JobRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form accepted when deserializing a repository. Transient job
/// fields in the input (`id`, `start`, ...) are ignored.
#[derive(Deserialize)]
struct RepositoryData {
    #[serde(default = "default_capacity")]
    capacity: usize,
    jobs: Vec<JobSpec>,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl TryFrom<RepositoryData> for JobRepository {
    type Error = LoadError;

    fn try_from(data: RepositoryData) -> Result<Self, Self::Error> {
        let mut repo = Self::with_capacity(data.capacity);
        repo.load(data.jobs)?;
        Ok(repo)
    }
}
