//! Non-preemptive single-processor scheduling pass.
//!
//! # Algorithm
//!
//! 1. Reset the repository and start the clock at t=0.
//! 2. Repeat N times:
//!    a. Ask the selector for the next job at the current time.
//!    b. If the job has not arrived yet, idle until its arrival.
//!    c. Record start and wait, advance the clock by its service time.
//! 3. Return outcomes in schedule order with totals.
//!
//! # Complexity
//! O(N²): each of N selections scans the whole repository.

use log::{debug, trace};

use super::{JobOutcome, PassResult};
use crate::dispatching::JobSelector;
use crate::error::ScheduleError;
use crate::models::{JobRepository, Ticks};

/// Runs one full pass of `selector` over every job in `repository`.
///
/// The repository is reset first, so stale state from an earlier pass can
/// never leak in. After the call every job is completed, with the start and
/// wait times of this pass.
///
/// # Errors
/// - [`ScheduleError::NoJobs`] if the repository is empty.
/// - [`ScheduleError::SelectorExhausted`] if the selector returns nothing
///   while jobs are still pending.
///
/// # Example
/// ```
/// use u_jobsched::dispatching::rules::EarliestArrival;
/// use u_jobsched::models::{JobRepository, JobSpec};
/// use u_jobsched::scheduler::run_pass;
///
/// let mut repo = JobRepository::from_specs(vec![
///     JobSpec::new(0, 5, 1),
///     JobSpec::new(1, 3, 1),
/// ]).unwrap();
///
/// let pass = run_pass(&mut repo, &EarliestArrival).unwrap();
/// assert_eq!(pass.order(), vec![1, 2]);
/// assert_eq!(pass.total_wait, 4);
/// ```
pub fn run_pass(
    repository: &mut JobRepository,
    selector: &dyn JobSelector,
) -> Result<PassResult, ScheduleError> {
    if repository.is_empty() {
        return Err(ScheduleError::NoJobs);
    }

    let policy = selector.policy();
    repository.reset();

    let count = repository.len();
    let mut result = PassResult::new(policy, count);
    let mut current_time: Ticks = 0;

    for step in 0..count {
        let exhausted = move || ScheduleError::SelectorExhausted {
            policy,
            time: current_time,
            remaining: count - step,
        };
        let index = selector
            .select(repository, current_time)
            .ok_or_else(exhausted)?;
        let job = repository
            .get_mut(index)
            .filter(|job| !job.is_completed())
            .ok_or_else(exhausted)?;

        if job.arrival > current_time {
            debug!(
                "{policy}: processor idle from t={current_time} to t={}",
                job.arrival
            );
            current_time = job.arrival;
        }

        job.mark_scheduled(current_time);
        let outcome = JobOutcome::from_job(job, current_time);
        trace!(
            "{policy}: t={current_time} run job {} (wait {}, service {})",
            outcome.job_id,
            outcome.wait,
            outcome.service
        );

        current_time += job.service;
        result.push(outcome);
    }

    debug!(
        "{policy}: finished {} jobs at t={current_time}, total wait {}, total turnaround {}",
        result.job_count(),
        result.total_wait,
        result.total_turnaround
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::{
        EarliestArrival, HighestPriority, HighestResponseRatio, ShortestNeed,
    };
    use crate::dispatching::Policy;
    use crate::models::JobSpec;

    fn repo(triples: &[(Ticks, Ticks, i32)]) -> JobRepository {
        JobRepository::from_specs(triples.iter().copied().map(JobSpec::from)).unwrap()
    }

    #[derive(Debug)]
    struct Broken;

    impl JobSelector for Broken {
        fn policy(&self) -> Policy {
            Policy::Sjf
        }

        fn select(&self, _repository: &JobRepository, _current_time: Ticks) -> Option<usize> {
            None
        }
    }

    #[derive(Debug)]
    struct AlwaysFirst;

    impl JobSelector for AlwaysFirst {
        fn policy(&self) -> Policy {
            Policy::Fcfs
        }

        fn select(&self, _repository: &JobRepository, _current_time: Ticks) -> Option<usize> {
            Some(0)
        }
    }

    #[test]
    fn test_fcfs_scenario() {
        let mut r = repo(&[(0, 5, 1), (1, 3, 1)]);
        let pass = run_pass(&mut r, &EarliestArrival).unwrap();

        assert_eq!(pass.policy, Policy::Fcfs);
        assert_eq!(pass.order(), vec![1, 2]);
        let j1 = pass.outcome_for(1).unwrap();
        assert_eq!((j1.start, j1.wait), (0, 0));
        let j2 = pass.outcome_for(2).unwrap();
        assert_eq!((j2.start, j2.wait), (5, 4));
        assert_eq!(pass.total_wait, 4);
        assert!((pass.average_wait() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sjf_scenario() {
        let mut r = repo(&[(0, 8, 1), (1, 4, 1), (2, 2, 1)]);
        let pass = run_pass(&mut r, &ShortestNeed).unwrap();

        assert_eq!(pass.order(), vec![1, 3, 2]);
        let j3 = pass.outcome_for(3).unwrap();
        assert_eq!((j3.start, j3.wait), (8, 6));
        let j2 = pass.outcome_for(2).unwrap();
        assert_eq!((j2.start, j2.wait), (10, 9));
    }

    #[test]
    fn test_hpf_tie_prefers_shorter() {
        let mut r = repo(&[(0, 1, 0), (1, 6, 5), (1, 2, 5)]);
        let pass = run_pass(&mut r, &HighestPriority).unwrap();
        assert_eq!(pass.order(), vec![1, 3, 2]);
    }

    #[test]
    fn test_hrrf_pass() {
        // t=0: only job1 → runs to t=10.
        // t=10: job2 (10-1+6)/6 = 2.5, job3 (10-5+1)/1 = 6.0 → job3, t=11.
        // t=11: job2 (11-1+6)/6 = 2.67, job4 (11-9+2)/2 = 2.0 → job2.
        let mut r = repo(&[(0, 10, 0), (1, 6, 0), (5, 1, 0), (9, 2, 0)]);
        let pass = run_pass(&mut r, &HighestResponseRatio::default()).unwrap();
        assert_eq!(pass.order(), vec![1, 3, 2, 4]);
        assert_eq!(pass.makespan(), 19);
    }

    #[test]
    fn test_idle_gap() {
        let mut r = repo(&[(5, 2, 0)]);
        for policy in Policy::ALL {
            let pass = run_pass(&mut r, policy.selector(1e-9).unwrap().as_ref()).unwrap();
            let o = &pass.outcomes[0];
            assert_eq!((o.start, o.wait), (5, 0), "{policy}");
        }
    }

    #[test]
    fn test_idle_gap_mid_pass() {
        let mut r = repo(&[(0, 2, 0), (10, 3, 0)]);
        let pass = run_pass(&mut r, &ShortestNeed).unwrap();
        let j2 = pass.outcome_for(2).unwrap();
        assert_eq!((j2.start, j2.wait), (10, 0));
        assert_eq!(pass.makespan(), 13);
    }

    #[test]
    fn test_empty_repository() {
        let mut r = JobRepository::new();
        assert!(matches!(
            run_pass(&mut r, &EarliestArrival),
            Err(ScheduleError::NoJobs)
        ));
    }

    #[test]
    fn test_selector_returning_none() {
        let mut r = repo(&[(0, 1, 0), (0, 1, 0)]);
        let err = run_pass(&mut r, &Broken).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::SelectorExhausted {
                policy: Policy::Sjf,
                time: 0,
                remaining: 2
            }
        ));
    }

    #[test]
    fn test_selector_returning_completed_job() {
        let mut r = repo(&[(0, 1, 0), (0, 1, 0)]);
        let err = run_pass(&mut r, &AlwaysFirst).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::SelectorExhausted { remaining: 1, .. }
        ));
    }

    #[test]
    fn test_pass_leaves_jobs_completed() {
        let mut r = repo(&[(0, 5, 1), (1, 3, 1)]);
        run_pass(&mut r, &EarliestArrival).unwrap();
        assert_eq!(r.remaining(), 0);
        assert_eq!(r.jobs()[1].start(), Some(5));
        assert_eq!(r.jobs()[1].wait(), Some(4));
    }

    #[test]
    fn test_rerun_is_identical() {
        let mut r = repo(&[(0, 8, 3), (1, 4, 1), (2, 2, 2), (3, 1, 3)]);
        let first = run_pass(&mut r, &HighestPriority).unwrap();
        let second = run_pass(&mut r, &HighestPriority).unwrap();
        assert_eq!(first, second);
    }
}
