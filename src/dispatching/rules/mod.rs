//! Built-in job selectors.
//!
//! | Selector | Eligible | Primary key | Tie-break |
//! |----------|----------|-------------|-----------|
//! | `EarliestArrival` | pending | min arrival | input order |
//! | `ShortestNeed` | arrived, pending | min service | min arrival |
//! | `HighestPriority` | arrived, pending | max priority | min service |
//! | `HighestResponseRatio` | arrived, pending | max response ratio | min service |
//!
//! Any tie left after all keys goes to the job earliest in input order.
//! Every selector except `EarliestArrival` falls back to
//! [`earliest_pending`] when no job has arrived yet, which models the
//! processor idling until the next arrival.

use std::cmp::Ordering;

use super::{JobSelector, Policy};
use crate::error::ConfigError;
use crate::models::{Job, JobRepository, Ticks};

/// Returns the index of the best job passing `eligible`.
///
/// `compare(a, b) == Less` means `a` is preferred. Only a strictly
/// preferred job displaces the current best, so equal jobs keep input order.
fn scan<E, C>(repository: &JobRepository, eligible: E, compare: C) -> Option<usize>
where
    E: Fn(&Job) -> bool,
    C: Fn(&Job, &Job) -> Ordering,
{
    let mut best: Option<(usize, &Job)> = None;
    for (index, job) in repository.jobs().iter().enumerate() {
        if !eligible(job) {
            continue;
        }
        match best {
            Some((_, current)) if compare(job, current) != Ordering::Less => {}
            _ => best = Some((index, job)),
        }
    }
    best.map(|(index, _)| index)
}

/// The pending job with the earliest arrival, ignoring the clock.
///
/// Returns `None` only when every job is completed.
pub fn earliest_pending(repository: &JobRepository) -> Option<usize> {
    scan(
        repository,
        |job| !job.is_completed(),
        |a, b| a.arrival.cmp(&b.arrival),
    )
}

/// Best arrived job at `current_time`, or the earliest pending job if none
/// has arrived.
fn select_or_idle<C>(repository: &JobRepository, current_time: Ticks, compare: C) -> Option<usize>
where
    C: Fn(&Job, &Job) -> Ordering,
{
    scan(repository, |job| job.is_eligible(current_time), compare)
        .or_else(|| earliest_pending(repository))
}

/// First-Come-First-Served.
///
/// Picks the pending job with the earliest arrival regardless of the clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarliestArrival;

impl JobSelector for EarliestArrival {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn select(&self, repository: &JobRepository, _current_time: Ticks) -> Option<usize> {
        earliest_pending(repository)
    }
}

/// Shortest-Job-First.
///
/// Among arrived jobs, picks the smallest service time; equal service
/// times go to the earlier arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestNeed;

impl JobSelector for ShortestNeed {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn select(&self, repository: &JobRepository, current_time: Ticks) -> Option<usize> {
        select_or_idle(repository, current_time, |a, b| {
            a.service
                .cmp(&b.service)
                .then_with(|| a.arrival.cmp(&b.arrival))
        })
    }
}

/// Highest-Priority-First.
///
/// Among arrived jobs, picks the largest priority value; equal priorities
/// go to the shorter job.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestPriority;

impl JobSelector for HighestPriority {
    fn policy(&self) -> Policy {
        Policy::Hpf
    }

    fn select(&self, repository: &JobRepository, current_time: Ticks) -> Option<usize> {
        select_or_idle(repository, current_time, |a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.service.cmp(&b.service))
        })
    }
}

/// Highest-Response-Ratio-First.
///
/// Response ratio = (waited + service) / service. Favors short jobs like
/// SJF, but a long job's ratio keeps rising while it waits, so it cannot
/// starve. Ratios within `epsilon` of each other are ties, resolved by
/// shorter service time.
#[derive(Debug, Clone, Copy)]
pub struct HighestResponseRatio {
    epsilon: f64,
}

impl Default for HighestResponseRatio {
    fn default() -> Self {
        Self { epsilon: 1e-9 }
    }
}

impl HighestResponseRatio {
    /// Creates an HRRF selector with a custom tie tolerance.
    ///
    /// The sign is ignored. NaN and infinite tolerances are rejected: with
    /// NaN no two ratios would ever compare as tied, and with infinity
    /// every pair would.
    pub fn with_epsilon(epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() {
            return Err(ConfigError::InvalidEpsilon(epsilon));
        }
        Ok(Self {
            epsilon: epsilon.abs(),
        })
    }

    /// Tolerance under which two ratios are considered equal.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl JobSelector for HighestResponseRatio {
    fn policy(&self) -> Policy {
        Policy::Hrrf
    }

    fn select(&self, repository: &JobRepository, current_time: Ticks) -> Option<usize> {
        select_or_idle(repository, current_time, |a, b| {
            let ratio_a = a.response_ratio(current_time);
            let ratio_b = b.response_ratio(current_time);
            if (ratio_a - ratio_b).abs() > self.epsilon {
                ratio_b.partial_cmp(&ratio_a).unwrap_or(Ordering::Equal)
            } else {
                a.service.cmp(&b.service)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobSpec;

    fn repo(triples: &[(Ticks, Ticks, i32)]) -> JobRepository {
        JobRepository::from_specs(triples.iter().copied().map(JobSpec::from)).unwrap()
    }

    fn complete(repository: &mut JobRepository, index: usize, start: Ticks) {
        repository.get_mut(index).unwrap().mark_scheduled(start);
    }

    #[test]
    fn test_earliest_arrival_ignores_clock() {
        let r = repo(&[(7, 1, 0), (3, 1, 0), (5, 1, 0)]);
        assert_eq!(EarliestArrival.select(&r, 0), Some(1));
        assert_eq!(EarliestArrival.select(&r, 100), Some(1));
    }

    #[test]
    fn test_earliest_arrival_keeps_input_order_on_ties() {
        let r = repo(&[(2, 9, 0), (2, 1, 0), (2, 5, 0)]);
        assert_eq!(EarliestArrival.select(&r, 2), Some(0));
    }

    #[test]
    fn test_earliest_arrival_skips_completed() {
        let mut r = repo(&[(0, 1, 0), (4, 1, 0)]);
        complete(&mut r, 0, 0);
        assert_eq!(EarliestArrival.select(&r, 1), Some(1));
        complete(&mut r, 1, 4);
        assert_eq!(EarliestArrival.select(&r, 5), None);
    }

    #[test]
    fn test_shortest_need_only_considers_arrived() {
        // At t=0 only job 1 has arrived, even though job 3 is shorter.
        let r = repo(&[(0, 8, 1), (1, 4, 1), (2, 2, 1)]);
        assert_eq!(ShortestNeed.select(&r, 0), Some(0));
    }

    #[test]
    fn test_shortest_need_picks_min_service() {
        let mut r = repo(&[(0, 8, 1), (1, 4, 1), (2, 2, 1)]);
        complete(&mut r, 0, 0);
        assert_eq!(ShortestNeed.select(&r, 8), Some(2));
        complete(&mut r, 2, 8);
        assert_eq!(ShortestNeed.select(&r, 10), Some(1));
    }

    #[test]
    fn test_shortest_need_tie_prefers_earlier_arrival() {
        let r = repo(&[(3, 4, 0), (1, 4, 0), (2, 4, 0)]);
        assert_eq!(ShortestNeed.select(&r, 5), Some(1));
    }

    #[test]
    fn test_fallback_when_nothing_arrived() {
        let r = repo(&[(9, 1, 5), (6, 3, 0), (12, 1, 9)]);
        assert_eq!(ShortestNeed.select(&r, 2), Some(1));
        assert_eq!(HighestPriority.select(&r, 2), Some(1));
        assert_eq!(HighestResponseRatio::default().select(&r, 2), Some(1));
    }

    #[test]
    fn test_all_completed_returns_none() {
        let mut r = repo(&[(0, 1, 0)]);
        complete(&mut r, 0, 0);
        assert_eq!(ShortestNeed.select(&r, 1), None);
        assert_eq!(HighestPriority.select(&r, 1), None);
        assert_eq!(HighestResponseRatio::default().select(&r, 1), None);
    }

    #[test]
    fn test_highest_priority() {
        let r = repo(&[(0, 3, 1), (0, 3, 7), (0, 3, 4)]);
        assert_eq!(HighestPriority.select(&r, 0), Some(1));
    }

    #[test]
    fn test_highest_priority_tie_prefers_shorter() {
        let r = repo(&[(0, 6, 2), (0, 2, 2)]);
        assert_eq!(HighestPriority.select(&r, 0), Some(1));
    }

    #[test]
    fn test_highest_priority_ignores_unarrived() {
        let r = repo(&[(0, 6, 1), (5, 2, 9)]);
        assert_eq!(HighestPriority.select(&r, 4), Some(0));
        assert_eq!(HighestPriority.select(&r, 5), Some(1));
    }

    #[test]
    fn test_response_ratio_picks_long_waiter() {
        // t=10: job1 ratio (10+10)/10 = 2.0, job2 ratio (2+1)/1 = 3.0
        let r = repo(&[(0, 10, 0), (8, 1, 0)]);
        assert_eq!(HighestResponseRatio::default().select(&r, 10), Some(1));
        // t=10: job1 ratio (10+2)/2 = 6.0 beats job2 (1+1)/1 = 2.0
        let r = repo(&[(0, 2, 0), (9, 1, 0)]);
        assert_eq!(HighestResponseRatio::default().select(&r, 10), Some(0));
    }

    #[test]
    fn test_response_ratio_tie_prefers_shorter() {
        // t=4: job1 (4+4)/4 = 2.0, job2 (2+2)/2 = 2.0
        let r = repo(&[(0, 4, 0), (2, 2, 0)]);
        assert_eq!(HighestResponseRatio::default().select(&r, 4), Some(1));
    }

    #[test]
    fn test_response_ratio_epsilon_widens_ties() {
        // t=3: job1 (3+3)/3 = 2.0, job2 (2+1)/1 = 3.0 (job1 is longer)
        let r = repo(&[(0, 3, 0), (2, 1, 0)]);
        assert_eq!(HighestResponseRatio::default().select(&r, 3), Some(1));
        // t=30: job1 (30+4)/4 = 8.5, job2 (5+1)/1 = 6.0
        let r = repo(&[(0, 4, 0), (25, 1, 0)]);
        assert_eq!(HighestResponseRatio::default().select(&r, 30), Some(0));
        // A huge tolerance makes every ratio tie, so service decides.
        let loose = HighestResponseRatio::with_epsilon(100.0).unwrap();
        assert_eq!(loose.select(&r, 30), Some(1));
    }

    #[test]
    fn test_response_ratio_rejects_non_finite_epsilon() {
        for epsilon in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                HighestResponseRatio::with_epsilon(epsilon),
                Err(ConfigError::InvalidEpsilon(_))
            ));
        }
        // t=10: job1 (10+2)/2 = 6.0, job2 (1+1)/1 = 2.0
        let r = repo(&[(0, 2, 0), (9, 1, 0)]);
        let hrrf = HighestResponseRatio::with_epsilon(-1e-6).unwrap();
        assert!((hrrf.epsilon() - 1e-6).abs() < 1e-15);
        assert_eq!(hrrf.select(&r, 10), Some(0));
    }

    #[test]
    fn test_selectors_are_read_only() {
        let r = repo(&[(0, 2, 1), (1, 1, 2)]);
        let before = r.clone();
        let _ = ShortestNeed.select(&r, 1);
        let _ = HighestPriority.select(&r, 1);
        let _ = HighestResponseRatio::default().select(&r, 1);
        assert_eq!(r.jobs(), before.jobs());
    }
}
