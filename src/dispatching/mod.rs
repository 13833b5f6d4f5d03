//! Job selection policies.
//!
//! Each policy is a stateless selector that scans the repository for the
//! best pending job at the current simulated time. The scheduling engine
//! asks the selector once per step and runs whatever it returns.
//!
//! # Usage
//!
//! ```
//! use u_jobsched::dispatching::{JobSelector, Policy};
//! use u_jobsched::models::{JobRepository, JobSpec};
//!
//! let repo = JobRepository::from_specs(vec![
//!     JobSpec::new(0, 8, 1),
//!     JobSpec::new(0, 2, 1),
//! ]).unwrap();
//!
//! let sjf = Policy::Sjf.selector(1e-9).unwrap();
//! assert_eq!(sjf.select(&repo, 0), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

pub mod rules;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ConfigError;
use crate::models::{JobRepository, Ticks};

/// A job selection strategy.
///
/// Implementations are read-only with respect to the repository and must
/// resolve ties deterministically.
pub trait JobSelector: fmt::Debug {
    /// The policy this selector implements.
    fn policy(&self) -> Policy;

    /// Returns the 0-based index of the job to run next at `current_time`,
    /// or `None` if every job has already been scheduled.
    fn select(&self, repository: &JobRepository, current_time: Ticks) -> Option<usize>;
}

/// The four built-in scheduling policies, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First.
    Sjf,
    /// Highest-Priority-First.
    Hpf,
    /// Highest-Response-Ratio-First.
    Hrrf,
}

impl Policy {
    /// All policies in reporting order.
    pub const ALL: [Policy; 4] = [Policy::Fcfs, Policy::Sjf, Policy::Hpf, Policy::Hrrf];

    /// Short name (e.g., "FCFS").
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Hpf => "HPF",
            Policy::Hrrf => "HRRF",
        }
    }

    /// Long name.
    pub fn description(self) -> &'static str {
        match self {
            Policy::Fcfs => "First-Come-First-Served",
            Policy::Sjf => "Shortest-Job-First",
            Policy::Hpf => "Highest-Priority-First",
            Policy::Hrrf => "Highest-Response-Ratio-First",
        }
    }

    /// Builds the selector for this policy.
    ///
    /// `ratio_epsilon` is the tolerance under which two response ratios
    /// count as tied. It must be finite for every policy, even though only
    /// HRRF reads it.
    pub fn selector(self, ratio_epsilon: f64) -> Result<Box<dyn JobSelector>, ConfigError> {
        let hrrf = rules::HighestResponseRatio::with_epsilon(ratio_epsilon)?;
        Ok(match self {
            Policy::Fcfs => Box::new(rules::EarliestArrival),
            Policy::Sjf => Box::new(rules::ShortestNeed),
            Policy::Hpf => Box::new(rules::HighestPriority),
            Policy::Hrrf => Box::new(hrrf),
        })
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown policy '{0}' (expected fcfs, sjf, hpf or hrrf)")]
pub struct ParsePolicyError(String);

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Policy::Fcfs),
            "sjf" | "spt" => Ok(Policy::Sjf),
            "hpf" | "priority" => Ok(Policy::Hpf),
            "hrrf" | "hrrn" => Ok(Policy::Hrrf),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}
