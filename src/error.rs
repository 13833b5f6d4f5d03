//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::dispatching::Policy;
use crate::models::Ticks;
use crate::validation::ValidationError;

/// Failure to populate a job repository.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read job list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{count} jobs exceed the capacity of {capacity}")]
    CapacityExceeded { count: usize, capacity: usize },

    #[error("no complete job records supplied")]
    Empty,

    #[error("invalid job records: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

/// Failure to run a scheduling pass.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("no jobs to schedule")]
    NoJobs,

    /// A selector returned nothing while jobs were still pending.
    ///
    /// Unreachable for the built-in selectors; signals a selector defect.
    #[error("{policy} selector found no job at t={time} with {remaining} jobs pending")]
    SelectorExhausted {
        policy: Policy,
        time: Ticks,
        remaining: usize,
    },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failure to read or validate a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("ratio epsilon must be finite, got {0}")]
    InvalidEpsilon(f64),

    #[error("no policies configured")]
    NoPolicies,
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
