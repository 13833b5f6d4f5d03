//! Simulation configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dispatching::Policy;
use crate::error::ConfigError;
use crate::models::DEFAULT_CAPACITY;

/// Default tolerance for response-ratio ties.
pub const DEFAULT_RATIO_EPSILON: f64 = 1e-9;

/// Settings for a simulation run.
///
/// Missing fields fall back to [`Default`] when deserialized, so a JSON
/// config only needs the keys it changes:
///
/// ```
/// use u_jobsched::config::SimulationConfig;
/// use u_jobsched::dispatching::Policy;
///
/// let config: SimulationConfig = serde_json::from_str(r#"{"policies": ["hrrf", "fcfs"]}"#).unwrap();
/// assert_eq!(config.capacity, 50);
/// assert_eq!(config.policies, vec![Policy::Hrrf, Policy::Fcfs]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Maximum number of jobs accepted on load.
    pub capacity: usize,
    /// Tolerance under which two response ratios are considered equal.
    pub ratio_epsilon: f64,
    /// Policies to run, in order.
    pub policies: Vec<Policy>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ratio_epsilon: DEFAULT_RATIO_EPSILON,
            policies: Policy::ALL.to_vec(),
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the job capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the response-ratio tie tolerance. The sign is ignored.
    ///
    /// # Errors
    /// [`ConfigError::InvalidEpsilon`] if `epsilon` is NaN or infinite.
    pub fn with_ratio_epsilon(mut self, epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() {
            return Err(ConfigError::InvalidEpsilon(epsilon));
        }
        self.ratio_epsilon = epsilon.abs();
        Ok(self)
    }

    /// Sets which policies run, in order.
    pub fn with_policies(mut self, policies: impl IntoIterator<Item = Policy>) -> Self {
        self.policies = policies.into_iter().collect();
        self
    }

    /// Checks that the tolerance is finite and at least one policy is set.
    ///
    /// Fields are public, so [`Simulation::run`](crate::scheduler::Simulation::run)
    /// calls this again before scheduling anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ratio_epsilon.is_finite() {
            return Err(ConfigError::InvalidEpsilon(self.ratio_epsilon));
        }
        if self.policies.is_empty() {
            return Err(ConfigError::NoPolicies);
        }
        Ok(())
    }

    /// Reads and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}
