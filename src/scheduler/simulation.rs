//! Multi-policy simulation driver.

use std::path::Path;

use log::info;
use serde::Serialize;

use super::{run_pass, PassKpi, PassResult};
use crate::config::SimulationConfig;
use crate::dispatching::Policy;
use crate::error::ScheduleError;
use crate::loader;
use crate::models::JobRepository;

/// Runs every configured policy against the same repository.
///
/// # Example
/// ```
/// use u_jobsched::config::SimulationConfig;
/// use u_jobsched::models::{JobRepository, JobSpec};
/// use u_jobsched::scheduler::Simulation;
///
/// let mut repo = JobRepository::from_specs(vec![
///     JobSpec::new(0, 8, 1),
///     JobSpec::new(1, 4, 2),
///     JobSpec::new(2, 2, 3),
/// ]).unwrap();
///
/// let report = Simulation::new(SimulationConfig::default()).run(&mut repo).unwrap();
/// assert_eq!(report.passes.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Creates a simulation with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs each configured policy in order.
    ///
    /// The configuration is validated first. The repository is reset
    /// before every pass. Stops at the first error.
    pub fn run(&self, repository: &mut JobRepository) -> Result<SimulationReport, ScheduleError> {
        self.config.validate()?;
        if repository.is_empty() {
            return Err(ScheduleError::NoJobs);
        }

        let mut passes = Vec::with_capacity(self.config.policies.len());
        for &policy in &self.config.policies {
            let selector = policy.selector(self.config.ratio_epsilon)?;
            repository.reset();
            let pass = run_pass(repository, selector.as_ref())?;
            info!(
                "{policy}: avg wait {:.2}, avg turnaround {:.2}",
                pass.average_wait(),
                pass.average_turnaround()
            );
            passes.push(pass);
        }
        Ok(SimulationReport { passes })
    }

    /// Loads a job-list file with the configured capacity and runs it.
    ///
    /// Returns the repository alongside the report so callers can print
    /// the job table.
    pub fn run_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(JobRepository, SimulationReport), ScheduleError> {
        let mut repository = loader::load_repository(path, self.config.capacity)?;
        let report = self.run(&mut repository)?;
        Ok((repository, report))
    }
}

/// Results of one simulation, one pass per policy in run order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Completed passes.
    pub passes: Vec<PassResult>,
}

impl SimulationReport {
    /// The pass produced by `policy`, if it was run.
    pub fn pass(&self, policy: Policy) -> Option<&PassResult> {
        self.passes.iter().find(|p| p.policy == policy)
    }

    /// KPIs of every pass, in run order.
    pub fn kpis(&self) -> Vec<PassKpi> {
        self.passes.iter().map(PassKpi::calculate).collect()
    }

    /// Pass with the lowest average wait. Earlier passes win ties.
    pub fn best_by_average_wait(&self) -> Option<&PassResult> {
        self.best_by(PassResult::average_wait)
    }

    /// Pass with the lowest average turnaround. Earlier passes win ties.
    pub fn best_by_average_turnaround(&self) -> Option<&PassResult> {
        self.best_by(PassResult::average_turnaround)
    }

    fn best_by(&self, metric: impl Fn(&PassResult) -> f64) -> Option<&PassResult> {
        self.passes.iter().fold(None, |best, pass| match best {
            Some(b) if metric(b) <= metric(pass) => Some(b),
            _ => Some(pass),
        })
    }
}
