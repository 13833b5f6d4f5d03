//! Uniprocessor job-scheduling simulator.
//!
//! Runs the same fixed set of jobs through four classical non-preemptive
//! policies and reports per-job and aggregate wait and turnaround times.
//!
//! # Modules
//!
//! - **`models`**: `Job`, `JobSpec`, `JobRepository`
//! - **`dispatching`**: `JobSelector` trait, `Policy`, and the four built-in selectors
//! - **`scheduler`**: `run_pass`, `PassResult`, `PassKpi`, `Simulation`
//! - **`validation`**: Input checks (arrival ≥ 0, service > 0, clock range)
//! - **`loader`**: Text job-list parsing
//! - **`report`**: Plain-text tables
//! - **`workload`**: Seeded random workloads
//! - **`config`**: `SimulationConfig`
//!
//! # Example
//!
//! ```
//! use u_jobsched::models::{JobRepository, JobSpec};
//! use u_jobsched::scheduler::Simulation;
//!
//! let mut repo = JobRepository::from_specs(vec![
//!     JobSpec::new(0, 5, 1),
//!     JobSpec::new(1, 3, 1),
//! ]).unwrap();
//!
//! let report = Simulation::default().run(&mut repo).unwrap();
//! let fcfs = &report.passes[0];
//! assert_eq!(fcfs.order(), vec![1, 2]);
//! assert!((fcfs.average_wait() - 2.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::{ConfigError, LoadError, ScheduleError};
