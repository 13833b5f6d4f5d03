//! Scheduling engine, pass results, and KPI evaluation.
//!
//! # Algorithm
//!
//! [`run_pass`] drives one non-preemptive pass over a repository with a
//! single selector: the processor runs each chosen job to completion, and
//! idles forward to the next arrival when nothing is ready.
//!
//! [`Simulation`] repeats that for each configured policy against the same
//! repository, resetting it in between.
//!
//! # KPI
//!
//! [`PassKpi`] computes wait, turnaround, weighted turnaround, utilization
//! and throughput for a completed pass.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod engine;
mod kpi;
mod pass;
mod simulation;

pub use engine::run_pass;
pub use kpi::PassKpi;
pub use pass::{JobOutcome, PassResult};
pub use simulation::{Simulation, SimulationReport};
