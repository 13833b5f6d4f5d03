//! Simulation domain models.
//!
//! A [`JobRepository`] owns the [`Job`]s of one simulation. Each job
//! carries immutable attributes from its [`JobSpec`] plus the transient
//! start/wait state written during a scheduling pass.

mod job;
mod repository;

pub use job::{Job, JobSpec, Ticks};
pub use repository::{JobRepository, DEFAULT_CAPACITY};
