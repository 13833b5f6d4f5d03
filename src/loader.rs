//! Job-list ingestion.
//!
//! # Format
//!
//! One job per line, four whitespace-separated integers:
//!
//! ```text
//! # id  arrival  service  priority
//! 1     0        5        1
//! 2     1        3        2
//! ```
//!
//! The leading `id` column is read but not kept: jobs are numbered by the
//! position of the accepted record. Blank lines and `#` comments are
//! ignored. Malformed lines are skipped with a warning and do not count
//! toward the capacity.

use std::path::Path;

use log::{debug, warn};

use crate::error::LoadError;
use crate::models::{JobRepository, JobSpec, Ticks};

/// Parses a job list, returning the complete records in order.
///
/// # Errors
/// - [`LoadError::CapacityExceeded`] if more than `capacity` records parse.
/// - [`LoadError::Empty`] if no record parses.
pub fn parse_jobs(text: &str, capacity: usize) -> Result<Vec<JobSpec>, LoadError> {
    let mut specs = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_record(line) {
            Some(spec) => specs.push(spec),
            None => warn!("skipping malformed job record on line {}: {line:?}", line_no + 1),
        }
    }

    if specs.is_empty() {
        return Err(LoadError::Empty);
    }
    if specs.len() > capacity {
        return Err(LoadError::CapacityExceeded {
            count: specs.len(),
            capacity,
        });
    }
    debug!("parsed {} job records", specs.len());
    Ok(specs)
}

/// Reads and parses a job-list file.
pub fn load_file(path: impl AsRef<Path>, capacity: usize) -> Result<Vec<JobSpec>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_jobs(&text, capacity)
}

/// Reads a job-list file straight into a new repository of `capacity`.
pub fn load_repository(path: impl AsRef<Path>, capacity: usize) -> Result<JobRepository, LoadError> {
    let specs = load_file(path, capacity)?;
    let mut repository = JobRepository::with_capacity(capacity);
    repository.load(specs)?;
    Ok(repository)
}

fn parse_record(line: &str) -> Option<JobSpec> {
    let mut fields = line.split_whitespace();
    let _id: i64 = fields.next()?.parse().ok()?;
    let arrival: Ticks = fields.next()?.parse().ok()?;
    let service: Ticks = fields.next()?.parse().ok()?;
    let priority: i32 = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(JobSpec::new(arrival, service, priority))
}
