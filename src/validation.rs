//! Input validation for job lists.
//!
//! Checks the static attributes of every job before it enters a
//! repository. Detects:
//! - Negative arrival times
//! - Zero or negative service times
//! - Job sets whose worst-case completion time, or per-pass wait and
//!   turnaround totals, overflow the clock type
//!
//! All problems are reported together rather than stopping at the first.

use serde::Serialize;

use crate::models::{JobSpec, Ticks};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    /// A job arrives before t=0.
    NegativeArrival,
    /// A job needs no processor time (or a negative amount).
    NonPositiveService,
    /// Latest arrival plus total service does not fit in the clock type.
    ClockOverflow,
    /// Job count times the completion bound does not fit in the clock type,
    /// so per-pass wait or turnaround totals could overflow.
    TotalsOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates job specs in load order.
///
/// Job numbers in messages are 1-based positions, matching the IDs the
/// repository will assign.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(specs: &[JobSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    for (i, spec) in specs.iter().enumerate() {
        let id = i + 1;
        if spec.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("job {id}: arrival {} is before t=0", spec.arrival),
            ));
        }
        if spec.service <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveService,
                format!("job {id}: service time {} must be positive", spec.service),
            ));
        }
    }

    if errors.is_empty() {
        match horizon(specs) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::ClockOverflow,
                "latest arrival plus total service overflows the simulated clock",
            )),
            Some(bound) if totals_bound(specs.len(), bound).is_none() => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::TotalsOverflow,
                    format!(
                        "{} jobs with completion bound {bound} overflow the pass totals",
                        specs.len()
                    ),
                ))
            }
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any completion time: latest arrival + sum of services.
fn horizon(specs: &[JobSpec]) -> Option<Ticks> {
    let latest = specs.iter().map(|s| s.arrival).max().unwrap_or(0);
    specs
        .iter()
        .try_fold(latest, |acc, s| acc.checked_add(s.service))
}

/// Upper bound on total wait and total turnaround of a pass: every job's
/// turnaround is at most its completion time, which is at most `horizon`.
fn totals_bound(count: usize, horizon: Ticks) -> Option<Ticks> {
    Ticks::try_from(count).ok()?.checked_mul(horizon)
}
