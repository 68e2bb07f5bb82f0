//! Input validation for scheduling runs.
//!
//! Checks a process batch before it enters the engine. Detects:
//! - Empty batches
//! - Duplicate process IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Batches whose finish time does not fit in `i64`
//! - Non-positive round-robin quantum
//!
//! Validation never mutates its input, so a rejected batch is left exactly
//! as the caller supplied it.

use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The batch contains no processes.
    EmptyProcessList,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has `burst_time <= 0`.
    NonPositiveBurst,
    /// A process has `arrival_time < 0`.
    NegativeArrival,
    /// Latest arrival plus total burst exceeds `i64::MAX`.
    TimeOverflow,
    /// Round-robin quantum is `<= 0`.
    NonPositiveQuantum,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. The batch is not empty
/// 2. No duplicate process IDs
/// 3. Every burst time is positive
/// 4. No arrival time is negative
/// 5. The time horizon (latest arrival plus total burst) fits in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "Process list is empty",
        )]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    if let Err(overflow) = validate_time_horizon(processes) {
        errors.extend(overflow);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest time any discipline can reach: latest arrival plus total burst.
///
/// Returns `None` when the sum overflows `i64`.
pub fn time_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time)
        .max()
        .unwrap_or(0)
        .max(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)))
}

/// Checks that every completion time of the batch fits in `i64`.
///
/// Each completion time of FCFS, SJF, priority and round robin is bounded
/// by [`time_horizon`], so a batch passing this check cannot overflow the
/// clock.
pub fn validate_time_horizon(processes: &[Process]) -> ValidationResult {
    if time_horizon(processes).is_none() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the representable time range",
        )]);
    }
    Ok(())
}

/// Validates a round-robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum <= 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        )]);
    }
    Ok(())
}
