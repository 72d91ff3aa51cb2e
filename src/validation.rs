//! Input validation for simulation requests.
//!
//! Checks the process list before any policy runs. Detects:
//! - Duplicate, empty, or reserved process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Workloads whose clock could leave the `i64` range
//!
//! Emptiness of the list itself is not a validation error here; the
//! entry points report it as [`crate::ScheduleError::EmptyInput`].

use crate::models::{Process, IDLE_LABEL};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process ID is empty or collides with the idle label.
    InvalidId,
    /// A required descriptor field is absent or unparsable.
    MissingField,
    /// Arrival time is below zero.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Latest arrival plus total burst exceeds the `i64` clock.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. No empty IDs and no process named `IDLE`
/// 2. No duplicate IDs
/// 3. `arrival_time >= 0`
/// 4. `burst_time > 0`
/// 5. `max(arrival_time) + sum(burst_time)` fits in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID must not be empty",
            ));
        } else if p.id == IDLE_LABEL {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                format!("Process ID '{IDLE_LABEL}' is reserved for idle intervals"),
            ));
        }

        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    // Bounds every clock value a policy can reach
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0).max(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
            Process::new("P3", 4, 1).with_priority(-1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_list_is_not_a_validation_error() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 0, 1), Process::new("P1", 2, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_reserved_and_empty_id() {
        let processes = vec![Process::new("IDLE", 0, 1), Process::new("  ", 0, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidId)
                .count(),
            2
        );
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[Process::new("P1", -1, 3)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
    }

    #[test]
    fn test_zero_burst() {
        let errors = validate_processes(&[Process::new("P1", 0, 0)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_clock_overflow() {
        let errors = validate_processes(&[Process::new("A", i64::MAX - 1, 5)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let processes = vec![
            Process::new("A", 0, i64::MAX / 2),
            Process::new("B", 0, i64::MAX / 2),
            Process::new("C", 0, 2),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        // Exactly at the limit is fine
        assert!(validate_processes(&[Process::new("A", i64::MAX - 5, 5)]).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        // Negative arrival + negative burst on one record, duplicate on another
        let processes = vec![Process::new("P1", -2, -1), Process::new("P1", 0, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
