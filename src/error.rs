//! Errors surfaced by the simulation entry points.
//!
//! Every variant is a local validation failure detected before the first
//! Gantt entry is produced. Simulation is deterministic, so none of them
//! is worth retrying.

use std::fmt;

use crate::validation::ValidationError;

/// Failure of a simulation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No processes were supplied.
    EmptyInput,
    /// The algorithm selector is not one of `fcfs`, `sjf`, `rr`, `priority`.
    InvalidAlgorithm(String),
    /// Round-Robin was requested with a non-positive quantum.
    InvalidQuantum(i64),
    /// One or more process descriptors are missing fields or carry
    /// out-of-range values. Holds every detected problem.
    MalformedProcess(Vec<ValidationError>),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::EmptyInput => write!(f, "No processes provided"),
            ScheduleError::InvalidAlgorithm(name) => write!(f, "Invalid algorithm: {name}"),
            ScheduleError::InvalidQuantum(q) => {
                write!(f, "Invalid time quantum: {q} (must be positive)")
            }
            ScheduleError::MalformedProcess(errors) => {
                write!(f, "Malformed process input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", e.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::MalformedProcess(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display() {
        assert_eq!(ScheduleError::EmptyInput.to_string(), "No processes provided");
        assert_eq!(
            ScheduleError::InvalidAlgorithm("lottery".into()).to_string(),
            "Invalid algorithm: lottery"
        );
        assert!(ScheduleError::InvalidQuantum(0).to_string().contains("0"));
    }

    #[test]
    fn test_display_joins_validation_messages() {
        let err = ScheduleError::from(vec![
            ValidationError::new(ValidationErrorKind::NegativeArrival, "first"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "second"),
        ]);
        assert_eq!(err.to_string(), "Malformed process input: first; second");
    }
}
