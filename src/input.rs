//! Input decoding for external collaborators.
//!
//! Two forms are accepted:
//!
//! - **Line format**: one `id,arrival,burst,priority` record per line,
//!   blank lines ignored, fields trimmed.
//! - **Request body**: [`ScheduleRequest`], a JSON object carrying the
//!   process descriptors, the algorithm selector, and the RR quantum.
//!
//! Neither reads files nor speaks HTTP; they only turn text or decoded
//! values into [`Process`] records.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{Process, ProcessDescriptor, ScheduleResult};
use crate::scheduler::{self, Algorithm};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Default algorithm selector of a request body.
pub const DEFAULT_ALGORITHM: &str = "fcfs";

/// Default Round-Robin quantum of a request body.
pub const DEFAULT_QUANTUM: i64 = 3;

/// Parses the line format.
///
/// # Errors
/// [`ScheduleError::MalformedProcess`] listing every bad line (wrong field
/// count or non-integer field), with 1-based line numbers.
///
/// # Example
/// ```
/// use u_cpusched::input::parse_processes;
///
/// let processes = parse_processes("P1, 0, 5, 2\n\nP2,1,3,1\n").unwrap();
/// assert_eq!(processes.len(), 2);
/// assert_eq!(processes[1].burst_time, 3);
/// ```
pub fn parse_processes(text: &str) -> Result<Vec<Process>, ScheduleError> {
    let mut processes = Vec::new();
    let mut errors = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(p) => processes.push(p),
            Err(reason) => errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("line {}: {reason}", i + 1),
            )),
        }
    }

    if errors.is_empty() {
        Ok(processes)
    } else {
        Err(ScheduleError::MalformedProcess(errors))
    }
}

fn parse_line(line: &str) -> Result<Process, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [id, arrival, burst, priority] = fields.as_slice() else {
        return Err(format!(
            "expected 4 fields (id,arrival,burst,priority), found {}",
            fields.len()
        ));
    };

    let int = |name: &str, value: &str| {
        value
            .parse::<i64>()
            .map_err(|_| format!("field '{name}' is not an integer: '{value}'"))
    };

    Ok(Process::new(*id, int("arrival", *arrival)?, int("burst", *burst)?)
        .with_priority(int("priority", *priority)?))
}

/// Request body of the scheduling endpoint.
///
/// # Example
/// ```
/// use u_cpusched::input::ScheduleRequest;
///
/// let body = r#"{
///     "processes": [
///         {"id": "A", "arrival": 0, "burst": 5, "priority": 1},
///         {"id": "B", "arrival": 1, "burst": 3, "priority": 2}
///     ],
///     "algorithm": "rr",
///     "time_quantum": 2
/// }"#;
/// let request: ScheduleRequest = serde_json::from_str(body).unwrap();
/// let result = request.run().unwrap();
/// assert_eq!(result.total_time, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Process descriptors.
    #[serde(default)]
    pub processes: Vec<ProcessDescriptor>,
    /// Algorithm selector (`fcfs`, `sjf`, `rr`, `priority`).
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Round-Robin quantum; ignored by the other algorithms.
    #[serde(default = "default_quantum")]
    pub time_quantum: i64,
}

fn default_algorithm() -> String {
    DEFAULT_ALGORITHM.to_string()
}

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

impl ScheduleRequest {
    /// Creates a request with default algorithm and quantum.
    pub fn new(processes: Vec<ProcessDescriptor>) -> Self {
        Self {
            processes,
            algorithm: default_algorithm(),
            time_quantum: DEFAULT_QUANTUM,
        }
    }

    /// Sets the algorithm selector.
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Sets the Round-Robin quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Decodes the descriptors into process records.
    pub fn to_processes(&self) -> Result<Vec<Process>, ScheduleError> {
        self.processes
            .iter()
            .cloned()
            .map(Process::try_from)
            .collect()
    }

    /// Resolves the algorithm selector.
    pub fn algorithm(&self) -> Result<Algorithm, ScheduleError> {
        Algorithm::parse(&self.algorithm, self.time_quantum)
    }

    /// Validates and runs the request.
    ///
    /// An empty process list is reported before the selector is checked.
    pub fn run(&self) -> Result<ScheduleResult, ScheduleError> {
        if self.processes.is_empty() {
            return Err(ScheduleError::EmptyInput);
        }
        let processes = self.to_processes()?;
        scheduler::simulate(&processes, self.algorithm()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines() {
        let text = "  A,0,5,3  \n\nB , 2 , 3 , -1\r\n";
        let processes = parse_processes(text).unwrap();
        assert_eq!(
            processes,
            vec![
                Process::new("A", 0, 5).with_priority(3),
                Process::new("B", 2, 3).with_priority(-1),
            ]
        );
    }

    #[test]
    fn test_parse_reports_every_bad_line() {
        let text = "A,0,5,3\nB,0,5\nC,x,1,1\n";
        match parse_processes(text) {
            Err(ScheduleError::MalformedProcess(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].message.starts_with("line 2:"));
                assert!(errors[1].message.contains("'arrival'"));
            }
            other => panic!("expected MalformedProcess, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_processes("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_request_defaults() {
        let request: ScheduleRequest =
            serde_json::from_str(r#"{"processes":[{"id":"A","arrival":0,"burst":2,"priority":0}]}"#)
                .unwrap();
        assert_eq!(request.algorithm, "fcfs");
        assert_eq!(request.time_quantum, 3);
        assert_eq!(request.algorithm().unwrap(), Algorithm::Fcfs);
    }

    #[test]
    fn test_request_missing_field() {
        let request: ScheduleRequest =
            serde_json::from_str(r#"{"processes":[{"id":"A","arrival":0,"priority":0}]}"#)
                .unwrap();
        assert!(matches!(
            request.run(),
            Err(ScheduleError::MalformedProcess(_))
        ));
    }

    #[test]
    fn test_request_errors() {
        assert_eq!(
            ScheduleRequest::new(vec![]).run().unwrap_err(),
            ScheduleError::EmptyInput
        );

        let one = vec![ProcessDescriptor::new("A", 0, 1, 0)];
        assert_eq!(
            ScheduleRequest::new(one.clone())
                .with_algorithm("edf")
                .run()
                .unwrap_err(),
            ScheduleError::InvalidAlgorithm("edf".into())
        );
        assert_eq!(
            ScheduleRequest::new(one)
                .with_algorithm("rr")
                .with_time_quantum(0)
                .run()
                .unwrap_err(),
            ScheduleError::InvalidQuantum(0)
        );
    }

    #[test]
    fn test_request_round_trip_to_response() {
        let request = ScheduleRequest::new(vec![
            ProcessDescriptor::new("A", 0, 4, 0),
            ProcessDescriptor::new("B", 0, 2, 0),
        ])
        .with_algorithm("sjf");
        let response = serde_json::to_value(request.run().unwrap()).unwrap();
        assert_eq!(response["gantt"][0]["process_id"], "B");
        assert_eq!(response["gantt"][1]["start_time"], 2);
        assert_eq!(response["average_waiting_time"], 1.0);
        assert_eq!(response["cpu_utilization"], 100.0);
    }
}
