//! Process (schedulable unit) model.
//!
//! A process is a single CPU burst that becomes eligible at its arrival
//! time and needs `burst_time` ticks of exclusive CPU to complete.
//!
//! # Time Representation
//! All times are integer ticks of a discrete simulation clock starting at
//! t=0. There is no wall-clock meaning attached to a tick.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::validation::{ValidationError, ValidationErrorKind};

/// A process to be scheduled.
///
/// Created by the caller, cloned by the simulator before a run, mutated
/// in place during that run, and reported back in the result.
///
/// # Serialized Form
/// Serializes with the result field names (`process_id`, `arrival_time`, ...).
/// `remaining_time` is simulation state and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    #[serde(rename = "process_id")]
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority (lower value = more important).
    pub priority: i64,
    /// CPU ticks still required. Equals `burst_time` until the process runs.
    #[serde(skip_serializing, default)]
    pub remaining_time: i64,
    /// Tick at which the process completed (0 until completion).
    #[serde(default)]
    pub finish_time: i64,
    /// `finish_time - arrival_time` (0 until completion).
    #[serde(default)]
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time` (0 until completion).
    #[serde(default)]
    pub waiting_time: i64,
}

impl Process {
    /// Creates a new, not-yet-run process.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            finish_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Returns a fresh copy with simulation state reset.
    ///
    /// Used by the simulator so that a run never touches the caller's records.
    pub fn fresh_copy(&self) -> Self {
        Self::new(self.id.clone(), self.arrival_time, self.burst_time).with_priority(self.priority)
    }

    /// Records completion at `finish_time` and derives turnaround/waiting.
    ///
    /// Leaves `remaining_time` alone: only preemptive runs consume it.
    pub fn complete_at(&mut self, finish_time: i64) {
        self.finish_time = finish_time;
        self.turnaround_time = finish_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }
}

/// A process as supplied by an external collaborator.
///
/// Every field is optional on the wire so that a missing field can be
/// reported as a [`ScheduleError::MalformedProcess`] instead of a decode
/// failure. Field names follow the request body (`id`, `arrival`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Process identifier.
    pub id: Option<String>,
    /// Arrival tick.
    pub arrival: Option<i64>,
    /// Burst length in ticks.
    pub burst: Option<i64>,
    /// Priority value.
    pub priority: Option<i64>,
}

impl ProcessDescriptor {
    /// Creates a fully populated descriptor.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64, priority: i64) -> Self {
        Self {
            id: Some(id.into()),
            arrival: Some(arrival),
            burst: Some(burst),
            priority: Some(priority),
        }
    }
}

impl TryFrom<ProcessDescriptor> for Process {
    type Error = ScheduleError;

    fn try_from(desc: ProcessDescriptor) -> Result<Self, Self::Error> {
        let label = desc.id.clone().unwrap_or_else(|| "<unnamed>".to_string());
        let missing = |field: &str| {
            ScheduleError::MalformedProcess(vec![ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Process '{label}' is missing field '{field}'"),
            )])
        };

        let id = desc.id.clone().ok_or_else(|| missing("id"))?;
        let arrival = desc.arrival.ok_or_else(|| missing("arrival"))?;
        let burst = desc.burst.ok_or_else(|| missing("burst"))?;
        let priority = desc.priority.ok_or_else(|| missing("priority"))?;

        Ok(Process::new(id, arrival, burst).with_priority(priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
        assert_eq!(p.remaining_time, 7);
        assert_eq!(p.finish_time, 0);
    }

    #[test]
    fn test_complete_at() {
        let mut p = Process::new("P1", 2, 3);
        p.complete_at(10);
        assert_eq!(p.remaining_time, 3);
        assert_eq!(p.finish_time, 10);
        assert_eq!(p.turnaround_time, 8);
        assert_eq!(p.waiting_time, 5);
    }

    #[test]
    fn test_fresh_copy_resets_state() {
        let mut p = Process::new("P1", 0, 4).with_priority(1);
        p.remaining_time = 1;
        p.complete_at(9);

        let copy = p.fresh_copy();
        assert_eq!(copy.remaining_time, 4);
        assert_eq!(copy.finish_time, 0);
        assert_eq!(copy.priority, 1);
    }

    #[test]
    fn test_descriptor_conversion() {
        let p = Process::try_from(ProcessDescriptor::new("A", 1, 2, 3)).unwrap();
        assert_eq!(p, Process::new("A", 1, 2).with_priority(3));
    }

    #[test]
    fn test_descriptor_missing_field() {
        let desc = ProcessDescriptor {
            id: Some("A".into()),
            arrival: Some(0),
            burst: None,
            priority: Some(1),
        };
        match Process::try_from(desc) {
            Err(ScheduleError::MalformedProcess(errors)) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::MissingField);
                assert!(errors[0].message.contains("burst"));
            }
            other => panic!("expected MalformedProcess, got {other:?}"),
        }
    }

    #[test]
    fn test_serialized_shape() {
        let mut p = Process::new("A", 0, 5).with_priority(2);
        p.complete_at(5);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["process_id"], "A");
        assert_eq!(json["finish_time"], 5);
        assert_eq!(json["waiting_time"], 0);
        assert!(json.get("remaining_time").is_none());
    }
}
