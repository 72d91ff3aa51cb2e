//! Schedule result model.
//!
//! The outcome of one simulation run: completed processes, the Gantt
//! sequence, clock totals, and the rounded aggregate KPIs.

use serde::{Deserialize, Serialize};

use super::{GanttEntry, Process};

/// A completed schedule.
///
/// # Invariants
/// - `gantt` is contiguous from t=0: each entry ends where the next starts.
/// - `total_time` equals the `end_time` of the last Gantt entry.
/// - `total_idle_time` is the summed length of idle entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Completed processes, in policy-defined order.
    pub processes: Vec<Process>,
    /// CPU-occupancy intervals, in time order.
    pub gantt: Vec<GanttEntry>,
    /// Clock value when the last process finished.
    pub total_time: i64,
    /// Ticks during which no process was eligible.
    pub total_idle_time: i64,
    /// Mean turnaround time, rounded to 2 decimals.
    pub average_turnaround_time: f64,
    /// Mean waiting time, rounded to 2 decimals.
    pub average_waiting_time: f64,
    /// Busy share of `total_time` in percent, rounded to 1 decimal.
    pub cpu_utilization: f64,
}

impl ScheduleResult {
    /// Finds a completed process by id.
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Returns all Gantt entries of a given process.
    pub fn entries_for_process(&self, id: &str) -> Vec<&GanttEntry> {
        self.gantt
            .iter()
            .filter(|e| e.label.process_id() == Some(id))
            .collect()
    }

    /// Number of completed processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}
