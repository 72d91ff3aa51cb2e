//! Gantt sequence model.
//!
//! A Gantt entry records that the CPU was occupied by one process (or
//! was idle) during a half-open interval `[start_time, end_time)`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire label of an idle interval.
pub const IDLE_LABEL: &str = "IDLE";

/// Occupant of a Gantt interval.
///
/// Serialized as a plain string: the process id, or `"IDLE"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GanttLabel {
    /// No process was eligible to run.
    Idle,
    /// The named process ran exclusively.
    Process(String),
}

impl GanttLabel {
    /// Whether this is an idle interval.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, GanttLabel::Idle)
    }

    /// Process id, or `None` for idle intervals.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            GanttLabel::Idle => None,
            GanttLabel::Process(id) => Some(id),
        }
    }
}

impl From<String> for GanttLabel {
    fn from(s: String) -> Self {
        if s == IDLE_LABEL {
            GanttLabel::Idle
        } else {
            GanttLabel::Process(s)
        }
    }
}

impl From<GanttLabel> for String {
    fn from(label: GanttLabel) -> Self {
        match label {
            GanttLabel::Idle => IDLE_LABEL.to_string(),
            GanttLabel::Process(id) => id,
        }
    }
}

impl fmt::Display for GanttLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GanttLabel::Idle => f.write_str(IDLE_LABEL),
            GanttLabel::Process(id) => f.write_str(id),
        }
    }
}

/// One CPU-occupancy interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttEntry {
    /// Occupant of the interval.
    #[serde(rename = "process_id")]
    pub label: GanttLabel,
    /// First tick of the interval.
    pub start_time: i64,
    /// One past the last tick of the interval.
    pub end_time: i64,
}

impl GanttEntry {
    /// Creates an interval occupied by a process.
    pub fn process(id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            label: GanttLabel::Process(id.into()),
            start_time,
            end_time,
        }
    }

    /// Creates an idle interval.
    pub fn idle(start_time: i64, end_time: i64) -> Self {
        Self {
            label: GanttLabel::Idle,
            start_time,
            end_time,
        }
    }

    /// Interval length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether this is an idle interval.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.label.is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_duration() {
        let e = GanttEntry::process("A", 2, 7);
        assert_eq!(e.duration(), 5);
        assert!(!e.is_idle());
        assert_eq!(e.label.process_id(), Some("A"));

        let idle = GanttEntry::idle(0, 2);
        assert!(idle.is_idle());
        assert_eq!(idle.label.process_id(), None);
    }

    #[test]
    fn test_label_wire_form() {
        let json = serde_json::to_value(GanttEntry::idle(0, 3)).unwrap();
        assert_eq!(json["process_id"], "IDLE");
        assert_eq!(json["end_time"], 3);

        let back: GanttEntry =
            serde_json::from_str(r#"{"process_id":"P2","start_time":3,"end_time":4}"#).unwrap();
        assert_eq!(back, GanttEntry::process("P2", 3, 4));
    }

    #[test]
    fn test_label_display() {
        assert_eq!(GanttLabel::Idle.to_string(), "IDLE");
        assert_eq!(GanttLabel::Process("P9".into()).to_string(), "P9");
    }
}
