//! Gantt timeline builder.
//!
//! Owns the simulation clock for one run and appends contiguous
//! intervals to the Gantt sequence. Contiguity holds by construction:
//! every appended interval starts at the current clock value and the
//! clock moves to its end.

use log::debug;

use crate::models::GanttEntry;

/// Simulation clock plus the Gantt sequence built so far.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    current_time: i64,
    total_idle_time: i64,
    entries: Vec<GanttEntry>,
}

impl Timeline {
    /// Creates an empty timeline at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward to `time`, recording the gap as idle.
    ///
    /// No-op if `time <= now()`.
    pub fn advance_to(&mut self, time: i64) {
        if time <= self.current_time {
            return;
        }
        debug!("cpu idle [{}, {})", self.current_time, time);
        self.entries.push(GanttEntry::idle(self.current_time, time));
        self.total_idle_time += time - self.current_time;
        self.current_time = time;
    }

    /// Runs `process_id` for `duration` ticks starting now.
    pub fn run(&mut self, process_id: &str, duration: i64) {
        debug_assert!(duration > 0, "zero-length run for '{process_id}'");
        let end = self.current_time + duration;
        self.entries
            .push(GanttEntry::process(process_id, self.current_time, end));
        self.current_time = end;
    }

    /// Current clock value.
    #[inline]
    pub fn now(&self) -> i64 {
        self.current_time
    }

    /// Consumes the timeline, returning `(entries, total_time, total_idle_time)`.
    pub fn finish(self) -> (Vec<GanttEntry>, i64, i64) {
        (self.entries, self.current_time, self.total_idle_time)
    }
}
