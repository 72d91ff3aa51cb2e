//! Console rendering of schedule results.
//!
//! Produces the Gantt line, the per-process table, and the averages:
//!
//! ```text
//! Gantt Chart: [0]--A--[5]--B--[8]
//!
//! Process   | Finish Time | Turnaround Time | Waiting Time
//! ---------------------------------------------------------
//! A         | 5           | 5               | 0
//! B         | 8           | 6               | 3
//!
//! Average Turnaround Time: 5.50
//! Average Waiting Time: 1.50
//! CPU Utilization: 100.0%
//! ```

use std::fmt::Write;

use crate::models::ScheduleResult;

const TABLE_HEADER: &str = "Process   | Finish Time | Turnaround Time | Waiting Time";

/// Renders the Gantt line alone.
pub fn render_gantt(result: &ScheduleResult) -> String {
    let mut out = String::from("Gantt Chart: ");
    for entry in &result.gantt {
        let _ = write!(out, "[{}]--{}--", entry.start_time, entry.label);
    }
    let _ = write!(out, "[{}]", result.total_time);
    out
}

/// Renders the full report, newline-terminated.
pub fn render(result: &ScheduleResult) -> String {
    let mut out = render_gantt(result);
    out.push_str("\n\n");
    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(&"-".repeat(57));
    out.push('\n');

    for p in &result.processes {
        let _ = writeln!(
            out,
            "{:<9} | {:<11} | {:<15} | {:<12}",
            p.id, p.finish_time, p.turnaround_time, p.waiting_time
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Average Turnaround Time: {:.2}",
        result.average_turnaround_time
    );
    let _ = writeln!(out, "Average Waiting Time: {:.2}", result.average_waiting_time);
    let _ = writeln!(out, "CPU Utilization: {:.1}%", result.cpu_utilization);
    out
}
