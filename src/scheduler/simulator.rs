//! Discrete-time simulation loop shared by every policy.
//!
//! # Algorithm
//!
//! 1. Copy the caller's processes into a private table (input order).
//! 2. Admit every process with `arrival_time <= 0`, in arrival order.
//! 3. Until every process has completed:
//!    - If the ready set is empty, idle up to the next arrival and admit it
//!      (plus any process arriving at the same tick).
//!    - Otherwise dispatch the policy's pick for `min(slice, remaining)`
//!      ticks, or its whole burst when non-preemptive.
//!    - Admit processes that arrived while it ran, *then* re-admit the
//!      dispatched process if it still has work left.
//! 4. Reduce the table and timeline to a [`ScheduleResult`].
//!
//! # Complexity
//! O(n log n) for the arrival sort plus O(n) per dispatch for rule-engine
//! policies (O(n²) total), O(1) per dispatch for Round-Robin.

use log::debug;

use super::kpi::ScheduleMetrics;
use super::policy::{ReportOrder, SchedulingPolicy};
use super::timeline::Timeline;
use crate::error::ScheduleError;
use crate::models::{Process, ScheduleResult};
use crate::validation::validate_processes;

/// Runs `policy` over `processes` to completion.
///
/// The caller's records are never mutated; the run works on fresh copies.
///
/// # Errors
/// - [`ScheduleError::EmptyInput`] if `processes` is empty.
/// - [`ScheduleError::MalformedProcess`] if validation fails.
pub fn run_policy<P>(policy: &mut P, processes: &[Process]) -> Result<ScheduleResult, ScheduleError>
where
    P: SchedulingPolicy + ?Sized,
{
    if processes.is_empty() {
        return Err(ScheduleError::EmptyInput);
    }
    validate_processes(processes)?;

    let mut table: Vec<Process> = processes.iter().map(Process::fresh_copy).collect();

    // Stable: equal arrivals keep input order
    let mut arrival_order: Vec<usize> = (0..table.len()).collect();
    arrival_order.sort_by_key(|&i| table[i].arrival_time);

    let mut timeline = Timeline::new();
    let mut cursor = 0;
    let mut completed = 0;

    admit_arrivals(policy, &table, &arrival_order, &mut cursor, timeline.now());

    while completed < table.len() {
        let Some(dispatch) = policy.pick_next(&table) else {
            let Some(&next) = arrival_order.get(cursor) else {
                unreachable!("{}: ready set empty with no pending arrivals", policy.name());
            };
            timeline.advance_to(table[next].arrival_time);
            admit_arrivals(policy, &table, &arrival_order, &mut cursor, timeline.now());
            continue;
        };

        let process = &mut table[dispatch.index];
        let exec = match dispatch.slice {
            None => process.burst_time,
            Some(slice) => {
                let exec = slice.min(process.remaining_time);
                process.remaining_time -= exec;
                exec
            }
        };
        debug!(
            "{}: t={} run {} for {} tick(s)",
            policy.name(),
            timeline.now(),
            process.id,
            exec
        );
        timeline.run(&process.id, exec);
        let finished = dispatch.slice.is_none() || process.remaining_time == 0;

        admit_arrivals(policy, &table, &arrival_order, &mut cursor, timeline.now());

        if finished {
            table[dispatch.index].complete_at(timeline.now());
            completed += 1;
        } else {
            policy.admit(dispatch.index);
        }
    }

    let (gantt, total_time, total_idle_time) = timeline.finish();
    let metrics = ScheduleMetrics::calculate(&table, total_time, total_idle_time);

    let processes = match policy.report_order() {
        ReportOrder::Input => table,
        ReportOrder::Arrival => {
            let mut slots: Vec<Option<Process>> = table.into_iter().map(Some).collect();
            arrival_order
                .iter()
                .filter_map(|&i| slots[i].take())
                .collect()
        }
    };

    Ok(ScheduleResult {
        processes,
        gantt,
        total_time,
        total_idle_time,
        average_turnaround_time: metrics.average_turnaround_time,
        average_waiting_time: metrics.average_waiting_time,
        cpu_utilization: metrics.cpu_utilization,
    })
}

/// Admits every not-yet-admitted process with `arrival_time <= now`.
fn admit_arrivals<P>(
    policy: &mut P,
    table: &[Process],
    arrival_order: &[usize],
    cursor: &mut usize,
    now: i64,
) where
    P: SchedulingPolicy + ?Sized,
{
    while let Some(&i) = arrival_order.get(*cursor) {
        if table[i].arrival_time > now {
            break;
        }
        policy.admit(i);
        *cursor += 1;
    }
}
