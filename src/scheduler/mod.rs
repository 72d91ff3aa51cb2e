//! CPU scheduling policies, simulation loop, and KPI evaluation.
//!
//! # Algorithms
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | FCFS | no | earliest arrival |
//! | SJF | no | shortest burst, then earliest arrival |
//! | RR | yes (quantum) | ready-queue head |
//! | Priority | no | lowest priority value, then earliest arrival |
//!
//! All four share one [`Timeline`] and one [`ScheduleMetrics`]
//! reduction; they differ only in their [`SchedulingPolicy`].
//!
//! # Concurrency
//!
//! Every call owns its process table, timeline, and policy state, so
//! [`simulate`] may be called from many threads at once.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod kpi;
mod policy;
mod simulator;
mod timeline;

pub use kpi::{round_half_even, ScheduleMetrics};
pub use policy::{Dispatch, NonPreemptive, ReportOrder, RoundRobin, SchedulingPolicy};
pub use simulator::run_policy;
pub use timeline::Timeline;

use log::{info, warn};
use std::fmt;

use crate::error::ScheduleError;
use crate::models::{Process, ScheduleResult};

/// Selectable scheduling algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Round-Robin with a fixed quantum.
    RoundRobin {
        /// Ticks per turn.
        quantum: i64,
    },
    /// Static priority (non-preemptive, lower value first).
    Priority,
}

impl Algorithm {
    /// Selector names accepted by [`Algorithm::parse`], in report order.
    pub const NAMES: [&'static str; 4] = ["fcfs", "sjf", "rr", "priority"];

    /// Parses a selector name.
    ///
    /// `quantum` is only consulted for `"rr"`.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidAlgorithm`] for an unknown name.
    /// - [`ScheduleError::InvalidQuantum`] for `"rr"` with `quantum <= 0`.
    pub fn parse(name: &str, quantum: i64) -> Result<Self, ScheduleError> {
        let algorithm = match name.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Algorithm::Fcfs,
            "sjf" => Algorithm::Sjf,
            "rr" => Algorithm::RoundRobin { quantum },
            "priority" => Algorithm::Priority,
            _ => return Err(ScheduleError::InvalidAlgorithm(name.to_string())),
        };
        algorithm.check()?;
        Ok(algorithm)
    }

    /// All four algorithms in report order (FCFS, SJF, RR, Priority).
    pub fn all(quantum: i64) -> [Algorithm; 4] {
        [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::RoundRobin { quantum },
            Algorithm::Priority,
        ]
    }

    /// Selector name (`"fcfs"`, `"sjf"`, `"rr"`, `"priority"`).
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::RoundRobin { .. } => "rr",
            Algorithm::Priority => "priority",
        }
    }

    /// Builds a fresh policy instance for one run.
    pub fn policy(&self) -> Result<Box<dyn SchedulingPolicy>, ScheduleError> {
        Ok(match *self {
            Algorithm::Fcfs => Box::new(NonPreemptive::fcfs()),
            Algorithm::Sjf => Box::new(NonPreemptive::sjf()),
            Algorithm::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)?),
            Algorithm::Priority => Box::new(NonPreemptive::priority()),
        })
    }

    fn check(&self) -> Result<(), ScheduleError> {
        match *self {
            Algorithm::RoundRobin { quantum } if quantum <= 0 => {
                Err(ScheduleError::InvalidQuantum(quantum))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fcfs => write!(f, "First-Come, First-Served (FCFS)"),
            Algorithm::Sjf => write!(f, "Shortest Job First (SJF)"),
            Algorithm::RoundRobin { quantum } => {
                write!(f, "Round Robin (RR, quantum = {quantum})")
            }
            Algorithm::Priority => write!(f, "Priority (non-preemptive)"),
        }
    }
}

/// Simulates `algorithm` over `processes`.
///
/// # Example
/// ```
/// use u_cpusched::models::{GanttEntry, Process};
/// use u_cpusched::scheduler::{simulate, Algorithm};
///
/// let processes = vec![Process::new("A", 0, 5), Process::new("B", 2, 3)];
/// let result = simulate(&processes, Algorithm::Fcfs).unwrap();
///
/// assert_eq!(
///     result.gantt,
///     vec![GanttEntry::process("A", 0, 5), GanttEntry::process("B", 5, 8)]
/// );
/// assert_eq!(result.process("B").unwrap().waiting_time, 3);
/// ```
///
/// # Errors
/// [`ScheduleError::EmptyInput`], [`ScheduleError::InvalidQuantum`] or
/// [`ScheduleError::MalformedProcess`]; all reported before simulation starts.
pub fn simulate(
    processes: &[Process],
    algorithm: Algorithm,
) -> Result<ScheduleResult, ScheduleError> {
    if processes.is_empty() {
        warn!("{}: rejected empty process list", algorithm.name());
        return Err(ScheduleError::EmptyInput);
    }
    let mut policy = algorithm.policy()?;
    let result = run_policy(policy.as_mut(), processes)?;
    info!(
        "{}: {} process(es), total_time={}, idle={}, utilization={}%",
        algorithm.name(),
        result.process_count(),
        result.total_time,
        result.total_idle_time,
        result.cpu_utilization
    );
    Ok(result)
}

/// Simulates by selector name, as received from an external collaborator.
pub fn simulate_named(
    processes: &[Process],
    algorithm: &str,
    quantum: i64,
) -> Result<ScheduleResult, ScheduleError> {
    simulate(processes, Algorithm::parse(algorithm, quantum)?)
}

/// Runs all four algorithms over the same input, in report order.
pub fn simulate_all(
    processes: &[Process],
    quantum: i64,
) -> Result<Vec<(Algorithm, ScheduleResult)>, ScheduleError> {
    Algorithm::all(quantum)
        .into_iter()
        .map(|algorithm| simulate(processes, algorithm).map(|r| (algorithm, r)))
        .collect()
}
