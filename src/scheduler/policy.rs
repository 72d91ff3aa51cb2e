//! Scheduling policies.
//!
//! A policy owns the ready set of one simulation run and decides which
//! process runs next and for how long. The simulation loop owns the
//! clock, the arrivals, and the process table; policies only see
//! indices into that table.
//!
//! | Policy | Ready set | Selection | Slice |
//! |--------|-----------|-----------|-------|
//! | FCFS | list | FIFO | whole burst |
//! | SJF | list | SJF, then FIFO | whole burst |
//! | Priority | list | PRIORITY, then FIFO | whole burst |
//! | RR | FIFO queue | queue head | quantum |

use std::collections::VecDeque;
use std::fmt::Debug;

use log::trace;

use crate::dispatching::{rules, RuleEngine};
use crate::error::ScheduleError;
use crate::models::Process;

/// A dispatch decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    /// Index of the process to run.
    pub index: usize,
    /// Maximum ticks before preemption. `None` runs the process to completion.
    pub slice: Option<i64>,
}

/// Order in which completed processes are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportOrder {
    /// Caller's input order.
    #[default]
    Input,
    /// Arrival time ascending, ties in input order.
    Arrival,
}

/// Selection strategy driven by the simulation loop.
///
/// # Protocol
/// 1. `admit` is called once per arrival, in arrival order, and again for
///    a preempted process after any arrivals that coincide with its
///    preemption.
/// 2. `pick_next` removes and returns the next process to run, or `None`
///    when the ready set is empty.
pub trait SchedulingPolicy: Send + Debug {
    /// Policy name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Adds a process to the ready set.
    fn admit(&mut self, index: usize);

    /// Removes and returns the next process to run.
    fn pick_next(&mut self, processes: &[Process]) -> Option<Dispatch>;

    /// Order of the completed processes in the result.
    fn report_order(&self) -> ReportOrder {
        ReportOrder::Input
    }
}

/// Non-preemptive policy driven by a rule engine.
///
/// Once selected, a process runs its whole burst regardless of later
/// arrivals.
#[derive(Debug, Clone)]
pub struct NonPreemptive {
    name: &'static str,
    engine: RuleEngine,
    report_order: ReportOrder,
    ready: Vec<usize>,
}

impl NonPreemptive {
    /// Creates a policy from a rule engine.
    pub fn new(name: &'static str, engine: RuleEngine) -> Self {
        Self {
            name,
            engine,
            report_order: ReportOrder::Input,
            ready: Vec::new(),
        }
    }

    /// Sets the report order.
    pub fn with_report_order(mut self, order: ReportOrder) -> Self {
        self.report_order = order;
        self
    }

    /// First-Come, First-Served: earliest arrival, then input order.
    pub fn fcfs() -> Self {
        Self::new("FCFS", RuleEngine::new().with_rule(rules::Fifo))
            .with_report_order(ReportOrder::Arrival)
    }

    /// Shortest Job First: shortest burst, then earliest arrival.
    pub fn sjf() -> Self {
        Self::new(
            "SJF",
            RuleEngine::new()
                .with_rule(rules::Sjf)
                .with_tie_breaker(rules::Fifo),
        )
    }

    /// Priority: lowest priority value, then earliest arrival.
    pub fn priority() -> Self {
        Self::new(
            "PRIORITY",
            RuleEngine::new()
                .with_rule(rules::Priority)
                .with_tie_breaker(rules::Fifo),
        )
    }
}

impl SchedulingPolicy for NonPreemptive {
    fn name(&self) -> &'static str {
        self.name
    }

    fn admit(&mut self, index: usize) {
        trace!("{}: admit #{index}", self.name);
        self.ready.push(index);
    }

    fn pick_next(&mut self, processes: &[Process]) -> Option<Dispatch> {
        let best = self
            .engine
            .select_best_of(processes, self.ready.iter().copied())?;
        self.ready.retain(|&i| i != best);
        Some(Dispatch {
            index: best,
            slice: None,
        })
    }

    fn report_order(&self) -> ReportOrder {
        self.report_order
    }
}

/// Round-Robin with a fixed quantum.
///
/// The ready set is a FIFO queue; the head runs for at most one quantum
/// and, if unfinished, rejoins the tail.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: i64,
    queue: VecDeque<usize>,
}

impl RoundRobin {
    /// Creates a Round-Robin policy.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidQuantum`] if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, ScheduleError> {
        if quantum <= 0 {
            return Err(ScheduleError::InvalidQuantum(quantum));
        }
        Ok(Self {
            quantum,
            queue: VecDeque::new(),
        })
    }

    /// Time quantum in ticks.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn admit(&mut self, index: usize) {
        trace!("RR: enqueue #{index} (queue length {})", self.queue.len() + 1);
        self.queue.push_back(index);
    }

    fn pick_next(&mut self, _processes: &[Process]) -> Option<Dispatch> {
        self.queue.pop_front().map(|index| Dispatch {
            index,
            slice: Some(self.quantum),
        })
    }

    fn report_order(&self) -> ReportOrder {
        ReportOrder::Arrival
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<Process> {
        vec![
            Process::new("A", 0, 4).with_priority(3),
            Process::new("B", 1, 2).with_priority(1),
            Process::new("C", 2, 2).with_priority(1),
        ]
    }

    #[test]
    fn test_fcfs_picks_earliest_arrival() {
        let processes = table();
        let mut policy = NonPreemptive::fcfs();
        policy.admit(2);
        policy.admit(1);
        let d = policy.pick_next(&processes).unwrap();
        assert_eq!(d, Dispatch { index: 1, slice: None });
        assert_eq!(policy.pick_next(&processes).unwrap().index, 2);
        assert!(policy.pick_next(&processes).is_none());
        assert_eq!(policy.report_order(), ReportOrder::Arrival);
    }

    #[test]
    fn test_sjf_tie_prefers_earlier_arrival() {
        let processes = table();
        let mut policy = NonPreemptive::sjf();
        for i in [0, 2, 1] {
            policy.admit(i);
        }
        // B and C both burst 2; B arrived first
        assert_eq!(policy.pick_next(&processes).unwrap().index, 1);
        assert_eq!(policy.report_order(), ReportOrder::Input);
    }

    #[test]
    fn test_priority_selection() {
        let processes = table();
        let mut policy = NonPreemptive::priority();
        policy.admit(0);
        policy.admit(2);
        assert_eq!(policy.pick_next(&processes).unwrap().index, 2);
        assert_eq!(policy.name(), "PRIORITY");
        assert_eq!(policy.report_order(), ReportOrder::Input);
    }

    #[test]
    fn test_round_robin_queue() {
        let processes = table();
        let mut policy = RoundRobin::new(2).unwrap();
        policy.admit(0);
        policy.admit(1);
        assert_eq!(
            policy.pick_next(&processes),
            Some(Dispatch {
                index: 0,
                slice: Some(2)
            })
        );
        policy.admit(0);
        assert_eq!(policy.pick_next(&processes).unwrap().index, 1);
        assert_eq!(policy.pick_next(&processes).unwrap().index, 0);
        assert!(policy.pick_next(&processes).is_none());
        assert_eq!(policy.report_order(), ReportOrder::Arrival);
    }

    #[test]
    fn test_round_robin_rejects_bad_quantum() {
        assert_eq!(RoundRobin::new(0).unwrap_err(), ScheduleError::InvalidQuantum(0));
        assert_eq!(
            RoundRobin::new(-3).unwrap_err(),
            ScheduleError::InvalidQuantum(-3)
        );
        assert_eq!(RoundRobin::new(4).unwrap().quantum(), 4);
    }
}
