//! Selection rules for the non-preemptive policies.
//!
//! A rule maps a ready process to an integer score; the [`RuleEngine`]
//! compares scores rule by rule and falls back to input position.
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine};
//! use u_cpusched::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Sjf)
//!     .with_tie_breaker(rules::Fifo);
//!
//! let ready = vec![Process::new("A", 0, 4), Process::new("B", 0, 2)];
//! assert_eq!(engine.select_best_of(&ready, [0, 1]), Some(1));
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a rule. Lower runs first.
pub type RuleScore = i64;

/// Scores a ready process; lower scores are dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores `process`.
    fn evaluate(&self, process: &Process) -> RuleScore;
}
