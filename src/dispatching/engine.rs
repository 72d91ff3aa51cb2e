//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules in sequence (primary rule, then
//! tie-breakers). A full tie goes to the earlier input position.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Process;

/// A composable rule engine for process selection.
///
/// Rules are applied in sequence: the next rule is consulted only when
/// all previous rules tie.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::RuleEngine;
/// use u_cpusched::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Priority)
///     .with_tie_breaker(rules::Fifo);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FIFO"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the highest-priority index among `candidates`.
    ///
    /// `candidates` index into `processes`; their iteration order does not
    /// affect the result.
    pub fn select_best_of(
        &self,
        processes: &[Process],
        candidates: impl IntoIterator<Item = usize>,
    ) -> Option<usize> {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.compare(processes, a, b))
    }

    fn compare(&self, processes: &[Process], a: usize, b: usize) -> Ordering {
        let (pa, pb) = (&processes[a], &processes[b]);
        for rule in &self.rules {
            let order = rule.evaluate(pa).cmp(&rule.evaluate(pb));
            if order != Ordering::Equal {
                return order;
            }
        }
        a.cmp(&b)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
