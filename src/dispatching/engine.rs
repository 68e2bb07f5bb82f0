//! Rule engine for multi-key process ordering.
//!
//! Composes dispatching rules sequentially: a later rule is consulted only
//! when every earlier rule ties, then a final tie-breaker decides.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, RuleScore};
use crate::models::{Algorithm, Process};

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the input order (stable sort).
    #[default]
    Stable,
    /// Deterministic by process ID (ascending).
    ById,
}

/// A composable rule engine for process ordering.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{RuleEngine, TieBreaker, rules};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::PriorityLevel)
///     .with_tie_breaker(rules::ArrivalTime)
///     .with_final_tie_breaker(TieBreaker::ById);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FCFS"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Stable,
        }
    }

    /// Rule chain used by a non-preemptive discipline.
    ///
    /// Returns `None` for round robin, which has no ordering step.
    pub fn for_algorithm(algorithm: Algorithm) -> Option<Self> {
        let engine = match algorithm {
            Algorithm::Fcfs => Self::new().with_rule(rules::ArrivalTime),
            Algorithm::Sjf => Self::new()
                .with_rule(rules::ShortestBurst)
                .with_tie_breaker(rules::ArrivalTime),
            Algorithm::Priority => Self::new()
                .with_rule(rules::PriorityLevel)
                .with_tie_breaker(rules::ArrivalTime),
            Algorithm::RoundRobin => return None,
        };
        Some(engine.with_final_tie_breaker(TieBreaker::ById))
    }

    /// Adds the primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Descriptions of the configured rules, in evaluation order.
    pub fn rule_descriptions(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.description()).collect()
    }

    /// Returns indices into `processes`, highest priority first.
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    /// Sorts `processes` in place, highest priority first.
    pub fn sort(&self, processes: &mut [Process]) {
        processes.sort_by(|a, b| self.compare(a, b));
    }

    /// Returns the index of the highest-priority process.
    pub fn select_best(&self, processes: &[Process]) -> Option<usize> {
        self.sort_indices(processes).first().copied()
    }

    /// Scores from each rule for one process.
    pub fn evaluate(&self, process: &Process) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(process)).collect()
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a).cmp(&rule.evaluate(b)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }

        match self.tie_breaker {
            TieBreaker::Stable => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
