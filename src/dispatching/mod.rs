//! Ordering strategies for non-preemptive disciplines.
//!
//! Each discipline is a chain of dispatching rules evaluated by a
//! [`RuleEngine`]: the primary rule decides, later rules only break ties,
//! and a final by-ID comparison makes the order fully deterministic.
//!
//! | Discipline | Rule chain |
//! |------------|-----------|
//! | FCFS | arrival → id |
//! | SJF | burst → arrival → id |
//! | Priority | priority level → arrival → id |
//!
//! Round robin has no ordering step; it is driven entirely by the executor.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{order, RuleEngine, rules};
//! use cpu_schedule::models::{Algorithm, Process};
//!
//! let mut processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 8),
//! ];
//! order(&mut processes, Algorithm::Sjf);
//! let ids: Vec<u32> = processes.iter().map(|p| p.id).collect();
//! assert_eq!(ids, vec![2, 1, 3]);
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::ArrivalTime);
//! assert_eq!(engine.select_best(&processes), Some(0));
//! ```

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::{Algorithm, Process};
use log::debug;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = scheduled earlier.
pub type RuleScore = i64;

/// A dispatching rule that ranks processes.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a process.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Reorders `processes` in place into the execution order of `algorithm`.
///
/// The reordering is a permutation of the input: nothing is added,
/// dropped or duplicated. Round robin leaves the input order untouched.
pub fn order(processes: &mut [Process], algorithm: Algorithm) {
    let Some(engine) = RuleEngine::for_algorithm(algorithm) else {
        return;
    };
    debug!(
        "{algorithm}: ordering by {}, then id",
        engine.rule_descriptions().join(", then ")
    );
    engine.sort(processes);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(processes: &[Process]) -> Vec<u32> {
        processes.iter().map(|p| p.id).collect()
    }

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 4, 2).with_priority(3),
            Process::new(2, 0, 6).with_priority(1),
            Process::new(3, 2, 2).with_priority(1),
            Process::new(4, 0, 6).with_priority(2),
        ]
    }

    #[test]
    fn test_order_fcfs() {
        let mut ps = sample();
        order(&mut ps, Algorithm::Fcfs);
        // 2 and 4 both arrive at 0 → id breaks the tie
        assert_eq!(ids(&ps), vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_order_sjf() {
        let mut ps = sample();
        order(&mut ps, Algorithm::Sjf);
        // burst 2: P3 (arr 2) before P1 (arr 4); burst 6: P2, P4 by id
        assert_eq!(ids(&ps), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_order_priority() {
        let mut ps = sample();
        order(&mut ps, Algorithm::Priority);
        // level 1: P2 (arr 0) before P3 (arr 2)
        assert_eq!(ids(&ps), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_order_round_robin_is_identity() {
        let mut ps = sample();
        order(&mut ps, Algorithm::RoundRobin);
        assert_eq!(ids(&ps), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_order_preserves_set() {
        for algorithm in Algorithm::ALL {
            let mut ps = sample();
            order(&mut ps, algorithm);
            let mut got = ids(&ps);
            got.sort_unstable();
            assert_eq!(got, vec![1, 2, 3, 4], "{algorithm}");
        }
    }

    #[test]
    fn test_order_independent_of_input_permutation() {
        let mut forward = sample();
        let mut reversed = sample();
        reversed.reverse();
        for algorithm in [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Priority] {
            order(&mut forward, algorithm);
            order(&mut reversed, algorithm);
            assert_eq!(ids(&forward), ids(&reversed), "{algorithm}");
        }
    }
}
