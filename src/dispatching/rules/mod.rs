//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// First come, first served.
///
/// Orders by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalTime;

impl DispatchingRule for ArrivalTime {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest job first.
///
/// Orders by total burst time, not remaining time: the discipline is
/// non-preemptive and the order is fixed before execution.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Priority level.
///
/// Lower `priority_level` runs first.
#[derive(Debug, Clone, Copy)]
pub struct PriorityLevel;

impl DispatchingRule for PriorityLevel {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.priority_level)
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_scores() {
        let p = Process::new(1, 4, 9).with_priority(-2);
        assert_eq!(ArrivalTime.evaluate(&p), 4);
        assert_eq!(ShortestBurst.evaluate(&p), 9);
        assert_eq!(PriorityLevel.evaluate(&p), -2);
    }

    #[test]
    fn test_rule_descriptions() {
        assert_eq!(ArrivalTime.description(), "First Come First Served");
        assert_eq!(ShortestBurst.description(), "Shortest Job First");
        assert_eq!(PriorityLevel.description(), "Priority Scheduling");
    }
}
