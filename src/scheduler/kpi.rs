//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Busy / idle time | CPU time spent running / not running within `[0, makespan)` |
//! | CPU utilization | busy / makespan |
//! | Throughput | processes / makespan |
//! | Avg / max turnaround | completion - arrival |
//! | Avg / max waiting | turnaround - burst |
//! | Avg response | first dispatch - arrival |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use crate::models::ScheduleOutcome;

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Time the CPU spent running processes.
    pub busy_time: i64,
    /// Time within `[0, makespan)` the CPU sat idle.
    pub idle_time: i64,
    /// busy / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Largest turnaround time.
    pub max_turnaround_time: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Largest waiting time.
    pub max_waiting_time: i64,
    /// Mean delay between arrival and first time on the CPU.
    pub avg_response_time: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed run.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let makespan = outcome.makespan();
        let busy_time = outcome.busy_time();
        let count = outcome.processes.len();

        let responses: Vec<i64> = outcome
            .processes
            .iter()
            .filter_map(|p| {
                outcome
                    .slices_for(p.id)
                    .first()
                    .map(|first| first.start - p.arrival_time)
            })
            .collect();

        let per_time = |value: f64| {
            if makespan <= 0 {
                0.0
            } else {
                value / makespan as f64
            }
        };

        Self {
            makespan,
            busy_time,
            idle_time: (makespan - busy_time).max(0),
            cpu_utilization: per_time(busy_time as f64),
            throughput: per_time(count as f64),
            avg_turnaround_time: outcome.average_turnaround_time(),
            max_turnaround_time: outcome
                .processes
                .iter()
                .map(|p| p.turnaround_time)
                .max()
                .unwrap_or(0),
            avg_waiting_time: outcome.average_waiting_time(),
            max_waiting_time: outcome
                .processes
                .iter()
                .map(|p| p.waiting_time)
                .max()
                .unwrap_or(0),
            avg_response_time: if responses.is_empty() {
                0.0
            } else {
                responses.iter().map(|&r| r as f64).sum::<f64>() / responses.len() as f64
            },
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}
