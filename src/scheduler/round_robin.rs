//! Round-robin executor.
//!
//! # Algorithm
//!
//! A single clock starts at 0. The process list is swept in input order;
//! every pending process runs for `min(remaining, quantum)`. A process
//! whose remaining time reaches zero completes at the current clock.
//! Sweeps repeat until every process has completed, then turnaround and
//! waiting times are derived as for the non-preemptive disciplines.
//!
//! # Termination
//! Each sweep runs at least one slice, and there are at most
//! `sum(burst) / quantum + n` slices in total, so sweeps are capped at
//! that bound. Exceeding it reports `InternalInvariantViolation` instead
//! of looping forever.

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{ExecutionSlice, Process};
use crate::validation::{
    validate_quantum, validate_time_horizon, ValidationError, ValidationErrorKind,
};

/// Whether the executor respects arrival times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrivalGating {
    /// A process is skipped until the clock reaches its arrival time. When
    /// nothing pending has arrived, the clock jumps to the next arrival.
    #[default]
    Enforce,
    /// Arrival times are not consulted while executing. Late arrivals may
    /// run before they exist and end up with negative waiting time.
    Ignore,
}

/// Simulates round robin over `processes` in their given order.
///
/// Updates `remaining_time`, `completion_time`, `turnaround_time` and
/// `waiting_time` in place and returns the executed CPU slices.
///
/// # Errors
/// - `InvalidInput` if `processes` is empty, `quantum <= 0` or the
///   batch's time horizon does not fit in `i64`.
/// - `InternalInvariantViolation` if the sweep bound is exceeded or the
///   clock overflows.
///
/// # Example
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{run_round_robin, ArrivalGating};
///
/// let mut ps = vec![Process::new(1, 0, 4), Process::new(2, 0, 3)];
/// let slices = run_round_robin(&mut ps, 2, ArrivalGating::Enforce).unwrap();
/// assert_eq!(slices.len(), 4);
/// assert_eq!(ps[0].completion_time, 6);
/// assert_eq!(ps[1].completion_time, 7);
/// ```
pub fn run_round_robin(
    processes: &mut [Process],
    quantum: i64,
    gating: ArrivalGating,
) -> Result<Vec<ExecutionSlice>, ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::invalid_input(ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "Process list is empty",
        )));
    }
    validate_quantum(quantum).map_err(ScheduleError::InvalidInput)?;
    validate_time_horizon(processes).map_err(ScheduleError::InvalidInput)?;

    let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();
    let sweep_limit = total_burst / quantum + processes.len() as i64;

    let n = processes.len();
    let mut completed = processes.iter().filter(|p| p.is_finished()).count();
    let mut time: i64 = 0;
    let mut sweeps: i64 = 0;
    let mut slices = Vec::new();

    while completed < n {
        if sweeps >= sweep_limit {
            warn!("round robin exceeded {sweep_limit} sweeps with {completed}/{n} complete");
            return Err(ScheduleError::InternalInvariantViolation(format!(
                "round robin did not finish within {sweep_limit} sweeps"
            )));
        }
        sweeps += 1;

        if gating == ArrivalGating::Enforce {
            time = next_arrival(processes, time);
        }

        for p in processes.iter_mut() {
            if p.remaining_time <= 0 {
                continue;
            }
            if gating == ArrivalGating::Enforce && p.arrival_time > time {
                continue;
            }

            let run = p.remaining_time.min(quantum);
            let start = time;
            time = time.checked_add(run).ok_or_else(|| {
                ScheduleError::InternalInvariantViolation(format!(
                    "round robin clock overflowed running P{}",
                    p.id
                ))
            })?;
            p.remaining_time -= run;
            trace!("P{} ran [{start}, {time}), {} left", p.id, p.remaining_time);
            slices.push(ExecutionSlice::new(p.id, start, time));

            if p.remaining_time == 0 {
                p.completion_time = time;
                completed += 1;
            }
        }
    }

    for p in processes.iter_mut() {
        p.finalize_metrics();
    }

    Ok(slices)
}

/// Clock value at which some pending process has arrived.
fn next_arrival(processes: &[Process], time: i64) -> i64 {
    processes
        .iter()
        .filter(|p| p.remaining_time > 0)
        .map(|p| p.arrival_time)
        .min()
        .map_or(time, |earliest| earliest.max(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions(ps: &[Process]) -> Vec<i64> {
        ps.iter().map(|p| p.completion_time).collect()
    }

    #[test]
    fn test_two_processes_quantum_two() {
        let mut ps = vec![Process::new(1, 0, 4), Process::new(2, 0, 3)];
        let slices = run_round_robin(&mut ps, 2, ArrivalGating::Enforce).unwrap();

        assert_eq!(
            slices,
            vec![
                ExecutionSlice::new(1, 0, 2),
                ExecutionSlice::new(2, 2, 4),
                ExecutionSlice::new(1, 4, 6),
                ExecutionSlice::new(2, 6, 7),
            ]
        );
        assert_eq!(completions(&ps), vec![6, 7]);
        assert_eq!(ps[0].turnaround_time, 6);
        assert_eq!(ps[1].turnaround_time, 7);
        assert_eq!(ps[0].waiting_time, 2);
        assert_eq!(ps[1].waiting_time, 4);
        assert!(ps.iter().all(|p| p.is_finished()));
    }

    #[test]
    fn test_burst_within_quantum_runs_once() {
        let mut ps = vec![Process::new(1, 0, 3), Process::new(2, 0, 1)];
        let slices = run_round_robin(&mut ps, 5, ArrivalGating::Enforce).unwrap();
        assert_eq!(slices.len(), 2);
        assert_eq!(completions(&ps), vec![3, 4]);
    }

    #[test]
    fn test_total_work_is_conserved() {
        let mut ps = vec![
            Process::new(1, 0, 7),
            Process::new(2, 1, 4),
            Process::new(3, 3, 9),
        ];
        let slices = run_round_robin(&mut ps, 3, ArrivalGating::Enforce).unwrap();
        let work: i64 = slices.iter().map(|s| s.duration()).sum();
        assert_eq!(work, 20);
    }

    #[test]
    fn test_enforce_skips_future_arrivals() {
        let mut ps = vec![Process::new(1, 5, 2), Process::new(2, 0, 4)];
        let slices = run_round_robin(&mut ps, 2, ArrivalGating::Enforce).unwrap();
        // P2 runs alone until P1 arrives at 5; the clock is at 4 after two
        // P2 turns, so the third sweep idles to 5.
        assert_eq!(
            slices,
            vec![
                ExecutionSlice::new(2, 0, 2),
                ExecutionSlice::new(2, 2, 4),
                ExecutionSlice::new(1, 5, 7),
            ]
        );
        assert_eq!(completions(&ps), vec![7, 4]);
        assert!(ps.iter().all(|p| p.waiting_time >= 0));
    }

    #[test]
    fn test_enforce_idles_until_first_arrival() {
        let mut ps = vec![Process::new(1, 10, 3)];
        let slices = run_round_robin(&mut ps, 2, ArrivalGating::Enforce).unwrap();
        assert_eq!(
            slices,
            vec![ExecutionSlice::new(1, 10, 12), ExecutionSlice::new(1, 12, 13)]
        );
        assert_eq!(ps[0].waiting_time, 0);
    }

    #[test]
    fn test_ignore_runs_before_arrival() {
        let mut ps = vec![Process::new(1, 5, 2), Process::new(2, 0, 4)];
        run_round_robin(&mut ps, 2, ArrivalGating::Ignore).unwrap();
        // P1 runs at [0, 2) although it arrives at 5
        assert_eq!(completions(&ps), vec![2, 6]);
        assert_eq!(ps[0].turnaround_time, -3);
        assert_eq!(ps[0].waiting_time, -5);
    }

    #[test]
    fn test_rejects_bad_quantum() {
        let mut ps = vec![Process::new(1, 0, 4)];
        let err = run_round_robin(&mut ps, 0, ArrivalGating::Enforce).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NonPositiveQuantum
        );
        // nothing executed
        assert_eq!(ps[0].remaining_time, 4);
    }

    #[test]
    fn test_rejects_empty() {
        let err = run_round_robin(&mut [], 2, ArrivalGating::Enforce).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::EmptyProcessList
        );
    }

    #[test]
    fn test_rejects_time_overflow() {
        let mut ps = vec![
            Process::new(1, 0, i64::MAX / 2 + 1),
            Process::new(2, 0, i64::MAX / 2 + 1),
        ];
        for gating in [ArrivalGating::Enforce, ArrivalGating::Ignore] {
            let err = run_round_robin(&mut ps, 2, gating).unwrap_err();
            assert_eq!(
                err.validation_errors()[0].kind,
                ValidationErrorKind::TimeOverflow
            );
        }
        assert_eq!(ps[0].remaining_time, i64::MAX / 2 + 1);
    }

    #[test]
    fn test_finishes_at_time_limit() {
        let quantum = i64::MAX / 4;
        let mut ps = vec![
            Process::new(1, 0, i64::MAX / 2),
            Process::new(2, 0, i64::MAX / 2 + 1),
        ];
        run_round_robin(&mut ps, quantum, ArrivalGating::Enforce).unwrap();
        assert_eq!(ps[1].completion_time, i64::MAX);
        assert!(ps.iter().all(|p| p.is_finished()));
    }

    #[test]
    fn test_sweep_bound_trips_on_corrupt_state() {
        // negative remaining time: never runs, never counts as finished
        let mut ps = vec![Process::new(1, 0, 1), Process::new(2, 0, 1)];
        ps[1].remaining_time = -1;
        for gating in [ArrivalGating::Enforce, ArrivalGating::Ignore] {
            let mut ps = ps.clone();
            let err = run_round_robin(&mut ps, 1, gating).unwrap_err();
            assert!(matches!(err, ScheduleError::InternalInvariantViolation(_)));
        }
        ps[1].remaining_time = 1;
        assert!(run_round_robin(&mut ps, 1, ArrivalGating::Enforce).is_ok());
    }
}
