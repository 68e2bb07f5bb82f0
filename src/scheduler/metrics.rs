//! Non-preemptive completion/turnaround/waiting calculator.
//!
//! # Algorithm
//!
//! 1. The first process completes at `arrival + burst`.
//! 2. Each later process starts when both it has arrived and the previous
//!    one has finished; if it arrives after the CPU went idle, it starts at
//!    its own arrival.
//! 3. `turnaround = completion - arrival`, `waiting = turnaround - burst`.
//!
//! The calculator is discipline-agnostic: FCFS, SJF and priority
//! scheduling all reuse it after producing their own order.

use crate::error::ScheduleError;
use crate::models::{ExecutionSlice, Process};
use crate::validation::{validate_time_horizon, ValidationError, ValidationErrorKind};

/// Runs `ordered` back to back on one CPU and fills in the computed fields.
///
/// # Errors
/// `InvalidInput` if `ordered` is empty or its completion times would not
/// fit in `i64`.
///
/// # Example
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::calculate;
///
/// let mut ps = vec![Process::new(1, 0, 2), Process::new(2, 5, 1)];
/// calculate(&mut ps).unwrap();
/// // CPU idles from 2 to 5
/// assert_eq!(ps[1].completion_time, 6);
/// assert_eq!(ps[1].waiting_time, 0);
/// ```
pub fn calculate(ordered: &mut [Process]) -> Result<(), ScheduleError> {
    validate_time_horizon(ordered).map_err(ScheduleError::InvalidInput)?;
    let Some((first, rest)) = ordered.split_first_mut() else {
        return Err(ScheduleError::invalid_input(ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "Process list is empty",
        )));
    };

    first.completion_time = first.arrival_time + first.burst_time;
    let mut previous = first.completion_time;

    for p in rest {
        p.completion_time = if p.arrival_time > previous {
            p.arrival_time + p.burst_time
        } else {
            previous + p.burst_time
        };
        previous = p.completion_time;
    }

    for p in ordered.iter_mut() {
        p.remaining_time = 0;
        p.finalize_metrics();
    }

    Ok(())
}

/// One CPU slice per process, `[completion - burst, completion)`.
pub fn execution_slices(ordered: &[Process]) -> Vec<ExecutionSlice> {
    ordered
        .iter()
        .map(|p| ExecutionSlice::new(p.id, p.completion_time - p.burst_time, p.completion_time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions(ps: &[Process]) -> Vec<i64> {
        ps.iter().map(|p| p.completion_time).collect()
    }

    fn waits(ps: &[Process]) -> Vec<i64> {
        ps.iter().map(|p| p.waiting_time).collect()
    }

    #[test]
    fn test_back_to_back() {
        let mut ps = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ];
        calculate(&mut ps).unwrap();
        assert_eq!(completions(&ps), vec![5, 8, 16]);
        assert_eq!(waits(&ps), vec![0, 4, 6]);
        assert!(ps.iter().all(|p| p.is_finished()));
    }

    #[test]
    fn test_leading_idle_gap() {
        let mut ps = vec![Process::new(1, 3, 2)];
        calculate(&mut ps).unwrap();
        assert_eq!(ps[0].completion_time, 5);
        assert_eq!(ps[0].turnaround_time, 2);
        assert_eq!(ps[0].waiting_time, 0);
    }

    #[test]
    fn test_middle_idle_gap() {
        let mut ps = vec![Process::new(1, 0, 2), Process::new(2, 10, 4)];
        calculate(&mut ps).unwrap();
        assert_eq!(completions(&ps), vec![2, 14]);
        assert_eq!(waits(&ps), vec![0, 0]);
    }

    #[test]
    fn test_arrival_equal_to_previous_completion() {
        let mut ps = vec![Process::new(1, 0, 2), Process::new(2, 2, 3)];
        calculate(&mut ps).unwrap();
        assert_eq!(completions(&ps), vec![2, 5]);
    }

    #[test]
    fn test_order_is_respected_even_if_earlier_arrival_later() {
        // SJF-style order: later arrival placed first
        let mut ps = vec![Process::new(2, 1, 3), Process::new(1, 0, 5)];
        calculate(&mut ps).unwrap();
        assert_eq!(completions(&ps), vec![4, 9]);
        assert_eq!(waits(&ps), vec![0, 4]);
    }

    #[test]
    fn test_empty_is_rejected() {
        let err = calculate(&mut []).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::EmptyProcessList
        );
    }

    #[test]
    fn test_time_overflow_is_rejected() {
        let mut ps = vec![Process::new(1, i64::MAX / 2, i64::MAX / 2 + 10)];
        let err = calculate(&mut ps).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::TimeOverflow
        );
        assert_eq!(ps[0].completion_time, 0);
    }

    #[test]
    fn test_completion_at_time_limit() {
        let mut ps = vec![Process::new(1, 0, i64::MAX / 2), Process::new(2, 0, i64::MAX / 2 + 1)];
        calculate(&mut ps).unwrap();
        assert_eq!(ps[1].completion_time, i64::MAX);
        assert_eq!(ps[1].waiting_time, i64::MAX / 2);
    }

    #[test]
    fn test_execution_slices() {
        let mut ps = vec![Process::new(1, 0, 2), Process::new(2, 4, 1)];
        calculate(&mut ps).unwrap();
        assert_eq!(
            execution_slices(&ps),
            vec![ExecutionSlice::new(1, 0, 2), ExecutionSlice::new(2, 4, 5)]
        );
    }
}
