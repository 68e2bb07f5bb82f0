//! Scheduling facade.
//!
//! # Algorithm
//!
//! 1. Validate the batch (and the quantum for round robin). Rejected input
//!    is left untouched.
//! 2. Reset every process: computed fields zeroed, `remaining_time`
//!    restored. Re-running a batch never sees residue from an earlier run.
//! 3. FCFS, SJF and priority: order, then run the non-preemptive
//!    calculator. Round robin: run the executor on the input order.
//! 4. Package the final arrangement, timeline and CPU slices.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::metrics::{calculate, execution_slices};
use super::round_robin::{run_round_robin, ArrivalGating};
use crate::dispatching::order;
use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, ScheduleOutcome};
use crate::validation::{validate_processes, validate_quantum, ValidationError};

/// Round-robin quantum used when none is configured.
pub const DEFAULT_QUANTUM: i64 = 2;

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

/// Input container for a scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Discipline to apply.
    pub algorithm: Algorithm,
    /// Round-robin time quantum.
    #[serde(default = "default_quantum")]
    pub quantum: i64,
    /// Round-robin arrival handling.
    #[serde(default)]
    pub arrival_gating: ArrivalGating,
}

impl ScheduleRequest {
    /// Creates a request with the default quantum and gating.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            quantum: DEFAULT_QUANTUM,
            arrival_gating: ArrivalGating::default(),
        }
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the round-robin arrival handling.
    pub fn with_arrival_gating(mut self, arrival_gating: ArrivalGating) -> Self {
        self.arrival_gating = arrival_gating;
        self
    }
}

/// Runs one of the four disciplines over a process batch.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::{Algorithm, Process};
/// use cpu_schedule::scheduler::Scheduler;
///
/// let mut processes = vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 1, 3),
///     Process::new(3, 2, 8),
/// ];
/// let outcome = Scheduler::new().run(&mut processes, Algorithm::Fcfs).unwrap();
///
/// let completions: Vec<i64> = outcome.timeline.iter().map(|e| e.completion_time).collect();
/// assert_eq!(completions, vec![5, 8, 16]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    quantum: i64,
    arrival_gating: ArrivalGating,
}

impl Scheduler {
    /// Creates a scheduler with quantum 2 and enforced arrivals.
    pub fn new() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            arrival_gating: ArrivalGating::default(),
        }
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the round-robin arrival handling.
    pub fn with_arrival_gating(mut self, arrival_gating: ArrivalGating) -> Self {
        self.arrival_gating = arrival_gating;
        self
    }

    /// Configured quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Configured arrival handling.
    pub fn arrival_gating(&self) -> ArrivalGating {
        self.arrival_gating
    }

    /// Schedules `processes` in place.
    ///
    /// On success the slice holds the final arrangement with computed
    /// fields filled in. On `InvalidInput` it is left unchanged.
    pub fn run(
        &self,
        processes: &mut [Process],
        algorithm: Algorithm,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        self.validate(processes, algorithm)?;
        reset(processes);
        self.execute(processes, algorithm)
    }

    /// Schedules `processes` in place, selecting the discipline by name.
    ///
    /// An unknown name fails with `InvalidAlgorithm` after the batch has
    /// been reset.
    pub fn run_named(
        &self,
        processes: &mut [Process],
        algorithm_name: &str,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        validate_processes(processes).map_err(reject)?;
        match algorithm_name.parse::<Algorithm>() {
            Ok(algorithm) => self.run(processes, algorithm),
            Err(err) => {
                reset(processes);
                warn!("{err}");
                Err(err)
            }
        }
    }

    /// Schedules a copy of `processes`, leaving the caller's batch as is.
    pub fn schedule(
        &self,
        processes: &[Process],
        algorithm: Algorithm,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        let mut owned = processes.to_vec();
        self.run(&mut owned, algorithm)
    }

    /// Schedules from a request, using the request's quantum and gating.
    pub fn schedule_request(
        &self,
        request: &ScheduleRequest,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        let scheduler = Self {
            quantum: request.quantum,
            arrival_gating: request.arrival_gating,
        };
        scheduler.schedule(&request.processes, request.algorithm)
    }

    fn validate(&self, processes: &[Process], algorithm: Algorithm) -> Result<(), ScheduleError> {
        let mut errors = validate_processes(processes).err().unwrap_or_default();
        if algorithm.is_preemptive() {
            errors.extend(validate_quantum(self.quantum).err().unwrap_or_default());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(reject(errors))
        }
    }

    fn execute(
        &self,
        processes: &mut [Process],
        algorithm: Algorithm,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        debug!("running {algorithm} over {} processes", processes.len());

        let slices = match algorithm {
            Algorithm::RoundRobin => {
                run_round_robin(processes, self.quantum, self.arrival_gating)?
            }
            Algorithm::Fcfs | Algorithm::Sjf | Algorithm::Priority => {
                order(processes, algorithm);
                calculate(processes)?;
                execution_slices(processes)
            }
        };

        let outcome = ScheduleOutcome::new(algorithm, processes.to_vec(), slices);
        debug!(
            "{algorithm} done: makespan {}, avg turnaround {:.2}, avg waiting {:.2}",
            outcome.makespan(),
            outcome.average_turnaround_time(),
            outcome.average_waiting_time()
        );
        Ok(outcome)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Zeroes computed fields and restores `remaining_time` on every process.
pub fn reset(processes: &mut [Process]) {
    for p in processes.iter_mut() {
        p.reset();
    }
}

/// Runs the discipline named `algorithm_name` over `processes` in place.
///
/// `quantum` is only consulted for round robin. Shorthand for
/// `Scheduler::new().with_quantum(quantum).run_named(..)`.
pub fn run(
    processes: &mut [Process],
    algorithm_name: &str,
    quantum: i64,
) -> Result<ScheduleOutcome, ScheduleError> {
    Scheduler::new()
        .with_quantum(quantum)
        .run_named(processes, algorithm_name)
}

fn reject(errors: Vec<ValidationError>) -> ScheduleError {
    let err = ScheduleError::InvalidInput(errors);
    warn!("{err}");
    err
}
