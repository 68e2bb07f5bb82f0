//! Process (schedulable unit) model.
//!
//! A process carries its static demand (arrival, burst, priority) and the
//! fields a scheduling run computes for it.
//!
//! # Time Representation
//! All times are integer time units relative to the start of the run (t=0).

use serde::{Deserialize, Serialize};

/// Process identifier.
pub type ProcessId = u32;

/// One schedulable process.
///
/// The static attributes (`id`, `arrival_time`, `burst_time`,
/// `priority_level`) never change during a run. The remaining fields are
/// outputs and are restored by [`Process::reset`] before every run.
///
/// When deserializing, only `id`, `arrival_time` and `burst_time` are
/// required. The priority and the computed fields default to zero; a run
/// resets `remaining_time` to `burst_time` before executing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time unit at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time the process needs.
    pub burst_time: i64,
    /// Scheduling priority (lower = scheduled first).
    #[serde(default)]
    pub priority_level: i32,
    /// CPU time still owed to the process.
    #[serde(default)]
    pub remaining_time: i64,
    /// Time at which the process finished.
    #[serde(default)]
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    #[serde(default)]
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    #[serde(default)]
    pub waiting_time: i64,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority_level: 0,
            remaining_time: burst_time,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Sets the priority level.
    pub fn with_priority(mut self, priority_level: i32) -> Self {
        self.priority_level = priority_level;
        self
    }

    /// Zeroes computed fields and restores `remaining_time`.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.completion_time = 0;
        self.turnaround_time = 0;
        self.waiting_time = 0;
    }

    /// Derives turnaround and waiting time from `completion_time`.
    pub fn finalize_metrics(&mut self) {
        self.turnaround_time = self.completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Whether no CPU time is owed anymore.
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }
}
