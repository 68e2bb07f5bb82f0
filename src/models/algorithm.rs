//! Scheduling discipline selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// The four supported scheduling disciplines.
///
/// Names parse from and display as `FCFS`, `SJF`, `PriorityScheduling`
/// and `RoundRobin`. The labels `Priority Scheduling` and `Round Robin`
/// are accepted as aliases when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    #[serde(rename = "SJF")]
    Sjf,
    /// Priority scheduling, non-preemptive (lower level first).
    #[serde(rename = "PriorityScheduling")]
    Priority,
    /// Round robin with a fixed quantum.
    #[serde(rename = "RoundRobin")]
    RoundRobin,
}

impl Algorithm {
    /// All disciplines, in display order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "PriorityScheduling",
            Algorithm::RoundRobin => "RoundRobin",
        }
    }

    /// Whether the discipline can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SJF" => Ok(Algorithm::Sjf),
            "PriorityScheduling" | "Priority Scheduling" => Ok(Algorithm::Priority),
            "RoundRobin" | "Round Robin" => Ok(Algorithm::RoundRobin),
            other => Err(ScheduleError::InvalidAlgorithm(other.to_string())),
        }
    }
}
