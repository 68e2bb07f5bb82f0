//! Schedule outcome model.
//!
//! The result of one scheduling run: the processes in their final
//! arrangement, the completion timeline shown in the Gantt chart and the
//! individual CPU slices that were executed.

use serde::{Deserialize, Serialize};

use super::{Algorithm, Process, ProcessId};

/// One Gantt chart cell: a process and the time it finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Finished process.
    pub process_id: ProcessId,
    /// Completion time of that process.
    pub completion_time: i64,
}

/// A contiguous interval during which one process held the CPU.
///
/// Non-preemptive disciplines produce exactly one slice per process;
/// round robin produces one slice per quantum turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Running process.
    pub process_id: ProcessId,
    /// Slice start (inclusive).
    pub start: i64,
    /// Slice end (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: ProcessId, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// A completed scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Discipline that produced this outcome.
    pub algorithm: Algorithm,
    /// Processes in the order they were last arranged.
    pub processes: Vec<Process>,
    /// `(id, completion_time)` pairs in arrangement order.
    pub timeline: Vec<TimelineEntry>,
    /// CPU slices in execution order.
    pub slices: Vec<ExecutionSlice>,
}

impl ScheduleOutcome {
    /// Builds an outcome, deriving the timeline from the arrangement.
    pub fn new(algorithm: Algorithm, processes: Vec<Process>, slices: Vec<ExecutionSlice>) -> Self {
        let timeline = processes
            .iter()
            .map(|p| TimelineEntry {
                process_id: p.id,
                completion_time: p.completion_time,
            })
            .collect();
        Self {
            algorithm,
            processes,
            timeline,
            slices,
        }
    }

    /// Finds a process by ID.
    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Latest completion time.
    pub fn makespan(&self) -> i64 {
        self.processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total time the CPU spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(|s| s.duration()).sum()
    }

    /// Mean turnaround time. Zero for an empty outcome.
    pub fn average_turnaround_time(&self) -> f64 {
        mean(self.processes.iter().map(|p| p.turnaround_time))
    }

    /// Mean waiting time. Zero for an empty outcome.
    pub fn average_waiting_time(&self) -> f64 {
        mean(self.processes.iter().map(|p| p.waiting_time))
    }

    /// Slices executed by one process.
    pub fn slices_for(&self, id: ProcessId) -> Vec<&ExecutionSlice> {
        self.slices.iter().filter(|s| s.process_id == id).collect()
    }
}

fn mean(values: impl ExactSizeIterator<Item = i64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.map(|v| v as f64).sum::<f64>() / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outcome() -> ScheduleOutcome {
        let mut p1 = Process::new(1, 0, 5);
        p1.completion_time = 5;
        p1.finalize_metrics();
        let mut p2 = Process::new(2, 1, 3);
        p2.completion_time = 8;
        p2.finalize_metrics();
        ScheduleOutcome::new(
            Algorithm::Fcfs,
            vec![p1, p2],
            vec![ExecutionSlice::new(1, 0, 5), ExecutionSlice::new(2, 5, 8)],
        )
    }

    #[test]
    fn test_timeline_follows_arrangement() {
        let o = sample_outcome();
        assert_eq!(
            o.timeline,
            vec![
                TimelineEntry {
                    process_id: 1,
                    completion_time: 5
                },
                TimelineEntry {
                    process_id: 2,
                    completion_time: 8
                },
            ]
        );
    }

    #[test]
    fn test_outcome_aggregates() {
        let o = sample_outcome();
        assert_eq!(o.makespan(), 8);
        assert_eq!(o.busy_time(), 8);
        // turnarounds 5 and 7, waits 0 and 4
        assert!((o.average_turnaround_time() - 6.0).abs() < 1e-10);
        assert!((o.average_waiting_time() - 2.0).abs() < 1e-10);
        assert_eq!(o.process(2).map(|p| p.waiting_time), Some(4));
        assert!(o.process(9).is_none());
        assert_eq!(o.slices_for(2).len(), 1);
    }

    #[test]
    fn test_empty_outcome() {
        let o = ScheduleOutcome::new(Algorithm::RoundRobin, Vec::new(), Vec::new());
        assert_eq!(o.makespan(), 0);
        assert_eq!(o.busy_time(), 0);
        assert!((o.average_waiting_time() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_outcome_serializes() {
        let o = sample_outcome();
        let json = serde_json::to_value(&o).unwrap();
        assert_eq!(json["algorithm"], "FCFS");
        assert_eq!(json["timeline"][1]["completion_time"], 8);
        assert_eq!(json["slices"][0]["end"], 5);
    }
}
