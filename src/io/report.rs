//! Plain-text rendering of scheduling results.

use std::fmt;

use crate::models::{Process, ScheduleOutcome, TimelineEntry};
use crate::scheduler::ScheduleKpi;

/// Fixed-width result table, one row per process.
pub struct ProcessTable<'a>(pub &'a [Process]);

impl fmt::Display for ProcessTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10}{:<15}{:<15}{:<15}{:<15}{:<15}{:<15}",
            "PID",
            "ArrivalTime",
            "BurstTime",
            "PriorityLevel",
            "CompletionTime",
            "TurnAroundTime",
            "WaitingTime"
        )?;
        for p in self.0 {
            writeln!(
                f,
                "{:<10}{:<15}{:<15}{:<15}{:<15}{:<15}{:<15}",
                p.id,
                p.arrival_time,
                p.burst_time,
                p.priority_level,
                p.completion_time,
                p.turnaround_time,
                p.waiting_time
            )?;
        }
        Ok(())
    }
}

/// Two-row Gantt chart: process labels over completion times.
pub struct GanttChart<'a>(pub &'a [TimelineEntry]);

impl fmt::Display for GanttChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gantt Chart:")?;
        for entry in self.0 {
            write!(f, "p{}\t", entry.process_id)?;
        }
        writeln!(f)?;
        for entry in self.0 {
            write!(f, "{}\t", entry.completion_time)?;
        }
        writeln!(f)
    }
}

/// Renders the result table.
pub fn render_table(processes: &[Process]) -> String {
    ProcessTable(processes).to_string()
}

/// Renders the Gantt chart.
pub fn render_gantt(timeline: &[TimelineEntry]) -> String {
    GanttChart(timeline).to_string()
}

/// Renders the result table followed by the Gantt chart.
pub fn render_outcome(outcome: &ScheduleOutcome) -> String {
    format!(
        "{}{}",
        ProcessTable(&outcome.processes),
        GanttChart(&outcome.timeline)
    )
}

/// Renders the headline KPIs, one per line.
pub fn render_summary(kpi: &ScheduleKpi) -> String {
    format!(
        "Average turnaround time: {:.2}\n\
         Average waiting time: {:.2}\n\
         Average response time: {:.2}\n\
         CPU utilization: {:.1}%\n\
         Throughput: {:.3}\n",
        kpi.avg_turnaround_time,
        kpi.avg_waiting_time,
        kpi.avg_response_time,
        kpi.cpu_utilization * 100.0,
        kpi.throughput
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Algorithm;
    use crate::scheduler::Scheduler;

    fn fcfs_outcome() -> ScheduleOutcome {
        let ps = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        Scheduler::new().schedule(&ps, Algorithm::Fcfs).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let table = render_table(&fcfs_outcome().processes);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("PID       ArrivalTime    BurstTime      "));
        assert_eq!(
            lines[2].trim_end(),
            "2         1              3              0              8              7              4"
        );
    }

    #[test]
    fn test_gantt_layout() {
        let gantt = render_gantt(&fcfs_outcome().timeline);
        assert_eq!(gantt, "Gantt Chart:\np1\tp2\t\n5\t8\t\n");
    }

    #[test]
    fn test_outcome_has_table_then_chart() {
        let text = render_outcome(&fcfs_outcome());
        let table_at = text.find("PID").unwrap();
        let chart_at = text.find("Gantt Chart:").unwrap();
        assert!(table_at < chart_at);
    }

    #[test]
    fn test_summary() {
        let kpi = ScheduleKpi::calculate(&fcfs_outcome());
        let summary = render_summary(&kpi);
        assert!(summary.contains("Average waiting time: 2.00"));
        assert!(summary.contains("CPU utilization: 100.0%"));
    }
}
