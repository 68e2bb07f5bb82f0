//! Scheduling engine and KPI evaluation.
//!
//! # Algorithm
//!
//! - FCFS, SJF and priority scheduling order the batch with a rule chain
//!   from [`dispatching`](crate::dispatching) and then run it back to back
//!   through the non-preemptive calculator ([`calculate`]).
//! - Round robin runs the batch in input order through the quantum
//!   executor ([`run_round_robin`]).
//!
//! [`Scheduler`] ties both paths together behind one call and resets the
//! batch before every run.
//!
//! # KPI
//!
//! [`ScheduleKpi`] computes makespan, utilization, throughput and mean
//! turnaround/waiting/response times.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod kpi;
mod metrics;
mod round_robin;
mod runner;

pub use kpi::ScheduleKpi;
pub use metrics::{calculate, execution_slices};
pub use round_robin::{run_round_robin, ArrivalGating};
pub use runner::{reset, run, ScheduleRequest, Scheduler, DEFAULT_QUANTUM};
