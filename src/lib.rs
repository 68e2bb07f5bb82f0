//! Classical CPU scheduling engine.
//!
//! Computes completion, turnaround and waiting times for a batch of
//! processes under First-Come-First-Served, Shortest-Job-First
//! (non-preemptive), Priority (non-preemptive) and Round Robin, together
//! with the execution timeline used for Gantt charts.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Algorithm`, `ScheduleOutcome`,
//!   `TimelineEntry`, `ExecutionSlice`
//! - **`dispatching`**: Ordering rules and the rule engine (FCFS, SJF, Priority)
//! - **`scheduler`**: Non-preemptive calculator, round-robin executor,
//!   the `Scheduler` facade and KPIs
//! - **`validation`**: Input integrity checks (empty batch, duplicate IDs,
//!   burst/arrival/quantum ranges)
//! - **`io`**: Process table reader and plain-text reports
//! - **`workload`**: Random process batches
//!
//! # Example
//!
//! ```
//! use cpu_schedule::scheduler::run;
//! use cpu_schedule::models::Process;
//!
//! let mut processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 3)];
//! let outcome = run(&mut processes, "RoundRobin", 2).unwrap();
//! let waits: Vec<i64> = outcome.processes.iter().map(|p| p.waiting_time).collect();
//! assert_eq!(waits, vec![2, 4]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
