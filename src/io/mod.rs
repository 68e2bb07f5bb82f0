//! Thin I/O adapters around the engine.
//!
//! - **`tabular`**: reads process tables (`TaskID, ArrivalTime,
//!   CPUBurstTime, PriorityLevel`) from comma-separated text.
//! - **`report`**: renders result tables, Gantt charts and KPI summaries
//!   as plain text.

pub mod report;
pub mod tabular;

pub use report::{render_gantt, render_outcome, render_summary, render_table};
pub use tabular::{parse_processes, read_processes, TabularError};
