//! CPU scheduling domain models.
//!
//! Provides the data types for a scheduling run and its result.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | One schedulable unit: demand plus computed metrics |
//! | `Algorithm` | Discipline selector |
//! | `ScheduleOutcome` | Final arrangement, Gantt timeline, CPU slices |

mod algorithm;
mod process;
mod schedule;

pub use algorithm::Algorithm;
pub use process::{Process, ProcessId};
pub use schedule::{ExecutionSlice, ScheduleOutcome, TimelineEntry};
