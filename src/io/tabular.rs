//! Comma-separated process table reader.
//!
//! The first non-blank line is a header naming the columns. The four
//! required columns may appear in any order; extra columns are ignored.
//!
//! ```text
//! TaskID,ArrivalTime,CPUBurstTime,PriorityLevel
//! 1,0,5,2
//! 2,1,3,1
//! ```
//!
//! Cells may be wrapped in double quotes, as spreadsheet exports do; a
//! doubled quote inside a quoted cell stands for one quote character.
//! Quoted cells cannot span lines.
//!
//! Only the shape of the table is checked here. Semantic checks (positive
//! burst, non-negative arrival, unique IDs) belong to
//! [`validation`](crate::validation) and run when the batch is scheduled.

use log::debug;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::models::Process;

/// Task identifier column.
pub const TASK_ID: &str = "TaskID";
/// Arrival time column.
pub const ARRIVAL_TIME: &str = "ArrivalTime";
/// Burst time column.
pub const BURST_TIME: &str = "CPUBurstTime";
/// Priority level column.
pub const PRIORITY_LEVEL: &str = "PriorityLevel";

/// Failure to read a process table.
#[derive(Debug)]
pub enum TabularError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The input has no header line.
    MissingHeader,
    /// A required column is absent from the header.
    MissingColumn(&'static str),
    /// A row has fewer cells than the header requires.
    ShortRow {
        /// 1-based line number.
        line: usize,
        /// Column whose cell is missing.
        column: &'static str,
    },
    /// A cell is not an integer of the expected range.
    InvalidCell {
        /// 1-based line number.
        line: usize,
        /// Column of the offending cell.
        column: &'static str,
        /// Raw cell content.
        value: String,
    },
}

impl fmt::Display for TabularError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabularError::Io(e) => write!(f, "failed to read process table: {e}"),
            TabularError::MissingHeader => write!(f, "process table has no header line"),
            TabularError::MissingColumn(column) => {
                write!(f, "process table has no '{column}' column")
            }
            TabularError::ShortRow { line, column } => {
                write!(f, "line {line}: missing '{column}' cell")
            }
            TabularError::InvalidCell {
                line,
                column,
                value,
            } => write!(f, "line {line}: '{value}' is not a valid {column}"),
        }
    }
}

impl std::error::Error for TabularError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TabularError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TabularError {
    fn from(e: std::io::Error) -> Self {
        TabularError::Io(e)
    }
}

/// Column positions resolved from the header.
struct Columns {
    id: usize,
    arrival: usize,
    burst: usize,
    priority: usize,
}

impl Columns {
    fn locate(header: &[String]) -> Result<Self, TabularError> {
        let find = |name: &'static str| {
            header
                .iter()
                .position(|h| *h == name)
                .ok_or(TabularError::MissingColumn(name))
        };
        Ok(Self {
            id: find(TASK_ID)?,
            arrival: find(ARRIVAL_TIME)?,
            burst: find(BURST_TIME)?,
            priority: find(PRIORITY_LEVEL)?,
        })
    }

    fn parse_row(&self, line: usize, cells: &[String]) -> Result<Process, TabularError> {
        let id = cell(cells, self.id, line, TASK_ID)?;
        let arrival = cell(cells, self.arrival, line, ARRIVAL_TIME)?;
        let burst = cell(cells, self.burst, line, BURST_TIME)?;
        let priority = cell(cells, self.priority, line, PRIORITY_LEVEL)?;
        Ok(Process::new(id, arrival, burst).with_priority(priority))
    }
}

fn cell<T: FromStr>(
    cells: &[String],
    index: usize,
    line: usize,
    column: &'static str,
) -> Result<T, TabularError> {
    let raw = cells
        .get(index)
        .ok_or(TabularError::ShortRow { line, column })?;
    raw.parse().map_err(|_| TabularError::InvalidCell {
        line,
        column,
        value: raw.clone(),
    })
}

/// Splits one line into trimmed, unquoted cells.
fn split_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    quoted = false;
                }
            }
            '"' if current.trim().is_empty() => {
                current.clear();
                quoted = true;
            }
            ',' if !quoted => cells.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(c),
        }
    }
    cells.push(current.trim().to_string());
    cells
}

/// Parses a process table from text.
///
/// # Example
/// ```
/// use cpu_schedule::io::tabular::parse_processes;
///
/// let text = "TaskID,ArrivalTime,CPUBurstTime,PriorityLevel\n1,0,5,2\n2,1,3,1\n";
/// let processes = parse_processes(text).unwrap();
/// assert_eq!(processes.len(), 2);
/// assert_eq!(processes[1].burst_time, 3);
/// ```
pub fn parse_processes(text: &str) -> Result<Vec<Process>, TabularError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (_, header) = lines.next().ok_or(TabularError::MissingHeader)?;
    let header = split_row(header.trim_start_matches('\u{feff}'));
    let columns = Columns::locate(&header)?;

    lines
        .map(|(line, row)| columns.parse_row(line, &split_row(row)))
        .collect()
}

/// Reads and parses a process table file.
pub fn read_processes(path: impl AsRef<Path>) -> Result<Vec<Process>, TabularError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let processes = parse_processes(&text)?;
    debug!("read {} processes from {}", processes.len(), path.display());
    Ok(processes)
}
