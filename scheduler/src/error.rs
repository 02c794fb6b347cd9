use crate::scheduler::Pid;
use std::{io, num::ParseIntError, path::PathBuf};
use thiserror::Error;

/// Reasons a list of processes can't be turned into a [`ProcessTable`].
///
/// [`ProcessTable`]: crate::scheduler::ProcessTable
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("no processes to schedule")]
    Empty,
    #[error("process {pid} has a burst duration of zero")]
    ZeroBurst { pid: Pid },
    #[error("process id {pid} appears more than once")]
    DuplicateId { pid: Pid },
    #[error("process {pid} arrives too late for the schedule to fit in a tick counter")]
    TickOverflow { pid: Pid },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MetricsError {
    #[error("cannot aggregate an empty schedule")]
    NoRows,
    #[error("no process completed after tick 0")]
    NoCompletion,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("error opening scheduling file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("reading CSV")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected 3 or 4 fields, found {found}")]
    FieldCount { line: u64, found: usize },
    #[error("line {line}: invalid {field} {value:?}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    Invalid(#[from] ProcessError),
}
