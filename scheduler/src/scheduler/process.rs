use crate::error::ProcessError;
use std::{collections::HashSet, ops::Index, slice};

pub type Pid = i64;
pub type Tick = u64;
pub type Priority = i64;

/// One schedulable unit. Lower priority numbers run first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Process {
    pid: Pid,
    arrival: Tick,
    burst: Tick,
    priority: Priority,
}

impl Process {
    pub const DEFAULT_PRIORITY: Priority = 0;

    pub fn new(pid: Pid, burst: Tick, arrival: Tick) -> Self {
        Process::with_priority(pid, burst, arrival, Process::DEFAULT_PRIORITY)
    }

    pub fn with_priority(pid: Pid, burst: Tick, arrival: Tick, priority: Priority) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    pub fn burst(&self) -> Tick {
        self.burst
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn has_arrived(&self, now: Tick) -> bool {
        self.arrival <= now
    }
}

/// The validated, immutable input shared by every scheduler run.
///
/// Guarantees at least one process, a non-zero burst for each, unique ids,
/// and that `arrival + total burst` fits in a [`Tick`] for every process, so
/// no clock value reached during a run can overflow. Input order is
/// preserved: FCFS runs in this order and round-robin starts its rotation
/// from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    pub fn new(processes: Vec<Process>) -> Result<Self, ProcessError> {
        if processes.is_empty() {
            return Err(ProcessError::Empty);
        }

        let mut seen = HashSet::with_capacity(processes.len());
        for process in &processes {
            if process.burst == 0 {
                return Err(ProcessError::ZeroBurst { pid: process.pid });
            }
            if !seen.insert(process.pid) {
                return Err(ProcessError::DuplicateId { pid: process.pid });
            }
        }

        let mut total_burst: Tick = 0;
        for process in &processes {
            total_burst = total_burst
                .checked_add(process.burst)
                .ok_or(ProcessError::TickOverflow { pid: process.pid })?;
        }
        for process in &processes {
            if process.arrival.checked_add(total_burst).is_none() {
                return Err(ProcessError::TickOverflow { pid: process.pid });
            }
        }

        Ok(Self { processes })
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    // Always false once constructed
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Process> {
        self.processes.iter()
    }

    pub fn total_burst(&self) -> Tick {
        self.processes.iter().map(Process::burst).sum()
    }
}

impl Index<usize> for ProcessTable {
    type Output = Process;

    fn index(&self, index: usize) -> &Self::Output {
        &self.processes[index]
    }
}

impl<'a> IntoIterator for &'a ProcessTable {
    type Item = &'a Process;
    type IntoIter = slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_defaults_to_zero() {
        let process = Process::new(7, 4, 2);
        assert_eq!(process.priority(), 0);
        assert_eq!(process.burst(), 4);
        assert_eq!(process.arrival(), 2);
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(ProcessTable::new(Vec::new()), Err(ProcessError::Empty));
    }

    #[test]
    fn rejects_zero_burst() {
        let result = ProcessTable::new(vec![Process::new(1, 3, 0), Process::new(2, 0, 1)]);
        assert_eq!(result, Err(ProcessError::ZeroBurst { pid: 2 }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = ProcessTable::new(vec![Process::new(4, 3, 0), Process::new(4, 1, 1)]);
        assert_eq!(result, Err(ProcessError::DuplicateId { pid: 4 }));
    }

    #[test]
    fn rejects_arrival_that_would_overflow_the_clock() {
        let result = ProcessTable::new(vec![
            Process::new(1, 5, 0),
            Process::new(2, 5, Tick::MAX - 6),
        ]);
        assert_eq!(result, Err(ProcessError::TickOverflow { pid: 2 }));
    }

    #[test]
    fn rejects_total_burst_overflow() {
        let result = ProcessTable::new(vec![
            Process::new(1, Tick::MAX, 0),
            Process::new(2, 1, 0),
        ]);
        assert_eq!(result, Err(ProcessError::TickOverflow { pid: 2 }));
    }

    #[test]
    fn accepts_latest_arrival_that_still_fits() {
        let table = ProcessTable::new(vec![
            Process::new(1, 5, 0),
            Process::new(2, 5, Tick::MAX - 10),
        ]);
        assert!(table.is_ok());
    }

    #[test]
    fn keeps_input_order() {
        let table = ProcessTable::new(vec![
            Process::new(3, 1, 5),
            Process::new(1, 2, 0),
            Process::new(2, 3, 2),
        ])
        .unwrap();
        let pids: Vec<_> = table.iter().map(Process::pid).collect();
        assert_eq!(pids, [3, 1, 2]);
        assert_eq!(table.total_burst(), 6);
    }
}
