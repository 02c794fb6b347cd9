use super::{Metrics, Pid, Priority, ProcessTable, Tick, TimeSlice};

/// Timing facts for one process under one discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleRow {
    pub pid: Pid,
    pub priority: Priority,
    pub burst: Tick,
    pub arrival: Tick,
    pub wait: Tick,
    pub turnaround: Tick,
    pub completion: Tick,
}

/// Everything a discipline produces for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub title: &'static str,
    pub timeline: Vec<TimeSlice>,
    /// One row per process, in input order.
    pub rows: Vec<ScheduleRow>,
    pub metrics: Metrics,
}

impl Schedule {
    /// Builds rows from per-process wait times (indexed like `table`).
    ///
    /// Turnaround and completion are derived from the wait, so every row
    /// satisfies `turnaround == burst + wait`.
    pub(crate) fn assemble(
        title: &'static str,
        table: &ProcessTable,
        timeline: Vec<TimeSlice>,
        waits: &[Tick],
        last_completion: Tick,
    ) -> Self {
        debug_assert_eq!(waits.len(), table.len());

        let rows: Vec<ScheduleRow> = table
            .iter()
            .zip(waits)
            .map(|(process, &wait)| ScheduleRow {
                pid: process.pid(),
                priority: process.priority(),
                burst: process.burst(),
                arrival: process.arrival(),
                wait,
                turnaround: process.burst() + wait,
                completion: process.arrival() + process.burst() + wait,
            })
            .collect();

        // Rows derive completion from the wait, so they must agree with the
        // clock the discipline stopped on.
        debug_assert_eq!(
            rows.iter().map(|row| row.completion).max(),
            Some(last_completion)
        );

        // ProcessTable is never empty and has no zero bursts, so every row
        // completes at tick 1 or later.
        let metrics = Metrics::aggregate(&rows, last_completion)
            .expect("ProcessTable guarantees at least one process with a non-zero burst");

        Self {
            title,
            timeline,
            rows,
            metrics,
        }
    }

    pub fn row(&self, pid: Pid) -> Option<&ScheduleRow> {
        self.rows.iter().find(|row| row.pid == pid)
    }

    /// Tick at which the CPU last stops, or 0 for an empty timeline.
    pub fn makespan(&self) -> Tick {
        self.timeline.iter().map(|slice| slice.stop).max().unwrap_or(0)
    }
}
