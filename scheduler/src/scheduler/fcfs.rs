use super::{GanttBuilder, ProcessTable, Schedule, Scheduler, Tick, TimeSlice};

/// Runs every process to completion in input order.
///
/// Input order is taken as arrival order; the table is not sorted. When the
/// next process hasn't arrived yet the clock jumps to its arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstComeFirstServe;

impl FirstComeFirstServe {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FirstComeFirstServe {
    const NAME: &'static str = "First-come, first-serve";

    fn schedule(&self, table: &ProcessTable) -> Schedule {
        let mut gantt = GanttBuilder::new();
        let mut waits = Vec::with_capacity(table.len());
        let mut clock: Tick = 0;

        for process in table {
            let wait = clock.saturating_sub(process.arrival());
            let start = process.arrival() + wait;
            clock = start + process.burst();

            gantt.push(TimeSlice::new(process.pid(), start, clock));
            waits.push(wait);
        }

        Schedule::assemble(Self::NAME, table, gantt.finish(clock), &waits, clock)
    }
}
