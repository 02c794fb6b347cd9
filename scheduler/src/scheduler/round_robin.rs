use super::{
    next_arrival, waits_from_completions, GanttBuilder, ProcessTable, RunState, Schedule,
    Scheduler, Tick, TimeSlice, DEFAULT_QUANTUM,
};
use std::num::NonZeroU64;

pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
}

impl RoundRobinScheduler {
    pub fn new() -> Self {
        RoundRobinScheduler::with_quantum(DEFAULT_QUANTUM)
    }

    pub fn with_quantum(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> Tick {
        self.quantum.get()
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Cyclic pointer over the table, skipping processes that can't run yet.
struct Turn {
    current: usize,
    len: usize,
    skipped: usize,
}

impl Turn {
    fn new(len: usize) -> Self {
        Self {
            current: 0,
            len,
            skipped: 0,
        }
    }

    fn advance(&mut self) {
        self.current += 1;
        if self.current >= self.len {
            self.current = 0;
        }
    }

    /// Skips the current process. Returns true once a whole lap found nothing
    /// to run, after rewinding to the start of the table.
    fn skip(&mut self) -> bool {
        self.advance();
        self.skipped += 1;
        if self.skipped < self.len {
            return false;
        }
        self.skipped = 0;
        self.current = 0;
        true
    }

    fn ran(&mut self) {
        self.skipped = 0;
        self.advance();
    }
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "Round-robin";

    fn schedule(&self, table: &ProcessTable) -> Schedule {
        let mut states = RunState::for_table(table);
        let mut completions = vec![0; table.len()];
        let mut gantt = GanttBuilder::new();
        let mut turn = Turn::new(table.len());

        let mut clock: Tick = 0;
        let mut completed = 0;
        let mut last_completion = 0;

        while completed != table.len() {
            let index = turn.current;
            let process = &table[index];

            if !process.has_arrived(clock) || states[index].is_finished() {
                if turn.skip() {
                    clock = next_arrival(table, &states, clock).unwrap_or(clock + 1);
                }
                continue;
            }

            let start = clock;
            clock += states[index].run_for(self.quantum());
            gantt.push(TimeSlice::new(process.pid(), start, clock));

            if states[index].is_finished() {
                completed += 1;
                completions[index] = clock;
                last_completion = clock;
            }
            turn.ran();
        }

        let waits = waits_from_completions(table, &completions);
        Schedule::assemble(Self::NAME, table, gantt.finish(clock), &waits, last_completion)
    }
}
