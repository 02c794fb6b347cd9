use super::{ProcessTable, Tick};

/// Per-process bookkeeping owned by a single preemptive run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    remaining: Tick,
    waited: Tick,
}

impl RunState {
    pub fn new(burst: Tick) -> Self {
        Self {
            remaining: burst,
            waited: 0,
        }
    }

    /// One fresh state per process, in table order.
    pub fn for_table(table: &ProcessTable) -> Vec<RunState> {
        table
            .iter()
            .map(|process| RunState::new(process.burst()))
            .collect()
    }

    pub fn remaining(&self) -> Tick {
        self.remaining
    }

    pub fn waited(&self) -> Tick {
        self.waited
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Runs for up to `ticks`, returning how many were actually used.
    pub fn run_for(&mut self, ticks: Tick) -> Tick {
        let used = ticks.min(self.remaining);
        self.remaining -= used;
        used
    }

    pub fn run_tick(&mut self) {
        self.run_for(1);
    }

    pub fn wait_tick(&mut self) {
        self.waited += 1;
    }
}
