mod display;
mod fcfs;
mod gantt;
mod metrics;
mod priority;
mod process;
pub mod report;
mod round_robin;
mod run_state;
pub mod runner;
mod schedule;
mod shortest_remaining;

use std::num::NonZeroU64;

pub use display::{draw_schedule, DisplayTerminal};
pub use fcfs::FirstComeFirstServe;
pub use gantt::{GanttBuilder, TimeSlice};
pub use metrics::Metrics;
pub use priority::PriorityPreemptive;
pub use process::{Pid, Priority, Process, ProcessTable, Tick};
pub use round_robin::RoundRobinScheduler;
pub use run_state::RunState;
pub use runner::{Algorithm, ScheduleViewer};
pub use schedule::{Schedule, ScheduleRow};
pub use shortest_remaining::ShortestRemainingTime;

pub const DEFAULT_QUANTUM: NonZeroU64 = match NonZeroU64::new(1) {
    Some(quantum) => quantum,
    None => unreachable!(),
};

/// A scheduling discipline. Each call owns all of its simulation state, so a
/// scheduler can be run any number of times against the same table.
pub trait Scheduler {
    const NAME: &'static str;

    fn schedule(&self, processes: &ProcessTable) -> Schedule;
}

/// Earliest arrival after `now` among unfinished processes, for skipping idle
/// stretches in one step.
fn next_arrival(table: &ProcessTable, states: &[RunState], now: Tick) -> Option<Tick> {
    table
        .iter()
        .zip(states)
        .filter(|(process, state)| !state.is_finished() && process.arrival() > now)
        .map(|(process, _)| process.arrival())
        .min()
}

// wait = completion - burst - arrival, never below zero
fn waits_from_completions(table: &ProcessTable, completions: &[Tick]) -> Vec<Tick> {
    table
        .iter()
        .zip(completions)
        .map(|(process, &completion)| {
            completion
                .saturating_sub(process.burst())
                .saturating_sub(process.arrival())
        })
        .collect()
}
