use super::{
    display::DisplayTerminal, FirstComeFirstServe, PriorityPreemptive, ProcessTable,
    RoundRobinScheduler, Schedule, Scheduler, ShortestRemainingTime,
};
use clap::ValueEnum;
use log::{debug, info};
use std::{io, num::NonZeroU64};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Algorithm {
    /// First-come, first-serve
    Fcfs,
    /// Preemptive shortest remaining time first
    Sjf,
    /// Preemptive priority with shortest-remaining tie-break
    Priority,
    /// Round-robin
    #[value(name = "rr")]
    RoundRobin,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Fcfs => FirstComeFirstServe::NAME,
            Algorithm::Sjf => ShortestRemainingTime::NAME,
            Algorithm::Priority => PriorityPreemptive::NAME,
            Algorithm::RoundRobin => RoundRobinScheduler::NAME,
        }
    }

    pub fn run(self, processes: &ProcessTable, quantum: NonZeroU64) -> Schedule {
        match self {
            Algorithm::Fcfs => FirstComeFirstServe::new().schedule(processes),
            Algorithm::Sjf => ShortestRemainingTime::new().schedule(processes),
            Algorithm::Priority => PriorityPreemptive::new().schedule(processes),
            Algorithm::RoundRobin => {
                RoundRobinScheduler::with_quantum(quantum).schedule(processes)
            }
        }
    }
}

/// Runs each selected discipline against the same table, in canonical order.
pub fn run_all(
    processes: &ProcessTable,
    algorithms: &[Algorithm],
    quantum: NonZeroU64,
) -> Vec<Schedule> {
    let mut selected = algorithms.to_vec();
    selected.sort();
    selected.dedup();

    selected
        .into_iter()
        .map(|algorithm| {
            info!(
                "Running {} over {} processes",
                algorithm.title(),
                processes.len()
            );
            let schedule = algorithm.run(processes, quantum);
            debug!(
                "{}: {} slices, average wait {:.2}, average turnaround {:.2}, throughput {:.2}/t",
                schedule.title,
                schedule.timeline.len(),
                schedule.metrics.average_wait,
                schedule.metrics.average_turnaround,
                schedule.metrics.throughput
            );
            schedule
        })
        .collect()
}

pub enum RunnerEvent {
    Quit,
    Next,
    Previous,
    None,
}

/// Interactive pager over finished schedules.
pub struct ScheduleViewer {
    terminal: DisplayTerminal,
    schedules: Vec<Schedule>,
    selected: usize,
}

impl ScheduleViewer {
    pub fn new(schedules: Vec<Schedule>) -> Result<Self, io::Error> {
        let terminal = DisplayTerminal::new()?;

        Ok(Self {
            terminal,
            schedules,
            selected: 0,
        })
    }

    // Returns false if the viewer should close
    pub fn run(&mut self) -> Result<bool, io::Error> {
        if let Some(schedule) = self.schedules.get(self.selected) {
            self.terminal
                .draw(schedule, self.selected, self.schedules.len())?;
        }

        match self.terminal.get_input() {
            RunnerEvent::Quit => return Ok(false),
            RunnerEvent::Next => {
                self.selected = (self.selected + 1) % self.schedules.len().max(1);
            }
            RunnerEvent::Previous => {
                self.selected = self
                    .selected
                    .checked_sub(1)
                    .unwrap_or(self.schedules.len().saturating_sub(1));
            }
            RunnerEvent::None => {}
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Process, DEFAULT_QUANTUM};

    #[test]
    fn runs_in_canonical_order_without_duplicates() {
        let table = ProcessTable::new(vec![Process::new(1, 2, 0)]).unwrap();
        let schedules = run_all(
            &table,
            &[
                Algorithm::RoundRobin,
                Algorithm::Fcfs,
                Algorithm::RoundRobin,
            ],
            DEFAULT_QUANTUM,
        );

        let titles: Vec<_> = schedules.iter().map(|schedule| schedule.title).collect();
        assert_eq!(titles, ["First-come, first-serve", "Round-robin"]);
    }

    #[test]
    fn titles_match_the_schedulers() {
        let table = ProcessTable::new(vec![Process::new(1, 1, 0)]).unwrap();
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.run(&table, DEFAULT_QUANTUM).title, algorithm.title());
        }
    }
}
