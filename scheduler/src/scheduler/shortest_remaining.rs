use super::{
    next_arrival, waits_from_completions, GanttBuilder, ProcessTable, RunState, Schedule,
    Scheduler, Tick,
};

/// Preemptive shortest-remaining-time-first, advanced one tick at a time
/// while any process is eligible.
///
/// A newly eligible process only preempts when its remaining time is strictly
/// shorter than the running one's; on equal remaining time the earlier process
/// in the table wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTime;

impl ShortestRemainingTime {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for ShortestRemainingTime {
    const NAME: &'static str = "Shortest-job-first";

    fn schedule(&self, table: &ProcessTable) -> Schedule {
        let mut states = RunState::for_table(table);
        let mut completions = vec![0; table.len()];
        let mut gantt = GanttBuilder::new();

        let mut clock: Tick = 0;
        let mut completed = 0;
        let mut last_completion = 0;
        let mut shortest: Option<usize> = None;
        let mut time_less = Tick::MAX;

        while completed != table.len() {
            for (index, process) in table.iter().enumerate() {
                let remaining = states[index].remaining();
                if process.has_arrived(clock) && remaining > 0 && remaining < time_less {
                    time_less = remaining;
                    shortest = Some(index);
                }
            }
            gantt.switch_to(shortest.map(|index| table[index].pid()), clock);

            let Some(index) = shortest else {
                clock = next_arrival(table, &states, clock).unwrap_or(clock + 1);
                continue;
            };

            let state = &mut states[index];
            state.run_tick();
            time_less = state.remaining();
            clock += 1;

            if state.is_finished() {
                completed += 1;
                completions[index] = clock;
                last_completion = clock;
                time_less = Tick::MAX;
                shortest = None;
            }
        }

        let waits = waits_from_completions(table, &completions);
        Schedule::assemble(Self::NAME, table, gantt.finish(clock), &waits, last_completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Process, TimeSlice};

    fn run(processes: Vec<Process>) -> Schedule {
        ShortestRemainingTime::new().schedule(&ProcessTable::new(processes).unwrap())
    }

    #[test]
    fn shorter_job_goes_first() {
        let schedule = run(vec![Process::new(1, 5, 0), Process::new(2, 3, 0)]);

        assert_eq!(
            schedule.timeline,
            [TimeSlice::new(2, 0, 3), TimeSlice::new(1, 3, 8)]
        );
        assert_eq!(schedule.row(1).unwrap().wait, 3);
        assert_eq!(schedule.row(2).unwrap().wait, 0);
        assert_eq!(schedule.metrics.throughput, 2.0 / 8.0);
    }

    #[test]
    fn shorter_arrival_preempts() {
        let schedule = run(vec![Process::new(1, 6, 0), Process::new(2, 2, 2)]);

        assert_eq!(
            schedule.timeline,
            [
                TimeSlice::new(1, 0, 2),
                TimeSlice::new(2, 2, 4),
                TimeSlice::new(1, 4, 8),
            ]
        );
        assert_eq!(schedule.row(1).unwrap().wait, 2);
        assert_eq!(schedule.row(1).unwrap().completion, 8);
        assert_eq!(schedule.row(2).unwrap().wait, 0);
    }

    #[test]
    fn equal_remaining_does_not_preempt() {
        // Process 1 has 3 ticks left when process 2 arrives with 3.
        let schedule = run(vec![Process::new(1, 4, 0), Process::new(2, 3, 1)]);

        assert_eq!(
            schedule.timeline,
            [TimeSlice::new(1, 0, 4), TimeSlice::new(2, 4, 7)]
        );
    }

    #[test]
    fn ties_go_to_the_earlier_process() {
        let schedule = run(vec![Process::new(9, 2, 0), Process::new(3, 2, 0)]);
        assert_eq!(schedule.timeline[0], TimeSlice::new(9, 0, 2));
    }

    #[test]
    fn idle_time_is_not_charged_to_anyone() {
        let schedule = run(vec![Process::new(1, 2, 0), Process::new(2, 1, 5)]);

        assert_eq!(
            schedule.timeline,
            [TimeSlice::new(1, 0, 2), TimeSlice::new(2, 5, 6)]
        );
        assert_eq!(schedule.row(2).unwrap().wait, 0);
        assert_eq!(schedule.metrics.throughput, 2.0 / 6.0);
    }
}
