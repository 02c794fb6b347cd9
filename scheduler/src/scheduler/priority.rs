use super::{next_arrival, GanttBuilder, ProcessTable, RunState, Schedule, Scheduler, Tick};

/// Preemptive priority scheduling; lower priority numbers run first.
///
/// Between equal priorities the shorter remaining time wins, and after that
/// the earlier process in the table. A running process is only displaced by
/// a process arriving on the current tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityPreemptive;

impl PriorityPreemptive {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for PriorityPreemptive {
    const NAME: &'static str = "Priority";

    fn schedule(&self, table: &ProcessTable) -> Schedule {
        let mut states = RunState::for_table(table);
        let mut gantt = GanttBuilder::new();

        let mut clock: Tick = 0;
        let mut completed = 0;
        let mut last_completion = 0;
        let mut active: Option<usize> = None;

        while completed != table.len() {
            active = match active {
                Some(current) if !states[current].is_finished() => {
                    Some(preempting_arrival(table, &states, current, clock))
                }
                _ => highest_available(table, &states, clock),
            };
            gantt.switch_to(active.map(|index| table[index].pid()), clock);

            let Some(running) = active else {
                clock = next_arrival(table, &states, clock).unwrap_or(clock + 1);
                continue;
            };

            for (index, process) in table.iter().enumerate() {
                if index != running && process.has_arrived(clock) && !states[index].is_finished() {
                    states[index].wait_tick();
                }
            }

            states[running].run_tick();
            clock += 1;

            if states[running].is_finished() {
                completed += 1;
                last_completion = clock;
            }
        }

        let waits: Vec<Tick> = states.iter().map(RunState::waited).collect();
        Schedule::assemble(Self::NAME, table, gantt.finish(clock), &waits, last_completion)
    }
}

fn outranks(table: &ProcessTable, states: &[RunState], challenger: usize, holder: usize) -> bool {
    let challenger_priority = table[challenger].priority();
    let holder_priority = table[holder].priority();

    challenger_priority < holder_priority
        || (challenger_priority == holder_priority
            && states[challenger].remaining() < states[holder].remaining())
}

/// Checks processes arriving exactly at `now` against the running one.
fn preempting_arrival(
    table: &ProcessTable,
    states: &[RunState],
    current: usize,
    now: Tick,
) -> usize {
    let mut best = current;
    for (index, process) in table.iter().enumerate() {
        if index == best || process.arrival() != now || states[index].is_finished() {
            continue;
        }
        if outranks(table, states, index, best) {
            best = index;
        }
    }
    best
}

/// Full rescan for the best eligible process, stable on ties.
fn highest_available(table: &ProcessTable, states: &[RunState], now: Tick) -> Option<usize> {
    table
        .iter()
        .enumerate()
        .filter(|&(index, process)| process.has_arrived(now) && !states[index].is_finished())
        .min_by_key(|&(index, process)| (process.priority(), states[index].remaining()))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Process, TimeSlice};

    fn run(processes: Vec<Process>) -> Schedule {
        PriorityPreemptive::new().schedule(&ProcessTable::new(processes).unwrap())
    }

    #[test]
    fn higher_priority_arrival_preempts() {
        let schedule = run(vec![
            Process::with_priority(1, 5, 0, 3),
            Process::with_priority(2, 2, 2, 1),
        ]);

        assert_eq!(
            schedule.timeline,
            [
                TimeSlice::new(1, 0, 2),
                TimeSlice::new(2, 2, 4),
                TimeSlice::new(1, 4, 7),
            ]
        );
        assert_eq!(schedule.row(1).unwrap().wait, 2);
        assert_eq!(schedule.row(1).unwrap().completion, 7);
        assert_eq!(schedule.row(2).unwrap().wait, 0);
    }

    #[test]
    fn lower_priority_arrival_waits() {
        let schedule = run(vec![
            Process::with_priority(1, 3, 0, 1),
            Process::with_priority(2, 1, 1, 2),
        ]);

        assert_eq!(
            schedule.timeline,
            [TimeSlice::new(1, 0, 3), TimeSlice::new(2, 3, 4)]
        );
        assert_eq!(schedule.row(2).unwrap().wait, 2);
    }

    #[test]
    fn equal_priority_shorter_arrival_preempts() {
        let schedule = run(vec![
            Process::with_priority(1, 6, 0, 2),
            Process::with_priority(2, 2, 1, 2),
        ]);

        assert_eq!(
            schedule.timeline,
            [
                TimeSlice::new(1, 0, 1),
                TimeSlice::new(2, 1, 3),
                TimeSlice::new(1, 3, 8),
            ]
        );
    }

    #[test]
    fn reselection_prefers_priority_then_remaining() {
        let schedule = run(vec![
            Process::with_priority(1, 2, 0, 0),
            Process::with_priority(2, 4, 0, 5),
            Process::with_priority(3, 3, 0, 1),
            Process::with_priority(4, 1, 0, 1),
        ]);

        let order: Vec<_> = schedule.timeline.iter().map(|slice| slice.pid).collect();
        assert_eq!(order, [1, 4, 3, 2]);
    }

    #[test]
    fn full_ties_go_to_the_earlier_process() {
        let schedule = run(vec![
            Process::with_priority(7, 2, 0, 1),
            Process::with_priority(3, 2, 0, 1),
        ]);

        assert_eq!(
            schedule.timeline,
            [TimeSlice::new(7, 0, 2), TimeSlice::new(3, 2, 4)]
        );
        assert_eq!(schedule.row(3).unwrap().wait, 2);
    }

    #[test]
    fn tied_arrival_does_not_preempt() {
        // Process 5 arrives with the same priority and remaining time as the
        // running process 8.
        let schedule = run(vec![
            Process::with_priority(8, 3, 0, 2),
            Process::with_priority(5, 2, 1, 2),
        ]);

        assert_eq!(
            schedule.timeline,
            [TimeSlice::new(8, 0, 3), TimeSlice::new(5, 3, 5)]
        );
    }

    #[test]
    fn waits_are_counted_while_eligible() {
        let schedule = run(vec![
            Process::with_priority(1, 4, 0, 0),
            Process::with_priority(2, 2, 3, 1),
        ]);

        let second = schedule.row(2).unwrap();
        assert_eq!(second.wait, 1);
        assert_eq!(second.turnaround, 3);
        assert_eq!(second.completion, 6);
        assert_eq!(schedule.metrics.throughput, 2.0 / 6.0);
    }

    #[test]
    fn idle_cpu_picks_up_late_arrival() {
        let schedule = run(vec![
            Process::with_priority(1, 1, 0, 4),
            Process::with_priority(2, 2, 3, 9),
        ]);

        assert_eq!(
            schedule.timeline,
            [TimeSlice::new(1, 0, 1), TimeSlice::new(2, 3, 5)]
        );
        assert_eq!(schedule.row(2).unwrap().wait, 0);
    }
}
