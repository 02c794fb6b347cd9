use cpu_scheduling_sim::scheduler::{
    runner::run_all, Algorithm, Process, ProcessTable, Schedule, Tick,
};
use proptest::prelude::*;
use std::num::NonZeroU64;

fn process_tables() -> impl Strategy<Value = ProcessTable> {
    prop::collection::vec((1u64..8, 0u64..12, -2i64..4), 1..8).prop_map(|entries| {
        let processes = entries
            .into_iter()
            .enumerate()
            .map(|(index, (burst, arrival, priority))| {
                Process::with_priority(index as i64 + 1, burst, arrival, priority)
            })
            .collect();
        ProcessTable::new(processes).unwrap()
    })
}

fn check_schedule(table: &ProcessTable, schedule: &Schedule) -> Result<(), TestCaseError> {
    prop_assert_eq!(schedule.rows.len(), table.len());

    for (process, row) in table.iter().zip(&schedule.rows) {
        prop_assert_eq!(row.pid, process.pid());
        prop_assert_eq!(row.turnaround, row.burst + row.wait);
        prop_assert_eq!(row.completion, process.arrival() + process.burst() + row.wait);

        let slices: Vec<_> = schedule
            .timeline
            .iter()
            .filter(|slice| slice.pid == process.pid())
            .collect();
        let ran: Tick = slices.iter().map(|slice| slice.duration()).sum();
        prop_assert_eq!(ran, process.burst(), "{} pid {}", schedule.title, process.pid());
        prop_assert!(slices.iter().all(|slice| slice.start >= process.arrival()));
        prop_assert_eq!(
            slices.iter().map(|slice| slice.stop).max(),
            Some(row.completion),
            "{} pid {}",
            schedule.title,
            process.pid()
        );
    }

    for slice in &schedule.timeline {
        prop_assert!(slice.start < slice.stop);
    }
    for pair in schedule.timeline.windows(2) {
        prop_assert!(pair[0].stop <= pair[1].start, "{}: {:?}", schedule.title, pair);
    }

    let total: Tick = schedule.timeline.iter().map(|slice| slice.duration()).sum();
    prop_assert_eq!(total, table.total_burst());

    let last = schedule.rows.iter().map(|row| row.completion).max().unwrap();
    prop_assert_eq!(schedule.metrics.throughput, table.len() as f64 / last as f64);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn every_discipline_produces_consistent_schedules(table in process_tables(), quantum in 1u64..4) {
        let quantum = NonZeroU64::new(quantum).unwrap();
        for schedule in run_all(&table, &Algorithm::ALL, quantum) {
            check_schedule(&table, &schedule)?;
        }
    }

    #[test]
    fn schedules_are_deterministic(table in process_tables()) {
        let quantum = NonZeroU64::new(1).unwrap();
        prop_assert_eq!(
            run_all(&table, &Algorithm::ALL, quantum),
            run_all(&table, &Algorithm::ALL, quantum)
        );
    }

    #[test]
    fn shortest_remaining_never_waits_longer_on_average_than_fcfs_when_all_arrive_together(
        bursts in prop::collection::vec(1u64..10, 1..8)
    ) {
        let processes = bursts
            .iter()
            .enumerate()
            .map(|(index, &burst)| Process::new(index as i64, burst, 0))
            .collect();
        let table = ProcessTable::new(processes).unwrap();
        let quantum = NonZeroU64::new(1).unwrap();
        let schedules = run_all(&table, &[Algorithm::Fcfs, Algorithm::Sjf], quantum);

        prop_assert!(schedules[1].metrics.average_wait <= schedules[0].metrics.average_wait);
    }
}
