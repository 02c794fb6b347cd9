use super::{ScheduleRow, Tick};
use crate::error::MetricsError;
use average::{Estimate, Mean};

/// Aggregate figures for one schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub average_wait: f64,
    pub average_turnaround: f64,
    /// Completed processes per tick, measured up to the last completion.
    pub throughput: f64,
}

impl Metrics {
    pub fn aggregate(rows: &[ScheduleRow], last_completion: Tick) -> Result<Self, MetricsError> {
        if rows.is_empty() {
            return Err(MetricsError::NoRows);
        }
        if last_completion == 0 {
            return Err(MetricsError::NoCompletion);
        }

        let average_wait: Mean = rows.iter().map(|row| row.wait as f64).collect();
        let average_turnaround: Mean = rows.iter().map(|row| row.turnaround as f64).collect();

        Ok(Self {
            average_wait: average_wait.estimate(),
            average_turnaround: average_turnaround.estimate(),
            throughput: rows.len() as f64 / last_completion as f64,
        })
    }
}
