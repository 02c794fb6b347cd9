use super::{Pid, Tick};

/// A contiguous stretch of CPU time given to one process, `[start, stop)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlice {
    pub pid: Pid,
    pub start: Tick,
    pub stop: Tick,
}

impl TimeSlice {
    pub fn new(pid: Pid, start: Tick, stop: Tick) -> Self {
        Self { pid, start, stop }
    }

    pub fn duration(&self) -> Tick {
        self.stop - self.start
    }
}

/// Collects time slices as the running process changes.
///
/// Zero-length slices are dropped, so callers can switch freely on every tick.
#[derive(Debug, Default)]
pub struct GanttBuilder {
    slices: Vec<TimeSlice>,
    open: Option<(Pid, Tick)>,
}

impl GanttBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `pid` (or an idle CPU, for `None`) as running from `now` on.
    pub fn switch_to(&mut self, pid: Option<Pid>, now: Tick) {
        if self.open.map(|(running, _)| running) == pid {
            return;
        }
        self.close(now);
        self.open = pid.map(|pid| (pid, now));
    }

    /// Appends a finished slice as-is; used by schedulers that emit whole quanta.
    pub fn push(&mut self, slice: TimeSlice) {
        if slice.start < slice.stop {
            self.slices.push(slice);
        }
    }

    pub fn finish(mut self, now: Tick) -> Vec<TimeSlice> {
        self.close(now);
        self.slices
    }

    fn close(&mut self, now: Tick) {
        if let Some((pid, start)) = self.open.take() {
            self.push(TimeSlice::new(pid, start, now));
        }
    }
}
