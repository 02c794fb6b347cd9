//! Plain-text rendering of finished schedules.
//!
//! Each schedule prints as a framed title, a one-line Gantt chart with the
//! slice start ticks underneath, and a bordered table of per-process timings
//! whose footer carries the averages and throughput.

use super::{Metrics, Schedule, ScheduleRow, TimeSlice};
use std::io::{self, Write};

const GANTT_CELL_WIDTH: usize = 8;
const HEADER: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

pub fn write_schedule<W: Write>(w: &mut W, schedule: &Schedule) -> io::Result<()> {
    write_title(w, schedule.title)?;
    write_gantt(w, &schedule.timeline)?;
    write_table(w, &schedule.rows, &schedule.metrics)
}

pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {}", " ".repeat(title.len() / 2), title)?;
    writeln!(w, "{rule}")
}

pub fn write_gantt<W: Write>(w: &mut W, timeline: &[TimeSlice]) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for slice in timeline {
        let pid = slice.pid.to_string();
        let padding = " ".repeat(GANTT_CELL_WIDTH.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;

    for slice in timeline {
        write!(w, "{}\t", slice.start)?;
    }
    if let Some(last) = timeline.last() {
        write!(w, "{}", last.stop)?;
    }
    write!(w, "\n\n")
}

pub fn write_table<W: Write>(w: &mut W, rows: &[ScheduleRow], metrics: &Metrics) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let body: Vec<[String; 7]> = rows
        .iter()
        .map(|row| {
            [
                row.pid.to_string(),
                row.priority.to_string(),
                row.burst.to_string(),
                row.arrival.to_string(),
                row.wait.to_string(),
                row.turnaround.to_string(),
                row.completion.to_string(),
            ]
        })
        .collect();
    let footer = [
        footer_line(["Average", "Average", "Throughput"]),
        footer_line([
            format!("{:.2}", metrics.average_wait),
            format!("{:.2}", metrics.average_turnaround),
            format!("{:.2}/t", metrics.throughput),
        ]),
    ];

    let mut widths = HEADER.map(str::len);
    for line in body.iter().chain(&footer) {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.len());
        }
    }

    let border = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");
    let border = format!("+{border}+");

    writeln!(w, "{border}")?;
    write_line(w, &widths, &HEADER.map(String::from), false)?;
    writeln!(w, "{border}")?;
    for line in &body {
        write_line(w, &widths, line, true)?;
    }
    writeln!(w, "{border}")?;
    for line in &footer {
        write_line(w, &widths, line, true)?;
    }
    writeln!(w, "{border}")
}

fn footer_line<S: Into<String>>(last: [S; 3]) -> [String; 7] {
    let [wait, turnaround, throughput]: [String; 3] = last.map(Into::into);
    [
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        wait,
        turnaround,
        throughput,
    ]
}

fn write_line<W: Write>(
    w: &mut W,
    widths: &[usize; 7],
    cells: &[String; 7],
    right_align: bool,
) -> io::Result<()> {
    write!(w, "|")?;
    for (cell, &width) in cells.iter().zip(widths) {
        if right_align {
            write!(w, " {cell:>width$} |")?;
        } else {
            write!(w, " {cell:<width$} |")?;
        }
    }
    writeln!(w)
}
