use super::{runner::RunnerEvent, Schedule};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::{
    io::{self, Stdout},
    sync::mpsc::{self, Receiver},
    thread,
    time::{Duration, Instant},
};
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};

pub enum DisplayEvent {
    Input(KeyEvent),
    Tick,
}

const TICK_RATE: Duration = Duration::from_millis(200);

const SLICE_COLORS: [Color; 6] = [
    Color::LightBlue,
    Color::LightGreen,
    Color::LightMagenta,
    Color::LightYellow,
    Color::LightCyan,
    Color::LightRed,
];

pub struct DisplayTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input_rx: Receiver<DisplayEvent>,
}

impl DisplayTerminal {
    pub fn new() -> Result<Self, io::Error> {
        crossterm::terminal::enable_raw_mode()?;

        // Set up the input handling thread
        let (input_tx, input_rx) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = TICK_RATE
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        if let Ok(Event::Key(key)) = event::read() {
                            if input_tx.send(DisplayEvent::Input(key)).is_err() {
                                return;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(_) => return,
                }

                if last_tick.elapsed() >= TICK_RATE {
                    if input_tx.send(DisplayEvent::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        // Set up the terminal-user-interface
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, input_rx })
    }

    pub fn draw(
        &mut self,
        schedule: &Schedule,
        position: usize,
        total: usize,
    ) -> Result<(), io::Error> {
        self.terminal
            .draw(|f| draw_schedule(f, schedule, position, total))?;
        Ok(())
    }

    pub fn get_input(&self) -> RunnerEvent {
        // A closed channel means the input thread died; treat it as a quit
        let Ok(event) = self.input_rx.recv() else {
            return RunnerEvent::Quit;
        };

        match event {
            DisplayEvent::Input(key) => {
                if key.modifiers.is_empty() {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return RunnerEvent::Quit,
                        KeyCode::Char('n') | KeyCode::Right => return RunnerEvent::Next,
                        KeyCode::Char('p') | KeyCode::Left => return RunnerEvent::Previous,
                        _ => {}
                    };
                }
            }
            DisplayEvent::Tick => {}
        }
        RunnerEvent::None
    }
}

impl Drop for DisplayTerminal {
    fn drop(&mut self) {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = self.terminal.show_cursor();
    }
}

/// Renders one schedule: title bar, Gantt strip, and the timing table.
pub fn draw_schedule<B: Backend>(
    f: &mut Frame<B>,
    schedule: &Schedule,
    position: usize,
    total: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(5),
        ])
        .split(f.size());

    let title = Paragraph::new(format!(
        "{} ({}/{}) | n: next, p: previous, q: quit",
        schedule.title,
        position + 1,
        total
    ))
    .style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::LightBlue),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Schedule")
            .border_type(BorderType::Rounded),
    );

    f.render_widget(title, chunks[0]);

    let mut bars = vec![Span::raw("|")];
    let mut ticks = Vec::new();
    for slice in &schedule.timeline {
        let color = SLICE_COLORS[slice.pid.unsigned_abs() as usize % SLICE_COLORS.len()];
        bars.push(Span::styled(
            format!("{:^7}", slice.pid),
            Style::default().fg(Color::Black).bg(color),
        ));
        bars.push(Span::raw("|"));
        ticks.push(Span::raw(format!("{:<8}", slice.start)));
    }
    if let Some(last) = schedule.timeline.last() {
        ticks.push(Span::raw(last.stop.to_string()));
    }

    let gantt = Paragraph::new(vec![Spans::from(bars), Spans::from(ticks)])
        .block(Block::default().title("Gantt").borders(Borders::ALL));

    f.render_widget(gantt, chunks[1]);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let rows = schedule
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.pid.to_string()).style(bold),
                Cell::from(row.priority.to_string()),
                Cell::from(row.burst.to_string()),
                Cell::from(row.arrival.to_string()),
                Cell::from(row.wait.to_string()),
                Cell::from(row.turnaround.to_string()),
                Cell::from(row.completion.to_string()),
            ])
        })
        .chain(std::iter::once(
            Row::new(vec![
                Cell::from(""),
                Cell::from(""),
                Cell::from(""),
                Cell::from("Average"),
                Cell::from(format!("{:.2}", schedule.metrics.average_wait)),
                Cell::from(format!("{:.2}", schedule.metrics.average_turnaround)),
                Cell::from(format!("{:.2}/t", schedule.metrics.throughput)),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow)),
        ));

    let table = Table::new(rows)
        .header(
            Row::new(vec![
                "ID",
                "Priority",
                "Burst",
                "Arrival",
                "Wait",
                "Turnaround",
                "Exit",
            ])
            .style(bold),
        )
        .widths(&[
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(8),
        ])
        .block(Block::default().title("Schedule table").borders(Borders::ALL))
        .style(Style::default().fg(Color::LightGreen))
        .column_spacing(1);

    f.render_widget(table, chunks[2]);
}
