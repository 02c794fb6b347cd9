use anyhow::Context;
use clap::Parser;
use cpu_scheduling_sim::{
    loader,
    scheduler::{report, runner, ScheduleViewer},
    Config,
};
use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    let processes = loader::load_file(&config.file)
        .with_context(|| format!("loading processes from {}", config.file.display()))?;
    let schedules = runner::run_all(&processes, &config.selected_algorithms(), config.quantum);

    if config.interactive {
        execute!(io::stdout(), Clear(ClearType::All))?;

        let mut viewer = ScheduleViewer::new(schedules).context("opening the terminal")?;
        while viewer.run().context("drawing the schedule")? {}
        drop(viewer);

        execute!(io::stdout(), Clear(ClearType::All))?;
        return Ok(());
    }

    let mut out = io::stdout().lock();
    for schedule in &schedules {
        report::write_schedule(&mut out, schedule).context("writing the report")?;
    }
    out.flush()?;
    Ok(())
}
