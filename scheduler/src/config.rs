use crate::scheduler::{Algorithm, DEFAULT_QUANTUM};
use clap::Parser;
use log::LevelFilter;
use std::{num::NonZeroU64, path::PathBuf};

/// Compare CPU scheduling disciplines over a CSV list of processes.
///
/// Each CSV record is `id,burst,arrival[,priority]`.
#[derive(Debug, Parser)]
#[command(name = "cpu-scheduling-sim", version)]
pub struct Config {
    /// Scheduling file to process
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Disciplines to run; repeat to select several (default: all)
    #[arg(short, long = "algorithm", value_enum)]
    pub algorithms: Vec<Algorithm>,

    /// Round-robin time quantum in ticks
    #[arg(short, long, default_value_t = DEFAULT_QUANTUM)]
    pub quantum: NonZeroU64,

    /// Browse the results in a terminal UI instead of printing them
    #[arg(short, long)]
    pub interactive: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn selected_algorithms(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms.clone()
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
