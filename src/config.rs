//! Command-line configuration.
//!
//! Every option can also come from the environment.
//!
//! # Examples
//!
//! ```bash
//! u-cpusched processes.txt 4
//! u-cpusched processes.txt --algorithm rr --format json
//! SCHED_QUANTUM=2 u-cpusched --random 10 --seed 7 -vv
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

use crate::error::ScheduleError;
use crate::input::DEFAULT_QUANTUM;
use crate::scheduler::Algorithm;

/// Output format of the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Gantt line, per-process table, and averages.
    Text,
    /// Result body as JSON.
    Json,
}

/// CPU scheduling simulator configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "u-cpusched")]
#[command(about = "Simulates FCFS, SJF, Round-Robin and Priority CPU scheduling")]
#[command(version)]
pub struct Config {
    /// Process file, one `id,arrival,burst,priority` record per line
    #[arg(env = "SCHED_INPUT")]
    pub input: Option<PathBuf>,

    /// Round-Robin time quantum
    #[arg(default_value_t = DEFAULT_QUANTUM, env = "SCHED_QUANTUM", allow_negative_numbers = true)]
    pub time_quantum: i64,

    /// Algorithm to run: fcfs, sjf, rr, priority, or all
    #[arg(short, long, default_value = "all", env = "SCHED_ALGORITHM")]
    pub algorithm: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "SCHED_FORMAT")]
    pub format: OutputFormat,

    /// Generate N random processes instead of reading a file
    #[arg(long, value_name = "N", conflicts_with = "input")]
    pub random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 42, env = "SCHED_SEED")]
    pub seed: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Algorithms selected by `--algorithm`, in report order.
    ///
    /// The quantum is checked even when RR is only part of `all`.
    pub fn algorithms(&self) -> Result<Vec<Algorithm>, ScheduleError> {
        if self.algorithm.trim().eq_ignore_ascii_case("all") {
            Algorithm::parse("rr", self.time_quantum)?;
            Ok(Algorithm::all(self.time_quantum).to_vec())
        } else {
            Ok(vec![Algorithm::parse(&self.algorithm, self.time_quantum)?])
        }
    }

    /// Log level for the stderr logger.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
